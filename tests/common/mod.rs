// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use envtyped::ports::EnvSource;
use std::collections::HashMap;
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Installs a tracing subscriber that writes through the test harness.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

/// Sets process environment variables and removes them on drop.
///
/// Tests using it must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    keys: Vec<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
        self.keys.push(key.to_string());
    }

    pub fn remove(&mut self, key: &str) {
        env::remove_var(key);
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}

/// A mock source that counts lookups.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct CountingSource {
    values: HashMap<String, String>,
    lookups: AtomicUsize,
}

#[allow(dead_code)]
impl CountingSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl EnvSource for CountingSource {
    fn name(&self) -> &str {
        "counting"
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.values.get(key).cloned()
    }
}
