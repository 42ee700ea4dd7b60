// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process environment source adapter.
//!
//! This module provides the adapter that reads variables from the environment
//! of the running process.

use crate::ports::EnvSource;
use std::env;

/// Environment source backed by the process environment.
///
/// Every lookup is a fresh read through [`std::env::var_os`]; nothing is
/// cached, so changes made by the host process are visible on the next call.
/// Values that are not valid UTF-8 are converted lossily.
///
/// # Examples
///
/// ```rust
/// use envtyped::adapters::ProcessEnv;
/// use envtyped::ports::EnvSource;
///
/// let source = ProcessEnv::new();
/// assert_eq!(source.name(), "process");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Creates a new process environment adapter.
    pub fn new() -> Self {
        ProcessEnv
    }
}

impl EnvSource for ProcessEnv {
    fn name(&self) -> &str {
        "process"
    }

    fn lookup(&self, key: &str) -> Option<String> {
        let value = env::var_os(key)?;
        match value.into_string() {
            Ok(value) => Some(value),
            Err(raw) => {
                tracing::warn!(
                    key,
                    "Environment variable is not valid UTF-8, converting lossily"
                );
                Some(raw.to_string_lossy().into_owned())
            }
        }
    }
}
