// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory environment source adapter.
//!
//! Useful in tests and when embedding, where mutating the real process
//! environment is undesirable.

use crate::ports::EnvSource;
use std::collections::HashMap;

/// Environment source backed by a `HashMap`.
///
/// # Examples
///
/// ```rust
/// use envtyped::adapters::MapEnv;
/// use envtyped::ports::EnvSource;
///
/// let source = MapEnv::new()
///     .with_var("APP_HOST", "localhost")
///     .with_var("APP_PORT", "8080");
///
/// assert_eq!(source.lookup("APP_HOST").as_deref(), Some("localhost"));
/// assert_eq!(source.lookup("APP_USER"), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable, consuming and returning the source.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Sets a variable, returning the previous value if any.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(key.into(), value.into())
    }

    /// Removes a variable, returning its value if it was set.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    /// Returns the number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns `true` if no variables are set.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl From<HashMap<String, String>> for MapEnv {
    fn from(vars: HashMap<String, String>) -> Self {
        MapEnv { vars }
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        MapEnv {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn name(&self) -> &str {
        "map"
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
