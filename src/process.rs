// SPDX-License-Identifier: MIT OR Apache-2.0

//! Free functions over the process environment.
//!
//! These are shorthands for the corresponding [`EnvAccessor`] methods on
//! [`Accessor::process`]. For the per-type getters (`get_u16`, `get_bool_or`,
//! ...) use that accessor directly.

use crate::adapters::ProcessEnv;
use crate::domain::{EnvAccessor, EnvValue, Namespace, Resolution, Result};
use crate::service::{Accessor, Prefix};

/// Looks up `key`, returning `Some` iff it is set (possibly to "").
pub fn lookup(key: &str) -> Option<String> {
    Accessor::process().lookup(key)
}

/// Retrieves the raw value of `key`, or "" if it is unset.
pub fn get(key: &str) -> String {
    Accessor::process().get(key)
}

/// Retrieves the raw value of `key` if set and non-empty, otherwise `default`.
pub fn get_or(key: &str, default: &str) -> String {
    Accessor::process().get_or(key, default)
}

/// Resolves `key` to a typed value without any fallback.
pub fn resolve<T: EnvValue>(key: &str) -> Resolution<T> {
    Accessor::process().resolve(key)
}

/// Retrieves `key` as a `T`, or `T`'s zero value.
///
/// # Examples
///
/// ```rust
/// let workers: usize = envtyped::get_as("ENVTYPED_DOC_UNSET_WORKERS");
/// assert_eq!(workers, 0);
/// ```
pub fn get_as<T: EnvValue>(key: &str) -> T {
    Accessor::process().get_as(key)
}

/// Retrieves `key` as a `T`, or `default` if it resolves to the zero value.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
///
/// let timeout = envtyped::get_as_or("ENVTYPED_DOC_UNSET_TIMEOUT", Duration::from_secs(3));
/// assert_eq!(timeout, Duration::from_secs(3));
/// ```
pub fn get_as_or<T: EnvValue>(key: &str, default: T) -> T {
    Accessor::process().get_as_or(key, default)
}

/// Retrieves `key` as a `T`, reporting absence or parse failure.
pub fn try_get_as<T: EnvValue>(key: &str) -> Result<T> {
    Accessor::process().try_get_as(key)
}

/// Returns an accessor reading `namespace_KEY` from the process environment.
///
/// # Examples
///
/// ```rust
/// use envtyped::prelude::*;
///
/// let app = envtyped::prefix("ENVTYPED_DOC");
/// assert_eq!(app.qualified_key("PORT"), "ENVTYPED_DOC_PORT");
/// assert_eq!(app.get_u16_or("PORT", 8080), 8080);
/// ```
pub fn prefix(namespace: impl Into<Namespace>) -> Prefix<Accessor<ProcessEnv>> {
    Prefix::new(namespace, Accessor::process())
}
