// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment source trait definition.
//!
//! This module defines the `EnvSource` trait, the port through which the
//! accessors reach an environment. The process environment is one
//! implementation; an in-memory map is another.

use std::sync::Arc;

/// A read-only key to string mapping.
///
/// Implementations must not cache: every call reflects the state of the
/// underlying environment at the time of the call.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so accessors can be shared across
/// threads.
///
/// # Examples
///
/// ```rust
/// use envtyped::ports::EnvSource;
///
/// struct Fixed;
///
/// impl EnvSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn lookup(&self, key: &str) -> Option<String> {
///         (key == "MODE").then(|| "release".to_string())
///     }
/// }
///
/// assert_eq!(Fixed.lookup("MODE").as_deref(), Some("release"));
/// assert_eq!(Fixed.lookup("OTHER"), None);
/// ```
pub trait EnvSource: Send + Sync {
    /// Returns the name of this source.
    ///
    /// This name is used in log events. It should be a short identifier like
    /// "process" or "map".
    fn name(&self) -> &str;

    /// Looks up `key`.
    ///
    /// Returns `Some` iff the key exists, even when its value is the empty
    /// string.
    fn lookup(&self, key: &str) -> Option<String>;
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<S: EnvSource + ?Sized> EnvSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<S: EnvSource + ?Sized> EnvSource for Arc<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}
