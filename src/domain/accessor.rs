// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed accessor trait definition.
//!
//! This module defines the `EnvAccessor` trait, the main interface for
//! reading typed values. Implementors supply a single raw `lookup`; every
//! typed and defaulted getter is a provided method built on it, so all
//! accessors (plain or prefixed) share the same parsing and fallback rules.

use crate::domain::errors::{EnvError, Result};
use crate::domain::namespace::Namespace;
use crate::domain::resolution::Resolution;
use crate::domain::value::EnvValue;
use crate::service::Prefix;
use std::time::Duration;

macro_rules! typed_getters {
    ($($ty:ty => $get:ident, $get_or:ident;)*) => {
        $(
            #[doc = concat!(
                "Retrieves a `", stringify!($ty), "` named by `key`.\n\n",
                "Returns `0` if the variable is unset, empty or not a valid `",
                stringify!($ty), "`."
            )]
            fn $get(&self, key: &str) -> $ty {
                self.get_as::<$ty>(key)
            }

            #[doc = concat!(
                "Retrieves a `", stringify!($ty), "` named by `key`, or `default` ",
                "if it resolves to zero."
            )]
            fn $get_or(&self, key: &str, default: $ty) -> $ty {
                self.get_as_or::<$ty>(key, default)
            }
        )*
    };
}

/// Read access to typed environment values.
///
/// # Failure handling
///
/// The plain getters (`get_as`, `get_i32`, ...) never fail: an unset, empty
/// or malformed variable yields the type's zero value. The defaulted getters
/// (`get_as_or`, `get_i32_or`, ...) return the default whenever the plain
/// getter would return the zero value. A variable explicitly set to `"0"`
/// therefore still yields the default. Booleans are the exception: an
/// explicit falsy literal is returned as `false` even when the default is
/// `true`.
///
/// Use [`try_get_as`](EnvAccessor::try_get_as) or
/// [`resolve`](EnvAccessor::resolve) when a misconfiguration must be
/// detected.
///
/// # Examples
///
/// ```rust
/// use envtyped::prelude::*;
/// use std::time::Duration;
///
/// let env = Accessor::new(
///     MapEnv::new()
///         .with_var("WORKERS", "8")
///         .with_var("TIMEOUT", "1.5s")
///         .with_var("VERBOSE", "yes"),
/// );
///
/// assert_eq!(env.get_usize("WORKERS"), 8);
/// assert_eq!(env.get_duration("TIMEOUT"), Duration::from_millis(1500));
/// assert!(env.get_bool("VERBOSE"));
/// assert_eq!(env.get_u16_or("PORT", 8080), 8080);
/// ```
pub trait EnvAccessor {
    /// Looks up the raw value of `key`.
    ///
    /// Returns `Some` iff the variable is set, even if it is set to the empty
    /// string.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Returns the full variable name `key` resolves to.
    ///
    /// Plain accessors return `key` unchanged; prefixed accessors prepend
    /// their namespace.
    fn qualified_key(&self, key: &str) -> String {
        key.to_string()
    }

    /// Retrieves the raw value of `key`, or the empty string if it is unset.
    fn get(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_default()
    }

    /// Retrieves the raw value of `key` if it is set and non-empty, otherwise
    /// `default`.
    fn get_or(&self, key: &str, default: &str) -> String {
        match self.lookup(key) {
            Some(value) if !value.is_empty() => value,
            _ => default.to_string(),
        }
    }

    /// Resolves `key` to a typed value without applying any fallback.
    fn resolve<T: EnvValue>(&self, key: &str) -> Resolution<T> {
        match self.lookup(key) {
            None => Resolution::Absent,
            Some(raw) if raw.is_empty() => Resolution::Empty,
            Some(raw) => {
                let qualified = self.qualified_key(key);
                match T::parse_env(&qualified, &raw) {
                    Ok(value) => Resolution::Present(value),
                    Err(err) => {
                        tracing::debug!(
                            key = %qualified,
                            target_type = T::TYPE_NAME,
                            error = %err,
                            "Environment variable failed to parse"
                        );
                        Resolution::Invalid(err)
                    }
                }
            }
        }
    }

    /// Retrieves `key` as a `T`, or `T`'s zero value if it is unset, empty
    /// or invalid.
    fn get_as<T: EnvValue>(&self, key: &str) -> T {
        self.resolve::<T>(key).value().unwrap_or_else(T::zero)
    }

    /// Retrieves `key` as a `T`, or `default` if it resolves to `T`'s zero
    /// value.
    fn get_as_or<T: EnvValue>(&self, key: &str, default: T) -> T {
        T::or_default(self.resolve(key), default)
    }

    /// Retrieves `key` as a `T`, reporting why it could not be read.
    ///
    /// Unlike the degrading getters, an empty value is handed to the parser,
    /// so it is accepted for `String` and rejected for numeric types.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotPresent`] if the variable is unset and
    /// [`EnvError::TypeConversion`] if its value is not a valid `T`.
    fn try_get_as<T: EnvValue>(&self, key: &str) -> Result<T> {
        match self.lookup(key) {
            Some(raw) => T::parse_env(&self.qualified_key(key), &raw),
            None => Err(EnvError::NotPresent {
                key: self.qualified_key(key),
            }),
        }
    }

    /// Retrieves a string named by `key`. Same as [`get`](EnvAccessor::get).
    fn get_string(&self, key: &str) -> String {
        self.get_as::<String>(key)
    }

    /// Retrieves a string named by `key`, or `default` if it is unset or
    /// empty. Same as [`get_or`](EnvAccessor::get_or).
    fn get_string_or(&self, key: &str, default: &str) -> String {
        self.get_as_or::<String>(key, default.to_string())
    }

    /// Retrieves a boolean named by `key`.
    ///
    /// Recognises `1 t y true yes` and `0 f n false no`, case-insensitively.
    /// Anything else yields `false`.
    fn get_bool(&self, key: &str) -> bool {
        self.get_as::<bool>(key)
    }

    /// Retrieves a boolean named by `key`, or `default` if it is unset, empty
    /// or not a recognised literal.
    fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_as_or::<bool>(key, default)
    }

    typed_getters! {
        i8 => get_i8, get_i8_or;
        i16 => get_i16, get_i16_or;
        i32 => get_i32, get_i32_or;
        i64 => get_i64, get_i64_or;
        isize => get_isize, get_isize_or;
        u8 => get_u8, get_u8_or;
        u16 => get_u16, get_u16_or;
        u32 => get_u32, get_u32_or;
        u64 => get_u64, get_u64_or;
        usize => get_usize, get_usize_or;
        f32 => get_f32, get_f32_or;
        f64 => get_f64, get_f64_or;
    }

    /// Retrieves a duration such as `"300ms"` or `"1h30m"` named by `key`.
    ///
    /// A bare number without a unit is invalid and yields zero.
    /// `Duration` is unsigned, so a negative span such as `"-5s"` is invalid
    /// too; use `get_time_delta` (feature `chrono`) for signed durations.
    fn get_duration(&self, key: &str) -> Duration {
        self.get_as::<Duration>(key)
    }

    /// Retrieves a duration named by `key`, or `default` if it resolves to
    /// zero. Negative spans resolve to `default`.
    fn get_duration_or(&self, key: &str, default: Duration) -> Duration {
        self.get_as_or::<Duration>(key, default)
    }

    /// Retrieves a signed duration such as `"-1.5s"` named by `key`.
    #[cfg(feature = "chrono")]
    fn get_time_delta(&self, key: &str) -> chrono::TimeDelta {
        self.get_as::<chrono::TimeDelta>(key)
    }

    /// Retrieves a signed duration named by `key`, or `default` if it
    /// resolves to zero.
    #[cfg(feature = "chrono")]
    fn get_time_delta_or(&self, key: &str, default: chrono::TimeDelta) -> chrono::TimeDelta {
        self.get_as_or::<chrono::TimeDelta>(key, default)
    }

    /// Returns an accessor that reads `namespace_KEY` for every `KEY`.
    fn prefixed(&self, namespace: impl Into<Namespace>) -> Prefix<&Self>
    where
        Self: Sized,
    {
        Prefix::new(namespace, self)
    }
}

impl<A: EnvAccessor> EnvAccessor for &A {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }

    fn qualified_key(&self, key: &str) -> String {
        (**self).qualified_key(key)
    }
}
