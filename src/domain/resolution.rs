// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tagged outcome of resolving a variable to a typed value.

use crate::domain::errors::EnvError;

/// How a lookup resolved, before any zero-value or default fallback is applied.
///
/// The plain and defaulted getters collapse this into a single value; it is
/// exposed for callers that need to tell an unset variable apart from a
/// malformed one.
///
/// # Examples
///
/// ```
/// use envtyped::prelude::*;
///
/// let env = Accessor::new(MapEnv::new().with_var("RETRIES", "three"));
/// let retries: Resolution<u8> = env.resolve("RETRIES");
/// assert!(retries.is_invalid());
/// assert_eq!(retries.value(), None);
/// ```
#[derive(Debug)]
pub enum Resolution<T> {
    /// The variable is not set.
    Absent,
    /// The variable is set to the empty string.
    Empty,
    /// The variable is set but its value is not a valid literal of `T`.
    Invalid(EnvError),
    /// The variable is set and parsed successfully.
    Present(T),
}

impl<T> Resolution<T> {
    /// Returns `true` if the variable parsed successfully.
    pub fn is_present(&self) -> bool {
        matches!(self, Resolution::Present(_))
    }

    /// Returns `true` if the variable is unset or empty.
    pub fn is_missing(&self) -> bool {
        matches!(self, Resolution::Absent | Resolution::Empty)
    }

    /// Returns `true` if the variable is set but failed to parse.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Resolution::Invalid(_))
    }

    /// Returns the parsed value, if any.
    pub fn value(self) -> Option<T> {
        match self {
            Resolution::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Maps the parsed value, leaving the other outcomes untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolution<U> {
        match self {
            Resolution::Absent => Resolution::Absent,
            Resolution::Empty => Resolution::Empty,
            Resolution::Invalid(err) => Resolution::Invalid(err),
            Resolution::Present(value) => Resolution::Present(f(value)),
        }
    }
}
