// SPDX-License-Identifier: MIT OR Apache-2.0

//! Namespace newtype for prefixed variable families.
//!
//! A `Namespace` is prepended to keys with an underscore separator, so the
//! namespace `"APP"` turns the key `"PORT"` into `"APP_PORT"`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The separator placed between a namespace and a key.
pub const SEPARATOR: char = '_';

/// An immutable token used to scope a family of environment variables.
///
/// No case transformation or escaping is applied: the namespace and the key
/// are joined verbatim.
///
/// # Examples
///
/// ```
/// use envtyped::domain::namespace::Namespace;
///
/// let ns = Namespace::from("APP");
/// assert_eq!(ns.join("DATABASE_URL"), "APP_DATABASE_URL");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespace(String);

impl Namespace {
    /// Creates a new `Namespace` from a `String`.
    pub fn new(namespace: String) -> Self {
        Namespace(namespace)
    }

    /// Returns the namespace as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the full variable name for `key` within this namespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use envtyped::domain::namespace::Namespace;
    ///
    /// assert_eq!(Namespace::from("FOO").join("BAR"), "FOO_BAR");
    /// assert_eq!(Namespace::from("FOO_").join("_BAR"), "FOO___BAR");
    /// ```
    pub fn join(&self, key: &str) -> String {
        let mut full = String::with_capacity(self.0.len() + 1 + key.len());
        full.push_str(&self.0);
        full.push(SEPARATOR);
        full.push_str(key);
        full
    }

    /// Returns the namespace nested one level deeper, e.g. `APP` + `DB` is `APP_DB`.
    pub fn nested(&self, child: &str) -> Namespace {
        Namespace(self.join(child))
    }

    /// Converts the `Namespace` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Namespace {
    fn from(s: String) -> Self {
        Namespace(s)
    }
}

impl From<&str> for Namespace {
    fn from(s: &str) -> Self {
        Namespace(s.to_string())
    }
}

impl From<Namespace> for String {
    fn from(namespace: Namespace) -> Self {
        namespace.0
    }
}

impl AsRef<str> for Namespace {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
