// SPDX-License-Identifier: MIT OR Apache-2.0

//! Namespaced accessor.
//!
//! `Prefix` rewrites every key to `NAMESPACE_KEY` and delegates the lookup to
//! the accessor it wraps. It carries no parsing logic of its own.

use crate::domain::{EnvAccessor, Namespace};

/// An accessor that scopes every key under a fixed namespace.
///
/// `Prefix::new("FOO", env).get_string("BAR")` reads the variable `FOO_BAR`.
/// The namespace and key are joined with a literal underscore, with no case
/// transformation or escaping. Prefixes compose, so a prefix of a prefix
/// reads `OUTER_INNER_KEY`.
///
/// # Examples
///
/// ```rust
/// use envtyped::prelude::*;
///
/// let env = Accessor::new(
///     MapEnv::new()
///         .with_var("DB_HOST", "localhost")
///         .with_var("DB_POOL_SIZE", "16"),
/// );
///
/// let db = env.prefixed("DB");
/// assert_eq!(db.get_string("HOST"), "localhost");
///
/// let pool = db.prefixed("POOL");
/// assert_eq!(pool.get_u32("SIZE"), 16);
/// assert_eq!(pool.qualified_key("SIZE"), "DB_POOL_SIZE");
/// ```
#[derive(Clone, Debug)]
pub struct Prefix<A> {
    namespace: Namespace,
    inner: A,
}

impl<A: EnvAccessor> Prefix<A> {
    /// Creates a prefixed accessor over `inner`.
    pub fn new(namespace: impl Into<Namespace>, inner: A) -> Self {
        Self {
            namespace: namespace.into(),
            inner,
        }
    }

    /// Returns the namespace.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Returns the wrapped accessor.
    pub fn inner(&self) -> &A {
        &self.inner
    }

    /// Consumes the prefix, returning the wrapped accessor.
    pub fn into_inner(self) -> A {
        self.inner
    }
}

impl<A: EnvAccessor> EnvAccessor for Prefix<A> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.inner.lookup(&self.namespace.join(key))
    }

    fn qualified_key(&self, key: &str) -> String {
        self.inner.qualified_key(&self.namespace.join(key))
    }
}
