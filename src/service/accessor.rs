// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default accessor implementation.
//!
//! `Accessor` binds an [`EnvSource`] to the [`EnvAccessor`] interface. All
//! typed getters come from the trait; this type only performs the raw lookup.

use crate::domain::EnvAccessor;
use crate::ports::EnvSource;

#[cfg(feature = "process")]
use crate::adapters::ProcessEnv;

/// Typed accessor over an environment source.
///
/// # Examples
///
/// ```rust
/// use envtyped::prelude::*;
///
/// let env = Accessor::new(MapEnv::new().with_var("RETRIES", "3"));
/// assert_eq!(env.get_u8("RETRIES"), 3);
/// assert_eq!(env.get_u8_or("TIMEOUT_SECS", 30), 30);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Accessor<S> {
    source: S,
}

impl<S: EnvSource> Accessor<S> {
    /// Creates an accessor reading from `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the underlying source mutably, e.g. to update a [`MapEnv`].
    ///
    /// [`MapEnv`]: crate::adapters::MapEnv
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consumes the accessor, returning the underlying source.
    pub fn into_source(self) -> S {
        self.source
    }
}

#[cfg(feature = "process")]
impl Accessor<ProcessEnv> {
    /// Creates an accessor over the process environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use envtyped::prelude::*;
    ///
    /// let env = Accessor::process();
    /// let _home = env.get_or("HOME", "/");
    /// ```
    pub fn process() -> Self {
        Self::new(ProcessEnv::new())
    }
}

impl<S: EnvSource> EnvAccessor for Accessor<S> {
    fn lookup(&self, key: &str) -> Option<String> {
        let value = self.source.lookup(key);
        tracing::trace!(
            source = self.source.name(),
            key,
            found = value.is_some(),
            "Environment lookup"
        );
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MapEnv;
    use crate::domain::{EnvError, Resolution};
    use std::time::Duration;

    fn accessor() -> Accessor<MapEnv> {
        Accessor::new(
            MapEnv::new()
                .with_var("NAME", "service")
                .with_var("EMPTY", "")
                .with_var("ZERO", "0")
                .with_var("COUNT", "42")
                .with_var("NEGATIVE", "-1")
                .with_var("RATIO", "0.25")
                .with_var("FRACTION", "1.5")
                .with_var("ENABLED", "Yes")
                .with_var("DISABLED", "F")
                .with_var("GARBAGE", "FOO")
                .with_var("TIMEOUT", "5s")
                .with_var("BARE", "100"),
        )
    }

    #[test]
    fn test_lookup_distinguishes_empty_from_absent() {
        let env = accessor();
        assert_eq!(env.lookup("EMPTY"), Some(String::new()));
        assert_eq!(env.lookup("MISSING"), None);
    }

    #[test]
    fn test_get_raw() {
        let env = accessor();
        assert_eq!(env.get("NAME"), "service");
        assert_eq!(env.get("MISSING"), "");
        assert_eq!(env.get("EMPTY"), "");
    }

    #[test]
    fn test_get_or_treats_empty_as_absent() {
        let env = accessor();
        assert_eq!(env.get_or("NAME", "fallback"), "service");
        assert_eq!(env.get_or("EMPTY", "fallback"), "fallback");
        assert_eq!(env.get_or("MISSING", "fallback"), "fallback");
        assert_eq!(env.get_string_or("EMPTY", "fallback"), "fallback");
    }

    #[test]
    fn test_typed_getters() {
        let env = accessor();
        assert_eq!(env.get_i32("COUNT"), 42);
        assert_eq!(env.get_u64("COUNT"), 42);
        assert_eq!(env.get_f64("RATIO"), 0.25);
        assert_eq!(env.get_f32("FRACTION"), 1.5);
        assert!(env.get_bool("ENABLED"));
        assert!(!env.get_bool("DISABLED"));
        assert_eq!(env.get_duration("TIMEOUT"), Duration::from_secs(5));
    }

    #[test]
    fn test_typed_getters_degrade_to_zero() {
        let env = accessor();
        assert_eq!(env.get_i32("MISSING"), 0);
        assert_eq!(env.get_i32("FRACTION"), 0);
        assert_eq!(env.get_u32("NEGATIVE"), 0);
        assert_eq!(env.get_i8("GARBAGE"), 0);
        assert_eq!(env.get_f64("GARBAGE"), 0.0);
        assert!(!env.get_bool("GARBAGE"));
        assert_eq!(env.get_duration("BARE"), Duration::ZERO);
        assert_eq!(env.get_string("MISSING"), "");
    }

    #[test]
    fn test_defaulted_getters() {
        let env = accessor();
        assert_eq!(env.get_i32_or("COUNT", 7), 42);
        assert_eq!(env.get_i32_or("MISSING", 7), 7);
        assert_eq!(env.get_i32_or("FRACTION", 7), 7);
        assert_eq!(env.get_f64_or("GARBAGE", 1.5), 1.5);
        assert_eq!(
            env.get_duration_or("TIMEOUT", Duration::from_secs(3)),
            Duration::from_secs(5)
        );
        assert_eq!(
            env.get_duration_or("GARBAGE", Duration::from_secs(3)),
            Duration::from_secs(3)
        );
    }

    #[test]
    fn test_zero_literal_yields_default() {
        let env = accessor();
        assert_eq!(env.get_i32("ZERO"), 0);
        assert_eq!(env.get_i32_or("ZERO", 7), 7);
        assert_eq!(env.get_u8_or("ZERO", 9), 9);
    }

    #[test]
    fn test_bool_default_rules() {
        let env = accessor();
        assert!(!env.get_bool_or("DISABLED", true));
        assert!(env.get_bool_or("ENABLED", false));
        assert!(env.get_bool_or("MISSING", true));
        assert!(env.get_bool_or("EMPTY", true));
        assert!(env.get_bool_or("GARBAGE", true));
        assert!(!env.get_bool_or("GARBAGE", false));
    }

    #[test]
    fn test_resolve() {
        let env = accessor();
        assert!(matches!(env.resolve::<i32>("MISSING"), Resolution::Absent));
        assert!(matches!(env.resolve::<i32>("EMPTY"), Resolution::Empty));
        assert!(matches!(env.resolve::<i32>("ZERO"), Resolution::Present(0)));
        assert!(env.resolve::<u16>("NEGATIVE").is_invalid());
    }

    #[test]
    fn test_try_get_as() {
        let env = accessor();
        assert_eq!(env.try_get_as::<i32>("ZERO").unwrap(), 0);
        assert_eq!(env.try_get_as::<String>("EMPTY").unwrap(), "");

        let err = env.try_get_as::<i32>("MISSING").unwrap_err();
        assert!(matches!(err, EnvError::NotPresent { ref key } if key == "MISSING"));

        let err = env.try_get_as::<u32>("NEGATIVE").unwrap_err();
        assert!(matches!(
            err,
            EnvError::TypeConversion { ref target_type, .. } if target_type == "u32"
        ));
    }

    #[test]
    fn test_source_mut_is_visible_immediately() {
        let mut env = accessor();
        assert_eq!(env.get_i32("COUNT"), 42);
        env.source_mut().set("COUNT", "43");
        assert_eq!(env.get_i32("COUNT"), 43);
        env.source_mut().remove("COUNT");
        assert_eq!(env.get_i32("COUNT"), 0);
    }

    #[test]
    fn test_accessor_by_reference() {
        let env = accessor();
        let borrowed = &env;
        assert_eq!(borrowed.get_i64("COUNT"), 42);
        assert_eq!(env.source().len(), 12);
    }
}
