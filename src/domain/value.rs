// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-type parse table for environment values.
//!
//! Every type the accessors can produce implements [`EnvValue`], which pairs a
//! strict parser with the type's zero value. The degrading getters are built
//! entirely on top of these three operations.

use crate::domain::duration::parse_std_duration;
use crate::domain::errors::{EnvError, Result};
use crate::domain::resolution::Resolution;
use std::time::Duration;

/// A scalar type that can be read from an environment variable.
///
/// # Defaulting
///
/// [`EnvValue::or_default`] decides what a defaulted getter returns. The
/// provided implementation returns the parsed value unless it equals the
/// zero value, so a variable set to `"0"` is indistinguishable from an unset
/// one and yields the default. `bool` overrides this so that an explicit
/// falsy literal wins over a `true` default.
///
/// # Examples
///
/// ```
/// use envtyped::domain::{EnvValue, Result};
///
/// #[derive(Debug, PartialEq)]
/// struct Port(u16);
///
/// impl EnvValue for Port {
///     const TYPE_NAME: &'static str = "Port";
///
///     fn parse_env(key: &str, raw: &str) -> Result<Self> {
///         u16::parse_env(key, raw).map(Port)
///     }
///
///     fn zero() -> Self {
///         Port(0)
///     }
///
///     fn is_zero(&self) -> bool {
///         self.0 == 0
///     }
/// }
///
/// assert_eq!(Port::parse_env("PORT", "8080").unwrap(), Port(8080));
/// ```
pub trait EnvValue: Sized {
    /// Type name used in errors and log events.
    const TYPE_NAME: &'static str;

    /// Parses a raw, non-empty value. `key` is only used for error reporting.
    fn parse_env(key: &str, raw: &str) -> Result<Self>;

    /// The value returned by plain getters when resolution fails.
    fn zero() -> Self;

    /// Returns `true` if `self` is the zero value.
    fn is_zero(&self) -> bool;

    /// Collapses a resolution into the value returned by a defaulted getter.
    fn or_default(resolution: Resolution<Self>, default: Self) -> Self {
        match resolution {
            Resolution::Present(value) if !value.is_zero() => value,
            _ => default,
        }
    }
}

impl EnvValue for String {
    const TYPE_NAME: &'static str = "String";

    fn parse_env(_key: &str, raw: &str) -> Result<Self> {
        Ok(raw.to_string())
    }

    fn zero() -> Self {
        String::new()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl EnvValue for bool {
    const TYPE_NAME: &'static str = "bool";

    /// Recognises the following values (case-insensitive):
    /// - `true`: "1", "t", "y", "true", "yes"
    /// - `false`: "0", "f", "n", "false", "no"
    ///
    /// Case folding is full Unicode uppercasing, so `"yeſ"` reads as `"YES"`.
    fn parse_env(key: &str, raw: &str) -> Result<Self> {
        match raw.to_uppercase().as_str() {
            "1" | "T" | "Y" | "TRUE" | "YES" => Ok(true),
            "0" | "F" | "N" | "FALSE" | "NO" => Ok(false),
            _ => Err(EnvError::from_invalid_bool(key, raw)),
        }
    }

    fn zero() -> Self {
        false
    }

    fn is_zero(&self) -> bool {
        !*self
    }

    fn or_default(resolution: Resolution<Self>, default: Self) -> Self {
        match resolution {
            Resolution::Present(value) => value,
            _ => default,
        }
    }
}

macro_rules! impl_env_value_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EnvValue for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn parse_env(key: &str, raw: &str) -> Result<Self> {
                    // Only signed types accept an explicit sign.
                    if <$ty>::MIN == 0 && raw.starts_with('+') {
                        return Err(EnvError::from_unexpected_sign(key, Self::TYPE_NAME, raw));
                    }
                    raw.parse::<$ty>()
                        .map_err(|e| EnvError::from_parse_int_error(key, Self::TYPE_NAME, e))
                }

                fn zero() -> Self {
                    0
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_env_value_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_env_value_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EnvValue for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn parse_env(key: &str, raw: &str) -> Result<Self> {
                    let value = raw
                        .parse::<$ty>()
                        .map_err(|e| EnvError::from_parse_float_error(key, Self::TYPE_NAME, e))?;
                    if value.is_infinite() && !is_infinity_literal(raw) {
                        return Err(EnvError::from_out_of_range(key, Self::TYPE_NAME, raw));
                    }
                    Ok(value)
                }

                fn zero() -> Self {
                    0.0
                }

                // -0.0 compares equal to 0.0; NaN is never zero.
                fn is_zero(&self) -> bool {
                    *self == 0.0
                }
            }
        )*
    };
}

impl_env_value_float!(f32, f64);

/// Returns `true` if `raw` spells infinity rather than overflowing to it.
fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

impl EnvValue for Duration {
    const TYPE_NAME: &'static str = "Duration";

    fn parse_env(key: &str, raw: &str) -> Result<Self> {
        parse_std_duration(raw).map_err(|e| EnvError::from_duration_error(key, Self::TYPE_NAME, e))
    }

    fn zero() -> Self {
        Duration::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == Duration::ZERO
    }
}

#[cfg(feature = "chrono")]
impl EnvValue for chrono::TimeDelta {
    const TYPE_NAME: &'static str = "TimeDelta";

    fn parse_env(key: &str, raw: &str) -> Result<Self> {
        crate::domain::duration::parse_duration(raw)
            .map(chrono::TimeDelta::nanoseconds)
            .map_err(|e| EnvError::from_duration_error(key, Self::TYPE_NAME, e))
    }

    fn zero() -> Self {
        chrono::TimeDelta::zero()
    }

    fn is_zero(&self) -> bool {
        *self == chrono::TimeDelta::zero()
    }
}
