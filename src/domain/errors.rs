// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the environment accessors.
//!
//! The degrading getters never surface these; they exist for the strict
//! `try_get_as` path and for the [`Resolution::Invalid`] variant, which
//! records why a present value was rejected.
//!
//! [`Resolution::Invalid`]: crate::domain::Resolution::Invalid

use crate::domain::duration::DurationParseError;
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// The main error type for environment lookups.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use envtyped::domain::errors::EnvError;
///
/// fn required_port() -> Result<u16, EnvError> {
///     Err(EnvError::NotPresent {
///         key: "APP_PORT".to_string(),
///     })
/// }
///
/// assert!(required_port().is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnvError {
    /// The requested variable is not set.
    #[error("Environment variable not present: {key}")]
    NotPresent {
        /// The key that was looked up
        key: String,
    },

    /// Failed to convert a variable's value to the requested type.
    #[error("Failed to convert environment variable '{key}' to type {target_type}: {source}")]
    TypeConversion {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The value is not one of the recognised boolean literals.
    #[error("Invalid boolean literal: '{value}'")]
    InvalidBool {
        /// The rejected value
        value: String,
    },

    /// A numeric literal is well-formed but does not fit the target type.
    #[error("Value '{value}' is out of range for {target_type}")]
    OutOfRange {
        /// The rejected value
        value: String,
        /// The target type name
        target_type: String,
    },

    /// An unsigned literal carries a sign.
    #[error("Unexpected sign in unsigned literal: '{value}'")]
    UnexpectedSign {
        /// The rejected value
        value: String,
    },
}

impl EnvError {
    /// Creates a TypeConversion error from a ParseIntError.
    pub fn from_parse_int_error(key: &str, target_type: &str, err: ParseIntError) -> Self {
        EnvError::TypeConversion {
            key: key.to_string(),
            target_type: target_type.to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversion error from a ParseFloatError.
    pub fn from_parse_float_error(key: &str, target_type: &str, err: ParseFloatError) -> Self {
        EnvError::TypeConversion {
            key: key.to_string(),
            target_type: target_type.to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversion error from a DurationParseError.
    pub fn from_duration_error(key: &str, target_type: &str, err: DurationParseError) -> Self {
        EnvError::TypeConversion {
            key: key.to_string(),
            target_type: target_type.to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversion error for an unrecognised boolean literal.
    pub fn from_invalid_bool(key: &str, value: &str) -> Self {
        EnvError::TypeConversion {
            key: key.to_string(),
            target_type: "bool".to_string(),
            source: Box::new(EnvError::InvalidBool {
                value: value.to_string(),
            }),
        }
    }

    /// Creates a TypeConversion error for a float literal that overflows to
    /// infinity.
    pub fn from_out_of_range(key: &str, target_type: &str, value: &str) -> Self {
        EnvError::TypeConversion {
            key: key.to_string(),
            target_type: target_type.to_string(),
            source: Box::new(EnvError::OutOfRange {
                value: value.to_string(),
                target_type: target_type.to_string(),
            }),
        }
    }

    /// Creates a TypeConversion error for a signed literal read as unsigned.
    pub fn from_unexpected_sign(key: &str, target_type: &str, value: &str) -> Self {
        EnvError::TypeConversion {
            key: key.to_string(),
            target_type: target_type.to_string(),
            source: Box::new(EnvError::UnexpectedSign {
                value: value.to_string(),
            }),
        }
    }

    /// Returns the key this error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            EnvError::NotPresent { key } | EnvError::TypeConversion { key, .. } => {
                Some(key.as_str())
            }
            EnvError::InvalidBool { .. }
            | EnvError::OutOfRange { .. }
            | EnvError::UnexpectedSign { .. } => None,
        }
    }
}

/// A specialized Result type for environment lookups.
pub type Result<T> = std::result::Result<T, EnvError>;
