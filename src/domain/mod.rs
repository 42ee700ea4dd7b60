// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and logic.
//!
//! This module holds the parsing and defaulting rules shared by every
//! accessor. It is independent of where the environment comes from.

pub mod accessor;
pub mod duration;
pub mod errors;
pub mod namespace;
pub mod resolution;
pub mod value;

// Re-export commonly used types
pub use accessor::EnvAccessor;
pub use duration::{parse_duration, DurationParseError};
pub use errors::{EnvError, Result};
pub use namespace::Namespace;
pub use resolution::Resolution;
pub use value::EnvValue;
