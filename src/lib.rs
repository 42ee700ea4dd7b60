// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed, defaulting accessors for environment variables.
//!
//! This crate reads a named variable, parses it into a scalar type (string,
//! integers of every width, floats, booleans, durations) and falls back to a
//! zero value or a caller-supplied default when the variable is unset, empty
//! or malformed. A prefixed accessor scopes a family of variables under a
//! common namespace.
//!
//! # Architecture
//!
//! - **Domain Layer**: parsing and defaulting rules (`EnvValue`, `EnvAccessor`,
//!   `Resolution`, errors, the duration grammar)
//! - **Ports**: the `EnvSource` trait through which an environment is read
//! - **Adapters**: the process environment and an in-memory map
//! - **Service**: `Accessor` over a source and the namespaced `Prefix`
//!
//! # Failure handling
//!
//! The getters never fail. An unset, empty or invalid variable resolves to
//! the type's zero value, and the defaulted getters replace a zero result
//! with the default. This means a variable set to `"0"` also yields the
//! default. Use `try_get_as` or `resolve` to detect misconfiguration.
//!
//! # Feature Flags
//!
//! - `process`: the process environment adapter and the free functions (default)
//! - `chrono`: read signed durations as `chrono::TimeDelta`
//! - `full`: enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use envtyped::prelude::*;
//! use std::time::Duration;
//!
//! let env = Accessor::new(
//!     MapEnv::new()
//!         .with_var("APP_PORT", "8080")
//!         .with_var("APP_DEBUG", "true")
//!         .with_var("APP_TIMEOUT", "2m30s"),
//! );
//!
//! let app = env.prefixed("APP");
//! assert_eq!(app.get_u16("PORT"), 8080);
//! assert!(app.get_bool("DEBUG"));
//! assert_eq!(app.get_duration("TIMEOUT"), Duration::from_secs(150));
//! assert_eq!(app.get_or("HOST", "127.0.0.1"), "127.0.0.1");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(feature = "process")]
mod process;

#[cfg(feature = "process")]
pub use process::{get, get_as, get_as_or, get_or, lookup, prefix, resolve, try_get_as};

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::MapEnv;
    pub use crate::domain::{
        EnvAccessor, EnvError, EnvValue, Namespace, Resolution, Result,
    };
    pub use crate::ports::EnvSource;
    pub use crate::service::{Accessor, Prefix};

    #[cfg(feature = "process")]
    pub use crate::adapters::ProcessEnv;
}
