// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the accessor implementations.
//!
//! This module contains the concrete implementations of the `EnvAccessor`
//! trait: the plain accessor over a source and the namespaced wrapper.

pub mod accessor;
pub mod prefix;

// Re-export commonly used types
pub use accessor::Accessor;
pub use prefix::Prefix;
