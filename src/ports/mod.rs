// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the interface through which the accessors read an
//! environment. It is implemented by adapters in the adapters layer.

pub mod source;

pub use source::EnvSource;
