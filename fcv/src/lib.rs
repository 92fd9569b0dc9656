//! Fixed-capacity container types for the FCV project.
//!
//! This crate provides bounded, inline-storage sequence containers for
//! targets without a heap, ensuring deterministic memory use and consistent
//! error handling. Capacity is a const generic parameter, storage is an
//! inline array, and nothing ever allocates. It supports two configurations:
//! - `std`: Full standard library support (tests, tooling)
//! - Default: Pure `no_std` without allocation
//!
//! # Feature Flags
//!
//! - `std`: Enables standard library support
//! - Default: Pure `no_std` without allocation

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Core library is always available
extern crate core;

#[cfg(feature = "std")]
extern crate std;

// FCV - fcv
// SW-REQ-ID: REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

// Prelude module for consistent imports across std and no_std environments
pub mod prelude;

// Re-export common types from prelude
pub use prelude::*;
// Re-export error related types for convenience
pub use fcv_error::{codes, Error, ErrorCategory};

/// Result type alias for FCV operations using `fcv_error::Error`
pub type FcvResult<T> = core::result::Result<T, Error>;

// Core modules - always available in all configurations
/// Fixed-capacity vector with inline storage
pub mod fixed_vec;

pub use fixed_vec::{FixedVec, FixedVecIntoIter};
