// FCV - fcv-error
// Module: FCV Error Handling
// SW-REQ-ID: REQ_ERR_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! FCV Error handling library
//!
//! This library provides the error handling system shared by the FCV
//! fixed-capacity containers. It includes error types, categories, and
//! const factory methods for creating errors without allocation.
//!
//! # Error Categories
//!
//! Errors are organized into categories, each with its own range of
//! error codes:
//!
//! ## Capacity Errors (1000-1999)
//! - Single-element append into a full container
//! - Bulk copy larger than the remaining free slots
//!
//! ## Bounds Errors (2000-2999)
//! - Index at or beyond the logical length
//!
//! ## State Errors (3000-3999)
//! - Operations that require a non-empty container
//!
//! ## Validation Errors (4000-4999)
//! - Invalid caller-supplied arguments
//!
//! # Usage
//!
//! ```
//! use fcv_error::{Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::Capacity,
//!     fcv_error::codes::CAPACITY_EXCEEDED,
//!     "FixedVec capacity exceeded",
//! );
//! assert!(error.is_capacity_error());
//!
//! // Using factory methods for common errors
//! let bounds_error = Error::index_out_of_bounds("Index beyond logical length");
//! assert_eq!(bounds_error.code, fcv_error::codes::INDEX_OUT_OF_BOUNDS);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![allow(clippy::cargo)]
#![warn(clippy::pedantic)]
#![warn(clippy::missing_panics_doc)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

// Standard library support
#[cfg(feature = "std")]
extern crate std;

/// Error codes for fcv
pub mod codes;
/// Error and error handling types
pub mod errors;

// Modules
pub mod prelude;

// Include verification module conditionally, but exclude during coverage builds
#[cfg(all(not(coverage), doc))]
pub mod verify;

// Re-export key types
pub use errors::{Error, ErrorCategory, ErrorSource};

/// A specialized `Result` type for FCV operations.
///
/// This type alias uses `fcv_error::Error` as the error type.
/// It is suitable for `no_std` environments as `fcv_error::Error`
/// carries only a category, a code, and a static message.
pub type Result<T> = core::result::Result<T, Error>;

/// Error conversion trait for converting between error types
///
/// This trait provides a standardized way to convert between error types
/// across the FCV codebase. It is used to ensure a consistent error
/// handling approach across all crates.
pub trait FromError<E> {
    /// Convert from the source error type to the target error type
    fn from_error(error: E) -> Self;
}

/// Error conversion trait for converting to specific error categories
///
/// This trait provides a way to convert any error to a specific error
/// category, which is useful for creating category-specific errors.
pub trait ToErrorCategory {
    /// Convert the error to a specific category
    fn to_category(&self) -> ErrorCategory;
}
