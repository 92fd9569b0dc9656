// FCV - fcv-error
// Module: FCV Error Types
// SW-REQ-ID: REQ_ERR_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

/// Unified error handling system for FCV
///
/// This module provides the error type shared by all FCV crates. It includes
/// error categories, the `Error` struct, and const factory methods for the
/// conditions the fixed-capacity containers can report.
use core::fmt;

use crate::{
    codes,
    prelude::{
        str,
        Debug,
        Eq,
        PartialEq,
    },
    FromError,
    ToErrorCategory,
};

/// `Error` categories for FCV operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Capacity errors (append or bulk copy into a full container)
    Capacity   = 1,
    /// Bounds errors (index at or beyond the logical length)
    Bounds     = 2,
    /// State errors (operation not valid for the current container state)
    State      = 3,
    /// Validation errors (invalid caller-supplied arguments)
    Validation = 4,
}

/// Base trait for all error types - `no_std` version
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// FCV `Error` type
///
/// This is the main error type for the fixed-capacity containers.
/// It provides categorized errors with error codes and static messages,
/// suitable for `no_std` targets without allocation.
#[derive(Debug, Copy, Clone)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Capacity exceeded error
    pub const CAPACITY_EXCEEDED: Self = Self::new(
        ErrorCategory::Capacity,
        codes::CAPACITY_EXCEEDED,
        "Capacity exceeded",
    );
    /// Index out of bounds error
    pub const INDEX_OUT_OF_BOUNDS: Self = Self::new(
        ErrorCategory::Bounds,
        codes::INDEX_OUT_OF_BOUNDS,
        "Index out of bounds",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    // Capacity Error Factory Methods

    /// Create a capacity exceeded error
    #[must_use]
    pub const fn capacity_exceeded(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::CAPACITY_EXCEEDED, message)
    }

    /// Create an insufficient capacity error
    #[must_use]
    pub const fn insufficient_capacity(message: &'static str) -> Self {
        Self::new(
            ErrorCategory::Capacity,
            codes::INSUFFICIENT_CAPACITY,
            message,
        )
    }

    // Bounds Error Factory Methods

    /// Create an index out of bounds error
    #[must_use]
    pub const fn index_out_of_bounds(message: &'static str) -> Self {
        Self::new(ErrorCategory::Bounds, codes::INDEX_OUT_OF_BOUNDS, message)
    }

    // State Error Factory Methods

    /// Create a container empty error
    #[must_use]
    pub const fn container_empty(message: &'static str) -> Self {
        Self::new(ErrorCategory::State, codes::CONTAINER_EMPTY, message)
    }

    // Validation Error Factory Methods

    /// Create an invalid argument error
    #[must_use]
    pub const fn invalid_argument(message: &'static str) -> Self {
        Self::new(ErrorCategory::Validation, codes::INVALID_ARGUMENT, message)
    }

    /// Create a validation error
    #[must_use]
    pub const fn validation_error(message: &'static str) -> Self {
        Self::new(
            ErrorCategory::Validation,
            codes::VALIDATION_ERROR,
            message,
        )
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }

    /// Check if this is a bounds error
    #[must_use]
    pub fn is_bounds_error(&self) -> bool {
        self.category == ErrorCategory::Bounds
    }

    /// Check if this is a state error
    #[must_use]
    pub fn is_state_error(&self) -> bool {
        self.category == ErrorCategory::State
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        self.category == ErrorCategory::Validation
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

// Implement the ToErrorCategory trait for Error
impl ToErrorCategory for Error {
    fn to_category(&self) -> ErrorCategory {
        self.category
    }
}

// Implement FromError for Error (self conversion)
impl FromError<Self> for Error {
    fn from_error(error: Self) -> Self {
        error
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
