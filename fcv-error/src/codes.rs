// FCV - fcv-error
// Module: FCV Error Codes
// SW-REQ-ID: REQ_ERR_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for FCV

// Capacity error codes (1000-1999)
/// Capacity exceeded by a single-element append
pub const CAPACITY_EXCEEDED: u16 = 1000;
/// Bulk operation needs more free slots than the container has left
pub const INSUFFICIENT_CAPACITY: u16 = 1001;

// Bounds error codes (2000-2999)
/// Index at or beyond the logical length
pub const INDEX_OUT_OF_BOUNDS: u16 = 2000;

// State error codes (3000-3999)
/// Operation requires at least one live element
pub const CONTAINER_EMPTY: u16 = 3000;

// Validation error codes (4000-4999)
/// Invalid argument supplied by the caller
pub const INVALID_ARGUMENT: u16 = 4000;
/// General validation error
pub const VALIDATION_ERROR: u16 = 4001;
