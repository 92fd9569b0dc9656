// FCV - fcv
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for fcv
//!
//! This module provides a unified set of imports for both std and `no_std`
//! environments. It re-exports commonly used types and traits to ensure
//! consistency across crates in the FCV project and simplify imports in
//! individual modules.

// Explicitly re-export common core traits and types
pub use core::{
    clone::Clone,
    cmp::{Eq, Ord, PartialEq, PartialOrd},
    convert::{TryFrom, TryInto},
    default::Default,
    fmt::{self, Debug, Display, Write},
    hash::Hash,
    iter::{Extend, FromIterator, IntoIterator},
    marker::{Copy, PhantomData, Sized},
    mem,
    ops::{Index, IndexMut},
    slice, str,
};

// Re-export from fcv_error
pub use fcv_error::prelude::*;
pub use fcv_error::{codes, Error, ErrorCategory, Result};

// Re-export from this crate
pub use crate::fixed_vec::{FixedVec, FixedVecIntoIter};
