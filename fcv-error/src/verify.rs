//! Formal verification for the error handling system using Kani.
//!
//! This module contains proofs that verify core properties of the error handling system.
//! These proofs only run with `cargo kani --features kani`.

#[cfg(feature = "kani")]
pub mod kani_verification {
    use crate::{codes, Error, ErrorCategory, ErrorSource, Result};

    /// Verify that creating an error preserves category, code, and message
    #[cfg_attr(kani, kani::proof)]
    pub fn verify_error_creation_safety() {
        let error = Error::new(
            ErrorCategory::Capacity,
            codes::CAPACITY_EXCEEDED,
            "verification test",
        );

        assert!(error.category() == ErrorCategory::Capacity);
        assert!(error.code() == codes::CAPACITY_EXCEEDED);
        assert!(error.message() == "verification test");
        assert!(error.is_capacity_error());
    }

    /// Verify that errors propagate unchanged through `Result` and `?`
    #[cfg_attr(kani, kani::proof)]
    pub fn verify_error_propagation() {
        fn inner() -> Result<()> {
            Err(Error::index_out_of_bounds("propagation test"))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        let result = outer();
        assert!(result.is_err());
        if let Err(error) = result {
            assert!(error.category == ErrorCategory::Bounds);
            assert!(error.code == codes::INDEX_OUT_OF_BOUNDS);
        }
    }

    /// Verify that factory methods map to the documented code ranges
    #[cfg_attr(kani, kani::proof)]
    pub fn verify_factory_code_ranges() {
        assert!(Error::capacity_exceeded("x").code >= 1000);
        assert!(Error::capacity_exceeded("x").code < 2000);
        assert!(Error::index_out_of_bounds("x").code >= 2000);
        assert!(Error::index_out_of_bounds("x").code < 3000);
        assert!(Error::container_empty("x").code >= 3000);
        assert!(Error::container_empty("x").code < 4000);
        assert!(Error::invalid_argument("x").code >= 4000);
        assert!(Error::invalid_argument("x").code < 5000);
    }
}

// Include the verification module in the main library when kani feature is enabled
#[cfg(feature = "kani")]
pub use kani_verification::*;
