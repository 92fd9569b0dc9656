//! Integration tests for the fcv-error crate.

use fcv_error::{codes, Error, ErrorCategory, ErrorSource, Result};

#[test]
fn test_basic_error_creation() {
    let error = Error::new(
        ErrorCategory::Capacity,
        codes::CAPACITY_EXCEEDED,
        "FixedVec capacity exceeded",
    );

    assert_eq!(error.category, ErrorCategory::Capacity);
    assert_eq!(error.code, codes::CAPACITY_EXCEEDED);
    assert_eq!(error.message, "FixedVec capacity exceeded");
}

#[test]
fn test_factory_methods() {
    let capacity = Error::capacity_exceeded("full");
    assert_eq!(capacity.category, ErrorCategory::Capacity);
    assert_eq!(capacity.code, codes::CAPACITY_EXCEEDED);
    assert!(capacity.is_capacity_error());

    let insufficient = Error::insufficient_capacity("slice too long");
    assert_eq!(insufficient.category, ErrorCategory::Capacity);
    assert_eq!(insufficient.code, codes::INSUFFICIENT_CAPACITY);

    let bounds = Error::index_out_of_bounds("index 4, len 2");
    assert_eq!(bounds.category, ErrorCategory::Bounds);
    assert!(bounds.is_bounds_error());

    let empty = Error::container_empty("back on empty");
    assert_eq!(empty.category, ErrorCategory::State);
    assert!(empty.is_state_error());

    let invalid = Error::invalid_argument("bad argument");
    assert_eq!(invalid.category, ErrorCategory::Validation);
    assert!(invalid.is_validation_error());

    let validation = Error::validation_error("element rejected");
    assert_eq!(validation.category, ErrorCategory::Validation);
    assert_eq!(validation.code, codes::VALIDATION_ERROR);
}

#[test]
fn test_display_format() {
    let error = Error::capacity_exceeded("FixedVec capacity exceeded");
    let rendered = format!("{}", error);

    // Format is "[Category][Exxxx] message" with a hex code
    assert_eq!(rendered, "[Capacity][E03E8] FixedVec capacity exceeded");
}

#[test]
fn test_error_source_trait() {
    let error = Error::index_out_of_bounds("probe");
    let source: &dyn ErrorSource = &error;

    assert_eq!(source.code(), codes::INDEX_OUT_OF_BOUNDS);
    assert_eq!(source.message(), "probe");
    assert_eq!(source.category(), ErrorCategory::Bounds);
}

#[test]
fn test_constant_instances() {
    assert_eq!(Error::CAPACITY_EXCEEDED.code, codes::CAPACITY_EXCEEDED);
    assert_eq!(
        Error::INDEX_OUT_OF_BOUNDS.category,
        ErrorCategory::Bounds
    );
}

#[test]
fn test_code_ranges_by_category() {
    // Each category owns one thousand-block of codes
    assert!((1000..2000).contains(&codes::CAPACITY_EXCEEDED));
    assert!((1000..2000).contains(&codes::INSUFFICIENT_CAPACITY));
    assert!((2000..3000).contains(&codes::INDEX_OUT_OF_BOUNDS));
    assert!((3000..4000).contains(&codes::CONTAINER_EMPTY));
    assert!((4000..5000).contains(&codes::INVALID_ARGUMENT));
    assert!((4000..5000).contains(&codes::VALIDATION_ERROR));
}

#[test]
fn test_result_propagation() {
    fn fails() -> Result<u32> {
        Err(Error::container_empty("no elements"))
    }

    fn passes_through() -> Result<u32> {
        let value = fails()?;
        Ok(value)
    }

    let result = passes_through();
    assert!(result.is_err());
    if let Err(error) = result {
        assert_eq!(error.category, ErrorCategory::State);
        assert_eq!(error.code, codes::CONTAINER_EMPTY);
    }
}
