// Integration test for the FixedVec container
// Exercises the public API the way downstream crates consume it

use std::panic::{self, AssertUnwindSafe};

use fcv::FixedVec;
use fcv_error::Result;

#[test]
fn test_basic_flow() -> Result<()> {
    let mut vec = FixedVec::<u32, 10>::new();

    // Push elements
    vec.try_push(1)?;
    vec.try_push(2)?;
    vec.try_push(3)?;

    // Verify basic operations
    assert_eq!(vec.len(), 3);
    assert_eq!(vec.get(0), Some(&1));
    assert_eq!(vec.get(1), Some(&2));
    assert_eq!(vec.get(2), Some(&3));
    assert_eq!(vec.pop(), Some(3));
    assert_eq!(vec.len(), 2);

    Ok(())
}

#[test]
fn test_capacity_error_reporting() {
    let mut vec = FixedVec::<u32, 3>::new();

    assert!(vec.try_push(1).is_ok());
    assert!(vec.try_push(2).is_ok());
    assert!(vec.try_push(3).is_ok());

    let error = vec.try_push(4).unwrap_err();
    assert!(error.is_capacity_error());
    assert_eq!(error.code, fcv_error::codes::CAPACITY_EXCEEDED);
    assert_eq!(error.category, fcv_error::ErrorCategory::Capacity);
    assert_eq!(
        format!("{error}"),
        "[Capacity][E03E8] FixedVec capacity exceeded"
    );

    assert_eq!(vec.len(), 3);
}

#[test]
fn test_insert_halts_mid_iteration_with_partial_effects() {
    let mut vec = FixedVec::<u32, 4>::new();
    vec.push(1);
    vec.push(2);

    // Elements 3 and 4 fit, 5 does not; the append halts there
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        vec.insert(0, [3, 4, 5]);
    }));
    assert!(outcome.is_err());

    // Everything appended before the halt stays appended
    assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);
    assert!(vec.is_full());
}

#[test]
fn test_push_overflow_leaves_container_intact() {
    let mut vec = FixedVec::<u32, 2>::new();
    vec.push(1);
    vec.push(2);

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        vec.push(3);
    }));
    assert!(outcome.is_err());

    // The overflow check runs before any slot is touched
    assert_eq!(vec.as_slice(), &[1, 2]);
}

#[test]
fn test_debug_renders_live_prefix() {
    let mut vec = FixedVec::<u32, 4>::new();
    vec.push(1);
    vec.push(2);

    assert_eq!(format!("{vec:?}"), "[1, 2]");

    vec.clear();
    assert_eq!(format!("{vec:?}"), "[]"); // Stale slots stay hidden
}

#[test]
fn test_heap_owning_elements() {
    let mut vec = FixedVec::<String, 3>::new();

    vec.push(String::from("alpha"));
    vec.push(String::from("beta"));
    vec.push(String::from("gamma"));

    vec.erase(0);
    assert_eq!(vec.as_slice(), &["beta", "gamma"]);

    let popped = vec.pop();
    assert_eq!(popped.as_deref(), Some("gamma"));

    // The vacated slot holds the default (empty) string
    assert_eq!(vec[1], "");

    let copy = vec.clone();
    vec.clear();
    assert_eq!(copy.as_slice(), &["beta"]);
}

#[test]
fn test_hash_ignores_stale_residue() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn fingerprint<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    let mut left = FixedVec::<u32, 4>::new();
    left.assign([1, 2]);

    let mut right = FixedVec::<u32, 4>::new();
    right.assign([7, 8, 9]);
    right.clear();
    right.assign([1, 2]);

    assert_eq!(left, right);
    assert_eq!(fingerprint(&left), fingerprint(&right));
}

#[test]
fn test_result_chaining() -> Result<()> {
    fn load(readings: &[u32]) -> Result<FixedVec<u32, 8>> {
        let mut vec = FixedVec::new();
        vec.try_extend_from_slice(readings)?;
        vec.try_push(0)?; // Sentinel
        Ok(vec)
    }

    let vec = load(&[5, 6, 7])?;
    assert_eq!(vec.as_slice(), &[5, 6, 7, 0]);

    let overflow = load(&[0; 8]);
    assert!(overflow.is_err());

    Ok(())
}

#[test]
fn test_iteration_styles() {
    let vec: FixedVec<u32, 8> = (1..=4).collect();

    let borrowed: u32 = vec.iter().sum();
    assert_eq!(borrowed, 10);

    let mut doubled = vec.clone();
    for value in &mut doubled {
        *value *= 2;
    }
    assert_eq!(doubled.as_slice(), &[2, 4, 6, 8]);

    let mut drained = 0;
    for value in vec {
        drained += value;
    }
    assert_eq!(drained, 10);
}
