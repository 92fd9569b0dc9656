// FCV - fcv
// Module: FixedVec - Inline-storage bounded sequence
// SW-REQ-ID: REQ_CAP_001, REQ_MEM_SAFETY_001, REQ_BOUNDS_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity vector with inline storage and compile-time capacity.
//!
//! `FixedVec<T, N>` provides a bounded sequence with vector-like ergonomics
//! (append, indexed access, erasure, iteration) and no growth path. All
//! storage is inline. No heap allocation, no Provider abstraction.
//!
//! # Characteristics
//!
//! - **Zero allocation**: All memory is inline `[T; N]`
//! - **Default-valued storage**: every slot always holds a valid `T`; slots at
//!   or beyond the logical length are stale, never uninitialized
//! - **Two failure tiers**: contract violations halt via assertion
//!   (`push`, `at`, `back`), soft edge cases are absorbed silently
//!   (`erase` out of range, truncating construction), and `try_` variants
//!   report `Result` for callers that must not halt
//! - **RAII cleanup**: elements drop with the container as one block
//! - **ASIL-D compliant**: Deterministic behavior

use core::fmt;
use core::iter::FusedIterator;
use core::mem;
use core::ops::{Index, IndexMut};
use core::slice;

use fcv_error::Result;

/// A bounded sequence with compile-time capacity and inline storage.
///
/// The API mirrors a growable vector (append, indexed access, erase,
/// iteration) but the capacity is fixed at compile time and nothing ever
/// reallocates. Appending beyond capacity is a contract violation and halts
/// the program; bulk construction beyond capacity silently truncates. The
/// two tiers are intentional and documented per operation.
///
/// # Requirements
///
/// - REQ_CAP_001: Capacity fixed at compile time, no growth path
/// - REQ_MEM_SAFETY_001: No out-of-block access, no uninitialized reads
/// - REQ_BOUNDS_001: Checked access validates against the logical length
///
/// # Invariants
///
/// 1. `len <= N` always holds
/// 2. Slots `[0, len)` hold the live elements in insertion order
/// 3. Slots `[len, N)` hold stale or default values, never uninitialized
///    memory
/// 4. `clear` and `erase` only move the length fence; slot contents are
///    never destroyed in place
///
/// # Examples
///
/// ```
/// use fcv::FixedVec;
///
/// let mut vec = FixedVec::<u32, 4>::new();
/// vec.push(1);
/// vec.push(2);
/// vec.push(3);
///
/// assert_eq!(vec.len(), 3);
/// vec.erase(1);
/// assert_eq!(vec.as_slice(), &[1, 3]);
/// ```
#[derive(Clone)]
pub struct FixedVec<T, const N: usize> {
    /// Inline storage; slots at or beyond `len` are stale
    slots: [T; N],

    /// Number of live elements
    /// Invariant: len <= N
    len: usize,
}

impl<T: Default, const N: usize> FixedVec<T, N> {
    /// Creates a new empty container with all slots default-filled.
    ///
    /// # Examples
    ///
    /// ```
    /// use fcv::FixedVec;
    ///
    /// let vec = FixedVec::<u32, 8>::new();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), 8);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| T::default()),
            len: 0,
        }
    }

    /// Removes and returns the last live element.
    ///
    /// Returns `None` when the container is empty. The vacated slot reverts
    /// to the default value and becomes stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use fcv::FixedVec;
    ///
    /// let mut vec = FixedVec::<u32, 4>::new();
    /// vec.push(1);
    /// vec.push(2);
    ///
    /// assert_eq!(vec.pop(), Some(2));
    /// assert_eq!(vec.pop(), Some(1));
    /// assert_eq!(vec.pop(), None);
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        Some(mem::take(&mut self.slots[self.len]))
    }
}

impl<T, const N: usize> FixedVec<T, N> {
    /// Compile-time capacity of the container.
    pub const CAPACITY: usize = N;

    /// Appends one element at the logical end.
    ///
    /// # Const-time Guarantee
    ///
    /// O(1), single slot assignment.
    ///
    /// # Panics
    ///
    /// Panics when the container is already full. Overflow is a contract
    /// violation: on an embedded profile with `panic = "abort"` this halts
    /// the process instead of corrupting memory past the block. There is no
    /// silent overflow, ever. Use [`try_push`](Self::try_push) where halting
    /// is not acceptable.
    ///
    /// # Examples
    ///
    /// ```
    /// use fcv::FixedVec;
    ///
    /// let mut vec = FixedVec::<u32, 3>::new();
    /// vec.push(10);
    /// vec.push(20);
    /// assert_eq!(vec.as_slice(), &[10, 20]);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) {
        assert!(self.len < N, "FixedVec capacity exceeded");
        self.slots[self.len] = value;
        self.len += 1;
    }

    /// Appends one element, reporting overflow instead of halting.
    ///
    /// The recoverable twin of [`push`](Self::push). On overflow the
    /// container is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Err(CapacityExceeded)` if the container is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use fcv::FixedVec;
    ///
    /// let mut vec = FixedVec::<u32, 2>::new();
    /// vec.try_push(1)?;
    /// vec.try_push(2)?;
    /// assert!(vec.try_push(3).is_err()); // Full
    /// assert_eq!(vec.len(), 2);
    /// # Ok::<(), fcv_error::Error>(())
    /// ```
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<()> {
        if self.len >= N {
            return Err(fcv_error::Error::capacity_exceeded(
                "FixedVec capacity exceeded",
            ));
        }

        self.slots[self.len] = value;
        self.len += 1;

        Ok(())
    }

    /// Appends every element of `source`, ignoring the position argument.
    ///
    /// The position parameter exists for interface compatibility with
    /// position-based insertion and is deliberately ignored: elements are
    /// always appended at the logical end, in source order, by repeated
    /// [`push`](Self::push).
    ///
    /// # Panics
    ///
    /// Panics on the first element that does not fit. Elements appended
    /// before the overflow stay appended; the operation is not atomic.
    /// For an all-or-nothing bulk append see
    /// [`try_extend_from_slice`](Self::try_extend_from_slice).
    ///
    /// # Examples
    ///
    /// ```
    /// use fcv::FixedVec;
    ///
    /// let mut vec = FixedVec::<u32, 6>::new();
    /// vec.push(1);
    /// vec.push(2);
    ///
    /// // Position 0 is ignored; the range lands at the end.
    /// vec.insert(0, [3, 4]);
    /// assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);
    /// ```
    pub fn insert<I>(&mut self, _position: usize, source: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in source {
            self.push(value);
        }
    }

    /// Replaces the contents with the elements of `source`.
    ///
    /// Resets the logical length to zero, then copies elements in order
    /// until the source is exhausted or the capacity is reached. Elements
    /// beyond the capacity are silently dropped, matching the truncating
    /// construction semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// use fcv::FixedVec;
    ///
    /// let mut vec = FixedVec::<u32, 3>::new();
    /// vec.push(9);
    ///
    /// vec.assign([1, 2, 3, 4, 5]); // Truncated to capacity
    /// assert_eq!(vec.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn assign<I>(&mut self, source: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        for value in source.into_iter().take(N) {
            self.slots[self.len] = value;
            self.len += 1;
        }
    }

    /// Removes the element at `index`, shifting later elements left.
    ///
    /// If `index` is at or beyond the logical length the call is a silent
    /// no-op: nothing shifts, nothing is reported. The erased slot content
    /// ends up past the length fence as a stale value.
    ///
    /// # Time Complexity
    ///
    /// O(len - index) slot swaps. With capacity 1 or 0 there is never a gap
    /// to close, so the shift loop is skipped entirely.
    ///
    /// # Examples
    ///
    /// ```
    /// use fcv::FixedVec;
    ///
    /// let mut vec = FixedVec::<u32, 4>::new();
    /// vec.push(1);
    /// vec.push(2);
    /// vec.push(3);
    ///
    /// vec.erase(1);
    /// assert_eq!(vec.as_slice(), &[1, 3]);
    ///
    /// vec.erase(10); // Out of range: absorbed
    /// assert_eq!(vec.len(), 2);
    /// ```
    pub fn erase(&mut self, index: usize) {
        if index < self.len {
            if N > 1 {
                for i in index..self.len - 1 {
                    self.slots.swap(i, i + 1);
                }
            }
            self.len -= 1;
        }
    }

    /// Returns a reference to the element at `index`, validated against the
    /// logical length.
    ///
    /// # Panics
    ///
    /// Panics when `index >= len()`, even when `index` is still inside the
    /// physical block. For length-unaware access use the `Index` operator;
    /// for a non-halting lookup use [`get`](Self::get).
    ///
    /// # Examples
    ///
    /// ```
    /// use fcv::FixedVec;
    ///
    /// let mut vec = FixedVec::<u32, 4>::new();
    /// vec.push(7);
    /// assert_eq!(*vec.at(0), 7);
    /// ```
    #[inline]
    #[must_use]
    pub fn at(&self, index: usize) -> &T {
        assert!(
            index < self.len,
            "index out of bounds: the len is {} but the index is {}",
            self.len,
            index
        );
        &self.slots[index]
    }

    /// Returns a mutable reference to the element at `index`, validated
    /// against the logical length.
    ///
    /// # Panics
    ///
    /// Panics when `index >= len()`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.len,
            "index out of bounds: the len is {} but the index is {}",
            self.len,
            index
        );
        &mut self.slots[index]
    }

    /// Returns a reference to the element at `index`, or `None` when the
    /// index is at or beyond the logical length.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            Some(&self.slots[index])
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `index`, or `None`
    /// when the index is at or beyond the logical length.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            Some(&mut self.slots[index])
        } else {
            None
        }
    }

    /// Returns a reference to the last live element.
    ///
    /// # Panics
    ///
    /// Panics when the container is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fcv::FixedVec;
    ///
    /// let mut vec = FixedVec::<u32, 4>::new();
    /// vec.push(1);
    /// vec.push(2);
    /// assert_eq!(*vec.back(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn back(&self) -> &T {
        assert!(self.len != 0, "back on empty FixedVec");
        &self.slots[self.len - 1]
    }

    /// Returns a mutable reference to the last live element.
    ///
    /// # Panics
    ///
    /// Panics when the container is empty.
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        assert!(self.len != 0, "back on empty FixedVec");
        &mut self.slots[self.len - 1]
    }

    /// Returns the number of live elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the compile-time capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns `true` if the container holds no live elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the container is at capacity.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Resets the logical length to zero.
    ///
    /// Storage is neither destroyed nor zeroed: the previous values stay
    /// physically present as stale slots (observable through the `Index`
    /// operator) until overwritten by later appends.
    ///
    /// # Examples
    ///
    /// ```
    /// use fcv::FixedVec;
    ///
    /// let mut vec = FixedVec::<u32, 4>::new();
    /// vec.push(1);
    /// vec.push(2);
    ///
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec[0], 1); // Stale slot, still readable
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Returns the live elements as a slice, in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.len]
    }

    /// Returns the live elements as a mutable slice, in insertion order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots[..self.len]
    }

    /// Returns an iterator over the live elements.
    ///
    /// Visits exactly `len()` elements, front to back. Stale slots are
    /// never yielded.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over the live elements.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Clone, const N: usize> FixedVec<T, N> {
    /// Appends all elements of `source`, or none of them.
    ///
    /// Unlike [`insert`](Self::insert) this is atomic: the free capacity is
    /// checked up front and the container is untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns `Err(InsufficientCapacity)` if the slice is longer than the
    /// remaining free slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use fcv::FixedVec;
    ///
    /// let mut vec = FixedVec::<u32, 4>::new();
    /// vec.try_extend_from_slice(&[1, 2, 3])?;
    /// assert!(vec.try_extend_from_slice(&[4, 5]).is_err());
    /// assert_eq!(vec.as_slice(), &[1, 2, 3]);
    /// # Ok::<(), fcv_error::Error>(())
    /// ```
    pub fn try_extend_from_slice(&mut self, source: &[T]) -> Result<()> {
        if source.len() > N - self.len {
            return Err(fcv_error::Error::insufficient_capacity(
                "FixedVec cannot hold the whole slice",
            ));
        }

        for value in source {
            self.slots[self.len] = value.clone();
            self.len += 1;
        }

        Ok(())
    }
}

impl<T: Default + Clone, const N: usize> FixedVec<T, N> {
    /// Creates a container holding the leading elements of `source`.
    ///
    /// Copies at most `N` elements; a longer slice is silently truncated,
    /// with no overflow fault. This is the bulk-construction tier, distinct
    /// from the halting append tier.
    ///
    /// # Examples
    ///
    /// ```
    /// use fcv::FixedVec;
    ///
    /// let vec = FixedVec::<u32, 3>::from_slice(&[1, 2, 3, 4, 5]);
    /// assert_eq!(vec.as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_slice(source: &[T]) -> Self {
        source.iter().cloned().collect()
    }
}

// Default: empty container
impl<T: Default, const N: usize> Default for FixedVec<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// Debug renders the live prefix only; stale slots are an implementation
// detail and never part of the logical value.
impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

// Equality compares the live prefixes; stale slots never participate.
impl<T: PartialEq, const N: usize> PartialEq for FixedVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for FixedVec<T, N> {}

impl<T: PartialEq, const N: usize> PartialEq<[T]> for FixedVec<T, N> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize, const M: usize> PartialEq<[T; M]> for FixedVec<T, N> {
    fn eq(&self, other: &[T; M]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

// Hash implementation for use in hash-based collections
impl<T: core::hash::Hash, const N: usize> core::hash::Hash for FixedVec<T, N> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        // Hash length
        self.len().hash(state);
        // Hash each live element in order
        for item in self.iter() {
            item.hash(state);
        }
    }
}

/// Unchecked access tier: indexes the full storage block without consulting
/// the logical length.
///
/// Indices in `[len, N)` are reachable and yield stale or default values;
/// callers own the consequences of reading them. Only the physical block
/// boundary `N` is enforced, by the backing array itself.
impl<T, const N: usize> Index<usize> for FixedVec<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

/// Unchecked mutable access over the full storage block; see the `Index`
/// implementation.
impl<T, const N: usize> IndexMut<usize> for FixedVec<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedVec<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedVec<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Extend belongs to the halting append tier: each element goes through
// `push` and the first overflowing element panics.
impl<T, const N: usize> Extend<T> for FixedVec<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: Copy + 'a, const N: usize> Extend<&'a T> for FixedVec<T, N> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.push(*value);
        }
    }
}

// FromIterator belongs to the truncating construction tier: elements beyond
// the capacity are silently dropped, with no overflow fault.
impl<T: Default, const N: usize> FromIterator<T> for FixedVec<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.assign(iter);
        vec
    }
}

// IntoIterator for references
impl<'a, T, const N: usize> IntoIterator for &'a FixedVec<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// IntoIterator by value drains the live elements
impl<T: Default, const N: usize> IntoIterator for FixedVec<T, N> {
    type Item = T;
    type IntoIter = FixedVecIntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        FixedVecIntoIter {
            vec: self,
            index: 0,
        }
    }
}

/// Owning iterator returned by [`FixedVec::into_iter`].
///
/// Drains the live elements front to back; each drained slot reverts to the
/// default value. Whatever is left drops with the backing block.
#[derive(Debug)]
pub struct FixedVecIntoIter<T, const N: usize> {
    vec: FixedVec<T, N>,
    index: usize,
}

impl<T: Default, const N: usize> Iterator for FixedVecIntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.vec.len {
            let value = mem::take(&mut self.vec.slots[self.index]);
            self.index += 1;
            Some(value)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vec.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<T: Default, const N: usize> ExactSizeIterator for FixedVecIntoIter<T, N> {}

impl<T: Default, const N: usize> FusedIterator for FixedVecIntoIter<T, N> {}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn verify_append_order() {
        let mut vec: FixedVec<u8, 5> = FixedVec::new();

        vec.push(1);
        vec.push(2);
        vec.push(3);

        assert!(vec.len() == 3);
        assert!(*vec.at(0) == 1);
        assert!(*vec.at(1) == 2);
        assert!(*vec.at(2) == 3);
    }

    #[kani::proof]
    fn verify_capacity_enforcement() {
        let mut vec: FixedVec<u8, 3> = FixedVec::new();

        assert!(vec.try_push(1).is_ok());
        assert!(vec.try_push(2).is_ok());
        assert!(vec.try_push(3).is_ok());
        assert!(vec.try_push(4).is_err()); // Should fail

        assert!(vec.len() == 3);
        assert!(vec.is_full());
    }

    #[kani::proof]
    fn verify_erase_closes_gap() {
        let mut vec: FixedVec<u32, 4> = FixedVec::new();
        vec.push(1);
        vec.push(2);
        vec.push(3);

        vec.erase(1);

        assert!(vec.len() == 2);
        assert!(*vec.at(0) == 1);
        assert!(*vec.at(1) == 3);
    }

    #[kani::proof]
    fn verify_erase_out_of_range_is_noop() {
        let mut vec: FixedVec<u32, 4> = FixedVec::new();
        vec.push(1);
        vec.push(2);

        let index: usize = kani::any();
        kani::assume(index >= vec.len());

        vec.erase(index);

        assert!(vec.len() == 2);
        assert!(*vec.at(0) == 1);
        assert!(*vec.at(1) == 2);
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_truncating_construction() {
        let source: [u8; 5] = kani::any();
        let vec: FixedVec<u8, 3> = FixedVec::from_slice(&source);

        assert!(vec.len() == 3);
        assert!(*vec.at(0) == source[0]);
        assert!(*vec.at(1) == source[1]);
        assert!(*vec.at(2) == source[2]);
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_length_never_exceeds_capacity() {
        let mut vec: FixedVec<u8, 4> = FixedVec::new();

        let pushes: usize = kani::any();
        kani::assume(pushes <= 4);
        for _ in 0..pushes {
            vec.push(0);
        }

        let index: usize = kani::any();
        vec.erase(index);

        assert!(vec.len() <= vec.capacity());
    }
}

// ============================================================================
// Tests
// ============================================================================
