// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Closed Index Ranges
//!
//! `IndexRange<I>` is a closed pair `[start, end_inclusive]` of primitive
//! integers describing a contiguous run of slice positions. Unlike a bare
//! `RangeInclusive`, it knows how to check itself against a concrete slice
//! length and report *why* it does not fit.
//!
//! A range is allowed to hold any pair of bounds, including inverted ones and
//! negative ones for signed index types. Whether it is usable is decided at the
//! point of use by [`IndexRange::resolve`], which turns it into a pair of
//! in-bounds `usize` positions or a [`SliceError`].
//!
//! ## Usage
//!
//! ```rust
//! use seqkit_core::range::IndexRange;
//!
//! let range = IndexRange::from(1..=3);
//! assert_eq!(range.len(), 3);
//! assert_eq!(range.resolve(5), Ok((1, 3)));
//! assert!(range.resolve(3).is_err());
//! ```

use crate::error::SliceError;
use num_traits::PrimInt;
use std::{iter::FusedIterator, ops::RangeInclusive};

/// A closed range `[start, end_inclusive]` of indices.
///
/// The range is empty when `start > end_inclusive`. Empty ranges are valid
/// values but never resolve against a slice.
///
/// # Examples
///
/// ```rust
/// # use seqkit_core::range::IndexRange;
///
/// let range = IndexRange::new(2, 4);
/// let points: Vec<_> = range.iter().collect();
/// assert_eq!(points, vec![2, 3, 4]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexRange<I>
where
    I: PrimInt,
{
    start: I,
    end_inclusive: I,
}

impl<I> IndexRange<I>
where
    I: PrimInt,
{
    /// Creates a new `IndexRange`. No validation is performed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seqkit_core::range::IndexRange;
    ///
    /// let range = IndexRange::new(0, 9);
    /// assert_eq!(range.len(), 10);
    ///
    /// let inverted = IndexRange::new(5, 1);
    /// assert!(inverted.is_empty());
    /// ```
    #[inline]
    pub const fn new(start: I, end_inclusive: I) -> Self {
        Self {
            start,
            end_inclusive,
        }
    }

    /// Returns the inclusive start bound.
    #[inline]
    pub const fn start(&self) -> I {
        self.start
    }

    /// Returns the inclusive end bound.
    #[inline]
    pub const fn end_inclusive(&self) -> I {
        self.end_inclusive
    }

    /// Returns `true` if the range contains no indices (`start > end_inclusive`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start > self.end_inclusive
    }

    /// Returns `true` if `value` lies within `[start, end_inclusive]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seqkit_core::range::IndexRange;
    ///
    /// let range = IndexRange::new(-2, 2);
    /// assert!(range.contains(-2));
    /// assert!(range.contains(2));
    /// assert!(!range.contains(3));
    /// ```
    #[inline]
    pub fn contains(&self, value: I) -> bool {
        self.start <= value && value <= self.end_inclusive
    }

    /// Returns the number of indices in the range.
    ///
    /// # Panics
    ///
    /// Panics if the number of indices does not fit into a `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seqkit_core::range::IndexRange;
    ///
    /// assert_eq!(IndexRange::new(3, 3).len(), 1);
    /// assert_eq!(IndexRange::new(3, 2).len(), 0);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        span(self.start, self.end_inclusive)
    }

    /// Checks the range against a slice of length `len`.
    ///
    /// On success returns the bounds as `usize` positions, both within
    /// `0..len` and ordered. Otherwise reports the first problem found,
    /// checking `start`, then `end_inclusive`, then their order.
    ///
    /// # Errors
    ///
    /// - [`SliceError::IndexOutOfBounds`] if a bound is negative or `>= len`.
    /// - [`SliceError::InvalidRange`] if `start > end_inclusive`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seqkit_core::range::IndexRange;
    /// # use seqkit_core::error::SliceError;
    ///
    /// assert_eq!(IndexRange::new(0, 2).resolve(3), Ok((0, 2)));
    /// assert_eq!(
    ///     IndexRange::new(-1, 2).resolve(3),
    ///     Err(SliceError::IndexOutOfBounds { index: -1, len: 3 })
    /// );
    /// assert_eq!(
    ///     IndexRange::new(2, 1).resolve(3),
    ///     Err(SliceError::InvalidRange { start: 2, end_inclusive: 1 })
    /// );
    /// ```
    pub fn resolve(&self, len: usize) -> Result<(usize, usize), SliceError<I>> {
        let start = position(self.start, len).ok_or(SliceError::IndexOutOfBounds {
            index: self.start,
            len,
        })?;
        let end = position(self.end_inclusive, len).ok_or(SliceError::IndexOutOfBounds {
            index: self.end_inclusive,
            len,
        })?;
        if start > end {
            return Err(SliceError::InvalidRange {
                start: self.start,
                end_inclusive: self.end_inclusive,
            });
        }
        Ok((start, end))
    }

    /// Returns an iterator over the indices in the range, in ascending order.
    #[inline]
    pub fn iter(&self) -> IndexRangeIter<I> {
        IndexRangeIter {
            front: self.start,
            back: self.end_inclusive,
            exhausted: self.is_empty(),
        }
    }
}

#[inline]
fn position<I>(index: I, len: usize) -> Option<usize>
where
    I: PrimInt,
{
    index.to_usize().filter(|&p| p < len)
}

#[inline]
fn span<I>(start: I, end_inclusive: I) -> usize
where
    I: PrimInt,
{
    try_span(start, end_inclusive).expect("IndexRange: number of indices exceeds usize::MAX")
}

/// Number of indices in `[start, end_inclusive]`, or `None` if it does not
/// fit into a `usize`. The difference is taken in `i128` so signed ranges
/// crossing zero cannot overflow the index type.
fn try_span<I>(start: I, end_inclusive: I) -> Option<usize>
where
    I: PrimInt,
{
    if start > end_inclusive {
        return Some(0);
    }
    let distance = match (start.to_i128(), end_inclusive.to_i128()) {
        (Some(s), Some(e)) => e.checked_sub(s).and_then(|d| usize::try_from(d).ok()),
        // Only unsigned 128-bit bounds above i128::MAX end up here, where the
        // subtraction in `I` itself cannot underflow.
        _ => end_inclusive.checked_sub(&start).and_then(|d| d.to_usize()),
    };
    distance.and_then(|d| d.checked_add(1))
}

/// An iterator over the indices contained within an `IndexRange`.
///
/// # Examples
///
/// ```rust
/// # use seqkit_core::range::IndexRange;
///
/// let mut it = IndexRange::new(1, 3).iter();
/// assert_eq!(it.next_back(), Some(3));
/// assert_eq!(it.next(), Some(1));
/// assert_eq!(it.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct IndexRangeIter<I>
where
    I: PrimInt,
{
    front: I,
    back: I,
    exhausted: bool,
}

impl<I> Iterator for IndexRangeIter<I>
where
    I: PrimInt,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.front;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front = self.front + I::one();
        }
        Some(result)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match try_span(self.front, self.back) {
            Some(len) => (len, Some(len)),
            None => (usize::MAX, None),
        }
    }
}

impl<I> DoubleEndedIterator for IndexRangeIter<I>
where
    I: PrimInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.back;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back = self.back - I::one();
        }
        Some(result)
    }
}

impl<I> ExactSizeIterator for IndexRangeIter<I>
where
    I: PrimInt,
{
    #[inline]
    fn len(&self) -> usize {
        if self.exhausted {
            0
        } else {
            span(self.front, self.back)
        }
    }
}

impl<I> FusedIterator for IndexRangeIter<I> where I: PrimInt {}

impl<I> std::fmt::Debug for IndexRange<I>
where
    I: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexRange")
            .field("start", &self.start)
            .field("end_inclusive", &self.end_inclusive)
            .finish()
    }
}

impl<I> std::fmt::Display for IndexRange<I>
where
    I: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end_inclusive)
    }
}

impl<I> std::ops::RangeBounds<I> for IndexRange<I>
where
    I: PrimInt,
{
    fn start_bound(&self) -> std::ops::Bound<&I> {
        std::ops::Bound::Included(&self.start)
    }

    fn end_bound(&self) -> std::ops::Bound<&I> {
        std::ops::Bound::Included(&self.end_inclusive)
    }
}

impl<I> IntoIterator for IndexRange<I>
where
    I: PrimInt,
{
    type Item = I;
    type IntoIter = IndexRangeIter<I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<I> IntoIterator for &IndexRange<I>
where
    I: PrimInt,
{
    type Item = I;
    type IntoIter = IndexRangeIter<I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<I> From<RangeInclusive<I>> for IndexRange<I>
where
    I: PrimInt,
{
    #[inline]
    fn from(range: RangeInclusive<I>) -> Self {
        let (start, end_inclusive) = range.into_inner();
        Self::new(start, end_inclusive)
    }
}

impl<I> From<IndexRange<I>> for RangeInclusive<I>
where
    I: PrimInt,
{
    #[inline]
    fn from(range: IndexRange<I>) -> Self {
        range.start..=range.end_inclusive
    }
}
