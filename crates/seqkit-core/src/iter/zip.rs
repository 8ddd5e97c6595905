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

//! # Adjacent Pairs
//!
//! `ZipWithNext<I>` pairs every element of an iterator with its successor,
//! yielding `(x[0], x[1]), (x[1], x[2]), ...`. A source of `n` elements gives
//! `n - 1` pairs, and a source with fewer than two elements gives none.
//!
//! The adapter is lazy: it holds on to a single element (the left half of the
//! next pair) and clones it once per step. For slices the items are
//! references, so the clone is a pointer copy.
//!
//! ## Usage
//!
//! ```rust
//! use seqkit_core::iter::IteratorExt;
//!
//! let pairs: Vec<_> = ['a', 'b', 'c'].into_iter().zip_with_next().collect();
//! assert_eq!(pairs, vec![('a', 'b'), ('b', 'c')]);
//! ```

use std::iter::{Fuse, FusedIterator};

/// An iterator over pairs of adjacent elements.
///
/// Created by [`IteratorExt::zip_with_next`](crate::iter::IteratorExt::zip_with_next)
/// and [`SliceExt::zip_with_next`](crate::slice::SliceExt::zip_with_next).
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ZipWithNext<I>
where
    I: Iterator,
{
    iter: Fuse<I>,
    prev: Option<I::Item>,
}

impl<I> ZipWithNext<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Creates a new `ZipWithNext` over `iter`.
    #[inline]
    pub fn new(iter: I) -> Self {
        Self {
            iter: iter.fuse(),
            prev: None,
        }
    }
}

impl<I> Iterator for ZipWithNext<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let prev = match self.prev.take() {
            Some(prev) => prev,
            None => self.iter.next()?,
        };
        let next = self.iter.next()?;
        self.prev = Some(next.clone());
        Some((prev, next))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        if self.prev.is_some() {
            (lo, hi)
        } else {
            (lo.saturating_sub(1), hi.map(|h| h.saturating_sub(1)))
        }
    }
}

impl<I> ExactSizeIterator for ZipWithNext<I>
where
    I: ExactSizeIterator,
    I::Item: Clone,
{
}

impl<I> FusedIterator for ZipWithNext<I>
where
    I: Iterator,
    I::Item: Clone,
{
}
