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

//! # Lazy Repetition
//!
//! Adapters that replay a source iterator, either forever (`Repeating`) or a
//! fixed number of times (`Repeated`). Every pass starts from a clone of the
//! untouched source, so the source must be `Clone`; a single-pass iterator is
//! rejected at compile time rather than failing on the second pass.
//!
//! Nothing is buffered. Each element is produced by the current pass only when
//! the consumer pulls it.
//!
//! ## Usage
//!
//! ```rust
//! use seqkit_core::iter::IteratorExt;
//!
//! let twice: Vec<_> = (1..=3).repeated(2).collect();
//! assert_eq!(twice, vec![1, 2, 3, 1, 2, 3]);
//!
//! let ones: i32 = [1, 1, 1].into_iter().repeating().take(100).sum();
//! assert_eq!(ones, 100);
//! ```

use std::iter::FusedIterator;

/// An iterator that replays its source indefinitely.
///
/// An empty source yields nothing instead of looping forever.
///
/// Created by [`IteratorExt::repeating`](crate::iter::IteratorExt::repeating).
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Repeating<I> {
    orig: I,
    iter: I,
}

impl<I> Repeating<I>
where
    I: Iterator + Clone,
{
    /// Creates a new `Repeating` over `iter`.
    #[inline]
    pub fn new(iter: I) -> Self {
        Self {
            orig: iter.clone(),
            iter,
        }
    }
}

impl<I> Iterator for Repeating<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.iter.next() {
            None => {
                self.iter = self.orig.clone();
                self.iter.next()
            }
            item => item,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.orig.size_hint() {
            empty @ (0, Some(0)) => empty,
            (0, _) => (0, None),
            _ => (usize::MAX, None),
        }
    }
}

/// An iterator that replays its source a fixed number of times.
///
/// Created by [`IteratorExt::repeated`](crate::iter::IteratorExt::repeated).
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Repeated<I> {
    orig: I,
    current: Option<I>,
    remaining: usize,
}

impl<I> Repeated<I>
where
    I: Iterator + Clone,
{
    /// Creates a new `Repeated` that replays `iter` exactly `times` times.
    #[inline]
    pub fn new(iter: I, times: usize) -> Self {
        Self {
            orig: iter,
            current: None,
            remaining: times,
        }
    }

    /// Returns the number of passes that have not started yet.
    #[inline]
    pub fn remaining_passes(&self) -> usize {
        self.remaining
    }
}

impl<I> Iterator for Repeated<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.current.as_mut().and_then(Iterator::next) {
            return Some(item);
        }
        self.current = None;
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let mut pass = self.orig.clone();
        let item = pass.next();
        if item.is_some() {
            self.current = Some(pass);
        } else {
            // Every further pass would be empty too.
            self.remaining = 0;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (cur_lo, cur_hi) = self
            .current
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint);
        let (lo, hi) = self.orig.size_hint();

        let lower = cur_lo.saturating_add(lo.saturating_mul(self.remaining));
        let upper = match (cur_hi, hi) {
            (Some(c), Some(h)) => h
                .checked_mul(self.remaining)
                .and_then(|total| total.checked_add(c)),
            _ => None,
        };
        (lower, upper)
    }
}

impl<I> FusedIterator for Repeated<I> where I: Iterator + Clone {}
