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

//! # Iterator Extensions
//!
//! `IteratorExt` adds counting, grouping, pairing and repetition to every
//! `Iterator`. All adapters are lazy; the terminal operations (`frequency_map`,
//! `head_and_tail`, the `Grouping` methods) consume the iterator exactly once.
//!
//! ## Submodules
//!
//! - `grouping`: Deferred group-by (`Grouping<I, F>`) with `each_count` and
//!   `accumulate`.
//! - `repeat`: `Repeating<I>` and `Repeated<I>`, which replay a `Clone`
//!   source forever or a fixed number of times.
//! - `zip`: `ZipWithNext<I>`, pairing each element with its successor.
//!
//! ## Usage
//!
//! ```rust
//! use seqkit_core::iter::IteratorExt;
//!
//! let freq = "hello".chars().frequency_map();
//! assert_eq!(freq[&'l'], 2);
//!
//! let (head, tail) = [1, 2, 3].into_iter().head_and_tail();
//! assert_eq!(head, Some(1));
//! assert_eq!(tail, vec![2, 3]);
//! ```

pub mod grouping;
pub mod repeat;
pub mod zip;

pub use grouping::Grouping;
pub use repeat::{Repeated, Repeating};
pub use zip::ZipWithNext;

use crate::FxHashMap;
use std::hash::Hash;

/// Extension methods available on every [`Iterator`].
pub trait IteratorExt: Iterator {
    /// Counts the occurrences of each distinct item.
    ///
    /// The result has one entry per distinct item, every count is positive, and
    /// the counts sum to the number of items consumed. Order of the input does
    /// not matter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seqkit_core::iter::IteratorExt;
    ///
    /// let freq = ["foo", "bar", "foo", "baz"].into_iter().frequency_map();
    /// assert_eq!(freq.len(), 3);
    /// assert_eq!(freq["foo"], 2);
    /// assert_eq!(freq["bar"], 1);
    /// ```
    fn frequency_map(self) -> FxHashMap<Self::Item, usize>
    where
        Self: Sized,
        Self::Item: Eq + Hash,
    {
        grouping::count_keys(self)
    }

    /// Defers a group-by over the items, keyed by `key_selector`.
    ///
    /// See [`Grouping`] for the available terminal operations.
    #[inline]
    fn grouping_by<K, F>(self, key_selector: F) -> Grouping<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
        K: Eq + Hash,
    {
        Grouping::new(self, key_selector)
    }

    /// Pairs each item with the item following it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seqkit_core::iter::IteratorExt;
    ///
    /// let pairs: Vec<_> = (0..6).zip_with_next().collect();
    /// assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
    /// ```
    #[inline]
    fn zip_with_next(self) -> ZipWithNext<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        ZipWithNext::new(self)
    }

    /// Replays the items indefinitely, restarting from a clone of `self`
    /// whenever a pass runs out.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seqkit_core::iter::IteratorExt;
    ///
    /// let values: Vec<_> = ['x', 'y'].into_iter().repeating().take(5).collect();
    /// assert_eq!(values, vec!['x', 'y', 'x', 'y', 'x']);
    /// ```
    #[inline]
    fn repeating(self) -> Repeating<Self>
    where
        Self: Sized + Clone,
    {
        Repeating::new(self)
    }

    /// Replays the items exactly `times` times, one pass after the other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seqkit_core::iter::IteratorExt;
    ///
    /// assert_eq!((1..=2).repeated(3).collect::<Vec<_>>(), vec![1, 2, 1, 2, 1, 2]);
    /// assert_eq!((1..=2).repeated(0).count(), 0);
    /// ```
    #[inline]
    fn repeated(self, times: usize) -> Repeated<Self>
    where
        Self: Sized + Clone,
    {
        Repeated::new(self, times)
    }

    /// Returns the first item, or `None` if there is none.
    #[inline]
    fn head(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next()
    }

    /// Collects every item except the first.
    ///
    /// The result is empty when there are fewer than two items.
    #[inline]
    fn tail(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.skip(1).collect()
    }

    /// Splits the items into the first one and a vector of the rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seqkit_core::iter::IteratorExt;
    ///
    /// let (head, tail) = std::iter::empty::<i32>().head_and_tail();
    /// assert_eq!(head, None);
    /// assert!(tail.is_empty());
    /// ```
    fn head_and_tail(mut self) -> (Option<Self::Item>, Vec<Self::Item>)
    where
        Self: Sized,
    {
        match self.next() {
            Some(head) => (Some(head), self.collect()),
            None => (None, Vec::new()),
        }
    }
}

impl<I> IteratorExt for I where I: Iterator + ?Sized {}
