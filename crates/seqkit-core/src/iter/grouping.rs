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

//! # Deferred Grouping
//!
//! `Grouping<I, F>` pairs a source iterator with a key selector and waits for
//! a terminal operation that decides what to do with each group. Nothing is
//! consumed until then.
//!
//! - `each_count` counts the elements per key.
//! - `accumulate` folds the elements of each key into a per-key value,
//!   in iteration order.

use crate::FxHashMap;
use std::hash::Hash;

/// A source iterator together with a function that assigns each element a key.
///
/// Created by [`IteratorExt::grouping_by`](crate::iter::IteratorExt::grouping_by).
///
/// # Examples
///
/// ```rust
/// use seqkit_core::iter::IteratorExt;
///
/// let counts = [1, 7, 1].into_iter().grouping_by(|x| *x).each_count();
/// assert_eq!(counts[&1], 2);
/// assert_eq!(counts[&7], 1);
/// ```
#[derive(Clone)]
#[must_use = "a grouping does nothing until a terminal operation is called"]
pub struct Grouping<I, F> {
    iter: I,
    key_selector: F,
}

impl<I, F> Grouping<I, F> {
    /// Creates a new `Grouping` of `iter` keyed by `key_selector`.
    #[inline]
    pub fn new(iter: I, key_selector: F) -> Self {
        Self { iter, key_selector }
    }
}

impl<I, F, K> Grouping<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    /// Counts the elements of each group.
    ///
    /// Every key in the result has a count of at least one, and the counts sum
    /// to the number of elements the source produced.
    pub fn each_count(self) -> FxHashMap<K, usize> {
        let Self {
            iter,
            mut key_selector,
        } = self;
        count_keys(iter.map(move |item| key_selector(&item)))
    }

    /// Folds the elements of each group into a value.
    ///
    /// The first element of a group starts from a clone of `initial`; `op` then
    /// updates the group's value in place with each element, in the order the
    /// source produced them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit_core::iter::IteratorExt;
    ///
    /// let by_len = ["a", "bb", "c", "dd", "eee"]
    ///     .into_iter()
    ///     .grouping_by(|s| s.len())
    ///     .accumulate(String::new(), |acc, s| acc.push_str(s));
    ///
    /// assert_eq!(by_len[&1], "ac");
    /// assert_eq!(by_len[&2], "bbdd");
    /// assert_eq!(by_len[&3], "eee");
    /// ```
    pub fn accumulate<R, Op>(self, initial: R, mut op: Op) -> FxHashMap<K, R>
    where
        R: Clone,
        Op: FnMut(&mut R, I::Item),
    {
        let Self {
            iter,
            mut key_selector,
        } = self;

        let mut groups = FxHashMap::default();
        for item in iter {
            let acc = groups
                .entry(key_selector(&item))
                .or_insert_with(|| initial.clone());
            op(acc, item);
        }
        groups
    }
}

/// Counts how often each key occurs.
///
/// The map grows with the number of distinct keys, never with the number of
/// keys consumed, so long low-cardinality sources stay small.
pub(crate) fn count_keys<K, It>(keys: It) -> FxHashMap<K, usize>
where
    It: Iterator<Item = K>,
    K: Eq + Hash,
{
    let mut counts = FxHashMap::default();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

impl<I, F> std::fmt::Debug for Grouping<I, F>
where
    I: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grouping")
            .field("iter", &self.iter)
            .finish_non_exhaustive()
    }
}
