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

//! # Slice Extensions
//!
//! `SliceExt<T>` is implemented once for `[T]` and reaches `Vec<T>`, arrays and
//! boxed slices through auto-deref. Each operation is written generically and
//! specialized by the compiler per element type, so `[i32]`, `[char]` and
//! `[String]` all share the same code without boxing.
//!
//! ## Operations
//!
//! - In place: `swap_elements`, `try_swap_elements`, `reverse_elements_in_range`.
//! - Lookups: `frequency_map`, `value_to_indices_map`, `value_to_index_map`.
//! - Views: `zip_with_next`.
//! - Predicates: `is_sorted_ascending`, `is_sorted_descending`.
//!
//! Checked operations validate their arguments before writing anything, so a
//! returned [`SliceError`] guarantees the slice is unchanged.
//!
//! ## Usage
//!
//! ```rust
//! use seqkit_core::slice::SliceExt;
//!
//! let mut values = vec![1, 2, 3, 4, 5];
//! values.reverse_elements_in_range(1..=3).unwrap();
//! assert_eq!(values, [1, 4, 3, 2, 5]);
//! assert!(!values.is_sorted_ascending());
//!
//! let positions = values.value_to_index_map();
//! assert_eq!(positions[&4], 1);
//! ```

use crate::{
    FxHashMap, IndexList,
    error::SliceError,
    iter::{IteratorExt, ZipWithNext},
    range::IndexRange,
};
use num_traits::PrimInt;
use std::hash::Hash;

/// Extension methods for slices.
pub trait SliceExt<T> {
    /// Swaps the elements at `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not within `0..len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seqkit_core::slice::SliceExt;
    ///
    /// let mut values = ['a', 'b', 'c'];
    /// values.swap_elements(0, 2);
    /// assert_eq!(values, ['c', 'b', 'a']);
    /// ```
    fn swap_elements(&mut self, i: usize, j: usize);

    /// Swaps the elements at `i` and `j` if both are in bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::IndexOutOfBounds`] for the first index not within
    /// `0..len()`; the slice is left untouched.
    fn try_swap_elements(&mut self, i: usize, j: usize) -> Result<(), SliceError>;

    /// Reverses the elements in `range` in place.
    ///
    /// Elements outside the range keep their positions. The range may be given
    /// as an `IndexRange` or a `RangeInclusive` over any primitive integer type.
    ///
    /// # Errors
    ///
    /// - [`SliceError::IndexOutOfBounds`] if either bound is not within `0..len()`.
    /// - [`SliceError::InvalidRange`] if the start is greater than the end.
    ///
    /// The slice is left untouched on error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seqkit_core::slice::SliceExt;
    ///
    /// let mut words = ["foo", "bar", "foo", "baz"];
    /// words.reverse_elements_in_range(1..=3).unwrap();
    /// assert_eq!(words, ["foo", "baz", "foo", "bar"]);
    ///
    /// assert!(words.reverse_elements_in_range(2..=4).is_err());
    /// ```
    fn reverse_elements_in_range<I, R>(&mut self, range: R) -> Result<(), SliceError<I>>
    where
        I: PrimInt,
        R: Into<IndexRange<I>>;

    /// Counts the occurrences of each distinct element.
    fn frequency_map(&self) -> FxHashMap<T, usize>
    where
        T: Eq + Hash + Clone;

    /// Maps each distinct element to every index it occurs at, ascending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seqkit_core::slice::SliceExt;
    ///
    /// let indices = [1, 7, 1].value_to_indices_map();
    /// assert_eq!(indices[&1][..], [0, 2]);
    /// assert_eq!(indices[&7][..], [1]);
    /// ```
    fn value_to_indices_map(&self) -> FxHashMap<T, IndexList>
    where
        T: Eq + Hash + Clone;

    /// Maps each distinct element to the index it occurs at.
    ///
    /// Meant for slices without duplicates. When an element occurs more than
    /// once, the last (highest) index wins; use
    /// [`value_to_indices_map`](SliceExt::value_to_indices_map) to keep them all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seqkit_core::slice::SliceExt;
    ///
    /// let positions = [4, 3, 1, 2, 4].value_to_index_map();
    /// assert_eq!(positions[&4], 4);
    /// assert_eq!(positions[&3], 1);
    /// ```
    fn value_to_index_map(&self) -> FxHashMap<T, usize>
    where
        T: Eq + Hash + Clone;

    /// Returns an iterator over each element paired with its successor.
    ///
    /// Yields `len() - 1` pairs, or none if the slice has fewer than two
    /// elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seqkit_core::slice::SliceExt;
    ///
    /// let letters = ['a', 'b', 'c'];
    /// let pairs: Vec<_> = letters.zip_with_next().collect();
    /// assert_eq!(pairs, vec![(&'a', &'b'), (&'b', &'c')]);
    /// ```
    fn zip_with_next(&self) -> ZipWithNext<std::slice::Iter<'_, T>>;

    /// Returns `true` if every element is less than or equal to the next.
    ///
    /// Empty and single-element slices are sorted. Characters compare by code
    /// point, so `'A' < 'a'`.
    fn is_sorted_ascending(&self) -> bool
    where
        T: PartialOrd;

    /// Returns `true` if every element is greater than or equal to the next.
    ///
    /// Empty and single-element slices are sorted.
    fn is_sorted_descending(&self) -> bool
    where
        T: PartialOrd;
}

impl<T> SliceExt<T> for [T] {
    #[inline]
    fn swap_elements(&mut self, i: usize, j: usize) {
        assert!(
            i < self.len(),
            "called `SliceExt::swap_elements` with index `i` out of bounds: the len is {} but the index is {}",
            self.len(),
            i
        );
        assert!(
            j < self.len(),
            "called `SliceExt::swap_elements` with index `j` out of bounds: the len is {} but the index is {}",
            self.len(),
            j
        );
        self.swap(i, j);
    }

    #[inline]
    fn try_swap_elements(&mut self, i: usize, j: usize) -> Result<(), SliceError> {
        let len = self.len();
        if let Some(index) = [i, j].into_iter().find(|&index| index >= len) {
            return Err(SliceError::IndexOutOfBounds { index, len });
        }
        self.swap(i, j);
        Ok(())
    }

    fn reverse_elements_in_range<I, R>(&mut self, range: R) -> Result<(), SliceError<I>>
    where
        I: PrimInt,
        R: Into<IndexRange<I>>,
    {
        let range: IndexRange<I> = range.into();
        let (mut lo, mut hi) = range.resolve(self.len())?;
        debug_assert!(
            lo <= hi && hi < self.len(),
            "IndexRange::resolve returned [{}, {}] for a slice of length {}",
            lo,
            hi,
            self.len()
        );
        while lo < hi {
            self.swap(lo, hi);
            lo += 1;
            hi -= 1;
        }
        Ok(())
    }

    fn frequency_map(&self) -> FxHashMap<T, usize>
    where
        T: Eq + Hash + Clone,
    {
        self.iter().grouping_by(|&value| value.clone()).each_count()
    }

    fn value_to_indices_map(&self) -> FxHashMap<T, IndexList>
    where
        T: Eq + Hash + Clone,
    {
        self.iter()
            .enumerate()
            .grouping_by(|&(_, value)| value.clone())
            .accumulate(IndexList::new(), |indices, (index, _)| indices.push(index))
    }

    fn value_to_index_map(&self) -> FxHashMap<T, usize>
    where
        T: Eq + Hash + Clone,
    {
        let mut positions = FxHashMap::default();
        for (index, value) in self.iter().enumerate() {
            positions.insert(value.clone(), index);
        }
        positions
    }

    #[inline]
    fn zip_with_next(&self) -> ZipWithNext<std::slice::Iter<'_, T>> {
        ZipWithNext::new(self.iter())
    }

    #[inline]
    fn is_sorted_ascending(&self) -> bool
    where
        T: PartialOrd,
    {
        self.zip_with_next().all(|(a, b)| a <= b)
    }

    #[inline]
    fn is_sorted_descending(&self) -> bool
    where
        T: PartialOrd,
    {
        self.zip_with_next().all(|(a, b)| a >= b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn random_vec(rng: &mut ChaCha8Rng, max_len: usize, max_value: u32) -> Vec<u32> {
        let len = rng.random_range(0..=max_len);
        (0..len).map(|_| rng.random_range(0..max_value)).collect()
    }

    #[test]
    fn test_swap_elements() {
        let mut words = ["foo", "bar", "foo", "baz"];
        words.swap_elements(0, 2);
        assert_eq!(words, ["foo", "bar", "foo", "baz"]);
        words.swap_elements(1, 3);
        assert_eq!(words, ["foo", "baz", "foo", "bar"]);

        let mut ints = vec![1, 7, 1, 3, 6, 4];
        ints.swap_elements(1, 5);
        assert_eq!(ints, [1, 4, 1, 3, 6, 7]);
    }

    #[test]
    fn test_swap_same_index_is_noop() {
        let mut chars = ['x', 'y'];
        chars.swap_elements(1, 1);
        assert_eq!(chars, ['x', 'y']);
    }

    #[test]
    #[should_panic(expected = "called `SliceExt::swap_elements` with index `j` out of bounds")]
    fn test_swap_elements_out_of_bounds_panics() {
        let mut values = [1, 2, 3];
        values.swap_elements(0, 3);
    }

    #[test]
    fn test_try_swap_elements() {
        let mut values = vec![1.5, 2.5, 3.5];
        assert_eq!(values.try_swap_elements(0, 2), Ok(()));
        assert_eq!(values, [3.5, 2.5, 1.5]);

        assert_eq!(
            values.try_swap_elements(5, 0),
            Err(SliceError::IndexOutOfBounds { index: 5, len: 3 })
        );
        assert_eq!(
            values.try_swap_elements(0, 3),
            Err(SliceError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(values, [3.5, 2.5, 1.5]);
    }

    #[test]
    fn test_swap_is_involution() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            let original = random_vec(&mut rng, 32, 1000);
            if original.is_empty() {
                continue;
            }
            let i = rng.random_range(0..original.len());
            let j = rng.random_range(0..original.len());

            let mut values = original.clone();
            values.swap_elements(i, j);
            assert_eq!(values[i], original[j]);
            assert_eq!(values[j], original[i]);
            values.swap_elements(i, j);
            assert_eq!(values, original);
        }
    }

    #[test]
    fn test_reverse_elements_in_range() {
        let mut words = ["foo", "bar", "foo", "baz"];
        words.reverse_elements_in_range(1..=3).unwrap();
        assert_eq!(words, ["foo", "baz", "foo", "bar"]);

        let mut ints = [1, 2, 3];
        ints.reverse_elements_in_range(0..=2).unwrap();
        assert_eq!(ints, [3, 2, 1]);

        let mut chars = ['1', '2', '3'];
        chars.reverse_elements_in_range(0..=2).unwrap();
        assert_eq!(chars, ['3', '2', '1']);
    }

    #[test]
    fn test_reverse_single_element_range() {
        let mut values = [1, 2, 3];
        values.reverse_elements_in_range(IndexRange::new(1usize, 1)).unwrap();
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn test_reverse_even_length_range() {
        let mut values = [0, 1, 2, 3, 4, 5];
        values.reverse_elements_in_range(1..=4).unwrap();
        assert_eq!(values, [0, 4, 3, 2, 1, 5]);
    }

    #[test]
    fn test_reverse_out_of_bounds_leaves_slice_untouched() {
        let mut words = ["foo", "bar", "foo", "baz"];
        assert_eq!(
            words.reverse_elements_in_range(2..=4),
            Err(SliceError::IndexOutOfBounds { index: 4, len: 4 })
        );
        assert_eq!(
            words.reverse_elements_in_range(-1..=2),
            Err(SliceError::IndexOutOfBounds { index: -1, len: 4 })
        );
        assert_eq!(words, ["foo", "bar", "foo", "baz"]);
    }

    #[test]
    fn test_reverse_inverted_range_leaves_slice_untouched() {
        // Validation is the same for every element type.
        let mut chars = ['a', 'b', 'c'];
        assert_eq!(
            chars.reverse_elements_in_range(2..=0),
            Err(SliceError::InvalidRange {
                start: 2,
                end_inclusive: 0
            })
        );
        assert_eq!(chars, ['a', 'b', 'c']);

        let mut ints = [1u64, 2, 3];
        assert!(ints.reverse_elements_in_range(2usize..=1).unwrap_err().is_invalid_range());
        assert_eq!(ints, [1, 2, 3]);
    }

    #[test]
    fn test_reverse_on_empty_slice() {
        let mut empty: [i32; 0] = [];
        assert!(empty.reverse_elements_in_range(0..=0).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn test_reverse_twice_restores_and_matches_std() {
        let mut rng = ChaCha8Rng::seed_from_u64(1337);
        for _ in 0..100 {
            let original = random_vec(&mut rng, 40, 50);
            if original.is_empty() {
                continue;
            }
            let a = rng.random_range(0..original.len());
            let b = rng.random_range(0..original.len());
            let (start, end) = (a.min(b), a.max(b));

            let mut values = original.clone();
            values.reverse_elements_in_range(start..=end).unwrap();

            let mut expected = original.clone();
            expected[start..=end].reverse();
            assert_eq!(values, expected);

            values.reverse_elements_in_range(start..=end).unwrap();
            assert_eq!(values, original);
        }
    }

    #[test]
    fn test_frequency_map() {
        let freq = ["foo", "bar", "foo", "baz"].frequency_map();
        let expected: FxHashMap<_, _> = [("foo", 2), ("bar", 1), ("baz", 1)].into_iter().collect();
        assert_eq!(freq, expected);

        let freq = [1, 7, 1].frequency_map();
        let expected: FxHashMap<_, _> = [(1, 2), (7, 1)].into_iter().collect();
        assert_eq!(freq, expected);

        let empty: [char; 0] = [];
        assert!(empty.frequency_map().is_empty());
    }

    #[test]
    fn test_value_to_indices_map() {
        let indices = ["foo", "bar", "foo", "baz"].value_to_indices_map();
        assert_eq!(indices.len(), 3);
        assert_eq!(indices["foo"][..], [0, 2]);
        assert_eq!(indices["bar"][..], [1]);
        assert_eq!(indices["baz"][..], [3]);

        let empty: Vec<i32> = Vec::new();
        assert!(empty.value_to_indices_map().is_empty());
    }

    #[test]
    fn test_value_to_index_map() {
        let expected: FxHashMap<_, _> = [(4, 0), (3, 1), (1, 2), (2, 3)].into_iter().collect();
        assert_eq!([4, 3, 1, 2].value_to_index_map(), expected);

        // The last occurrence wins.
        let expected: FxHashMap<_, _> = [(4, 4), (3, 1), (1, 2), (2, 3)].into_iter().collect();
        assert_eq!([4, 3, 1, 2, 4].value_to_index_map(), expected);

        let empty: [u8; 0] = [];
        assert!(empty.value_to_index_map().is_empty());
    }

    #[test]
    fn test_value_to_index_map_sized_by_distinct_values() {
        let values = vec![7u8; 100_000];
        let positions = values.value_to_index_map();
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[&7], 99_999);
        assert!(positions.capacity() < 1_000);

        let freq = values.frequency_map();
        assert_eq!(freq[&7], 100_000);
        assert!(freq.capacity() < 1_000);
    }

    #[test]
    fn test_index_maps_agree_with_contents() {
        let mut rng = ChaCha8Rng::seed_from_u64(2025);
        for _ in 0..50 {
            let values = random_vec(&mut rng, 64, 10);
            let freq = values.frequency_map();
            let indices = values.value_to_indices_map();
            let last = values.value_to_index_map();

            assert_eq!(freq.values().sum::<usize>(), values.len());
            assert_eq!(indices.values().map(|l| l.len()).sum::<usize>(), values.len());
            assert_eq!(freq.len(), indices.len());
            assert_eq!(freq.len(), last.len());

            for (value, list) in &indices {
                assert_eq!(list.len(), freq[value]);
                assert!(list.is_sorted());
                assert!(list.iter().all(|&i| values[i] == *value));
                assert_eq!(list.last().copied(), Some(last[value]));
            }
        }
    }

    #[test]
    fn test_zip_with_next() {
        let words = ["foo", "bar", "baz", "omega", "theta"];
        let pairs: Vec<_> = words.zip_with_next().map(|(a, b)| (*a, *b)).collect();
        assert_eq!(
            pairs,
            vec![
                ("foo", "bar"),
                ("bar", "baz"),
                ("baz", "omega"),
                ("omega", "theta")
            ]
        );

        let ints = [0, 1, 2, 3, 4, 5];
        assert_eq!(ints.zip_with_next().len(), 5);
        for (k, (a, b)) in ints.zip_with_next().enumerate() {
            assert_eq!((*a, *b), (ints[k], ints[k + 1]));
        }

        assert_eq!([1].zip_with_next().count(), 0);
        let empty: [i32; 0] = [];
        assert_eq!(empty.zip_with_next().count(), 0);
    }

    #[test]
    fn test_is_sorted_ascending() {
        assert!(["abc", "def", "ghi"].is_sorted_ascending());
        assert!([1, 2, 3, 4].is_sorted_ascending());
        assert!(![1, 2, 4, 3].is_sorted_ascending());
        assert!([1i64, 2, 3, 4].is_sorted_ascending());
        assert!([1.0f32, 2.0, 3.0, 4.0].is_sorted_ascending());
        assert!(![1.0f64, 2.0, 4.0, 3.0].is_sorted_ascending());
        assert!([1i16, 2, 3, 4].is_sorted_ascending());
        assert!(['1', '2', '3', '4'].is_sorted_ascending());
        assert!(!['1', '2', '4', '3'].is_sorted_ascending());
        assert!(['1', '2', '3', 'A', 'a'].is_sorted_ascending());

        assert!(![3, 1, 2].is_sorted_ascending());
        assert!([1, 2, 2, 3].is_sorted_ascending());
    }

    #[test]
    fn test_is_sorted_descending() {
        assert!(["ghi", "def", "abc"].is_sorted_descending());
        assert!([4, 3, 2, 1].is_sorted_descending());
        assert!(![4, 3, 1, 2].is_sorted_descending());
        assert!(![1i64, 3, 4].is_sorted_descending());
        assert!([4.0f32, 3.0, 2.0, 1.0].is_sorted_descending());
        assert!([4i16, 3, 2].is_sorted_descending());
        assert!(['a', 'A', '1'].is_sorted_descending());
        assert!(!['1', '2', '4', '3'].is_sorted_descending());
        assert!([3, 3, 1].is_sorted_descending());
    }

    #[test]
    fn test_sorted_trivial_cases() {
        let empty: [&str; 0] = [];
        assert!(empty.is_sorted_ascending());
        assert!(empty.is_sorted_descending());

        assert!(["foo"].is_sorted_ascending());
        assert!(["foo"].is_sorted_descending());
        assert!(['A'].is_sorted_ascending());

        assert!(["bar", "foo"].is_sorted_ascending());
        assert!(["foo", "bar"].is_sorted_descending());
        assert!(['B', 'A'].is_sorted_descending());
    }

    #[test]
    fn test_sorted_with_nan() {
        assert!(![1.0, f64::NAN, 2.0].is_sorted_ascending());
        assert!(![2.0, f64::NAN, 1.0].is_sorted_descending());
    }

    #[test]
    fn test_sorted_agrees_with_std() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..200 {
            let values = random_vec(&mut rng, 6, 4);
            assert_eq!(values.is_sorted_ascending(), values.is_sorted());
            assert_eq!(
                values.is_sorted_descending(),
                values.is_sorted_by(|a, b| a >= b)
            );
        }
    }
}
