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

//! # Seqkit Core
//!
//! Small, allocation-light algorithms over in-memory sequences, exposed as
//! extension traits so they read like built-in methods. Every operation is a
//! pure function of its input (or an in-place edit of a borrowed slice), runs
//! in O(n) or better, and keeps no state between calls.
//!
//! ## Modules
//!
//! - `slice`: `SliceExt<T>` for `[T]` (and through auto-deref `Vec<T>` and
//!   arrays): checked and panicking swaps, in-place range reversal, frequency
//!   and index maps, adjacent pairs, and ascending/descending sortedness.
//! - `iter`: `IteratorExt` for every `Iterator`: frequency maps, deferred
//!   grouping (`Grouping`), adjacent pairs (`ZipWithNext`), lazy repetition
//!   (`Repeating`, `Repeated`), and head/tail splitting.
//! - `range`: `IndexRange<I>`, a closed `[start, end]` range over any
//!   primitive integer that validates itself against a slice length.
//! - `error`: `SliceError`, reported by the checked slice operations.
//!
//! ## Usage
//!
//! ```rust
//! use seqkit_core::prelude::*;
//!
//! let mut letters = vec!['d', 'c', 'b', 'a'];
//! assert!(letters.is_sorted_descending());
//!
//! letters.reverse_elements_in_range(0..=3).unwrap();
//! assert!(letters.is_sorted_ascending());
//!
//! let cycled: String = letters.iter().repeated(2).collect();
//! assert_eq!(cycled, "abcdabcd");
//! ```

pub mod error;
pub mod iter;
pub mod range;
pub mod slice;

/// The hash map returned by every map-building operation.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// An ascending list of slice positions; short lists stay inline.
pub type IndexList = smallvec::SmallVec<usize, 4>;

/// Glob-importable re-exports of the extension traits and their types.
pub mod prelude {
    pub use crate::{
        FxHashMap, IndexList,
        error::SliceError,
        iter::{Grouping, IteratorExt, Repeated, Repeating, ZipWithNext},
        range::IndexRange,
        slice::SliceExt,
    };
}
