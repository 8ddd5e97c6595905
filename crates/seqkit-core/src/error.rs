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

//! Errors reported by the checked slice operations.
//!
//! Both variants describe programmer errors: an index that does not address an
//! element of the slice, or a range whose bounds are inverted. Operations that
//! return them validate their arguments before touching the slice, so an `Err`
//! always means the slice is exactly as it was before the call.

use std::fmt::{Debug, Display};

/// The error type for checked slice operations.
///
/// The index type `I` defaults to `usize`; range based operations report the
/// bounds in whatever primitive integer type the caller supplied them in, so a
/// negative `i32` bound shows up as the negative value it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceError<I = usize> {
    /// An index lies outside `0..len`.
    IndexOutOfBounds {
        /// The offending index, as supplied by the caller.
        index: I,
        /// The length of the slice the index was checked against.
        len: usize,
    },
    /// The start of a range is greater than its inclusive end.
    InvalidRange {
        /// The inclusive start bound.
        start: I,
        /// The inclusive end bound.
        end_inclusive: I,
    },
}

impl<I> SliceError<I> {
    /// Returns `true` if this is an `IndexOutOfBounds` error.
    #[inline]
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::IndexOutOfBounds { .. })
    }

    /// Returns `true` if this is an `InvalidRange` error.
    #[inline]
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Self::InvalidRange { .. })
    }
}

impl<I> Display for SliceError<I>
where
    I: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => write!(
                f,
                "Index {} out of bounds for slice of length {}",
                index, len
            ),
            Self::InvalidRange {
                start,
                end_inclusive,
            } => write!(
                f,
                "Invalid range [{}, {}]: start is greater than end",
                start, end_inclusive
            ),
        }
    }
}

impl<I> std::error::Error for SliceError<I> where I: Debug + Display {}
