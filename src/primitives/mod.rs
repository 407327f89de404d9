//! Leaf parsing routines shared by every extractor
//!
//! These functions operate on an already-resolved field slice. Resolving a
//! `(buffer, offset, length)` triple into that slice is done once by
//! [`span`], so out-of-range input is rejected before any parsing starts.
//!
//! - [`numeric`] - digit arithmetic for integers, standard parsing for floats
//! - [`narrowing`] - checked conversion from `i64` to narrower widths
//! - [`boolean`] - exact match against the `true` literal

pub mod boolean;
pub mod narrowing;
pub mod numeric;

pub use boolean::parse_bool;
pub use narrowing::{Narrow, narrow};
pub use numeric::{parse_f32, parse_f64, parse_i64};

use crate::error::{ExtractError, Result};

/// Resolve `length` characters starting at `offset` within `data`
pub fn span(data: &[char], offset: usize, length: usize) -> Result<&[char]> {
    offset
        .checked_add(length)
        .and_then(|end| data.get(offset..end))
        .ok_or(ExtractError::SpanOutOfBounds {
            offset,
            length,
            buffer_len: data.len(),
        })
}
