//! Typed extractors converting one field span into one value
//!
//! ## Architecture
//!
//! - [`scalar`] - one stateless extractor per scalar kind
//! - [`array`] - [`ArrayExtractor`], generic over its element extractor and
//!   holding the configured delimiter
//! - [`any`] - [`AnyExtractor`], the closed type-erased set handed out by the
//!   registry for name-based lookups
//!
//! ## Usage
//!
//! ```rust
//! use field_extract::extractors::{Extractor, IntExtractor, IntArrayExtractor};
//!
//! # fn example() -> field_extract::Result<()> {
//! let line: Vec<char> = "42,1;2;3".chars().collect();
//!
//! assert_eq!(IntExtractor.extract(&line, 0, 2)?, 42);
//! assert_eq!(IntArrayExtractor::new(';').extract(&line, 3, 5)?, vec![1, 2, 3]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::fmt;

use crate::error::Result;
use crate::primitives::span;

pub mod any;
pub mod array;
pub mod scalar;

pub use any::AnyExtractor;
pub use array::{
    ArrayExtractor, BooleanArrayExtractor, ByteArrayExtractor, DoubleArrayExtractor,
    FloatArrayExtractor, IntArrayExtractor, LongArrayExtractor, ShortArrayExtractor,
    StringArrayExtractor,
};
pub use scalar::{
    BooleanExtractor, ByteExtractor, CharExtractor, DoubleExtractor, FloatExtractor,
    IntExtractor, LongExtractor, ShortExtractor, StringExtractor,
};

/// Converts a span of characters into a value of type [`Extractor::Value`]
///
/// Implementations hold no per-call state, so a single instance can be
/// shared across threads and invoked concurrently.
pub trait Extractor: fmt::Debug + Send + Sync {
    type Value;

    /// Name this extractor is registered under (`"INT"`, `"int[]"`, ...)
    fn name(&self) -> &'static str;

    /// Convert an already-resolved field
    fn extract_field(&self, field: &[char]) -> Result<Self::Value>;

    /// Convert `length` characters of `data` starting at `offset`
    fn extract(&self, data: &[char], offset: usize, length: usize) -> Result<Self::Value> {
        self.extract_field(span(data, offset, length)?)
    }

    /// Convert a whole string; decodes it to characters first
    fn extract_str(&self, text: &str) -> Result<Self::Value> {
        let field: Vec<char> = text.chars().collect();
        self.extract_field(&field)
    }
}

/// Scalar extractors that may be used as the element of an array extractor
pub trait ArrayElement: Extractor + Default + Copy {
    /// Registry name of the array of this element (`"int[]"`)
    const ARRAY_NAME: &'static str;
}
