//! Delimiter-separated array extractors
//!
//! A field such as `1;2;3` is split on the configured delimiter and each
//! element is parsed with the matching scalar extractor. Extraction is
//! all-or-nothing: the first failing element fails the whole field.
//!
//! Element counting follows one rule: an empty field has zero elements,
//! otherwise there is one element more than there are delimiters. Adjacent
//! delimiters and a trailing delimiter therefore produce empty elements,
//! which fail for numeric kinds and are `""` for strings.

use tracing::debug;

use super::scalar::{
    BooleanExtractor, ByteExtractor, DoubleExtractor, FloatExtractor, IntExtractor, LongExtractor,
    ShortExtractor, StringExtractor,
};
use super::{ArrayElement, Extractor};
use crate::error::Result;

/// Array extractor over element extractor `E`, bound to one delimiter
///
/// Two array extractors are equal only if both the element kind and the
/// delimiter match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrayExtractor<E> {
    delimiter: char,
    element: E,
}

pub type StringArrayExtractor = ArrayExtractor<StringExtractor>;
pub type BooleanArrayExtractor = ArrayExtractor<BooleanExtractor>;
pub type ByteArrayExtractor = ArrayExtractor<ByteExtractor>;
pub type ShortArrayExtractor = ArrayExtractor<ShortExtractor>;
pub type IntArrayExtractor = ArrayExtractor<IntExtractor>;
pub type LongArrayExtractor = ArrayExtractor<LongExtractor>;
pub type FloatArrayExtractor = ArrayExtractor<FloatExtractor>;
pub type DoubleArrayExtractor = ArrayExtractor<DoubleExtractor>;

impl<E: ArrayElement> ArrayExtractor<E> {
    pub fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            element: E::default(),
        }
    }

    /// Delimiter separating elements within one field
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Number of elements `field` splits into
    pub fn count_values(&self, field: &[char]) -> usize {
        if field.is_empty() {
            return 0;
        }
        1 + field.iter().filter(|&&ch| ch == self.delimiter).count()
    }
}

impl<E: ArrayElement> Extractor for ArrayExtractor<E> {
    type Value = Vec<E::Value>;

    fn name(&self) -> &'static str {
        E::ARRAY_NAME
    }

    fn extract_field(&self, field: &[char]) -> Result<Vec<E::Value>> {
        let count = self.count_values(field);
        if count == 0 {
            // An empty Vec does not allocate
            return Ok(Vec::new());
        }

        let mut values = Vec::with_capacity(count);
        for (index, element) in field.split(|&ch| ch == self.delimiter).enumerate() {
            let value = self.element.extract_field(element).map_err(|error| {
                debug!(
                    "Element {} of {} failed to parse as {}: {}",
                    index,
                    E::ARRAY_NAME,
                    self.element.name(),
                    error
                );
                error
            })?;
            values.push(value);
        }

        debug_assert_eq!(values.len(), count);
        Ok(values)
    }
}
