//! Extractor registry for name-based and direct extractor access
//!
//! A registry is built once per array delimiter, usually when a column
//! schema is configured, and then shared read-only by every reader of the
//! session. It maps the upper-cased type name of each extractor to a
//! ready-to-use [`AnyExtractor`]; lookups are case-insensitive.
//!
//! ```rust
//! use field_extract::{ExtractorRegistry, Value};
//!
//! # fn example() -> field_extract::Result<()> {
//! let registry = ExtractorRegistry::build(';');
//!
//! let tags = registry.lookup("String[]")?;
//! assert_eq!(
//!     tags.extract_str("red;green")?,
//!     Value::StringArray(vec!["red".to_string(), "green".to_string()])
//! );
//! assert_eq!(registry.lookup("int[]")?, registry.lookup("INT[]")?);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::collections::HashMap;

use tracing::debug;

use crate::config::ExtractorConfig;
use crate::error::{ExtractError, Result};
use crate::extractors::{
    AnyExtractor, BooleanArrayExtractor, BooleanExtractor, ByteArrayExtractor, ByteExtractor,
    CharExtractor, DoubleArrayExtractor, DoubleExtractor, FloatArrayExtractor, FloatExtractor,
    IntArrayExtractor, IntExtractor, LongArrayExtractor, LongExtractor, ShortArrayExtractor,
    ShortExtractor, StringArrayExtractor, StringExtractor,
};
use crate::models::ExtractorKind;

/// Immutable name-to-extractor table for one array delimiter
#[derive(Debug, Clone)]
pub struct ExtractorRegistry {
    /// Extractors indexed by upper-cased type name
    extractors: HashMap<String, AnyExtractor>,

    /// Delimiter every array extractor in this registry was built with
    array_delimiter: char,
}

impl ExtractorRegistry {
    /// Build the full set of scalar and array extractors
    pub fn build(array_delimiter: char) -> Self {
        let extractors: HashMap<String, AnyExtractor> = ExtractorKind::ALL
            .iter()
            .map(|&kind| (kind.registry_key(), AnyExtractor::new(kind, array_delimiter)))
            .collect();

        debug!(
            "Built extractor registry with {} extractors (array delimiter {:?})",
            extractors.len(),
            array_delimiter
        );

        Self {
            extractors,
            array_delimiter,
        }
    }

    /// Validate `config` and build a registry from its array delimiter
    pub fn from_config(config: &ExtractorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config.array_delimiter))
    }

    /// Find an extractor by type name, ignoring case
    pub fn lookup(&self, name: &str) -> Result<&AnyExtractor> {
        self.extractors
            .get(&name.to_uppercase())
            .ok_or_else(|| ExtractError::unknown_extractor(name))
    }

    /// Check whether `name` resolves to an extractor
    pub fn contains(&self, name: &str) -> bool {
        self.extractors.contains_key(&name.to_uppercase())
    }

    /// Names of the registered extractors as written in schemas
    /// (`"INT"`, `"String[]"`), sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> =
            self.extractors.values().map(AnyExtractor::name).collect();
        names.sort_unstable();
        names
    }

    /// Get the number of registered extractors
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }

    pub fn array_delimiter(&self) -> char {
        self.array_delimiter
    }

    pub fn string(&self) -> StringExtractor {
        StringExtractor
    }

    pub fn long(&self) -> LongExtractor {
        LongExtractor
    }

    pub fn int(&self) -> IntExtractor {
        IntExtractor
    }

    pub fn short(&self) -> ShortExtractor {
        ShortExtractor
    }

    pub fn byte(&self) -> ByteExtractor {
        ByteExtractor
    }

    pub fn boolean(&self) -> BooleanExtractor {
        BooleanExtractor
    }

    pub fn character(&self) -> CharExtractor {
        CharExtractor
    }

    pub fn float(&self) -> FloatExtractor {
        FloatExtractor
    }

    pub fn double(&self) -> DoubleExtractor {
        DoubleExtractor
    }

    pub fn string_array(&self) -> StringArrayExtractor {
        StringArrayExtractor::new(self.array_delimiter)
    }

    pub fn boolean_array(&self) -> BooleanArrayExtractor {
        BooleanArrayExtractor::new(self.array_delimiter)
    }

    pub fn byte_array(&self) -> ByteArrayExtractor {
        ByteArrayExtractor::new(self.array_delimiter)
    }

    pub fn short_array(&self) -> ShortArrayExtractor {
        ShortArrayExtractor::new(self.array_delimiter)
    }

    pub fn int_array(&self) -> IntArrayExtractor {
        IntArrayExtractor::new(self.array_delimiter)
    }

    pub fn long_array(&self) -> LongArrayExtractor {
        LongArrayExtractor::new(self.array_delimiter)
    }

    pub fn float_array(&self) -> FloatArrayExtractor {
        FloatArrayExtractor::new(self.array_delimiter)
    }

    pub fn double_array(&self) -> DoubleArrayExtractor {
        DoubleArrayExtractor::new(self.array_delimiter)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::build(crate::constants::DEFAULT_ARRAY_DELIMITER)
    }
}
