//! Configuration management and validation.
//!
//! Holds the delimiter settings a reading session is configured with.
//! The array delimiter is what the registry is built from; the field
//! delimiter is only consulted to catch clashing settings and by the
//! inspection tokenizer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_ARRAY_DELIMITER, DEFAULT_FIELD_DELIMITER};
use crate::error::{ExtractError, Result};

/// Extraction settings for one reading session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Separator between elements of array-typed fields
    pub array_delimiter: char,

    /// Separator between fields of a record
    pub field_delimiter: char,

    /// Strip surrounding whitespace from each field before extraction
    pub trim_fields: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            array_delimiter: DEFAULT_ARRAY_DELIMITER,
            field_delimiter: DEFAULT_FIELD_DELIMITER,
            trim_fields: false,
        }
    }
}

impl ExtractorConfig {
    /// Set the array element delimiter
    pub fn with_array_delimiter(mut self, delimiter: char) -> Self {
        self.array_delimiter = delimiter;
        self
    }

    /// Set the field delimiter
    pub fn with_field_delimiter(mut self, delimiter: char) -> Self {
        self.field_delimiter = delimiter;
        self
    }

    /// Trim whitespace around fields
    pub fn with_trimmed_fields(mut self) -> Self {
        self.trim_fields = true;
        self
    }

    /// Check the delimiters can coexist in one record
    pub fn validate(&self) -> Result<()> {
        if is_line_break(self.array_delimiter) {
            return Err(ExtractError::configuration(
                "array delimiter cannot be a line break",
            ));
        }
        if is_line_break(self.field_delimiter) {
            return Err(ExtractError::configuration(
                "field delimiter cannot be a line break",
            ));
        }
        if self.array_delimiter == self.field_delimiter {
            return Err(ExtractError::configuration(format!(
                "array delimiter {:?} must differ from the field delimiter",
                self.array_delimiter
            )));
        }

        debug!(
            "Validated extractor config: array_delimiter={:?}, field_delimiter={:?}, trim_fields={}",
            self.array_delimiter, self.field_delimiter, self.trim_fields
        );
        Ok(())
    }
}

fn is_line_break(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}
