//! Error handling for field extraction.
//!
//! Every failure is returned synchronously to the caller of the extraction
//! or lookup call. Nothing is retried and there are no partial results.

use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    #[error("Cannot parse a number from empty input")]
    EmptyInput,

    #[error("Invalid digit character '{character}' at position {position}")]
    InvalidDigit { character: char, position: usize },

    #[error("Value {value} does not fit in {target}")]
    UnsupportedNarrowing { value: i64, target: &'static str },

    #[error("Expected a single character, but length was {length}")]
    InvalidLength { length: usize },

    #[error("Malformed number '{input}': {reason}")]
    MalformedNumber {
        input: String,
        #[source]
        reason: ParseFloatError,
    },

    #[error("Unknown extractor name '{name}'")]
    UnknownExtractorName { name: String },

    #[error("Span offset={offset} length={length} exceeds buffer of {buffer_len} characters")]
    SpanOutOfBounds {
        offset: usize,
        length: usize,
        buffer_len: usize,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid column schema: {message}")]
    Schema { message: String },

    #[error("Record has {found} fields, schema expects {expected}")]
    FieldCount { expected: usize, found: usize },

    #[error("Column '{column}' (index {index}): {source}")]
    Column {
        column: String,
        index: usize,
        #[source]
        source: Box<ExtractError>,
    },
}

impl ExtractError {
    /// Create an invalid digit error
    pub fn invalid_digit(character: char, position: usize) -> Self {
        Self::InvalidDigit {
            character,
            position,
        }
    }

    /// Create a narrowing error for the named target width
    pub fn unsupported_narrowing(value: i64, target: &'static str) -> Self {
        Self::UnsupportedNarrowing { value, target }
    }

    /// Create an invalid length error for single-character extraction
    pub fn invalid_length(length: usize) -> Self {
        Self::InvalidLength { length }
    }

    /// Create a malformed number error from the rejected text
    pub fn malformed_number(input: impl Into<String>, reason: ParseFloatError) -> Self {
        Self::MalformedNumber {
            input: input.into(),
            reason,
        }
    }

    /// Create an unknown extractor name error
    pub fn unknown_extractor(name: impl Into<String>) -> Self {
        Self::UnknownExtractorName { name: name.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a schema error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    /// Attach the column a field failure came from
    pub fn in_column(self, column: impl Into<String>, index: usize) -> Self {
        Self::Column {
            column: column.into(),
            index,
            source: Box::new(self),
        }
    }

    /// The underlying field failure, looking through column context
    pub fn root(&self) -> &ExtractError {
        match self {
            Self::Column { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
