//! Scalar extractors, one per field type
//!
//! All of these are zero-sized. Integer kinds share the digit parser and
//! differ only in the narrowing applied afterwards.

use super::{ArrayElement, Extractor};
use crate::constants::{array_names, scalar_names};
use crate::error::{ExtractError, Result};
use crate::primitives::{narrow, parse_bool, parse_f32, parse_f64, parse_i64};

/// Copies the field into a new `String`; never fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StringExtractor;

impl Extractor for StringExtractor {
    type Value = String;

    fn name(&self) -> &'static str {
        scalar_names::STRING
    }

    fn extract_field(&self, field: &[char]) -> Result<String> {
        Ok(field.iter().collect())
    }
}

/// Parses a 64-bit signed integer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LongExtractor;

impl Extractor for LongExtractor {
    type Value = i64;

    fn name(&self) -> &'static str {
        scalar_names::LONG
    }

    #[inline]
    fn extract_field(&self, field: &[char]) -> Result<i64> {
        parse_i64(field)
    }
}

macro_rules! narrowing_extractor {
    ($(#[$doc:meta])* $name:ident => $ty:ty, $registry_name:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Extractor for $name {
            type Value = $ty;

            fn name(&self) -> &'static str {
                $registry_name
            }

            #[inline]
            fn extract_field(&self, field: &[char]) -> Result<$ty> {
                narrow(parse_i64(field)?)
            }
        }
    };
}

narrowing_extractor!(
    /// Parses a 32-bit signed integer, rejecting values that do not fit
    IntExtractor => i32, scalar_names::INT
);
narrowing_extractor!(
    /// Parses a 16-bit signed integer, rejecting values that do not fit
    ShortExtractor => i16, scalar_names::SHORT
);
narrowing_extractor!(
    /// Parses an 8-bit signed integer, rejecting values that do not fit
    ByteExtractor => i8, scalar_names::BYTE
);

/// `true` for the exact literal `true`, `false` for anything else
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BooleanExtractor;

impl Extractor for BooleanExtractor {
    type Value = bool;

    fn name(&self) -> &'static str {
        scalar_names::BOOLEAN
    }

    #[inline]
    fn extract_field(&self, field: &[char]) -> Result<bool> {
        Ok(parse_bool(field))
    }
}

/// Extracts exactly one character
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CharExtractor;

impl Extractor for CharExtractor {
    type Value = char;

    fn name(&self) -> &'static str {
        scalar_names::CHAR
    }

    fn extract_field(&self, field: &[char]) -> Result<char> {
        match field {
            [single] => Ok(*single),
            _ => Err(ExtractError::invalid_length(field.len())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FloatExtractor;

impl Extractor for FloatExtractor {
    type Value = f32;

    fn name(&self) -> &'static str {
        scalar_names::FLOAT
    }

    fn extract_field(&self, field: &[char]) -> Result<f32> {
        parse_f32(field)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DoubleExtractor;

impl Extractor for DoubleExtractor {
    type Value = f64;

    fn name(&self) -> &'static str {
        scalar_names::DOUBLE
    }

    fn extract_field(&self, field: &[char]) -> Result<f64> {
        parse_f64(field)
    }
}

// Char is deliberately absent: there is no char array kind
impl ArrayElement for StringExtractor {
    const ARRAY_NAME: &'static str = array_names::STRING;
}
impl ArrayElement for BooleanExtractor {
    const ARRAY_NAME: &'static str = array_names::BOOLEAN;
}
impl ArrayElement for ByteExtractor {
    const ARRAY_NAME: &'static str = array_names::BYTE;
}
impl ArrayElement for ShortExtractor {
    const ARRAY_NAME: &'static str = array_names::SHORT;
}
impl ArrayElement for IntExtractor {
    const ARRAY_NAME: &'static str = array_names::INT;
}
impl ArrayElement for LongExtractor {
    const ARRAY_NAME: &'static str = array_names::LONG;
}
impl ArrayElement for FloatExtractor {
    const ARRAY_NAME: &'static str = array_names::FLOAT;
}
impl ArrayElement for DoubleExtractor {
    const ARRAY_NAME: &'static str = array_names::DOUBLE;
}
