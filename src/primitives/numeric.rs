//! Numeric field parsing
//!
//! Integers are parsed with plain digit arithmetic straight off the character
//! slice. Floats go through the standard library parser, which needs a
//! temporary `String`.

use std::num::ParseFloatError;
use std::str::FromStr;

use crate::constants::NEGATIVE_SIGN;
use crate::error::{ExtractError, Result};

/// Parse an optionally negative run of ASCII digits into an `i64`
///
/// The accumulation wraps instead of detecting overflow; magnitudes beyond
/// 64 bits are outside the supported input domain.
pub fn parse_i64(field: &[char]) -> Result<i64> {
    let (negate, digits) = match field.split_first() {
        None => return Err(ExtractError::EmptyInput),
        Some((&NEGATIVE_SIGN, rest)) => (true, rest),
        Some(_) => (false, field),
    };

    // A lone sign carries no digits at all
    if digits.is_empty() {
        return Err(ExtractError::EmptyInput);
    }

    let sign_width = usize::from(negate);
    let mut result: i64 = 0;
    for (index, &ch) in digits.iter().enumerate() {
        let value =
            digit(ch).ok_or_else(|| ExtractError::invalid_digit(ch, index + sign_width))?;
        result = result.wrapping_mul(10).wrapping_add(value);
    }

    Ok(if negate { result.wrapping_neg() } else { result })
}

#[inline]
fn digit(ch: char) -> Option<i64> {
    if ch.is_ascii_digit() {
        Some(i64::from(ch as u8 - b'0'))
    } else {
        None
    }
}

/// Parse a decimal floating point literal into an `f64`
pub fn parse_f64(field: &[char]) -> Result<f64> {
    parse_float(field)
}

/// Parse a decimal floating point literal into an `f32`
pub fn parse_f32(field: &[char]) -> Result<f32> {
    parse_float(field)
}

fn parse_float<F>(field: &[char]) -> Result<F>
where
    F: FromStr<Err = ParseFloatError>,
{
    // TODO: parse floats directly off the slice to skip this allocation
    let text: String = field.iter().collect();
    text.parse::<F>()
        .map_err(|reason| ExtractError::malformed_number(text, reason))
}
