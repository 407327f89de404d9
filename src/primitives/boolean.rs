//! Boolean literal matching

use crate::constants::TRUE_LITERAL;

/// Returns `true` only for the exact, case-sensitive text `true`
///
/// Anything else, including empty input and garbage, is `false`.
#[inline]
pub fn parse_bool(field: &[char]) -> bool {
    field == TRUE_LITERAL
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_exact_literal() {
        assert!(parse_bool(&chars("true")));
    }

    #[test]
    fn test_everything_else_is_false() {
        for input in ["True", "TRUE", "tru", "", "truee", "false", "1", " true", "yes"] {
            assert!(!parse_bool(&chars(input)), "{input:?} should be false");
        }
    }
}
