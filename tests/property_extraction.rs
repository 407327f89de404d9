//! Property tests for integer parsing and array splitting

use field_extract::extractors::{
    BooleanArrayExtractor, ByteArrayExtractor, DoubleArrayExtractor, Extractor,
    FloatArrayExtractor, IntArrayExtractor, LongArrayExtractor, LongExtractor,
    ShortArrayExtractor, StringArrayExtractor,
};
use field_extract::primitives::parse_i64;
use proptest::prelude::*;
use std::fmt::Display;

fn join<T: Display>(items: &[T], delimiter: char) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(&delimiter.to_string())
}

proptest! {
    #[test]
    fn parse_i64_matches_std(value in any::<i64>()) {
        let field: Vec<char> = value.to_string().chars().collect();
        prop_assert_eq!(parse_i64(&field).unwrap(), value);
    }

    #[test]
    fn parse_i64_accepts_leading_zeros(digits in "-?[0-9]{1,18}") {
        let expected: i64 = digits.parse().unwrap();
        prop_assert_eq!(LongExtractor.extract_str(&digits).unwrap(), expected);
    }

    #[test]
    fn parse_i64_rejects_non_digits(prefix in "[0-9]{0,5}", bad in "[a-zA-Z .+]", suffix in "[0-9]{0,5}") {
        let text = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(LongExtractor.extract_str(&text).is_err());
    }

    #[test]
    fn string_array_split_join_round_trip(parts in prop::collection::vec("[a-z0-9 ]{1,8}", 1..10)) {
        let text = parts.join(";");
        let values = StringArrayExtractor::new(';').extract_str(&text).unwrap();
        prop_assert_eq!(values.join(";"), text);
        prop_assert_eq!(values, parts);
    }

    #[test]
    fn int_array_split_join_round_trip(numbers in prop::collection::vec(any::<i32>(), 1..10)) {
        let text = join(&numbers, '|');
        let values = IntArrayExtractor::new('|').extract_str(&text).unwrap();
        prop_assert_eq!(values, numbers);
    }

    #[test]
    fn long_array_split_join_round_trip(numbers in prop::collection::vec(any::<i64>(), 1..10)) {
        let text = join(&numbers, ';');
        let values = LongArrayExtractor::new(';').extract_str(&text).unwrap();
        prop_assert_eq!(values, numbers);
    }

    #[test]
    fn short_array_split_join_round_trip(numbers in prop::collection::vec(any::<i16>(), 1..10)) {
        let text = join(&numbers, ':');
        let values = ShortArrayExtractor::new(':').extract_str(&text).unwrap();
        prop_assert_eq!(values, numbers);
    }

    #[test]
    fn byte_array_split_join_round_trip(numbers in prop::collection::vec(any::<i8>(), 1..10)) {
        let text = join(&numbers, '/');
        let values = ByteArrayExtractor::new('/').extract_str(&text).unwrap();
        prop_assert_eq!(values, numbers);
    }

    #[test]
    fn boolean_array_split_join_round_trip(flags in prop::collection::vec(any::<bool>(), 1..10)) {
        let text = join(&flags, ';');
        let values = BooleanArrayExtractor::new(';').extract_str(&text).unwrap();
        prop_assert_eq!(values, flags);
    }

    #[test]
    fn double_array_split_join_round_trip(numbers in prop::collection::vec(-1.0e12f64..1.0e12, 1..10)) {
        let text = join(&numbers, ';');
        let values = DoubleArrayExtractor::new(';').extract_str(&text).unwrap();
        prop_assert_eq!(values, numbers);
    }

    #[test]
    fn float_array_split_join_round_trip(numbers in prop::collection::vec(-1.0e6f32..1.0e6, 1..10)) {
        let text = join(&numbers, ';');
        let values = FloatArrayExtractor::new(';').extract_str(&text).unwrap();
        prop_assert_eq!(values, numbers);
    }

    #[test]
    fn narrowing_array_rejects_out_of_range(
        small in prop::collection::vec(any::<i8>(), 0..5),
        wide in (i8::MAX as i64 + 1)..=i64::from(i32::MAX),
    ) {
        let mut text = join(&small, ';');
        if !text.is_empty() {
            text.push(';');
        }
        text.push_str(&wide.to_string());
        prop_assert!(ByteArrayExtractor::new(';').extract_str(&text).is_err());
    }

    #[test]
    fn element_count_is_delimiters_plus_one(text in "[a;]{1,20}") {
        let values = StringArrayExtractor::new(';').extract_str(&text).unwrap();
        let delimiters = text.chars().filter(|&ch| ch == ';').count();
        prop_assert_eq!(values.len(), delimiters + 1);
    }
}
