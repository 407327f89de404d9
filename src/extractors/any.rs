//! Type-erased extractor over the closed set of kinds

use super::Extractor;
use super::array::{
    BooleanArrayExtractor, ByteArrayExtractor, DoubleArrayExtractor, FloatArrayExtractor,
    IntArrayExtractor, LongArrayExtractor, ShortArrayExtractor, StringArrayExtractor,
};
use super::scalar::{
    BooleanExtractor, ByteExtractor, CharExtractor, DoubleExtractor, FloatExtractor,
    IntExtractor, LongExtractor, ShortExtractor, StringExtractor,
};
use crate::error::Result;
use crate::models::{ExtractorKind, Value};
use crate::primitives::span;

macro_rules! any_extractor {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        /// Any extractor a registry can hand out, producing a [`Value`]
        ///
        /// Variant names line up with [`ExtractorKind`] and [`Value`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum AnyExtractor {
            $($variant($ty),)*
        }

        impl AnyExtractor {
            pub fn kind(&self) -> ExtractorKind {
                match self {
                    $(AnyExtractor::$variant(_) => ExtractorKind::$variant,)*
                }
            }

            /// Name as written in schemas (`"INT"`, `"int[]"`)
            pub fn name(&self) -> &'static str {
                match self {
                    $(AnyExtractor::$variant(extractor) => extractor.name(),)*
                }
            }

            /// Convert an already-resolved field
            pub fn extract_field(&self, field: &[char]) -> Result<Value> {
                match self {
                    $(AnyExtractor::$variant(extractor) => {
                        extractor.extract_field(field).map(Value::$variant)
                    })*
                }
            }
        }

        $(
            impl From<$ty> for AnyExtractor {
                fn from(extractor: $ty) -> Self {
                    AnyExtractor::$variant(extractor)
                }
            }
        )*
    };
}

any_extractor!(
    String(StringExtractor),
    Long(LongExtractor),
    Int(IntExtractor),
    Short(ShortExtractor),
    Byte(ByteExtractor),
    Boolean(BooleanExtractor),
    Char(CharExtractor),
    Float(FloatExtractor),
    Double(DoubleExtractor),
    StringArray(StringArrayExtractor),
    BooleanArray(BooleanArrayExtractor),
    ByteArray(ByteArrayExtractor),
    ShortArray(ShortArrayExtractor),
    IntArray(IntArrayExtractor),
    LongArray(LongArrayExtractor),
    FloatArray(FloatArrayExtractor),
    DoubleArray(DoubleArrayExtractor),
);

impl AnyExtractor {
    /// Build the extractor for `kind`; array kinds are bound to `array_delimiter`
    pub fn new(kind: ExtractorKind, array_delimiter: char) -> Self {
        match kind {
            ExtractorKind::String => StringExtractor.into(),
            ExtractorKind::Long => LongExtractor.into(),
            ExtractorKind::Int => IntExtractor.into(),
            ExtractorKind::Short => ShortExtractor.into(),
            ExtractorKind::Byte => ByteExtractor.into(),
            ExtractorKind::Boolean => BooleanExtractor.into(),
            ExtractorKind::Char => CharExtractor.into(),
            ExtractorKind::Float => FloatExtractor.into(),
            ExtractorKind::Double => DoubleExtractor.into(),
            ExtractorKind::StringArray => StringArrayExtractor::new(array_delimiter).into(),
            ExtractorKind::BooleanArray => BooleanArrayExtractor::new(array_delimiter).into(),
            ExtractorKind::ByteArray => ByteArrayExtractor::new(array_delimiter).into(),
            ExtractorKind::ShortArray => ShortArrayExtractor::new(array_delimiter).into(),
            ExtractorKind::IntArray => IntArrayExtractor::new(array_delimiter).into(),
            ExtractorKind::LongArray => LongArrayExtractor::new(array_delimiter).into(),
            ExtractorKind::FloatArray => FloatArrayExtractor::new(array_delimiter).into(),
            ExtractorKind::DoubleArray => DoubleArrayExtractor::new(array_delimiter).into(),
        }
    }

    /// Delimiter of array extractors, `None` for scalars
    pub fn array_delimiter(&self) -> Option<char> {
        match self {
            AnyExtractor::StringArray(e) => Some(e.delimiter()),
            AnyExtractor::BooleanArray(e) => Some(e.delimiter()),
            AnyExtractor::ByteArray(e) => Some(e.delimiter()),
            AnyExtractor::ShortArray(e) => Some(e.delimiter()),
            AnyExtractor::IntArray(e) => Some(e.delimiter()),
            AnyExtractor::LongArray(e) => Some(e.delimiter()),
            AnyExtractor::FloatArray(e) => Some(e.delimiter()),
            AnyExtractor::DoubleArray(e) => Some(e.delimiter()),
            _ => None,
        }
    }

    /// Convert `length` characters of `data` starting at `offset`
    pub fn extract(&self, data: &[char], offset: usize, length: usize) -> Result<Value> {
        self.extract_field(span(data, offset, length)?)
    }

    /// Convert a whole string; decodes it to characters first
    pub fn extract_str(&self, text: &str) -> Result<Value> {
        let field: Vec<char> = text.chars().collect();
        self.extract_field(&field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;

    #[test]
    fn test_new_matches_kind() {
        for kind in ExtractorKind::ALL {
            let extractor = AnyExtractor::new(kind, ';');
            assert_eq!(extractor.kind(), kind);
            assert_eq!(extractor.name(), kind.name());
            assert_eq!(extractor.array_delimiter().is_some(), kind.is_array());
        }
    }

    #[test]
    fn test_extract_produces_matching_value() {
        let int = AnyExtractor::new(ExtractorKind::Int, ';');
        assert_eq!(int.extract_str("17").unwrap(), Value::Int(17));

        let longs = AnyExtractor::new(ExtractorKind::LongArray, ';');
        assert_eq!(
            longs.extract_str("1;-2").unwrap(),
            Value::LongArray(vec![1, -2])
        );

        let chr = AnyExtractor::new(ExtractorKind::Char, ';');
        assert_eq!(chr.extract_str("ab"), Err(ExtractError::invalid_length(2)));
    }

    #[test]
    fn test_every_kind_value_round_trips_kind() {
        let inputs = [
            (ExtractorKind::String, "x"),
            (ExtractorKind::Long, "1"),
            (ExtractorKind::Int, "1"),
            (ExtractorKind::Short, "1"),
            (ExtractorKind::Byte, "1"),
            (ExtractorKind::Boolean, "true"),
            (ExtractorKind::Char, "c"),
            (ExtractorKind::Float, "1.5"),
            (ExtractorKind::Double, "1.5"),
            (ExtractorKind::StringArray, "a;b"),
            (ExtractorKind::BooleanArray, "true;false"),
            (ExtractorKind::ByteArray, "1;2"),
            (ExtractorKind::ShortArray, "1;2"),
            (ExtractorKind::IntArray, "1;2"),
            (ExtractorKind::LongArray, "1;2"),
            (ExtractorKind::FloatArray, "1;2"),
            (ExtractorKind::DoubleArray, "1;2"),
        ];
        for (kind, input) in inputs {
            let value = AnyExtractor::new(kind, ';').extract_str(input).unwrap();
            assert_eq!(value.kind(), kind);
        }
    }

    #[test]
    fn test_span_out_of_bounds() {
        let data: Vec<char> = "12".chars().collect();
        let long = AnyExtractor::new(ExtractorKind::Long, ';');
        assert!(matches!(
            long.extract(&data, 1, 5),
            Err(ExtractError::SpanOutOfBounds { .. })
        ));
    }
}
