//! Core data types for field extraction.
//!
//! Defines the closed set of extractor kinds and the type-erased value
//! produced by name-based extraction.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{array_names, scalar_names};

/// Every kind of extractor a registry holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtractorKind {
    String,
    Long,
    Int,
    Short,
    Byte,
    Boolean,
    Char,
    Float,
    Double,
    StringArray,
    BooleanArray,
    ByteArray,
    ShortArray,
    IntArray,
    LongArray,
    FloatArray,
    DoubleArray,
}

impl ExtractorKind {
    /// All kinds in registry construction order, scalars first
    pub const ALL: [ExtractorKind; 17] = [
        ExtractorKind::String,
        ExtractorKind::Long,
        ExtractorKind::Int,
        ExtractorKind::Short,
        ExtractorKind::Byte,
        ExtractorKind::Boolean,
        ExtractorKind::Char,
        ExtractorKind::Float,
        ExtractorKind::Double,
        ExtractorKind::StringArray,
        ExtractorKind::BooleanArray,
        ExtractorKind::ByteArray,
        ExtractorKind::ShortArray,
        ExtractorKind::IntArray,
        ExtractorKind::LongArray,
        ExtractorKind::FloatArray,
        ExtractorKind::DoubleArray,
    ];

    /// Name as written in schemas (`"INT"`, `"int[]"`)
    pub fn name(&self) -> &'static str {
        match self {
            ExtractorKind::String => scalar_names::STRING,
            ExtractorKind::Long => scalar_names::LONG,
            ExtractorKind::Int => scalar_names::INT,
            ExtractorKind::Short => scalar_names::SHORT,
            ExtractorKind::Byte => scalar_names::BYTE,
            ExtractorKind::Boolean => scalar_names::BOOLEAN,
            ExtractorKind::Char => scalar_names::CHAR,
            ExtractorKind::Float => scalar_names::FLOAT,
            ExtractorKind::Double => scalar_names::DOUBLE,
            ExtractorKind::StringArray => array_names::STRING,
            ExtractorKind::BooleanArray => array_names::BOOLEAN,
            ExtractorKind::ByteArray => array_names::BYTE,
            ExtractorKind::ShortArray => array_names::SHORT,
            ExtractorKind::IntArray => array_names::INT,
            ExtractorKind::LongArray => array_names::LONG,
            ExtractorKind::FloatArray => array_names::FLOAT,
            ExtractorKind::DoubleArray => array_names::DOUBLE,
        }
    }

    /// Upper-cased name used as the registry key
    pub fn registry_key(&self) -> String {
        self.name().to_uppercase()
    }

    pub fn is_array(&self) -> bool {
        self.element_kind().is_some()
    }

    /// Scalar kind of the elements, for array kinds
    pub fn element_kind(&self) -> Option<ExtractorKind> {
        match self {
            ExtractorKind::StringArray => Some(ExtractorKind::String),
            ExtractorKind::BooleanArray => Some(ExtractorKind::Boolean),
            ExtractorKind::ByteArray => Some(ExtractorKind::Byte),
            ExtractorKind::ShortArray => Some(ExtractorKind::Short),
            ExtractorKind::IntArray => Some(ExtractorKind::Int),
            ExtractorKind::LongArray => Some(ExtractorKind::Long),
            ExtractorKind::FloatArray => Some(ExtractorKind::Float),
            ExtractorKind::DoubleArray => Some(ExtractorKind::Double),
            _ => None,
        }
    }
}

impl fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed value produced by a type-erased extractor
///
/// Serialized with its kind as the tag (`{"Char":"x"}`), so values whose
/// payloads look alike, such as `Char` and `String`, stay distinct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    String(String),
    Long(i64),
    Int(i32),
    Short(i16),
    Byte(i8),
    Boolean(bool),
    Char(char),
    Float(f32),
    Double(f64),
    StringArray(Vec<String>),
    BooleanArray(Vec<bool>),
    ByteArray(Vec<i8>),
    ShortArray(Vec<i16>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
    FloatArray(Vec<f32>),
    DoubleArray(Vec<f64>),
}

impl Value {
    /// Kind of extractor that produces this variant
    pub fn kind(&self) -> ExtractorKind {
        match self {
            Value::String(_) => ExtractorKind::String,
            Value::Long(_) => ExtractorKind::Long,
            Value::Int(_) => ExtractorKind::Int,
            Value::Short(_) => ExtractorKind::Short,
            Value::Byte(_) => ExtractorKind::Byte,
            Value::Boolean(_) => ExtractorKind::Boolean,
            Value::Char(_) => ExtractorKind::Char,
            Value::Float(_) => ExtractorKind::Float,
            Value::Double(_) => ExtractorKind::Double,
            Value::StringArray(_) => ExtractorKind::StringArray,
            Value::BooleanArray(_) => ExtractorKind::BooleanArray,
            Value::ByteArray(_) => ExtractorKind::ByteArray,
            Value::ShortArray(_) => ExtractorKind::ShortArray,
            Value::IntArray(_) => ExtractorKind::IntArray,
            Value::LongArray(_) => ExtractorKind::LongArray,
            Value::FloatArray(_) => ExtractorKind::FloatArray,
            Value::DoubleArray(_) => ExtractorKind::DoubleArray,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Number of elements for arrays, `None` for scalars
    pub fn array_len(&self) -> Option<usize> {
        match self {
            Value::StringArray(v) => Some(v.len()),
            Value::BooleanArray(v) => Some(v.len()),
            Value::ByteArray(v) => Some(v.len()),
            Value::ShortArray(v) => Some(v.len()),
            Value::IntArray(v) => Some(v.len()),
            Value::LongArray(v) => Some(v.len()),
            Value::FloatArray(v) => Some(v.len()),
            Value::DoubleArray(v) => Some(v.len()),
            _ => None,
        }
    }
}

fn write_array<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(v) => write!(f, "{:?}", v),
            Value::Long(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Short(v) => write!(f, "{}", v),
            Value::Byte(v) => write!(f, "{}", v),
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Char(v) => write!(f, "{:?}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::StringArray(v) => {
                let quoted: Vec<String> = v.iter().map(|s| format!("{:?}", s)).collect();
                write_array(f, &quoted)
            }
            Value::BooleanArray(v) => write_array(f, v),
            Value::ByteArray(v) => write_array(f, v),
            Value::ShortArray(v) => write_array(f, v),
            Value::IntArray(v) => write_array(f, v),
            Value::LongArray(v) => write_array(f, v),
            Value::FloatArray(v) => write_array(f, v),
            Value::DoubleArray(v) => write_array(f, v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_and_keys() {
        assert_eq!(ExtractorKind::Int.name(), "INT");
        assert_eq!(ExtractorKind::IntArray.name(), "int[]");
        assert_eq!(ExtractorKind::IntArray.registry_key(), "INT[]");
        assert_eq!(ExtractorKind::StringArray.registry_key(), "STRING[]");
    }

    #[test]
    fn test_array_kinds() {
        let arrays: Vec<_> = ExtractorKind::ALL
            .iter()
            .filter(|kind| kind.is_array())
            .collect();
        assert_eq!(arrays.len(), 8);
        assert!(!ExtractorKind::Char.is_array());
        assert_eq!(
            ExtractorKind::DoubleArray.element_kind(),
            Some(ExtractorKind::Double)
        );
        // There is no array of chars
        assert!(
            ExtractorKind::ALL
                .iter()
                .all(|kind| kind.element_kind() != Some(ExtractorKind::Char))
        );
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::String("a b".to_string()).to_string(), "\"a b\"");
        assert_eq!(Value::IntArray(vec![1, 2, 3]).to_string(), "[1, 2, 3]");
        assert_eq!(
            Value::StringArray(vec!["x".to_string(), String::new()]).to_string(),
            "[\"x\", \"\"]"
        );
        assert_eq!(Value::LongArray(Vec::new()).to_string(), "[]");
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::Char('c').type_name(), "CHAR");
        assert_eq!(Value::BooleanArray(vec![true]).type_name(), "boolean[]");
        assert_eq!(Value::BooleanArray(vec![true]).array_len(), Some(1));
        assert_eq!(Value::Double(1.0).array_len(), None);
    }

    #[test]
    fn test_serde_serialization() {
        let values = vec![
            Value::Char('x'),
            Value::String("x".to_string()),
            Value::IntArray(vec![1, 2]),
            Value::Byte(-3),
        ];

        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(
            json,
            r#"[{"Char":"x"},{"String":"x"},{"IntArray":[1,2]},{"Byte":-3}]"#
        );

        let deserialized: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, values);
        assert_eq!(deserialized[0].kind(), ExtractorKind::Char);
        assert_eq!(deserialized[1].kind(), ExtractorKind::String);

        let kind_json = serde_json::to_string(&ExtractorKind::LongArray).unwrap();
        let kind: ExtractorKind = serde_json::from_str(&kind_json).unwrap();
        assert_eq!(kind, ExtractorKind::LongArray);
    }
}
