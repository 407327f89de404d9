//! Constants for field extraction
//!
//! This module contains the registry type names, literal tables and default
//! delimiters used throughout the extraction engine.

// =============================================================================
// Scalar Type Names
// =============================================================================

/// Registry names of the scalar extractors, as they appear in column headers
pub mod scalar_names {
    pub const STRING: &str = "STRING";
    pub const LONG: &str = "LONG";
    pub const INT: &str = "INT";
    pub const SHORT: &str = "SHORT";
    pub const BYTE: &str = "BYTE";
    pub const BOOLEAN: &str = "BOOLEAN";
    pub const CHAR: &str = "CHAR";
    pub const FLOAT: &str = "FLOAT";
    pub const DOUBLE: &str = "DOUBLE";

    /// Every scalar name, in registry construction order
    pub const ALL: &[&str] = &[STRING, LONG, INT, SHORT, BYTE, BOOLEAN, CHAR, FLOAT, DOUBLE];
}

// =============================================================================
// Array Type Names
// =============================================================================

/// Display names of the array extractors (element simple name + `[]`)
///
/// Registry keys are the upper-cased form; lookups are case-insensitive so
/// both `int[]` and `INT[]` resolve to the same entry.
pub mod array_names {
    pub const STRING: &str = "String[]";
    pub const BOOLEAN: &str = "boolean[]";
    pub const BYTE: &str = "byte[]";
    pub const SHORT: &str = "short[]";
    pub const INT: &str = "int[]";
    pub const LONG: &str = "long[]";
    pub const FLOAT: &str = "float[]";
    pub const DOUBLE: &str = "double[]";

    /// Every array name, in registry construction order
    pub const ALL: &[&str] = &[STRING, BOOLEAN, BYTE, SHORT, INT, LONG, FLOAT, DOUBLE];
}

/// Number of extractors every registry holds (9 scalar + 8 array)
pub const EXTRACTOR_COUNT: usize = scalar_names::ALL.len() + array_names::ALL.len();

/// Failure messages kept by run statistics; later failures are only counted
pub const MAX_RECORDED_ERRORS: usize = 100;

// =============================================================================
// Literals
// =============================================================================

/// The only text that extracts as boolean `true`
pub const TRUE_LITERAL: [char; 4] = ['t', 'r', 'u', 'e'];

/// Sign prefix accepted in front of integer digits
pub const NEGATIVE_SIGN: char = '-';

// =============================================================================
// Delimiter Defaults
// =============================================================================

/// Default separator between array elements inside one field
pub const DEFAULT_ARRAY_DELIMITER: char = ';';

/// Default separator between fields of a record
pub const DEFAULT_FIELD_DELIMITER: char = ',';

/// Separator between column name and type in a schema header entry
pub const SCHEMA_TYPE_SEPARATOR: char = ':';
