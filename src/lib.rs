//! Field Extract Library
//!
//! Typed value extraction for fields of delimited text records. A tokenizer
//! hands over one field as a `(buffer, offset, length)` span of characters;
//! an extractor turns that span into an integer, float, boolean, character,
//! string, or a delimiter-separated array of these.
//!
//! This library provides:
//! - Integer parsing by digit arithmetic, with no temporary strings
//! - Checked narrowing to 8, 16 and 32 bit integers
//! - Exact, locale-independent boolean matching
//! - Array extraction on a configurable element delimiter
//! - A registry resolving case-insensitive type names to extractors
//! - Column schemas binding a `name:TYPE` header to extractors
//!
//! ## Usage
//!
//! ```rust
//! use field_extract::{ExtractorRegistry, Value};
//! use field_extract::extractors::Extractor;
//!
//! # fn example() -> field_extract::Result<()> {
//! let registry = ExtractorRegistry::build(';');
//! let line: Vec<char> = "42,true,1;2;3".chars().collect();
//!
//! // Direct access when the type is known statically
//! assert_eq!(registry.int().extract(&line, 0, 2)?, 42);
//!
//! // Name lookup when the type comes from a schema
//! let scores = registry.lookup("int[]")?;
//! assert_eq!(scores.extract(&line, 8, 5)?, Value::IntArray(vec![1, 2, 3]));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod extractors;
pub mod models;
pub mod primitives;
pub mod registry;
pub mod schema;
pub mod stats;

// Re-export commonly used types
pub use config::ExtractorConfig;
pub use error::{ExtractError, Result};
pub use extractors::{AnyExtractor, Extractor};
pub use models::{ExtractorKind, Value};
pub use registry::ExtractorRegistry;
pub use schema::{Column, ColumnSchema};
pub use stats::RunStats;
