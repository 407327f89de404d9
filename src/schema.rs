//! Column schema binding type names to extractors.
//!
//! A schema header lists the columns of a record as `name:TYPE` entries,
//! for example `id:LONG,name,tags:String[]`. A column without a type is a
//! `STRING` column. Binding happens once, so per-record extraction does no
//! name lookups.

use std::collections::HashSet;

use tracing::trace;

use crate::constants::{SCHEMA_TYPE_SEPARATOR, scalar_names};
use crate::error::{ExtractError, Result};
use crate::extractors::AnyExtractor;
use crate::models::Value;
use crate::registry::ExtractorRegistry;

/// One named column and the extractor bound to it
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub extractor: AnyExtractor,
}

/// Ordered columns of a record, each bound to its extractor
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSchema {
    columns: Vec<Column>,
}

impl ColumnSchema {
    /// Parse a header of `field_delimiter` separated `name:TYPE` entries
    pub fn parse(
        header: &str,
        field_delimiter: char,
        registry: &ExtractorRegistry,
    ) -> Result<Self> {
        if header.trim().is_empty() {
            return Err(ExtractError::schema("header is empty"));
        }

        let entries: Vec<(&str, &str)> = header
            .split(field_delimiter)
            .map(|entry| match entry.split_once(SCHEMA_TYPE_SEPARATOR) {
                Some((name, type_name)) => (name.trim(), type_name.trim()),
                None => (entry.trim(), scalar_names::STRING),
            })
            .collect();

        Self::bind(&entries, registry)
    }

    /// Bind `(name, type)` pairs to extractors from `registry`
    pub fn bind(entries: &[(&str, &str)], registry: &ExtractorRegistry) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut columns = Vec::with_capacity(entries.len());

        for (index, &(name, type_name)) in entries.iter().enumerate() {
            if name.is_empty() {
                return Err(ExtractError::schema(format!(
                    "column {} has no name",
                    index
                )));
            }
            if !seen.insert(name) {
                return Err(ExtractError::schema(format!(
                    "column '{}' is declared more than once",
                    name
                )));
            }

            let extractor = *registry
                .lookup(type_name)
                .map_err(|error| error.in_column(name, index))?;
            trace!("Bound column {} '{}' to {}", index, name, extractor.name());

            columns.push(Column {
                name: name.to_string(),
                extractor,
            });
        }

        Ok(Self { columns })
    }

    /// Extract every field of one record
    ///
    /// `spans` holds one `(offset, length)` pair into `data` per column.
    pub fn extract_record(&self, data: &[char], spans: &[(usize, usize)]) -> Result<Vec<Value>> {
        if spans.len() != self.columns.len() {
            return Err(ExtractError::FieldCount {
                expected: self.columns.len(),
                found: spans.len(),
            });
        }

        self.columns
            .iter()
            .zip(spans)
            .enumerate()
            .map(|(index, (column, &(offset, length)))| {
                column
                    .extractor
                    .extract(data, offset, length)
                    .map_err(|error| error.in_column(&column.name, index))
            })
            .collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Get the number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
