//! Extraction statistics for an inspection run

use serde::{Deserialize, Serialize};

use crate::constants::MAX_RECORDED_ERRORS;

/// Counts of records seen, extracted and rejected
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    /// Total number of data records encountered
    pub total_records: usize,

    /// Records whose every field extracted successfully
    pub records_extracted: usize,

    /// Records rejected because a field failed
    pub records_failed: usize,

    /// First failure messages, prefixed with their line number
    pub errors: Vec<String>,
}

impl RunStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self) {
        self.total_records += 1;
        self.records_extracted += 1;
    }

    pub fn record_failure(&mut self, line_number: usize, message: impl Into<String>) {
        self.total_records += 1;
        self.records_failed += 1;
        if self.errors.len() < MAX_RECORDED_ERRORS {
            self.errors
                .push(format!("line {}: {}", line_number, message.into()));
        }
    }

    /// Failures counted but not kept in `errors`
    pub fn unrecorded_failures(&self) -> usize {
        self.records_failed - self.errors.len()
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.records_extracted as f64 / self.total_records as f64) * 100.0
        }
    }

    pub fn has_failures(&self) -> bool {
        self.records_failed > 0
    }
}
