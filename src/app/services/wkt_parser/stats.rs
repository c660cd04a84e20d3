//! Parsing statistics and result structures for WKT corpus processing

use super::templates::CrsTemplate;
use crate::app::models::DatabaseRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parsing result with records, failures and statistics
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Successfully classified records in corpus order
    pub records: Vec<DatabaseRecord>,

    /// Blocks no template matched, in corpus order
    pub failures: Vec<ClassificationFailure>,

    /// Parsing statistics
    pub stats: ParseStats,
}

impl ParseResult {
    /// Whether every non-empty block produced a record
    pub fn is_fully_classified(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A block that matched none of the eight templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationFailure {
    /// Position of the block in the corpus split sequence
    pub index: usize,

    /// Offending block text as it appears in the corpus
    pub raw: String,
}

/// Corpus parsing statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Segments produced by splitting the corpus, empty ones included
    pub total_blocks: usize,

    /// Segments skipped because they normalized to nothing
    pub empty_blocks: usize,

    /// Records successfully extracted
    pub records_parsed: usize,

    /// Non-empty blocks that matched no template
    pub classification_failures: usize,

    /// Records per matched template
    pub per_template: BTreeMap<CrsTemplate, usize>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_blocks: 0,
            empty_blocks: 0,
            records_parsed: 0,
            classification_failures: 0,
            per_template: BTreeMap::new(),
        }
    }

    /// Count a record produced by `template`
    pub fn record_match(&mut self, template: CrsTemplate) {
        self.records_parsed += 1;
        *self.per_template.entry(template).or_insert(0) += 1;
    }

    /// Count a classification failure
    pub fn record_failure(&mut self) {
        self.classification_failures += 1;
    }

    /// Blocks that were handed to the classifier
    pub fn non_empty_blocks(&self) -> usize {
        self.total_blocks - self.empty_blocks
    }

    /// Records for one template
    pub fn count_for(&self, template: CrsTemplate) -> usize {
        self.per_template.get(&template).copied().unwrap_or(0)
    }

    /// Calculate success rate as a percentage of non-empty blocks
    pub fn success_rate(&self) -> f64 {
        let candidates = self.non_empty_blocks();
        if candidates == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / candidates as f64) * 100.0
        }
    }

    /// Every non-empty block is accounted for as a record or a failure
    pub fn is_complete(&self) -> bool {
        self.records_parsed + self.classification_failures == self.non_empty_blocks()
    }

    /// Get a summary string of the parse
    pub fn summary(&self) -> String {
        format!(
            "Parsed {} records from {} blocks ({} failed, {} empty, {:.1}% success)",
            self.records_parsed,
            self.total_blocks,
            self.classification_failures,
            self.empty_blocks,
            self.success_rate()
        )
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
