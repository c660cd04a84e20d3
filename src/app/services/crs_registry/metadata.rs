//! Registry metadata and load statistics
//!
//! This module defines the data structures reporting how a registry was
//! populated and what it currently holds.

use crate::app::services::wkt_parser::ParseStats;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Statistics about a registry rebuild
#[derive(Debug, Clone, Serialize)]
pub struct LoadStats {
    /// Statistics of the corpus parse feeding the rebuild
    pub parse: ParseStats,

    /// Rows stored in the registry
    pub rows_inserted: usize,

    /// Records whose identifier was already present
    pub duplicates: usize,

    /// Records that could not be turned into rows
    pub rejected_records: usize,

    /// Time taken to rebuild the registry
    pub load_duration: std::time::Duration,

    /// Errors encountered while converting records
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self {
            parse: ParseStats::new(),
            rows_inserted: 0,
            duplicates: 0,
            rejected_records: 0,
            load_duration: std::time::Duration::ZERO,
            errors: Vec::new(),
        }
    }

    /// Calculate the loading rate in rows per second
    pub fn loading_rate(&self) -> f64 {
        if self.load_duration.is_zero() {
            0.0
        } else {
            self.rows_inserted as f64 / self.load_duration.as_secs_f64()
        }
    }

    /// Check if any record was dropped between parsing and storage
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || self.parse.classification_failures > 0
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} WKT rows from {} records ({} duplicates, {} rejected, {} unclassified) in {:.2}s",
            self.rows_inserted,
            self.parse.records_parsed,
            self.duplicates,
            self.rejected_records,
            self.parse.classification_failures,
            self.load_duration.as_secs_f64()
        )
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata about the registry
#[derive(Debug, Clone, Serialize)]
pub struct RegistryMetadata {
    /// Corpus the registry was loaded from
    pub corpus_path: Option<PathBuf>,

    /// Total number of rows
    pub row_count: usize,

    /// Number of distinct IAU versions
    pub version_count: usize,

    /// Number of distinct solar bodies
    pub solar_body_count: usize,

    /// When the registry was last rebuilt
    pub loaded_at: DateTime<Utc>,
}

impl RegistryMetadata {
    /// Get the age of the registry since loading
    pub fn age(&self) -> chrono::Duration {
        Utc::now() - self.loaded_at
    }

    /// Get a summary string of the registry
    pub fn summary(&self) -> String {
        format!(
            "Registry with {} WKTs for {} solar bodies across {} IAU versions (loaded {})",
            self.row_count,
            self.solar_body_count,
            self.version_count,
            self.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}
