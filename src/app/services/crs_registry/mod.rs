//! In-memory CRS registry built from a parsed WKT corpus
//!
//! The registry holds one [`WktRow`] per IAU identifier, in corpus order, and
//! answers the browse/search queries of the catalogue (by version, by solar
//! body, by keyword, OGC identifiers). It is populated only through
//! [`rebuild`]: drop everything, re-insert every parsed record.

use crate::app::models::{WktId, WktRow};
use crate::app::services::wkt_parser::ParseResult;
use crate::Result;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

pub mod loader;
pub mod metadata;
pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use loader::parse_with_config;
pub use metadata::{LoadStats, RegistryMetadata};
pub use query::Page;

/// Persistence collaborator receiving parsed rows
///
/// Implementations only need to support a full reset followed by inserts;
/// there is no update or delete of individual rows.
pub trait RecordSink {
    /// Remove every stored row
    fn clear(&mut self) -> Result<()>;

    /// Store a row; returns `false` when a row with the same id already exists
    fn insert(&mut self, row: WktRow) -> Result<bool>;
}

/// Registry of WKT rows indexed by `IAU:<version>:<code>`
#[derive(Debug, Clone)]
pub struct CrsRegistry {
    /// Rows in corpus order
    pub(crate) rows: Vec<WktRow>,

    /// Position of each row in `rows`
    pub(crate) index: HashMap<WktId, usize>,

    /// Corpus the registry was loaded from, if any
    pub(crate) corpus_path: Option<PathBuf>,

    /// When the registry was last rebuilt
    pub(crate) loaded_at: DateTime<Utc>,
}

impl CrsRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
            corpus_path: None,
            loaded_at: Utc::now(),
        }
    }

    /// Number of rows in the registry
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check if an identifier is present
    pub fn contains(&self, id: &WktId) -> bool {
        self.index.contains_key(id)
    }

    /// Row by parsed identifier
    pub fn get_by_id(&self, id: &WktId) -> Option<&WktRow> {
        self.index.get(id).map(|&position| &self.rows[position])
    }

    /// Get registry metadata
    pub fn metadata(&self) -> RegistryMetadata {
        RegistryMetadata {
            corpus_path: self.corpus_path.clone(),
            row_count: self.rows.len(),
            version_count: self.versions().len(),
            solar_body_count: self.solar_bodies().len(),
            loaded_at: self.loaded_at,
        }
    }
}

impl Default for CrsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSink for CrsRegistry {
    fn clear(&mut self) -> Result<()> {
        self.rows.clear();
        self.index.clear();
        self.loaded_at = Utc::now();
        Ok(())
    }

    fn insert(&mut self, row: WktRow) -> Result<bool> {
        match self.index.entry(row.wkt_id()) {
            Entry::Vacant(e) => {
                e.insert(self.rows.len());
                self.rows.push(row);
                Ok(true)
            }
            Entry::Occupied(_) => {
                warn!("Duplicate WKT found: {}, keeping existing", row.id);
                Ok(false)
            }
        }
    }
}

/// Replace the content of `sink` with the records of a parse
///
/// Records that cannot be turned into rows are logged and counted; they
/// never abort the rebuild. Errors from the sink itself do.
pub fn rebuild<S: RecordSink>(sink: &mut S, result: &ParseResult) -> Result<LoadStats> {
    let start_time = Instant::now();
    let mut stats = LoadStats::new();
    stats.parse = result.stats.clone();

    sink.clear()?;

    for record in &result.records {
        match WktRow::try_from(record) {
            Ok(row) => {
                if sink.insert(row)? {
                    stats.rows_inserted += 1;
                } else {
                    stats.duplicates += 1;
                }
            }
            Err(e) => {
                warn!("Skipping record {} {}: {}", record.iau_code, record.iau_version, e);
                stats.rejected_records += 1;
                stats.errors.push(e.to_string());
            }
        }
    }

    stats.load_duration = start_time.elapsed();
    debug!(
        "Rebuild inserted {} rows ({} duplicates, {} rejected)",
        stats.rows_inserted, stats.duplicates, stats.rejected_records
    );
    info!("{}", stats.summary());

    Ok(stats)
}
