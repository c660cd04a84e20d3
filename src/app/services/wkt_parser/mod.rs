//! WKT corpus parser for planetary coordinate reference systems
//!
//! This module turns a corpus of blank-line-separated WKT definitions into
//! [`DatabaseRecord`]s by classifying each definition against eight fixed
//! CRS templates and extracting the template's named fields.
//!
//! ## Architecture
//!
//! - [`corpus`] - Corpus reading, block splitting and normalization
//! - [`templates`] - The eight templates, their priority order and origin conventions
//! - [`extractor`] - Field extraction from a template match
//! - [`stats`] - Parsing statistics and result structures
//! - [`parallel`] - Optional fan-out of classification over the blocking pool
//!
//! ## Usage
//!
//! ```rust
//! use planet_crs_registry::app::services::wkt_parser::WktParser;
//!
//! # fn example(corpus: &str) -> planet_crs_registry::Result<()> {
//! let parser = WktParser::new()?;
//! let result = parser.parse_corpus(corpus);
//!
//! println!("Parsed {} records from {} blocks",
//!          result.stats.records_parsed,
//!          result.stats.total_blocks);
//! # Ok(())
//! # }
//! ```

pub mod corpus;
pub mod extractor;
pub mod parallel;
pub mod stats;
pub mod templates;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use corpus::{CorpusBlocks, WktBlock, load_corpus_file, normalize_wkt, split_corpus};
pub use parallel::{block_progress_bar, parse_corpus_parallel};
pub use stats::{ClassificationFailure, ParseResult, ParseStats};
pub use templates::CrsTemplate;

use crate::app::models::DatabaseRecord;
use crate::Result;
use extractor::extract_record;
use templates::{CompiledTemplate, compile_all};
use tracing::{debug, error, info};

/// Outcome of classifying a single block
pub type BlockOutcome = std::result::Result<DatabaseRecord, ClassificationFailure>;

/// Template classifier over compiled CRS patterns
///
/// Patterns are compiled once in [`WktParser::new`] and shared read-only by
/// every classification afterwards; the parser is cheap to clone and safe
/// to use from several threads.
#[derive(Debug, Clone)]
pub struct WktParser {
    templates: Vec<CompiledTemplate>,
}

impl WktParser {
    /// Compile all eight templates
    pub fn new() -> Result<Self> {
        let templates = compile_all()?;
        debug!("Compiled {} CRS templates", templates.len());
        Ok(Self { templates })
    }

    /// First template, in priority order, matching the normalized text
    pub fn classify(&self, normalized: &str) -> Option<CrsTemplate> {
        self.templates
            .iter()
            .find(|compiled| compiled.regex.is_match(normalized))
            .map(|compiled| compiled.template)
    }

    /// Every template matching the normalized text, in priority order
    pub fn matching_templates(&self, normalized: &str) -> Vec<CrsTemplate> {
        self.templates
            .iter()
            .filter(|compiled| compiled.regex.is_match(normalized))
            .map(|compiled| compiled.template)
            .collect()
    }

    /// Classify one block and extract its record
    ///
    /// A block no template matches is reported as a failure carrying the
    /// raw text; it is logged here and never turned into a record.
    pub fn parse_block(&self, block: &WktBlock) -> BlockOutcome {
        for compiled in &self.templates {
            let Some(captures) = compiled.regex.captures(&block.normalized) else {
                continue;
            };

            return match extract_record(compiled.template, &captures, block) {
                Ok(record) => {
                    debug!(
                        "Block {} matched {} (IAU {} {})",
                        block.index, compiled.template, record.iau_code, record.iau_version
                    );
                    Ok(record)
                }
                Err(e) => {
                    error!("Failed to extract WKT block {}: {}\n{}", block.index, e, block.raw);
                    Err(ClassificationFailure {
                        index: block.index,
                        raw: block.raw.clone(),
                    })
                }
            };
        }

        error!("Cannot classify WKT block {}:\n{}", block.index, block.raw);
        Err(ClassificationFailure {
            index: block.index,
            raw: block.raw.clone(),
        })
    }

    /// Classify a single WKT definition given as it would appear in a corpus
    pub fn parse_definition(&self, raw: &str) -> BlockOutcome {
        let block = WktBlock {
            index: 0,
            raw: raw.to_string(),
            normalized: normalize_wkt(raw),
        };
        self.parse_block(&block)
    }

    /// Parse a whole corpus sequentially, preserving block order
    pub fn parse_corpus(&self, text: &str) -> ParseResult {
        let corpus = split_corpus(text);
        let outcomes = corpus
            .blocks
            .iter()
            .map(|block| (block.index, self.parse_block(block)))
            .collect();

        let result = assemble_result(&corpus, outcomes);
        info!("{}", result.stats.summary());
        result
    }
}

/// Fold ordered block outcomes into a [`ParseResult`]
pub(crate) fn assemble_result(
    corpus: &CorpusBlocks,
    outcomes: Vec<(usize, BlockOutcome)>,
) -> ParseResult {
    let mut stats = ParseStats::new();
    stats.total_blocks = corpus.total_blocks;
    stats.empty_blocks = corpus.empty_blocks();

    let mut records = Vec::new();
    let mut failures = Vec::new();

    for (_, outcome) in outcomes {
        match outcome {
            Ok(record) => {
                stats.record_match(record.template);
                records.push(record);
            }
            Err(failure) => {
                stats.record_failure();
                failures.push(failure);
            }
        }
    }

    ParseResult {
        records,
        failures,
        stats,
    }
}
