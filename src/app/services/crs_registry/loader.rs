//! Registry loading from a WKT corpus
//!
//! This module handles reading the corpus, classifying its blocks (either
//! sequentially or on the blocking pool) and rebuilding the registry from
//! the result.

use super::metadata::LoadStats;
use super::{CrsRegistry, rebuild};
use crate::app::services::wkt_parser::{
    ParseResult, WktParser, block_progress_bar, load_corpus_file, parse_corpus_parallel,
};
use crate::config::RegistryConfig;
use crate::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

impl CrsRegistry {
    /// Build a registry from corpus text already in memory
    pub fn load_from_str(parser: &WktParser, corpus: &str) -> Result<(Self, LoadStats)> {
        let result = parser.parse_corpus(corpus);
        Self::from_parse_result(&result)
    }

    /// Build a registry from the records of a finished parse
    pub fn from_parse_result(result: &ParseResult) -> Result<(Self, LoadStats)> {
        let mut registry = Self::new();
        let stats = registry.reload(result)?;
        Ok((registry, stats))
    }

    /// Drop every row and re-insert the records of `result`
    pub fn reload(&mut self, result: &ParseResult) -> Result<LoadStats> {
        rebuild(self, result)
    }

    /// Build a registry from a corpus file, parsing sequentially
    ///
    /// # Errors
    /// * `CorpusNotFound` if the file does not exist
    /// * `Io` for any other read failure
    pub async fn load_from_file(parser: &WktParser, path: &Path) -> Result<(Self, LoadStats)> {
        let corpus = load_corpus_file(path).await?;
        let (mut registry, stats) = Self::load_from_str(parser, &corpus)?;
        registry.corpus_path = Some(path.to_path_buf());
        Ok((registry, stats))
    }

    /// Build a registry as described by a configuration
    pub async fn load_with_config(
        config: &RegistryConfig,
        show_progress: bool,
    ) -> Result<(Self, LoadStats)> {
        info!(
            "Loading CRS registry from corpus: {}",
            config.corpus_path.display()
        );

        let result = parse_with_config(config, show_progress).await?;
        let (mut registry, stats) = Self::from_parse_result(&result)?;
        registry.corpus_path = Some(config.corpus_path.clone());
        Ok((registry, stats))
    }
}

/// Read and classify the configured corpus
///
/// Parses in parallel over `config.workers` tasks when `config.parallel`
/// is set, optionally showing a progress bar.
pub async fn parse_with_config(config: &RegistryConfig, show_progress: bool) -> Result<ParseResult> {
    let parser = WktParser::new()?;
    let corpus = load_corpus_file(&config.corpus_path).await?;

    let result = if config.parallel {
        let progress_bar = show_progress.then(block_progress_bar);
        parse_corpus_parallel(Arc::new(parser), &corpus, config.workers, progress_bar).await?
    } else {
        parser.parse_corpus(&corpus)
    };

    if !result.is_fully_classified() {
        warn!(
            "{} WKT blocks could not be classified and were left out",
            result.failures.len()
        );
    }

    Ok(result)
}
