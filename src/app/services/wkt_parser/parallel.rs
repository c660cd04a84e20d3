//! Parallel corpus classification
//!
//! Blocks are classified independently, so the corpus can be cut into
//! contiguous chunks and each chunk classified on tokio's blocking pool.
//! Chunks complete in any order; outcomes are re-sorted by block index
//! before assembly so the result equals the sequential parse.

use super::corpus::{WktBlock, split_corpus};
use super::{BlockOutcome, ParseResult, WktParser, assemble_result};
use crate::Result;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use tokio::task;
use tracing::{debug, info};

/// Progress bar for block classification
pub fn block_progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

/// Parse a corpus using up to `workers` concurrent blocking tasks
///
/// When a progress bar is given it is advanced once per classified block
/// and finished when every chunk is done.
pub async fn parse_corpus_parallel(
    parser: Arc<WktParser>,
    text: &str,
    workers: usize,
    progress: Option<ProgressBar>,
) -> Result<ParseResult> {
    let corpus = split_corpus(text);
    let workers = workers.max(1);
    let chunk_size = corpus.len().div_ceil(workers).max(1);

    let chunks: Vec<Vec<WktBlock>> = corpus
        .blocks
        .chunks(chunk_size)
        .map(|chunk| chunk.to_vec())
        .collect();

    debug!(
        "Classifying {} blocks in {} chunks on {} workers",
        corpus.len(),
        chunks.len(),
        workers
    );

    if let Some(pb) = &progress {
        pb.set_length(corpus.len() as u64);
        pb.set_message("Classifying WKT blocks...");
    }

    let chunk_results = stream::iter(chunks)
        .map(|chunk| {
            let parser = Arc::clone(&parser);
            let progress = progress.clone();
            task::spawn_blocking(move || classify_chunk(&parser, &chunk, progress.as_ref()))
        })
        .buffer_unordered(workers)
        .collect::<Vec<_>>()
        .await;

    let mut outcomes = Vec::with_capacity(corpus.len());
    for chunk_result in chunk_results {
        outcomes.extend(chunk_result?);
    }
    outcomes.sort_by_key(|(index, _)| *index);

    let result = assemble_result(&corpus, outcomes);

    if let Some(pb) = &progress {
        pb.finish_with_message(format!(
            "Classified {} blocks ({} failed)",
            result.stats.non_empty_blocks(),
            result.stats.classification_failures
        ));
    }

    info!("{}", result.stats.summary());
    Ok(result)
}

fn classify_chunk(
    parser: &WktParser,
    chunk: &[WktBlock],
    progress: Option<&ProgressBar>,
) -> Vec<(usize, BlockOutcome)> {
    chunk
        .iter()
        .map(|block| {
            let outcome = parser.parse_block(block);
            if let Some(pb) = progress {
                pb.inc(1);
            }
            (block.index, outcome)
        })
        .collect()
}
