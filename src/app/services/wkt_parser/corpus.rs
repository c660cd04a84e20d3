//! Corpus loading and block splitting
//!
//! A corpus is a text blob of WKT definitions separated by exactly one blank
//! line. Each definition becomes a [`WktBlock`] carrying both the text as it
//! appears in the corpus and a single-line form used for template matching.

use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, info};

/// One WKT definition from the corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WktBlock {
    /// Position in the blank-line split sequence
    pub index: usize,

    /// Text exactly as it appears between delimiters
    pub raw: String,

    /// Single-line matching form
    pub normalized: String,
}

/// Result of splitting a corpus into blocks
#[derive(Debug, Clone, Default)]
pub struct CorpusBlocks {
    /// Non-empty blocks in corpus order
    pub blocks: Vec<WktBlock>,

    /// Number of segments produced by the split, empty ones included
    pub total_blocks: usize,
}

impl CorpusBlocks {
    /// Segments that normalized to nothing and were skipped
    pub fn empty_blocks(&self) -> usize {
        self.total_blocks - self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }
}

/// Split corpus text into blocks
///
/// The delimiter is one blank line, where either line break may be `\n` or
/// `\r\n`. Raw text keeps its original line endings. Segments that normalize
/// to an empty string (trailing blank lines, whitespace-only segments) are
/// skipped but still consume an index.
pub fn split_corpus(text: &str) -> CorpusBlocks {
    let mut total_blocks = 0;
    let mut blocks = Vec::new();

    for (index, raw) in split_on_blank_lines(text).into_iter().enumerate() {
        total_blocks += 1;

        let normalized = normalize_wkt(raw);
        if normalized.is_empty() {
            debug!("Skipping empty block {}", index);
            continue;
        }

        blocks.push(WktBlock {
            index,
            raw: raw.to_string(),
            normalized,
        });
    }

    CorpusBlocks {
        blocks,
        total_blocks,
    }
}

fn split_on_blank_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let line_break_len = |at: usize| match bytes.get(at) {
        Some(b'\n') => 1,
        Some(b'\r') if bytes.get(at + 1) == Some(&b'\n') => 2,
        _ => 0,
    };

    let mut segments = Vec::new();
    let mut start = 0;
    let mut at = 0;

    while at < bytes.len() {
        let first = line_break_len(at);
        if first > 0 {
            let second = line_break_len(at + first);
            if second > 0 {
                segments.push(&text[start..at]);
                at += first + second;
                start = at;
                continue;
            }
        }
        at += 1;
    }

    segments.push(&text[start..]);
    segments
}

/// Collapse a multi-line WKT definition to its single-line matching form
///
/// Every line break (`\n` or `\r\n`) together with the whitespace that
/// follows it becomes one space, then `"] ]"` is squeezed to `"]]"` and the result is trimmed.
pub fn normalize_wkt(raw: &str) -> String {
    let mut collapsed = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\r' && chars.peek() == Some(&'\n') {
            continue;
        }
        if c == '\n' {
            while chars.peek().is_some_and(|next| next.is_whitespace()) {
                chars.next();
            }
            collapsed.push(' ');
        } else {
            collapsed.push(c);
        }
    }

    collapsed.replace("] ]", "]]").trim().to_string()
}

/// Read a corpus from disk
///
/// A missing file is reported as [`Error::CorpusNotFound`]; any other read
/// failure is an I/O error. These are the only fatal outcomes of loading.
pub async fn load_corpus_file(path: &Path) -> Result<String> {
    info!("Reading WKT corpus: {}", path.display());

    match tokio::fs::read_to_string(path).await {
        Ok(content) => {
            debug!("Read {} bytes from {}", content.len(), path.display());
            Ok(content)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(Error::corpus_not_found(path.display().to_string()))
        }
        Err(e) => Err(Error::io(
            format!("Failed to read corpus {}", path.display()),
            e,
        )),
    }
}
