//! Planet CRS Registry Library
//!
//! A Rust library for building a registry of IAU coordinate reference systems
//! for solar system bodies from a corpus of Well-Known-Text definitions.
//!
//! This library provides tools for:
//! - Splitting a WKT corpus into blank-line-delimited blocks
//! - Classifying each block against eight fixed CRS templates
//! - Extracting datum, ellipsoid, coordinate system, axes and IAU identifiers
//! - Projecting parsed records onto the registry's persistence row shape
//! - Querying the registry by version, solar body or keyword

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod crs_registry;
        pub mod wkt_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DatabaseRecord, OriginConvention, WktId, WktRow};
pub use app::services::crs_registry::CrsRegistry;
pub use app::services::wkt_parser::{CrsTemplate, ParseResult, WktParser};
pub use config::RegistryConfig;

/// Result type alias for the registry
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for corpus loading, parsing and registry queries
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Corpus resource does not exist
    #[error("WKT corpus not found: {path}")]
    CorpusNotFound { path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A CRS template pattern failed to compile
    #[error("Failed to compile CRS template '{template}'")]
    TemplateCompilation {
        template: String,
        #[source]
        source: regex::Error,
    },

    /// A parsed record cannot be turned into a registry row
    #[error("Invalid record: {message}")]
    InvalidRecord { message: String },

    /// Identifier does not follow IAU:<version>:<code>
    #[error("Invalid WKT identifier '{id}': expected IAU:<version>:<code>")]
    InvalidIdentifier { id: String },

    /// Query parameters out of range
    #[error("Invalid query: {message}")]
    InvalidQuery { message: String },

    /// No record with this identifier
    #[error("{id} not found")]
    RecordNotFound { id: String },

    /// Record exists but does not belong to the requested version or body
    #[error("{message}")]
    Mismatch { message: String },

    /// A background parsing task failed
    #[error("Parsing task failed: {message}")]
    TaskJoin {
        message: String,
        #[source]
        source: tokio::task::JoinError,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a corpus not found error
    pub fn corpus_not_found(path: impl Into<String>) -> Self {
        Self::CorpusNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a template compilation error
    pub fn template_compilation(template: impl Into<String>, source: regex::Error) -> Self {
        Self::TemplateCompilation {
            template: template.into(),
            source,
        }
    }

    /// Create an invalid record error
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }

    /// Create an invalid identifier error
    pub fn invalid_identifier(id: impl Into<String>) -> Self {
        Self::InvalidIdentifier { id: id.into() }
    }

    /// Create an invalid query error
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery {
            message: message.into(),
        }
    }

    /// Create a record not found error
    pub fn record_not_found(id: impl Into<String>) -> Self {
        Self::RecordNotFound { id: id.into() }
    }

    /// Create a mismatch error
    pub fn mismatch(message: impl Into<String>) -> Self {
        Self::Mismatch {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Failed to parse config file: {}", error),
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::TaskJoin {
            message: "Blocking parse task did not complete".to_string(),
            source: error,
        }
    }
}
