//! Application constants for the planet CRS registry
//!
//! This module contains the fixed contract strings of the WKT corpus,
//! default values, and limits used throughout the registry.

// =============================================================================
// Corpus Format
// =============================================================================

/// Default location of the WKT corpus, relative to the working directory
pub const DEFAULT_CORPUS_PATH: &str = "data/result.wkts";

/// Sentinel stored as projection name for every unprojected CRS
pub const NO_PROJECTION: &str = "No projection";

/// Authority name used in `ID["IAU", code, version]` clauses and record ids
pub const IAU_AUTHORITY: &str = "IAU";

/// Marker of a triaxial ellipsoid inside a WKT definition
pub const TRIAXIAL_KEYWORD: &str = "TRIAXIAL[";

// =============================================================================
// OGC Bridge
// =============================================================================

/// Base URI of IAU CRS identifiers in the OGC definition server
pub const OGC_IAU_BASE_URL: &str = "http://www.opengis.net/def/crs/IAU";

/// IAU versions must be strictly greater than this value
pub const MIN_IAU_VERSION_EXCLUSIVE: u32 = 2014;

// =============================================================================
// Pagination
// =============================================================================

/// Number of records returned when no limit is given
pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// Largest page a query may request
pub const MAX_PAGE_LIMIT: usize = 100;

// =============================================================================
// Configuration
// =============================================================================

/// Directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "planet-crs-registry";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the corpus path
pub const ENV_CORPUS_PATH: &str = "PLANET_CRS_CORPUS";

/// Environment variable overriding the worker count
pub const ENV_WORKERS: &str = "PLANET_CRS_WORKERS";

/// Environment variable enabling parallel classification
pub const ENV_PARALLEL: &str = "PLANET_CRS_PARALLEL";

/// Default log level for the binary
pub const DEFAULT_LOG_LEVEL: &str = "info";
