//! Data models for the planet CRS registry
//!
//! This module contains the core data structures produced by the WKT parser
//! and consumed by the registry: the parsed record, its origin convention,
//! the persistence row shape and the `IAU:<version>:<code>` identifier.

use crate::app::services::wkt_parser::CrsTemplate;
use crate::constants::{IAU_AUTHORITY, TRIAXIAL_KEYWORD};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Origin Convention
// =============================================================================

/// Latitude convention of a CRS: planetocentric or planetographic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OriginConvention {
    /// Planetocentric latitude-longitude (spherical or triaxial)
    Ocentric,
    /// Planetographic (geodetic) latitude-longitude
    Ographic,
}

impl OriginConvention {
    /// Label used in records and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            OriginConvention::Ocentric => "Ocentric",
            OriginConvention::Ographic => "Ographic",
        }
    }
}

impl fmt::Display for OriginConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OriginConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "OCENTRIC" => Ok(OriginConvention::Ocentric),
            "OGRAPHIC" => Ok(OriginConvention::Ographic),
            _ => Err(Error::invalid_record(format!(
                "Unknown origin convention '{}': must be Ocentric or Ographic",
                s
            ))),
        }
    }
}

// =============================================================================
// Parsed Record
// =============================================================================

/// Ellipsoid parameters as they appear in the WKT text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum EllipsoidAxes {
    /// `ELLIPSOID[name, semi_major, inverse_flattening, ...]`
    Biaxial {
        semi_major: String,
        flattening: String,
    },
    /// `TRIAXIAL[name, semi_major, semi_median, semi_minor, ...]`
    Triaxial {
        semi_major: String,
        semi_median: String,
        semi_minor: String,
    },
}

impl EllipsoidAxes {
    /// Semi-major axis in metres, as written
    pub fn semi_major(&self) -> &str {
        match self {
            EllipsoidAxes::Biaxial { semi_major, .. } => semi_major,
            EllipsoidAxes::Triaxial { semi_major, .. } => semi_major,
        }
    }

    pub fn is_triaxial(&self) -> bool {
        matches!(self, EllipsoidAxes::Triaxial { .. })
    }
}

/// One CRS definition extracted from the corpus
///
/// Records are immutable once built. The IAU code and version are kept as
/// the digit strings captured from the `ID["IAU", code, version]` clause;
/// use [`DatabaseRecord::wkt_id`] to obtain them as integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseRecord {
    /// Template that classified the block
    pub template: CrsTemplate,

    /// Name of the (base) geodetic or geographic CRS
    pub crs_name: String,

    /// Datum name, e.g. "Mars (2015) - Sphere"
    pub datum_name: String,

    /// Ellipsoid or triaxial ellipsoid name
    pub ellipsoid_name: String,

    /// Ellipsoid axes
    pub ellipsoid: EllipsoidAxes,

    /// Coordinate system type token (`spherical`, `ellipsoidal`, `Cartesian`)
    pub cs_type: String,

    /// Coordinate system dimension as written
    pub cs_axis_count: String,

    /// Direction token of the latitude (or northing) axis
    pub latitude_axis_direction: String,

    /// Direction token of the longitude (or easting/westing) axis
    pub longitude_axis_direction: String,

    /// Fixed by the matched template
    pub origin_convention: OriginConvention,

    /// IAU code digits
    pub iau_code: String,

    /// IAU version digits (report year)
    pub iau_version: String,

    /// Projected CRS name, or the "No projection" sentinel
    pub projection_name: String,

    /// Conversion clause of a projected CRS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion: Option<String>,

    /// Display name of the first projected axis (e.g. "Easting (E)")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude_axis_name: Option<String>,

    /// IAU code of the base CRS of a projected CRS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_iau_code: Option<String>,

    /// IAU version of the base CRS of a projected CRS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_iau_version: Option<String>,

    /// Block text exactly as it appears in the corpus
    pub raw_wkt: String,
}

impl DatabaseRecord {
    /// Whether the record came from one of the projected templates
    pub fn is_projected(&self) -> bool {
        self.template.is_projected()
    }

    /// Solar body name: the leading whitespace-delimited token of the datum name
    pub fn solar_body(&self) -> Option<&str> {
        solar_body_of(&self.datum_name)
    }

    /// Registry identifier built from the IAU version and code
    pub fn wkt_id(&self) -> Result<WktId> {
        let version = parse_iau_number("version", &self.iau_version)?;
        let code = parse_iau_number("code", &self.iau_code)?;
        Ok(WktId { version, code })
    }
}

/// Leading token of a datum name, matched at the very start of the string
pub fn solar_body_of(datum_name: &str) -> Option<&str> {
    datum_name
        .split(char::is_whitespace)
        .next()
        .filter(|token| !token.is_empty())
}

fn parse_iau_number(field: &str, digits: &str) -> Result<u32> {
    digits.trim().parse::<u32>().map_err(|_| {
        Error::invalid_record(format!("IAU {} '{}' is not a number", field, digits))
    })
}

// =============================================================================
// Identifier
// =============================================================================

/// Registry identifier `IAU:<version>:<code>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WktId {
    pub version: u32,
    pub code: u32,
}

impl WktId {
    pub fn new(version: u32, code: u32) -> Self {
        Self { version, code }
    }
}

impl fmt::Display for WktId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", IAU_AUTHORITY, self.version, self.code)
    }
}

impl FromStr for WktId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.len() != 3 || parts[0] != IAU_AUTHORITY {
            return Err(Error::invalid_identifier(s));
        }

        let version = parts[1]
            .parse::<u32>()
            .map_err(|_| Error::invalid_identifier(s))?;
        let code = parts[2]
            .parse::<u32>()
            .map_err(|_| Error::invalid_identifier(s))?;

        Ok(Self { version, code })
    }
}

// =============================================================================
// Persistence Row
// =============================================================================

/// Row shape handed to the persistence layer for each parsed record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WktRow {
    /// `IAU:<version>:<code>` built from the integer values, so `01000` becomes `1000`
    pub id: String,
    pub version: u32,
    pub code: u32,
    pub solar_body: String,
    pub datum_name: String,
    pub ellipsoid_name: String,
    pub projection_name: String,
    pub wkt: String,
    pub origin_convention: OriginConvention,
}

impl WktRow {
    /// Identifier of this row
    pub fn wkt_id(&self) -> WktId {
        WktId::new(self.version, self.code)
    }

    /// Whether the WKT text uses a triaxial ellipsoid
    pub fn is_triaxial(&self) -> bool {
        self.wkt.contains(TRIAXIAL_KEYWORD)
    }
}

impl TryFrom<&DatabaseRecord> for WktRow {
    type Error = Error;

    fn try_from(record: &DatabaseRecord) -> Result<Self> {
        let wkt_id = record.wkt_id()?;
        let solar_body = record.solar_body().ok_or_else(|| {
            Error::invalid_record(format!(
                "Cannot derive solar body from datum name '{}' of {}",
                record.datum_name, wkt_id
            ))
        })?;

        Ok(Self {
            id: wkt_id.to_string(),
            version: wkt_id.version,
            code: wkt_id.code,
            solar_body: solar_body.to_string(),
            datum_name: record.datum_name.clone(),
            ellipsoid_name: record.ellipsoid_name.clone(),
            projection_name: record.projection_name.clone(),
            wkt: record.raw_wkt.clone(),
            origin_convention: record.origin_convention,
        })
    }
}
