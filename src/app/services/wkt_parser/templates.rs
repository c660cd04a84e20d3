//! The eight CRS shape templates
//!
//! Each template is an anchored regular expression with named groups over the
//! normalized (single-line) WKT text. The literal tokens are the contract of
//! the corpus format: `"Reference Meridian"`, EPSG unit codes 9001/9122, the
//! degree factor `0.0174532925199433` and the axis names distinguishing
//! planetocentric from planetographic definitions.
//!
//! Templates are tried in [`CrsTemplate::ALL`] order and the first match wins.

use crate::app::models::OriginConvention;
use crate::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Pattern Fragments
// =============================================================================

macro_rules! biaxial_datum {
    () => {
        r#"DATUM\["(?P<datum>.*)", ELLIPSOID\["(?P<ellipsoid>.*)", (?P<semi_major>.*), (?P<flattening>.*), LENGTHUNIT\["metre", 1, ID\["EPSG", 9001\]\]\](?P<anchor>.*)\], "#
    };
}

macro_rules! triaxial_datum {
    () => {
        r#"DATUM\["(?P<datum>.*)", TRIAXIAL\["(?P<ellipsoid>.*)", (?P<semi_major>.*), (?P<semi_median>.*), (?P<semi_minor>.*), LENGTHUNIT\["metre", 1, ID\["EPSG", 9001\]\]\](?P<anchor>.*)\], "#
    };
}

macro_rules! prime_meridian {
    () => {
        r#"PRIMEM\["Reference Meridian", 0, ANGLEUNIT\["degree", 0\.0174532925199433, ID\["EPSG", 9122\]\]\]"#
    };
}

macro_rules! ocentric_axes {
    () => {
        r#", CS\[(?P<cs>.*), (?P<cs_nb>.*)\], AXIS\["planetocentric latitude \(U\)", (?P<latitude_asc>.*), ORDER\[1\], ANGLEUNIT\["degree", 0\.0174532925199433\]\], AXIS\["planetocentric longitude \(V\)", (?P<longitude_asc>.*), ORDER\[2\], ANGLEUNIT\["degree", 0\.0174532925199433\]\], "#
    };
}

macro_rules! ographic_axes {
    () => {
        r#", CS\[(?P<cs>.*), (?P<cs_nb>.*)\], AXIS\["geodetic latitude \(Lat\)", (?P<latitude_asc>.*), ORDER\[1\], ANGLEUNIT\["degree", 0\.0174532925199433\]\], AXIS\["geodetic longitude \(Lon\)", (?P<longitude_asc>.*), ORDER\[2\], ANGLEUNIT\["degree", 0\.0174532925199433\]\], "#
    };
}

macro_rules! iau_id_and_remark {
    () => {
        r#"ID\["IAU", (?P<iau_code>\d+), (?P<iau_version>\d+)\], REMARK\["(?P<remark>).*"\]\]"#
    };
}

macro_rules! base_id_and_conversion {
    () => {
        r#", ID\["IAU", (?P<iau_code_body>\d+), (?P<iau_version_body>\d+)\]\], (?P<conversion>.*)"#
    };
}

macro_rules! projected_axes {
    () => {
        r#", CS\[(?P<cs>.*), (?P<cs_nb>.*)\], AXIS\["(?P<longitude_name>.*)", (?P<longitude_asc>.*), ORDER\[1\], LENGTHUNIT\["metre", 1\]\], AXIS\["Northing \(N\)", (?P<latitude_asc>.*), ORDER\[2\], LENGTHUNIT\["metre", 1\]\], ID\["IAU", (?P<iau_code>\d+), (?P<iau_version>\d+)\]\]"#
    };
}

const GEOCENTRIC_BIAXIAL: &str = concat!(
    r#"^GEODCRS\["(?P<geodcrs>.*)", "#,
    biaxial_datum!(),
    prime_meridian!(),
    ocentric_axes!(),
    iau_id_and_remark!()
);

const GEOGRAPHIC_BIAXIAL: &str = concat!(
    r#"^GEOGCRS\["(?P<geodcrs>.*)", "#,
    biaxial_datum!(),
    prime_meridian!(),
    ographic_axes!(),
    iau_id_and_remark!()
);

const GEOCENTRIC_TRIAXIAL: &str = concat!(
    r#"^GEODCRS\["(?P<geodcrs>.*)", "#,
    triaxial_datum!(),
    prime_meridian!(),
    ocentric_axes!(),
    iau_id_and_remark!()
);

const GEOGRAPHIC_TRIAXIAL: &str = concat!(
    r#"^GEOGCRS\["(?P<geodcrs>.*)", "#,
    triaxial_datum!(),
    prime_meridian!(),
    ographic_axes!(),
    iau_id_and_remark!()
);

const PROJECTED_BIAXIAL_OCENTRIC: &str = concat!(
    r#"^PROJCRS\["(?P<projcrs>.*)", BASEGEODCRS\["(?P<geodcrs>.*)", "#,
    biaxial_datum!(),
    prime_meridian!(),
    base_id_and_conversion!(),
    projected_axes!()
);

const PROJECTED_BIAXIAL_OGRAPHIC: &str = concat!(
    r#"^PROJCRS\["(?P<projcrs>.*)", BASEGEOGCRS\["(?P<geodcrs>.*)", "#,
    biaxial_datum!(),
    prime_meridian!(),
    base_id_and_conversion!(),
    projected_axes!()
);

const PROJECTED_TRIAXIAL_OCENTRIC: &str = concat!(
    r#"^PROJCRS\["(?P<projcrs>.*)", BASEGEODCRS\["(?P<geodcrs>.*)", "#,
    triaxial_datum!(),
    prime_meridian!(),
    base_id_and_conversion!(),
    projected_axes!()
);

const PROJECTED_TRIAXIAL_OGRAPHIC: &str = concat!(
    r#"^PROJCRS\["(?P<projcrs>.*)", BASEGEOGCRS\["(?P<geodcrs>.*)", "#,
    triaxial_datum!(),
    prime_meridian!(),
    base_id_and_conversion!(),
    projected_axes!()
);

// =============================================================================
// Template Identity
// =============================================================================

/// Identity of one of the eight supported CRS shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrsTemplate {
    /// `GEODCRS` with a biaxial `ELLIPSOID`
    GeocentricBiaxial,
    /// `GEOGCRS` with a biaxial `ELLIPSOID`
    GeographicBiaxial,
    /// `GEODCRS` with a `TRIAXIAL` ellipsoid
    GeocentricTriaxial,
    /// `GEOGCRS` with a `TRIAXIAL` ellipsoid
    GeographicTriaxial,
    /// `PROJCRS` over a biaxial `BASEGEODCRS`
    ProjectedBiaxialOcentric,
    /// `PROJCRS` over a biaxial `BASEGEOGCRS`
    ProjectedBiaxialOgraphic,
    /// `PROJCRS` over a triaxial `BASEGEODCRS`
    ProjectedTriaxialOcentric,
    /// `PROJCRS` over a triaxial `BASEGEOGCRS`
    ProjectedTriaxialOgraphic,
}

impl CrsTemplate {
    /// All templates in classification priority order
    pub const ALL: [CrsTemplate; 8] = [
        CrsTemplate::GeocentricBiaxial,
        CrsTemplate::GeographicBiaxial,
        CrsTemplate::GeocentricTriaxial,
        CrsTemplate::GeographicTriaxial,
        CrsTemplate::ProjectedBiaxialOcentric,
        CrsTemplate::ProjectedBiaxialOgraphic,
        CrsTemplate::ProjectedTriaxialOcentric,
        CrsTemplate::ProjectedTriaxialOgraphic,
    ];

    /// Short name used in logs and reports
    pub fn name(&self) -> &'static str {
        match self {
            CrsTemplate::GeocentricBiaxial => "geocentric_biaxial",
            CrsTemplate::GeographicBiaxial => "geographic_biaxial",
            CrsTemplate::GeocentricTriaxial => "geocentric_triaxial",
            CrsTemplate::GeographicTriaxial => "geographic_triaxial",
            CrsTemplate::ProjectedBiaxialOcentric => "projected_biaxial_ocentric",
            CrsTemplate::ProjectedBiaxialOgraphic => "projected_biaxial_ographic",
            CrsTemplate::ProjectedTriaxialOcentric => "projected_triaxial_ocentric",
            CrsTemplate::ProjectedTriaxialOgraphic => "projected_triaxial_ographic",
        }
    }

    /// Declared origin convention of the template.
    ///
    /// This is a fixed table over the template identity; nothing in the
    /// matched text is consulted.
    pub fn origin_convention(&self) -> OriginConvention {
        match self {
            CrsTemplate::GeocentricBiaxial => OriginConvention::Ocentric,
            CrsTemplate::GeographicBiaxial => OriginConvention::Ographic,
            CrsTemplate::GeocentricTriaxial => OriginConvention::Ocentric,
            CrsTemplate::GeographicTriaxial => OriginConvention::Ographic,
            CrsTemplate::ProjectedBiaxialOcentric => OriginConvention::Ocentric,
            CrsTemplate::ProjectedBiaxialOgraphic => OriginConvention::Ographic,
            CrsTemplate::ProjectedTriaxialOcentric => OriginConvention::Ocentric,
            CrsTemplate::ProjectedTriaxialOgraphic => OriginConvention::Ographic,
        }
    }

    /// Whether the template wraps its base CRS in a `PROJCRS`
    pub fn is_projected(&self) -> bool {
        matches!(
            self,
            CrsTemplate::ProjectedBiaxialOcentric
                | CrsTemplate::ProjectedBiaxialOgraphic
                | CrsTemplate::ProjectedTriaxialOcentric
                | CrsTemplate::ProjectedTriaxialOgraphic
        )
    }

    /// Whether the template expects a `TRIAXIAL` ellipsoid
    pub fn is_triaxial(&self) -> bool {
        matches!(
            self,
            CrsTemplate::GeocentricTriaxial
                | CrsTemplate::GeographicTriaxial
                | CrsTemplate::ProjectedTriaxialOcentric
                | CrsTemplate::ProjectedTriaxialOgraphic
        )
    }

    /// Regular expression source of the template
    pub fn pattern(&self) -> &'static str {
        match self {
            CrsTemplate::GeocentricBiaxial => GEOCENTRIC_BIAXIAL,
            CrsTemplate::GeographicBiaxial => GEOGRAPHIC_BIAXIAL,
            CrsTemplate::GeocentricTriaxial => GEOCENTRIC_TRIAXIAL,
            CrsTemplate::GeographicTriaxial => GEOGRAPHIC_TRIAXIAL,
            CrsTemplate::ProjectedBiaxialOcentric => PROJECTED_BIAXIAL_OCENTRIC,
            CrsTemplate::ProjectedBiaxialOgraphic => PROJECTED_BIAXIAL_OGRAPHIC,
            CrsTemplate::ProjectedTriaxialOcentric => PROJECTED_TRIAXIAL_OCENTRIC,
            CrsTemplate::ProjectedTriaxialOgraphic => PROJECTED_TRIAXIAL_OGRAPHIC,
        }
    }

    /// Compile the template pattern
    pub fn compile(&self) -> Result<Regex> {
        Regex::new(self.pattern()).map_err(|e| Error::template_compilation(self.name(), e))
    }
}

impl fmt::Display for CrsTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A template together with its compiled pattern
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    pub template: CrsTemplate,
    pub regex: Regex,
}

/// Compile every template, preserving priority order
pub fn compile_all() -> Result<Vec<CompiledTemplate>> {
    CrsTemplate::ALL
        .iter()
        .map(|template| {
            Ok(CompiledTemplate {
                template: *template,
                regex: template.compile()?,
            })
        })
        .collect()
}
