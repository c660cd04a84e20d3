//! Shared fixtures for WKT parser tests
//!
//! One canonical single-line definition per template, plus multi-line
//! corpus helpers.

use super::templates::CrsTemplate;

mod template_tests;

pub const GEOCENTRIC_BIAXIAL_WKT: &str = concat!(
    r#"GEODCRS["Mars (2015) - Sphere / Ocentric", "#,
    r#"DATUM["Mars (2015) - Sphere", ELLIPSOID["Mars (2015) - Sphere", 3396190, 0, LENGTHUNIT["metre", 1, ID["EPSG", 9001]]], ANCHOR["Viking 1 lander : 47.95137 W"]], "#,
    r#"PRIMEM["Reference Meridian", 0, ANGLEUNIT["degree", 0.0174532925199433, ID["EPSG", 9122]]], "#,
    r#"CS[spherical, 2], "#,
    r#"AXIS["planetocentric latitude (U)", north, ORDER[1], ANGLEUNIT["degree", 0.0174532925199433]], "#,
    r#"AXIS["planetocentric longitude (V)", east, ORDER[2], ANGLEUNIT["degree", 0.0174532925199433]], "#,
    r#"ID["IAU", 49900, 2015], "#,
    r#"REMARK["Source of IAU Coordinate systems: doi:10.1007/s10569-017-9805-5"]]"#
);

pub const GEOGRAPHIC_BIAXIAL_WKT: &str = concat!(
    r#"GEOGCRS["Sun (2015) - Sphere / Ocentric", "#,
    r#"DATUM["Sun (2015) - Sphere", ELLIPSOID["Sun (2015) - Sphere", 695700000, 0, LENGTHUNIT["metre", 1, ID["EPSG", 9001]]]], "#,
    r#"PRIMEM["Reference Meridian", 0, ANGLEUNIT["degree", 0.0174532925199433, ID["EPSG", 9122]]], "#,
    r#"CS[ellipsoidal, 2], "#,
    r#"AXIS["geodetic latitude (Lat)", north, ORDER[1], ANGLEUNIT["degree", 0.0174532925199433]], "#,
    r#"AXIS["geodetic longitude (Lon)", east, ORDER[2], ANGLEUNIT["degree", 0.0174532925199433]], "#,
    r#"ID["IAU", 1000, 2015], "#,
    r#"REMARK["..."]]"#
);

pub const GEOCENTRIC_TRIAXIAL_WKT: &str = concat!(
    r#"GEODCRS["Phobos (2015) / Ocentric", "#,
    r#"DATUM["Phobos (2015)", TRIAXIAL["Phobos (2015)", 13000, 11400, 9100, LENGTHUNIT["metre", 1, ID["EPSG", 9001]]]], "#,
    r#"PRIMEM["Reference Meridian", 0, ANGLEUNIT["degree", 0.0174532925199433, ID["EPSG", 9122]]], "#,
    r#"CS[spherical, 2], "#,
    r#"AXIS["planetocentric latitude (U)", north, ORDER[1], ANGLEUNIT["degree", 0.0174532925199433]], "#,
    r#"AXIS["planetocentric longitude (V)", east, ORDER[2], ANGLEUNIT["degree", 0.0174532925199433]], "#,
    r#"ID["IAU", 40103, 2015], "#,
    r#"REMARK["Source of IAU Coordinate systems: doi:10.1007/s10569-017-9805-5"]]"#
);

pub const GEOGRAPHIC_TRIAXIAL_WKT: &str = concat!(
    r#"GEOGCRS["Phobos (2015) / Ographic", "#,
    r#"DATUM["Phobos (2015)", TRIAXIAL["Phobos (2015)", 13000, 11400, 9100, LENGTHUNIT["metre", 1, ID["EPSG", 9001]]]], "#,
    r#"PRIMEM["Reference Meridian", 0, ANGLEUNIT["degree", 0.0174532925199433, ID["EPSG", 9122]]], "#,
    r#"CS[ellipsoidal, 2], "#,
    r#"AXIS["geodetic latitude (Lat)", north, ORDER[1], ANGLEUNIT["degree", 0.0174532925199433]], "#,
    r#"AXIS["geodetic longitude (Lon)", west, ORDER[2], ANGLEUNIT["degree", 0.0174532925199433]], "#,
    r#"ID["IAU", 40101, 2015], "#,
    r#"REMARK["Source of IAU Coordinate systems: doi:10.1007/s10569-017-9805-5"]]"#
);

pub const PROJECTED_BIAXIAL_OCENTRIC_WKT: &str = concat!(
    r#"PROJCRS["Mars (2015) - Sphere / Ocentric / Equirectangular, clon = 0", "#,
    r#"BASEGEODCRS["Mars (2015) - Sphere / Ocentric", "#,
    r#"DATUM["Mars (2015) - Sphere", ELLIPSOID["Mars (2015) - Sphere", 3396190, 0, LENGTHUNIT["metre", 1, ID["EPSG", 9001]]], ANCHOR["Viking 1 lander : 47.95137 W"]], "#,
    r#"PRIMEM["Reference Meridian", 0, ANGLEUNIT["degree", 0.0174532925199433, ID["EPSG", 9122]]], "#,
    r#"ID["IAU", 49900, 2015]], "#,
    r#"CONVERSION["Equirectangular, clon = 0", METHOD["Equidistant Cylindrical", ID["EPSG", 1028]], "#,
    r#"PARAMETER["Latitude of 1st standard parallel", 0, ANGLEUNIT["degree", 0.0174532925199433], ID["EPSG", 8823]], "#,
    r#"PARAMETER["Longitude of natural origin", 0, ANGLEUNIT["degree", 0.0174532925199433], ID["EPSG", 8802]], "#,
    r#"PARAMETER["False easting", 0, LENGTHUNIT["metre", 1], ID["EPSG", 8806]], "#,
    r#"PARAMETER["False northing", 0, LENGTHUNIT["metre", 1], ID["EPSG", 8807]]], "#,
    r#"CS[Cartesian, 2], "#,
    r#"AXIS["Easting (E)", east, ORDER[1], LENGTHUNIT["metre", 1]], "#,
    r#"AXIS["Northing (N)", north, ORDER[2], LENGTHUNIT["metre", 1]], "#,
    r#"ID["IAU", 49910, 2015]]"#
);

pub const PROJECTED_BIAXIAL_OGRAPHIC_WKT: &str = concat!(
    r#"PROJCRS["Mars (2015) / Ographic / Equirectangular, clon = 0", "#,
    r#"BASEGEOGCRS["Mars (2015) / Ographic", "#,
    r#"DATUM["Mars (2015)", ELLIPSOID["Mars (2015)", 3396190, 169.894447223612, LENGTHUNIT["metre", 1, ID["EPSG", 9001]]], ANCHOR["Viking 1 lander : 47.95137 W"]], "#,
    r#"PRIMEM["Reference Meridian", 0, ANGLEUNIT["degree", 0.0174532925199433, ID["EPSG", 9122]]], "#,
    r#"ID["IAU", 49901, 2015]], "#,
    r#"CONVERSION["Equirectangular, clon = 0", METHOD["Equidistant Cylindrical", ID["EPSG", 1028]], "#,
    r#"PARAMETER["Latitude of 1st standard parallel", 0, ANGLEUNIT["degree", 0.0174532925199433], ID["EPSG", 8823]], "#,
    r#"PARAMETER["Longitude of natural origin", 0, ANGLEUNIT["degree", 0.0174532925199433], ID["EPSG", 8802]], "#,
    r#"PARAMETER["False easting", 0, LENGTHUNIT["metre", 1], ID["EPSG", 8806]], "#,
    r#"PARAMETER["False northing", 0, LENGTHUNIT["metre", 1], ID["EPSG", 8807]]], "#,
    r#"CS[Cartesian, 2], "#,
    r#"AXIS["Easting (E)", east, ORDER[1], LENGTHUNIT["metre", 1]], "#,
    r#"AXIS["Northing (N)", north, ORDER[2], LENGTHUNIT["metre", 1]], "#,
    r#"ID["IAU", 49911, 2015]]"#
);

pub const PROJECTED_TRIAXIAL_OCENTRIC_WKT: &str = concat!(
    r#"PROJCRS["Phobos (2015) / Ocentric / Equirectangular, clon = 0", "#,
    r#"BASEGEODCRS["Phobos (2015) / Ocentric", "#,
    r#"DATUM["Phobos (2015)", TRIAXIAL["Phobos (2015)", 13000, 11400, 9100, LENGTHUNIT["metre", 1, ID["EPSG", 9001]]]], "#,
    r#"PRIMEM["Reference Meridian", 0, ANGLEUNIT["degree", 0.0174532925199433, ID["EPSG", 9122]]], "#,
    r#"ID["IAU", 40103, 2015]], "#,
    r#"CONVERSION["Equirectangular, clon = 0", METHOD["Equidistant Cylindrical", ID["EPSG", 1028]], "#,
    r#"PARAMETER["Latitude of 1st standard parallel", 0, ANGLEUNIT["degree", 0.0174532925199433], ID["EPSG", 8823]], "#,
    r#"PARAMETER["Longitude of natural origin", 0, ANGLEUNIT["degree", 0.0174532925199433], ID["EPSG", 8802]], "#,
    r#"PARAMETER["False easting", 0, LENGTHUNIT["metre", 1], ID["EPSG", 8806]], "#,
    r#"PARAMETER["False northing", 0, LENGTHUNIT["metre", 1], ID["EPSG", 8807]]], "#,
    r#"CS[Cartesian, 2], "#,
    r#"AXIS["Easting (E)", east, ORDER[1], LENGTHUNIT["metre", 1]], "#,
    r#"AXIS["Northing (N)", north, ORDER[2], LENGTHUNIT["metre", 1]], "#,
    r#"ID["IAU", 40113, 2015]]"#
);

pub const PROJECTED_TRIAXIAL_OGRAPHIC_WKT: &str = concat!(
    r#"PROJCRS["Phobos (2015) / Ographic / Equirectangular, clon = 0", "#,
    r#"BASEGEOGCRS["Phobos (2015) / Ographic", "#,
    r#"DATUM["Phobos (2015)", TRIAXIAL["Phobos (2015)", 13000, 11400, 9100, LENGTHUNIT["metre", 1, ID["EPSG", 9001]]]], "#,
    r#"PRIMEM["Reference Meridian", 0, ANGLEUNIT["degree", 0.0174532925199433, ID["EPSG", 9122]]], "#,
    r#"ID["IAU", 40101, 2015]], "#,
    r#"CONVERSION["Equirectangular, clon = 0", METHOD["Equidistant Cylindrical", ID["EPSG", 1028]], "#,
    r#"PARAMETER["Latitude of 1st standard parallel", 0, ANGLEUNIT["degree", 0.0174532925199433], ID["EPSG", 8823]], "#,
    r#"PARAMETER["Longitude of natural origin", 0, ANGLEUNIT["degree", 0.0174532925199433], ID["EPSG", 8802]], "#,
    r#"PARAMETER["False easting", 0, LENGTHUNIT["metre", 1], ID["EPSG", 8806]], "#,
    r#"PARAMETER["False northing", 0, LENGTHUNIT["metre", 1], ID["EPSG", 8807]]], "#,
    r#"CS[Cartesian, 2], "#,
    r#"AXIS["Westing (W)", west, ORDER[1], LENGTHUNIT["metre", 1]], "#,
    r#"AXIS["Northing (N)", north, ORDER[2], LENGTHUNIT["metre", 1]], "#,
    r#"ID["IAU", 40111, 2015]]"#
);

/// A `GEODCRS[` opened but never completed
pub const MALFORMED_WKT: &str = r#"GEODCRS["Truncated (2015) - Sphere / Ocentric",
    DATUM["Truncated (2015) - Sphere","#;

/// The Sun definition laid out across lines, with a detached closing bracket
pub const MULTILINE_SUN_WKT: &str = r#"GEOGCRS["Sun (2015) - Sphere / Ocentric",
    DATUM["Sun (2015) - Sphere",
        ELLIPSOID["Sun (2015) - Sphere", 695700000, 0,
            LENGTHUNIT["metre", 1, ID["EPSG", 9001]]]
    ],
    PRIMEM["Reference Meridian", 0,
        ANGLEUNIT["degree", 0.0174532925199433, ID["EPSG", 9122]]],
    CS[ellipsoidal, 2],
        AXIS["geodetic latitude (Lat)", north,
            ORDER[1],
            ANGLEUNIT["degree", 0.0174532925199433]],
        AXIS["geodetic longitude (Lon)", east,
            ORDER[2],
            ANGLEUNIT["degree", 0.0174532925199433]],
    ID["IAU", 1000, 2015],
    REMARK["..."]]"#;

/// Canonical fixture for every template, in priority order
pub fn canonical_fixtures() -> [(CrsTemplate, &'static str); 8] {
    [
        (CrsTemplate::GeocentricBiaxial, GEOCENTRIC_BIAXIAL_WKT),
        (CrsTemplate::GeographicBiaxial, GEOGRAPHIC_BIAXIAL_WKT),
        (CrsTemplate::GeocentricTriaxial, GEOCENTRIC_TRIAXIAL_WKT),
        (CrsTemplate::GeographicTriaxial, GEOGRAPHIC_TRIAXIAL_WKT),
        (
            CrsTemplate::ProjectedBiaxialOcentric,
            PROJECTED_BIAXIAL_OCENTRIC_WKT,
        ),
        (
            CrsTemplate::ProjectedBiaxialOgraphic,
            PROJECTED_BIAXIAL_OGRAPHIC_WKT,
        ),
        (
            CrsTemplate::ProjectedTriaxialOcentric,
            PROJECTED_TRIAXIAL_OCENTRIC_WKT,
        ),
        (
            CrsTemplate::ProjectedTriaxialOgraphic,
            PROJECTED_TRIAXIAL_OGRAPHIC_WKT,
        ),
    ]
}

/// Join definitions into a corpus with one blank line between them
pub fn build_corpus(definitions: &[&str]) -> String {
    definitions.join("\n\n")
}

/// Corpus holding every canonical fixture
pub fn full_corpus() -> String {
    let definitions: Vec<&str> = canonical_fixtures()
        .iter()
        .map(|(_, wkt)| *wkt)
        .collect();
    build_corpus(&definitions)
}
