//! Shared test utilities and fixtures for CRS registry tests

use super::{CrsRegistry, RecordSink};
use crate::app::models::{OriginConvention, WktRow};
use crate::constants::NO_PROJECTION;

pub mod metadata_tests;

/// Create a test row with a minimal WKT body
pub fn create_test_row(version: u32, code: u32, solar_body: &str, triaxial: bool) -> WktRow {
    let ellipsoid = if triaxial {
        format!("TRIAXIAL[\"{} ({})\", 13000, 11400, 9100]", solar_body, version)
    } else {
        format!("ELLIPSOID[\"{} ({})\", 3396190, 0]", solar_body, version)
    };

    WktRow {
        id: format!("IAU:{}:{}", version, code),
        version,
        code,
        solar_body: solar_body.to_string(),
        datum_name: format!("{} ({})", solar_body, version),
        ellipsoid_name: format!("{} ({})", solar_body, version),
        projection_name: NO_PROJECTION.to_string(),
        wkt: format!(
            "GEODCRS[\"{} ({}) / Ocentric\", DATUM[\"{} ({})\", {}]]",
            solar_body, version, solar_body, version, ellipsoid
        ),
        origin_convention: OriginConvention::Ocentric,
    }
}

/// Registry with two versions, three bodies and one triaxial body
pub fn create_test_registry() -> CrsRegistry {
    let mut registry = CrsRegistry::new();
    let rows = [
        create_test_row(2015, 49900, "Mars", false),
        create_test_row(2015, 49901, "Mars", false),
        create_test_row(2015, 40103, "Phobos", true),
        create_test_row(2015, 1000, "Sun", false),
        create_test_row(2018, 49900, "Mars", false),
    ];

    for row in rows {
        registry.insert(row).unwrap();
    }
    registry
}
