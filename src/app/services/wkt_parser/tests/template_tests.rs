//! Tests for the template table and classification order

use super::*;
use crate::app::models::OriginConvention;
use crate::app::services::wkt_parser::WktParser;
use crate::app::services::wkt_parser::templates::compile_all;
use std::collections::HashSet;

#[test]
fn test_all_templates_compile() {
    let compiled = compile_all().unwrap();
    assert_eq!(compiled.len(), 8);

    let order: Vec<CrsTemplate> = compiled.iter().map(|c| c.template).collect();
    assert_eq!(order, CrsTemplate::ALL.to_vec());
}

#[test]
fn test_priority_order() {
    assert_eq!(
        CrsTemplate::ALL,
        [
            CrsTemplate::GeocentricBiaxial,
            CrsTemplate::GeographicBiaxial,
            CrsTemplate::GeocentricTriaxial,
            CrsTemplate::GeographicTriaxial,
            CrsTemplate::ProjectedBiaxialOcentric,
            CrsTemplate::ProjectedBiaxialOgraphic,
            CrsTemplate::ProjectedTriaxialOcentric,
            CrsTemplate::ProjectedTriaxialOgraphic,
        ]
    );
}

#[test]
fn test_template_exclusivity() {
    let parser = WktParser::new().unwrap();

    for (expected, wkt) in canonical_fixtures() {
        let matches = parser.matching_templates(wkt);
        assert_eq!(
            matches,
            vec![expected],
            "fixture for {} matched {:?}",
            expected,
            matches
        );
    }
}

#[test]
fn test_classify_canonical_fixtures() {
    let parser = WktParser::new().unwrap();

    for (expected, wkt) in canonical_fixtures() {
        assert_eq!(parser.classify(wkt), Some(expected));
    }
}

#[test]
fn test_origin_convention_table() {
    let ocentric = [
        CrsTemplate::GeocentricBiaxial,
        CrsTemplate::GeocentricTriaxial,
        CrsTemplate::ProjectedBiaxialOcentric,
        CrsTemplate::ProjectedTriaxialOcentric,
    ];

    for template in CrsTemplate::ALL {
        let expected = if ocentric.contains(&template) {
            OriginConvention::Ocentric
        } else {
            OriginConvention::Ographic
        };
        assert_eq!(template.origin_convention(), expected, "{}", template);
    }
}

#[test]
fn test_origin_convention_follows_root_keyword() {
    for (template, wkt) in canonical_fixtures() {
        let geodetic_root = wkt.starts_with("GEODCRS[") || wkt.contains("BASEGEODCRS[");
        let expected = if geodetic_root {
            OriginConvention::Ocentric
        } else {
            OriginConvention::Ographic
        };
        assert_eq!(template.origin_convention(), expected, "{}", template);
    }
}

#[test]
fn test_template_shape_flags() {
    let projected: Vec<_> = CrsTemplate::ALL
        .iter()
        .filter(|t| t.is_projected())
        .collect();
    let triaxial: Vec<_> = CrsTemplate::ALL
        .iter()
        .filter(|t| t.is_triaxial())
        .collect();

    assert_eq!(projected.len(), 4);
    assert_eq!(triaxial.len(), 4);
    assert!(CrsTemplate::ProjectedTriaxialOgraphic.is_projected());
    assert!(CrsTemplate::ProjectedTriaxialOgraphic.is_triaxial());
    assert!(!CrsTemplate::GeocentricBiaxial.is_projected());
    assert!(!CrsTemplate::GeocentricBiaxial.is_triaxial());
}

#[test]
fn test_template_names_are_unique() {
    let names: HashSet<&str> = CrsTemplate::ALL.iter().map(|t| t.name()).collect();
    assert_eq!(names.len(), 8);
    assert_eq!(
        CrsTemplate::ProjectedBiaxialOcentric.to_string(),
        "projected_biaxial_ocentric"
    );
}

#[test]
fn test_template_serializes_as_name() {
    let json = serde_json::to_string(&CrsTemplate::GeographicTriaxial).unwrap();
    assert_eq!(json, "\"geographic_triaxial\"");

    let parsed: CrsTemplate = serde_json::from_str("\"geocentric_biaxial\"").unwrap();
    assert_eq!(parsed, CrsTemplate::GeocentricBiaxial);
}

#[test]
fn test_patterns_are_anchored() {
    let parser = WktParser::new().unwrap();
    let prefixed = format!("REMARK[\"x\"], {}", GEOGRAPHIC_BIAXIAL_WKT);
    assert_eq!(parser.classify(&prefixed), None);
}

#[test]
fn test_non_numeric_iau_code_fails_classification() {
    let parser = WktParser::new().unwrap();
    let wkt = GEOGRAPHIC_BIAXIAL_WKT.replace(r#"ID["IAU", 1000, 2015]"#, r#"ID["IAU", SUN, 2015]"#);
    assert_eq!(parser.classify(&wkt), None);
}

#[test]
fn test_prime_meridian_is_contract_text() {
    let parser = WktParser::new().unwrap();
    let wkt = GEOCENTRIC_BIAXIAL_WKT.replace("Reference Meridian", "Greenwich");
    assert!(parser.matching_templates(&wkt).is_empty());

    let wkt = GEOCENTRIC_BIAXIAL_WKT.replace("0.0174532925199433", "0.0174532925199433x");
    assert!(parser.matching_templates(&wkt).is_empty());
}

#[test]
fn test_degree_factor_dot_is_literal() {
    let parser = WktParser::new().unwrap();
    let wkt = GEOCENTRIC_BIAXIAL_WKT.replace("0.0174532925199433", "0x0174532925199433");
    assert_eq!(parser.classify(&wkt), None);
}
