//! Field extraction from a matched template
//!
//! Turns the named groups of a successful template match into a
//! [`DatabaseRecord`]. The origin convention comes from the template
//! identity alone.

use super::corpus::WktBlock;
use super::templates::CrsTemplate;
use crate::app::models::{DatabaseRecord, EllipsoidAxes};
use crate::constants::NO_PROJECTION;
use crate::{Error, Result};
use regex::Captures;

/// Build a record from the captures of `template` over `block.normalized`
pub fn extract_record(
    template: CrsTemplate,
    captures: &Captures<'_>,
    block: &WktBlock,
) -> Result<DatabaseRecord> {
    let field = |name: &str| required(captures, template, name);

    let ellipsoid = if template.is_triaxial() {
        EllipsoidAxes::Triaxial {
            semi_major: field("semi_major")?,
            semi_median: field("semi_median")?,
            semi_minor: field("semi_minor")?,
        }
    } else {
        EllipsoidAxes::Biaxial {
            semi_major: field("semi_major")?,
            flattening: field("flattening")?,
        }
    };

    let projection_name =
        optional(captures, "projcrs").unwrap_or_else(|| NO_PROJECTION.to_string());

    Ok(DatabaseRecord {
        template,
        crs_name: field("geodcrs")?,
        datum_name: field("datum")?,
        ellipsoid_name: field("ellipsoid")?,
        ellipsoid,
        cs_type: field("cs")?,
        cs_axis_count: field("cs_nb")?,
        latitude_axis_direction: field("latitude_asc")?,
        longitude_axis_direction: field("longitude_asc")?,
        origin_convention: template.origin_convention(),
        iau_code: field("iau_code")?,
        iau_version: field("iau_version")?,
        projection_name,
        conversion: optional(captures, "conversion"),
        longitude_axis_name: optional(captures, "longitude_name"),
        base_iau_code: optional(captures, "iau_code_body"),
        base_iau_version: optional(captures, "iau_version_body"),
        raw_wkt: block.raw.clone(),
    })
}

fn required(captures: &Captures<'_>, template: CrsTemplate, name: &str) -> Result<String> {
    optional(captures, name).ok_or_else(|| {
        Error::invalid_record(format!(
            "Template {} matched without capturing '{}'",
            template, name
        ))
    })
}

fn optional(captures: &Captures<'_>, name: &str) -> Option<String> {
    captures.name(name).map(|m| m.as_str().to_string())
}
