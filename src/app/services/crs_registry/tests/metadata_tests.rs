//! Tests for load statistics and registry metadata

use super::*;
use crate::app::services::crs_registry::{LoadStats, RegistryMetadata};
use chrono::Utc;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_load_stats_new() {
    let stats = LoadStats::new();
    assert_eq!(stats.rows_inserted, 0);
    assert_eq!(stats.duplicates, 0);
    assert!(!stats.has_errors());
    assert_eq!(stats.loading_rate(), 0.0);
}

#[test]
fn test_load_stats_calculations() {
    let mut stats = LoadStats::new();
    stats.rows_inserted = 800;
    stats.load_duration = Duration::from_secs(4);
    assert_eq!(stats.loading_rate(), 200.0);
    assert!(!stats.has_errors());

    stats.parse.classification_failures = 1;
    assert!(stats.has_errors());
}

#[test]
fn test_load_stats_summary() {
    let mut stats = LoadStats::new();
    stats.parse.records_parsed = 12;
    stats.parse.classification_failures = 2;
    stats.rows_inserted = 10;
    stats.duplicates = 1;
    stats.rejected_records = 1;
    stats.load_duration = Duration::from_millis(1500);

    let summary = stats.summary();
    assert!(summary.contains("10 WKT rows"));
    assert!(summary.contains("12 records"));
    assert!(summary.contains("1 duplicates"));
    assert!(summary.contains("2 unclassified"));
    assert!(summary.contains("1.50s"));
}

#[test]
fn test_registry_metadata() {
    let mut registry = create_test_registry();
    registry.corpus_path = Some(PathBuf::from("data/result.wkts"));

    let metadata = registry.metadata();
    assert_eq!(metadata.row_count, 5);
    assert_eq!(metadata.version_count, 2);
    assert_eq!(metadata.solar_body_count, 3);
    assert_eq!(metadata.corpus_path, Some(PathBuf::from("data/result.wkts")));
    assert!(metadata.age().num_seconds() < 60);

    let summary = metadata.summary();
    assert!(summary.contains("5 WKTs"));
    assert!(summary.contains("3 solar bodies"));
    assert!(summary.contains("2 IAU versions"));
}

#[test]
fn test_empty_registry_metadata() {
    let metadata = RegistryMetadata {
        corpus_path: None,
        row_count: 0,
        version_count: 0,
        solar_body_count: 0,
        loaded_at: Utc::now(),
    };

    assert!(metadata.summary().starts_with("Registry with 0 WKTs"));
}
