//! End-to-end test: catalog -> summary -> JSON snapshot

use taranis_core::aggregate::{count_where, elapsed_whole_hours, mean};
use taranis_core::types::{IncidentStatus, Severity};
use taranis_core::{Catalog, DashboardSummary};

#[test]
fn builtin_catalog_summary_matches_fixture_dataset() {
    let catalog = Catalog::builtin();
    let summary = DashboardSummary::compute(&catalog);

    assert_eq!(summary.threats.total, 3);
    assert_eq!(summary.threats.critical, 1);
    assert_eq!(summary.threats.active_alerts, 2);

    assert_eq!(summary.incidents.total, 4);
    assert_eq!(summary.incidents.open, 1);
    assert_eq!(summary.incidents.investigating, 2);
    assert_eq!(summary.incidents.critical, 2);
    assert_eq!(summary.incidents.resolved, 1);

    assert_eq!(summary.sources.total, 5);
    assert_eq!(summary.sources.active, 4);
    assert_eq!(summary.sources.articles_total, 5836);
    assert!((summary.sources.mean_reliability.unwrap() - 89.8).abs() < 1e-9);

    assert_eq!(summary.intel.records, 3);
    assert_eq!(summary.intel.mean_confidence, Some(85.0));
    assert_eq!(summary.intel.published_analyses, 1);
    assert_eq!(summary.intel.distinct_sources, 3);
}

#[test]
fn incident_status_counts_partition_the_collection() {
    let catalog = Catalog::builtin();
    let by_status = [
        IncidentStatus::Open,
        IncidentStatus::Investigating,
        IncidentStatus::Resolved,
        IncidentStatus::Closed,
    ];
    let total: usize = by_status
        .iter()
        .map(|status| count_where(&catalog.incidents, |i| i.status == *status))
        .sum();
    assert_eq!(total, catalog.incidents.len());
}

#[test]
fn severity_counts_partition_the_threat_collection() {
    let catalog = Catalog::builtin();
    let total: usize = Severity::all()
        .iter()
        .map(|severity| count_where(&catalog.threats, |t| t.severity == *severity))
        .sum();
    assert_eq!(total, catalog.threats.len());
}

#[test]
fn hospital_ransomware_resolution_time_is_fifteen_hours() {
    let catalog = Catalog::builtin();
    let hospital = catalog
        .incidents
        .iter()
        .find(|i| i.id == "INC-2025-004")
        .expect("fixture incident present");
    // 2025-01-19T22:45 -> 2025-01-20T14:00 is 15.25h, floored to 15
    assert_eq!(
        elapsed_whole_hours(hospital.created_at, hospital.updated_at),
        15
    );
}

#[test]
fn snapshot_json_is_well_formed() {
    let catalog = Catalog::builtin();
    let summary = DashboardSummary::compute(&catalog);
    let json = summary.to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["threats"]["critical"], 1);
    assert_eq!(value["sources"]["articles_total"], 5836);
    assert_eq!(value["incidents"]["investigating"], 2);
    assert!((value["sources"]["mean_reliability"].as_f64().unwrap() - 89.8).abs() < 1e-9);
}

#[test]
fn empty_catalog_serializes_means_as_null() {
    let summary = DashboardSummary::compute(&Catalog::empty());
    let json = summary.to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["sources"]["mean_reliability"].is_null());
    assert!(value["intel"]["mean_confidence"].is_null());
    assert!(value["incidents"]["mean_resolution_hours"].is_null());
    assert_eq!(value["threats"]["total"], 0);
}

#[test]
fn mean_is_sum_over_len_for_fixture_confidences() {
    let catalog = Catalog::builtin();
    let sum: f64 = catalog.intel.iter().map(|i| f64::from(i.confidence)).sum();
    let expected = sum / catalog.intel.len() as f64;
    let actual = mean(&catalog.intel, |i| f64::from(i.confidence)).unwrap();
    assert!((actual - expected).abs() < 1e-9);
}

#[test]
fn every_analysis_reference_resolves_in_the_builtin_catalog() {
    let catalog = Catalog::builtin();
    for analysis in &catalog.analyses {
        for threat_ref in &analysis.threats {
            assert!(catalog.intel_by_id(threat_ref).is_ok());
        }
    }
}
