//! Immutable data snapshot backing the dashboard
//!
//! A [`Catalog`] bundles every record collection behind one value that the
//! UI borrows from. Collections are fixed for the lifetime of a session;
//! panels clone what they display and recompute aggregates on each render.

use crate::error::{Result, TaranisError};
use crate::fixtures;
use crate::types::{
    AlertRecord, AnalysisRecord, ChannelVolume, GeoIncidentRecord, IncidentRecord, RegionVolume,
    SeverityBucket, SourceRecord, ThreatIntelRecord, ThreatRecord, TrendPoint,
};
use chrono::{DateTime, Utc};

/// All record collections displayed by the dashboard
#[derive(Debug, Clone)]
pub struct Catalog {
    pub threats: Vec<ThreatRecord>,
    pub incidents: Vec<IncidentRecord>,
    pub sources: Vec<SourceRecord>,
    pub intel: Vec<ThreatIntelRecord>,
    pub analyses: Vec<AnalysisRecord>,
    pub geo_incidents: Vec<GeoIncidentRecord>,
    pub alerts: Vec<AlertRecord>,
    pub threat_trend: Vec<TrendPoint>,
    pub severity_distribution: Vec<SeverityBucket>,
    pub channel_volumes: Vec<ChannelVolume>,
    pub region_volumes: Vec<RegionVolume>,
}

impl Catalog {
    /// Assemble the built-in demonstration dataset
    pub fn builtin() -> Self {
        Self {
            threats: fixtures::threats(),
            incidents: fixtures::incidents(),
            sources: fixtures::sources(),
            intel: fixtures::intel(),
            analyses: fixtures::analyses(),
            geo_incidents: fixtures::geo_incidents(),
            alerts: fixtures::alerts(),
            threat_trend: fixtures::threat_trend(),
            severity_distribution: fixtures::severity_distribution(),
            channel_volumes: fixtures::channel_volumes(),
            region_volumes: fixtures::region_volumes(),
        }
    }

    /// An empty catalog, useful for exercising no-data rendering paths
    pub fn empty() -> Self {
        Self {
            threats: Vec::new(),
            incidents: Vec::new(),
            sources: Vec::new(),
            intel: Vec::new(),
            analyses: Vec::new(),
            geo_incidents: Vec::new(),
            alerts: Vec::new(),
            threat_trend: Vec::new(),
            severity_distribution: Vec::new(),
            channel_volumes: Vec::new(),
            region_volumes: Vec::new(),
        }
    }

    /// True when every record collection is empty
    pub fn is_empty(&self) -> bool {
        self.threats.is_empty()
            && self.incidents.is_empty()
            && self.sources.is_empty()
            && self.intel.is_empty()
            && self.analyses.is_empty()
            && self.geo_incidents.is_empty()
    }

    /// Resolve an analysis threat reference to its intelligence record
    ///
    /// References are by convention only; a dangling id yields
    /// [`TaranisError::RecordNotFound`].
    pub fn intel_by_id(&self, id: &str) -> Result<&ThreatIntelRecord> {
        self.intel
            .iter()
            .find(|record| record.id == id)
            .ok_or_else(|| TaranisError::RecordNotFound(id.to_string()))
    }

    /// Timestamp of the most recent source update
    pub fn latest_source_update(&self) -> Result<DateTime<Utc>> {
        self.sources
            .iter()
            .map(|s| s.last_update)
            .max()
            .ok_or(TaranisError::MissingData("sources"))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_populated() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.sources.len(), 5);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_intel_by_id_resolves() {
        let catalog = Catalog::builtin();
        let record = catalog.intel_by_id("TI-2025-002").unwrap();
        assert_eq!(record.title, "LockBit 3.0 - Nouvelle variante détectée");
    }

    #[test]
    fn test_intel_by_id_dangling_reference() {
        let catalog = Catalog::builtin();
        let err = catalog.intel_by_id("TI-2025-999").unwrap_err();
        assert!(matches!(err, TaranisError::RecordNotFound(_)));
    }

    #[test]
    fn test_analysis_references_resolve() {
        let catalog = Catalog::builtin();
        for analysis in &catalog.analyses {
            for threat_ref in &analysis.threats {
                assert!(
                    catalog.intel_by_id(threat_ref).is_ok(),
                    "analysis {} references unknown intel {}",
                    analysis.id,
                    threat_ref
                );
            }
        }
    }

    #[test]
    fn test_latest_source_update() {
        let catalog = Catalog::builtin();
        let latest = catalog.latest_source_update().unwrap();
        // Dark Web Monitoring carries the newest update in the fixture set
        assert_eq!(latest.to_rfc3339(), "2025-01-20T14:35:00+00:00");
    }

    #[test]
    fn test_latest_source_update_missing_data() {
        let catalog = Catalog::empty();
        let err = catalog.latest_source_update().unwrap_err();
        assert!(matches!(err, TaranisError::MissingData("sources")));
    }
}
