//! Derived dashboard summary
//!
//! [`DashboardSummary`] collects the scalar aggregates the panels display,
//! recomputed from a [`Catalog`] snapshot. The `--snapshot` CLI mode prints
//! it as JSON for headless use.

use crate::aggregate::{count_where, group_counts, mean, sum_by};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::types::{AnalysisStatus, IncidentStatus, Severity, SourceStatus};
use serde::Serialize;

/// Threat-level counts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreatSummary {
    pub total: usize,
    pub critical: usize,
    /// Threats demanding an operator response (critical + high)
    pub active_alerts: usize,
}

/// Incident lifecycle counts and resolution statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentSummary {
    pub total: usize,
    pub open: usize,
    pub investigating: usize,
    pub critical: usize,
    pub resolved: usize,
    /// Mean time from creation to last update over resolved incidents,
    /// in whole hours; `None` when nothing is resolved yet
    pub mean_resolution_hours: Option<f64>,
}

/// Source health and collection volume
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceSummary {
    pub total: usize,
    pub active: usize,
    pub articles_total: u64,
    /// `None` when the source collection is empty
    pub mean_reliability: Option<f64>,
    pub categories: usize,
}

/// Intelligence and reporting counts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntelSummary {
    pub records: usize,
    /// `None` when the intel collection is empty
    pub mean_confidence: Option<f64>,
    pub published_analyses: usize,
    pub distinct_sources: usize,
}

/// Scalar aggregates derived from one catalog snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub threats: ThreatSummary,
    pub incidents: IncidentSummary,
    pub sources: SourceSummary,
    pub intel: IntelSummary,
}

impl DashboardSummary {
    /// Recompute every aggregate from the snapshot
    pub fn compute(catalog: &Catalog) -> Self {
        let threats = ThreatSummary {
            total: catalog.threats.len(),
            critical: count_where(&catalog.threats, |t| t.severity == Severity::Critical),
            active_alerts: count_where(&catalog.threats, |t| t.severity.is_actionable()),
        };

        let resolved: Vec<_> = catalog
            .incidents
            .iter()
            .filter(|i| i.status == IncidentStatus::Resolved)
            .cloned()
            .collect();
        let incidents = IncidentSummary {
            total: catalog.incidents.len(),
            open: count_where(&catalog.incidents, |i| i.status == IncidentStatus::Open),
            investigating: count_where(&catalog.incidents, |i| {
                i.status == IncidentStatus::Investigating
            }),
            critical: count_where(&catalog.incidents, |i| i.severity == Severity::Critical),
            resolved: resolved.len(),
            mean_resolution_hours: mean(&resolved, |i| i.resolution_hours() as f64),
        };

        let sources = SourceSummary {
            total: catalog.sources.len(),
            active: count_where(&catalog.sources, |s| s.status == SourceStatus::Active),
            articles_total: sum_by(&catalog.sources, |s| s.articles_count),
            mean_reliability: mean(&catalog.sources, |s| f64::from(s.reliability)),
            categories: group_counts(&catalog.sources, |s| s.category.clone()).len(),
        };

        let intel = IntelSummary {
            records: catalog.intel.len(),
            mean_confidence: mean(&catalog.intel, |i| f64::from(i.confidence)),
            published_analyses: count_where(&catalog.analyses, |a| {
                a.status == AnalysisStatus::Published
            }),
            distinct_sources: group_counts(&catalog.intel, |i| i.source.clone()).len(),
        };

        Self {
            threats,
            incidents,
            sources,
            intel,
        }
    }

    /// Serialize the summary for the headless snapshot mode
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
