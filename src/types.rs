//! Core data types for the Taranis dashboard
//!
//! This module defines the domain records displayed by the dashboard panels
//! and the closed enumerations that drive both business meaning and visual
//! treatment. Records are immutable fixture entries; nothing mutates them
//! after construction, and every derived value is recomputed from the static
//! set on each render.

use crate::error::TaranisError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Threat and incident severity
///
/// Closed set; a value outside it is a data-entry error, not a runtime
/// state. Ordering for display uses [`Severity::rank`] (critical first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// All severities in display order
    pub fn all() -> [Severity; 4] {
        [
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Low,
        ]
    }

    /// Numeric rank for sorting, lower = more severe
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
        }
    }

    /// Whether this severity demands an operator response
    pub fn is_actionable(&self) -> bool {
        matches!(self, Severity::Critical | Severity::High)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Severity {
    type Err = TaranisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            other => Err(TaranisError::UnknownEnumValue {
                field: "severity",
                value: other.to_string(),
            }),
        }
    }
}

/// Incident lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    Open,
    Investigating,
    Resolved,
    Closed,
}

impl IncidentStatus {
    /// Whether the incident still needs work (open or investigating)
    pub fn is_active(&self) -> bool {
        matches!(self, IncidentStatus::Open | IncidentStatus::Investigating)
    }
}

impl std::fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IncidentStatus::Open => "open",
            IncidentStatus::Investigating => "investigating",
            IncidentStatus::Resolved => "resolved",
            IncidentStatus::Closed => "closed",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for IncidentStatus {
    type Err = TaranisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(IncidentStatus::Open),
            "investigating" => Ok(IncidentStatus::Investigating),
            "resolved" => Ok(IncidentStatus::Resolved),
            "closed" => Ok(IncidentStatus::Closed),
            other => Err(TaranisError::UnknownEnumValue {
                field: "incident status",
                value: other.to_string(),
            }),
        }
    }
}

/// Collection mechanism of an intelligence source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    #[serde(rename = "RSS")]
    Rss,
    #[serde(rename = "API")]
    Api,
    #[serde(rename = "OSINT")]
    Osint,
    #[serde(rename = "CTI")]
    Cti,
    #[serde(rename = "Manual")]
    Manual,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SourceKind::Rss => "RSS",
            SourceKind::Api => "API",
            SourceKind::Osint => "OSINT",
            SourceKind::Cti => "CTI",
            SourceKind::Manual => "Manual",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SourceKind {
    type Err = TaranisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RSS" => Ok(SourceKind::Rss),
            "API" => Ok(SourceKind::Api),
            "OSINT" => Ok(SourceKind::Osint),
            "CTI" => Ok(SourceKind::Cti),
            "Manual" => Ok(SourceKind::Manual),
            other => Err(TaranisError::UnknownEnumValue {
                field: "source kind",
                value: other.to_string(),
            }),
        }
    }
}

/// Health of an intelligence source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceStatus {
    Active,
    Inactive,
    Error,
}

impl std::fmt::Display for SourceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SourceStatus::Active => "active",
            SourceStatus::Inactive => "inactive",
            SourceStatus::Error => "error",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SourceStatus {
    type Err = TaranisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(SourceStatus::Active),
            "inactive" => Ok(SourceStatus::Inactive),
            "error" => Ok(SourceStatus::Error),
            other => Err(TaranisError::UnknownEnumValue {
                field: "source status",
                value: other.to_string(),
            }),
        }
    }
}

/// Classification of an intelligence record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntelKind {
    #[serde(rename = "IOC")]
    Ioc,
    #[serde(rename = "TTPs")]
    Ttps,
    #[serde(rename = "Campaign")]
    Campaign,
    #[serde(rename = "Actor")]
    Actor,
    #[serde(rename = "Malware")]
    Malware,
}

impl std::fmt::Display for IntelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IntelKind::Ioc => "IOC",
            IntelKind::Ttps => "TTPs",
            IntelKind::Campaign => "Campaign",
            IntelKind::Actor => "Actor",
            IntelKind::Malware => "Malware",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for IntelKind {
    type Err = TaranisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IOC" => Ok(IntelKind::Ioc),
            "TTPs" => Ok(IntelKind::Ttps),
            "Campaign" => Ok(IntelKind::Campaign),
            "Actor" => Ok(IntelKind::Actor),
            "Malware" => Ok(IntelKind::Malware),
            other => Err(TaranisError::UnknownEnumValue {
                field: "intel kind",
                value: other.to_string(),
            }),
        }
    }
}

/// Publication state of an analyst report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Draft,
    Review,
    Published,
}

impl std::fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AnalysisStatus::Draft => "draft",
            AnalysisStatus::Review => "review",
            AnalysisStatus::Published => "published",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for AnalysisStatus {
    type Err = TaranisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(AnalysisStatus::Draft),
            "review" => Ok(AnalysisStatus::Review),
            "published" => Ok(AnalysisStatus::Published),
            other => Err(TaranisError::UnknownEnumValue {
                field: "analysis status",
                value: other.to_string(),
            }),
        }
    }
}

/// Business impact of an incident, tracked independently of severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Impact {
    type Err = TaranisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Impact::High),
            "medium" => Ok(Impact::Medium),
            "low" => Ok(Impact::Low),
            other => Err(TaranisError::UnknownEnumValue {
                field: "impact",
                value: other.to_string(),
            }),
        }
    }
}

/// A detected threat shown on the overview and threat panels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatRecord {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    /// Free-form threat family, e.g. "Ransomware"
    pub kind: String,
    pub location: String,
    pub timestamp: DateTime<Utc>,
    pub description: String,
}

/// A tracked security incident
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub kind: String,
    /// Affected systems or organizations
    pub affected: Vec<String>,
    pub reporter: String,
    pub assignee: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub location: String,
    pub impact: Impact,
}

impl IncidentRecord {
    /// Time from creation to the last update, in whole hours
    ///
    /// Meaningful as a resolution time once the incident is resolved or
    /// closed; for active incidents it is simply the age of the record.
    pub fn resolution_hours(&self) -> u64 {
        crate::aggregate::elapsed_whole_hours(self.created_at, self.updated_at)
    }
}

/// An intelligence collection source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub id: String,
    pub name: String,
    pub kind: SourceKind,
    pub url: String,
    pub status: SourceStatus,
    pub last_update: DateTime<Utc>,
    /// Reliability score as a percentage, 0-100
    pub reliability: u8,
    pub articles_count: u64,
    pub category: String,
}

/// A threat intelligence record (IOC set, actor profile, campaign, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatIntelRecord {
    pub id: String,
    pub title: String,
    pub kind: IntelKind,
    /// Analyst confidence as a percentage, 0-100
    pub confidence: u8,
    pub severity: Severity,
    pub source: String,
    pub tags: Vec<String>,
    pub description: String,
    pub indicators: Vec<String>,
    /// MITRE ATT&CK technique ids, e.g. "T1566.001"
    pub mitre_attack: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

/// An analyst report referencing intelligence records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: String,
    pub title: String,
    pub analyst: String,
    pub status: AnalysisStatus,
    /// References to [`ThreatIntelRecord::id`] by convention, unenforced
    pub threats: Vec<String>,
    pub summary: String,
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A geolocated incident cluster used for map markers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoIncidentRecord {
    pub id: String,
    pub country: String,
    pub city: String,
    pub kind: String,
    pub severity: Severity,
    pub count: u32,
    pub lat: f64,
    pub lng: f64,
}

/// A recent-alert entry shown on the overview strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub title: String,
    pub detail: String,
    /// Age of the alert in minutes at snapshot time
    pub minutes_ago: u32,
    pub severity: Severity,
}

/// One month of per-family threat counts for the trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub malware: u32,
    pub phishing: u32,
    pub ransomware: u32,
    pub apt: u32,
}

impl TrendPoint {
    /// Total detections across all families for this month
    pub fn total(&self) -> u32 {
        self.malware + self.phishing + self.ransomware + self.apt
    }
}

/// Aggregate detection count for one severity, for the distribution chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityBucket {
    pub severity: Severity,
    pub count: u32,
}

/// Incident volume attributed to one detection channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelVolume {
    pub channel: String,
    pub incidents: u32,
}

/// Incident volume for one world region, with the locally-relevant share
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionVolume {
    pub region: String,
    pub incidents: u32,
    /// Incidents touching the home constituency within the region
    pub local: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_rank_ordering() {
        assert!(Severity::Critical.rank() < Severity::High.rank());
        assert!(Severity::High.rank() < Severity::Medium.rank());
        assert!(Severity::Medium.rank() < Severity::Low.rank());
    }

    #[test]
    fn test_severity_actionable() {
        assert!(Severity::Critical.is_actionable());
        assert!(Severity::High.is_actionable());
        assert!(!Severity::Medium.is_actionable());
        assert!(!Severity::Low.is_actionable());
    }

    #[test]
    fn test_severity_round_trip() {
        for severity in Severity::all() {
            let parsed: Severity = severity.to_string().parse().unwrap();
            assert_eq!(parsed, severity);
        }
    }

    #[test]
    fn test_severity_rejects_unknown_value() {
        let err = "catastrophic".parse::<Severity>().unwrap_err();
        assert!(matches!(
            err,
            TaranisError::UnknownEnumValue { field: "severity", .. }
        ));
    }

    #[test]
    fn test_incident_status_active() {
        assert!(IncidentStatus::Open.is_active());
        assert!(IncidentStatus::Investigating.is_active());
        assert!(!IncidentStatus::Resolved.is_active());
        assert!(!IncidentStatus::Closed.is_active());
    }

    #[test]
    fn test_source_kind_display_matches_wire_name() {
        assert_eq!(SourceKind::Rss.to_string(), "RSS");
        assert_eq!(SourceKind::Cti.to_string(), "CTI");
        assert_eq!("OSINT".parse::<SourceKind>().unwrap(), SourceKind::Osint);
    }

    #[test]
    fn test_intel_kind_round_trip() {
        for kind in [
            IntelKind::Ioc,
            IntelKind::Ttps,
            IntelKind::Campaign,
            IntelKind::Actor,
            IntelKind::Malware,
        ] {
            let parsed: IntelKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_enum_serde_tags() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(serde_json::to_string(&SourceKind::Rss).unwrap(), "\"RSS\"");
        assert_eq!(
            serde_json::to_string(&IncidentStatus::Investigating).unwrap(),
            "\"investigating\""
        );
    }

    #[test]
    fn test_trend_point_total() {
        let point = TrendPoint {
            month: "Jan".to_string(),
            malware: 45,
            phishing: 23,
            ransomware: 12,
            apt: 8,
        };
        assert_eq!(point.total(), 88);
    }
}
