//! Dashboard color palette and enum-to-treatment mapping
//!
//! Every closed enumeration of the data model maps to exactly one visual
//! treatment (color token, label, icon glyph). The mappings are exhaustive
//! `match` expressions so the compiler enforces totality when a variant is
//! added; there is no fallback branch because the sets are closed.

use ratatui::style::Color;
use taranis_core::types::{
    AnalysisStatus, Impact, IncidentStatus, IntelKind, Severity, SourceKind, SourceStatus,
};

/// Color palette for dashboard chrome
///
/// Panels use these constants for everything that is not driven by a
/// domain enumeration.
pub struct DashboardColors;

impl DashboardColors {
    /// Panel borders
    pub const BORDER: Color = Color::Cyan;

    /// Headers and column labels
    pub const HEADER: Color = Color::Yellow;

    /// Primary text
    pub const TEXT: Color = Color::White;

    /// Secondary text (timestamps, metadata)
    pub const SECONDARY: Color = Color::DarkGray;

    /// Highlighted text (selected tab, record ids)
    pub const HIGHLIGHT: Color = Color::Cyan;

    /// Healthy / positive values
    pub const SUCCESS: Color = Color::Green;

    /// Degraded / attention values
    pub const WARNING: Color = Color::Yellow;

    /// Failure / critical values
    pub const ERROR: Color = Color::Red;

    /// Disabled or empty-state text
    pub const MUTED: Color = Color::DarkGray;

    /// Chart series accent
    pub const ACCENT: Color = Color::Blue;
}

/// Visual treatment of a closed enumeration value
///
/// Implementations must be total: every variant yields a non-empty label
/// and icon and a concrete color token.
pub trait VisualTreatment {
    /// Color token for badges and markers
    fn color(&self) -> Color;

    /// Short display label
    fn label(&self) -> &'static str;

    /// Single-glyph icon
    fn icon(&self) -> &'static str;
}

impl VisualTreatment for Severity {
    fn color(&self) -> Color {
        match self {
            Severity::Critical => Color::Red,
            Severity::High => Color::LightRed,
            Severity::Medium => Color::Yellow,
            Severity::Low => Color::Blue,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critique",
            Severity::High => "Élevé",
            Severity::Medium => "Moyen",
            Severity::Low => "Faible",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Severity::Critical => "●",
            Severity::High => "●",
            Severity::Medium => "●",
            Severity::Low => "●",
        }
    }
}

impl VisualTreatment for IncidentStatus {
    fn color(&self) -> Color {
        match self {
            IncidentStatus::Open => Color::Red,
            IncidentStatus::Investigating => Color::LightRed,
            IncidentStatus::Resolved => Color::Green,
            IncidentStatus::Closed => Color::Gray,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "Ouvert",
            IncidentStatus::Investigating => "Investigation",
            IncidentStatus::Resolved => "Résolu",
            IncidentStatus::Closed => "Fermé",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "⚠",
            IncidentStatus::Investigating => "◐",
            IncidentStatus::Resolved => "✓",
            IncidentStatus::Closed => "✗",
        }
    }
}

impl VisualTreatment for SourceStatus {
    fn color(&self) -> Color {
        match self {
            SourceStatus::Active => Color::Green,
            SourceStatus::Inactive => Color::Gray,
            SourceStatus::Error => Color::Red,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SourceStatus::Active => "Actif",
            SourceStatus::Inactive => "Inactif",
            SourceStatus::Error => "Erreur",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            SourceStatus::Active => "✓",
            SourceStatus::Inactive => "○",
            SourceStatus::Error => "✗",
        }
    }
}

impl VisualTreatment for SourceKind {
    fn color(&self) -> Color {
        match self {
            SourceKind::Rss => Color::Yellow,
            SourceKind::Api => Color::Blue,
            SourceKind::Osint => Color::Cyan,
            SourceKind::Cti => Color::Magenta,
            SourceKind::Manual => Color::Gray,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SourceKind::Rss => "RSS",
            SourceKind::Api => "API",
            SourceKind::Osint => "OSINT",
            SourceKind::Cti => "CTI",
            SourceKind::Manual => "Manuel",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            SourceKind::Rss => "∿",
            SourceKind::Api => "▤",
            SourceKind::Osint => "◍",
            SourceKind::Cti => "✦",
            SourceKind::Manual => "✎",
        }
    }
}

impl VisualTreatment for IntelKind {
    fn color(&self) -> Color {
        match self {
            IntelKind::Ioc => Color::Cyan,
            IntelKind::Ttps => Color::Blue,
            IntelKind::Campaign => Color::Magenta,
            IntelKind::Actor => Color::LightRed,
            IntelKind::Malware => Color::Red,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            IntelKind::Ioc => "IOC",
            IntelKind::Ttps => "TTPs",
            IntelKind::Campaign => "Campagne",
            IntelKind::Actor => "Acteur",
            IntelKind::Malware => "Malware",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            IntelKind::Ioc => "#",
            IntelKind::Ttps => "≡",
            IntelKind::Campaign => "↗",
            IntelKind::Actor => "◎",
            IntelKind::Malware => "⚠",
        }
    }
}

impl VisualTreatment for AnalysisStatus {
    fn color(&self) -> Color {
        match self {
            AnalysisStatus::Draft => Color::Gray,
            AnalysisStatus::Review => Color::Yellow,
            AnalysisStatus::Published => Color::Green,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AnalysisStatus::Draft => "Brouillon",
            AnalysisStatus::Review => "Relecture",
            AnalysisStatus::Published => "Publié",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            AnalysisStatus::Draft => "○",
            AnalysisStatus::Review => "◐",
            AnalysisStatus::Published => "✓",
        }
    }
}

impl VisualTreatment for Impact {
    fn color(&self) -> Color {
        match self {
            Impact::High => Color::Red,
            Impact::Medium => Color::Yellow,
            Impact::Low => Color::Green,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Impact::High => "Fort",
            Impact::Medium => "Modéré",
            Impact::Low => "Limité",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Impact::High => "▲",
            Impact::Medium => "■",
            Impact::Low => "▼",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_total<T: VisualTreatment>(value: T) {
        assert!(!value.label().is_empty());
        assert!(!value.icon().is_empty());
        assert_ne!(value.color(), Color::Reset);
    }

    #[test]
    fn test_severity_treatment_is_total() {
        for severity in Severity::all() {
            assert_total(severity);
        }
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(Severity::Critical.color(), Color::Red);
        assert_eq!(Severity::High.color(), Color::LightRed);
        assert_eq!(Severity::Medium.color(), Color::Yellow);
        assert_eq!(Severity::Low.color(), Color::Blue);
    }

    #[test]
    fn test_incident_status_treatment_is_total() {
        for status in [
            IncidentStatus::Open,
            IncidentStatus::Investigating,
            IncidentStatus::Resolved,
            IncidentStatus::Closed,
        ] {
            assert_total(status);
        }
    }

    #[test]
    fn test_source_treatments_are_total() {
        for status in [
            SourceStatus::Active,
            SourceStatus::Inactive,
            SourceStatus::Error,
        ] {
            assert_total(status);
        }
        for kind in [
            SourceKind::Rss,
            SourceKind::Api,
            SourceKind::Osint,
            SourceKind::Cti,
            SourceKind::Manual,
        ] {
            assert_total(kind);
        }
    }

    #[test]
    fn test_intel_and_analysis_treatments_are_total() {
        for kind in [
            IntelKind::Ioc,
            IntelKind::Ttps,
            IntelKind::Campaign,
            IntelKind::Actor,
            IntelKind::Malware,
        ] {
            assert_total(kind);
        }
        for status in [
            AnalysisStatus::Draft,
            AnalysisStatus::Review,
            AnalysisStatus::Published,
        ] {
            assert_total(status);
        }
        for impact in [Impact::High, Impact::Medium, Impact::Low] {
            assert_total(impact);
        }
    }
}
