//! Dashboard panels
//!
//! One module per navigation entry. Each panel owns the record collections
//! it displays (cloned once from the catalog at startup) and recomputes its
//! aggregates from scratch on every render; the collections never change
//! during a session.

pub mod analytics;
pub mod incidents;
pub mod intelligence;
pub mod overview;
pub mod sources;
pub mod threats;
pub mod world_map;

pub use analytics::AnalyticsPanel;
pub use incidents::IncidentsPanel;
pub use intelligence::IntelligencePanel;
pub use overview::OverviewPanel;
pub use sources::SourcesPanel;
pub use threats::ThreatsPanel;
pub use world_map::WorldMapView;

use crate::theme::DashboardColors;
use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render one bordered stat card: headline value plus a one-line caption
pub(crate) fn stat_card(frame: &mut Frame, area: Rect, title: &str, value: Span<'_>, caption: &str) {
    let text = vec![
        Line::from(value),
        Line::from(Span::styled(
            caption.to_string(),
            Style::default().fg(DashboardColors::SECONDARY),
        )),
    ];
    let card = Paragraph::new(text).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DashboardColors::BORDER)),
    );
    frame.render_widget(card, area);
}

/// Truncate to a maximum number of characters, appending an ellipsis
///
/// Char-based, not byte-based: record text contains accented characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    } else {
        s.to_string()
    }
}

/// Compact absolute timestamp for table cells
pub(crate) fn short_datetime(ts: DateTime<Utc>) -> String {
    ts.format("%d/%m %H:%M").to_string()
}

/// Relative age against a reference instant
pub(crate) fn relative_time(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(ts);
    if age.num_seconds() < 60 {
        format!("il y a {}s", age.num_seconds().max(0))
    } else if age.num_minutes() < 60 {
        format!("il y a {}min", age.num_minutes())
    } else if age.num_hours() < 48 {
        format!("il y a {}h", age.num_hours())
    } else {
        format!("il y a {}j", age.num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s)
            .map(|t| t.with_timezone(&Utc))
            .unwrap()
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("court", 10), "court");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        // Accented text must not split inside a code point
        let truncated = truncate("Défacement Site Web Municipal", 10);
        assert_eq!(truncated.chars().count(), 10);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn test_short_datetime_format() {
        assert_eq!(short_datetime(ts("2025-01-20T14:15:00Z")), "20/01 14:15");
    }

    #[test]
    fn test_relative_time_units() {
        let now = ts("2025-01-20T14:00:00Z");
        assert_eq!(relative_time(ts("2025-01-20T13:59:30Z"), now), "il y a 30s");
        assert_eq!(relative_time(ts("2025-01-20T13:45:00Z"), now), "il y a 15min");
        assert_eq!(relative_time(ts("2025-01-20T08:00:00Z"), now), "il y a 6h");
        assert_eq!(relative_time(ts("2025-01-15T14:00:00Z"), now), "il y a 5j");
    }
}
