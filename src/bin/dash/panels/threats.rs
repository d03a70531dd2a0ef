//! Threats panel - severity breakdown and detailed threat list

use super::{short_datetime, truncate};
use crate::theme::{DashboardColors, VisualTreatment};
use crate::widgets::Badge;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use taranis_core::aggregate::{count_where, group_counts};
use taranis_core::types::{Severity, ThreatRecord};

/// Threats panel widget
pub struct ThreatsPanel {
    threats: Vec<ThreatRecord>,
}

impl ThreatsPanel {
    /// Create a panel over the threat collection
    pub fn new(threats: Vec<ThreatRecord>) -> Self {
        Self { threats }
    }

    /// Number of threats in the collection
    pub fn threat_count(&self) -> usize {
        self.threats.len()
    }

    /// Count of threats at one severity
    fn count_at(&self, severity: Severity) -> usize {
        count_where(&self.threats, |t| t.severity == severity)
    }

    /// Threat-family breakdown sorted by descending count
    fn kind_breakdown(&self) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> =
            group_counts(&self.threats, |t| t.kind.clone())
                .into_iter()
                .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    /// Render the threats panel
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(6),
            ])
            .split(area);

        self.render_severity_line(frame, chunks[0]);
        self.render_kind_breakdown(frame, chunks[1]);
        self.render_list(frame, chunks[2]);
    }

    fn render_severity_line(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for severity in Severity::all() {
            spans.push(Badge::new(&severity).render_icon_only());
            spans.push(Span::styled(
                format!(" {} {}", self.count_at(severity), severity.label()),
                Style::default().fg(severity.color()),
            ));
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("Total: {}", self.threat_count()),
            Style::default().add_modifier(Modifier::BOLD),
        ));

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title("Par Sévérité")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DashboardColors::BORDER)),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_kind_breakdown(&self, frame: &mut Frame, area: Rect) {
        let text = if self.threats.is_empty() {
            "aucune donnée".to_string()
        } else {
            self.kind_breakdown()
                .iter()
                .map(|(kind, count)| format!("{}: {}", kind, count))
                .collect::<Vec<_>>()
                .join("  |  ")
        };

        let paragraph = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(DashboardColors::HIGHLIGHT),
        )))
        .block(
            Block::default()
                .title("Par Type")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DashboardColors::BORDER)),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = if self.threats.is_empty() {
            vec![ListItem::new(Line::from(Span::styled(
                "Aucune menace détectée",
                Style::default()
                    .fg(DashboardColors::MUTED)
                    .add_modifier(Modifier::ITALIC),
            )))]
        } else {
            self.threats
                .iter()
                .flat_map(|threat| {
                    vec![
                        ListItem::new(Line::from(vec![
                            Badge::new(&threat.severity).render_icon_only(),
                            Span::raw(" "),
                            Span::styled(
                                threat.title.clone(),
                                Style::default().add_modifier(Modifier::BOLD),
                            ),
                            Span::raw("  "),
                            Badge::new(&threat.severity).show_icon(false).render(),
                        ])),
                        ListItem::new(Line::from(vec![
                            Span::styled(
                                format!("  {}", truncate(&threat.description, 90)),
                                Style::default().fg(DashboardColors::TEXT),
                            ),
                            Span::styled(
                                format!(
                                    "  ({} • {} • {})",
                                    threat.kind,
                                    threat.location,
                                    short_datetime(threat.timestamp)
                                ),
                                Style::default().fg(DashboardColors::SECONDARY),
                            ),
                        ])),
                    ]
                })
                .collect()
        };

        let list = List::new(items).block(
            Block::default()
                .title(format!("Menaces Récentes ({})", self.threat_count()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DashboardColors::BORDER)),
        );
        frame.render_widget(list, area);
    }
}
