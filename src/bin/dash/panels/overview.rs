//! Overview panel - at-a-glance situation summary
//!
//! Top row of stat cards, the world threat map beside the recent-alerts
//! strip, and the recent-threats list. Aggregates are recomputed from the
//! owned collections on every render.

use super::world_map::WorldMapView;
use super::{short_datetime, stat_card};
use crate::theme::{DashboardColors, VisualTreatment};
use crate::widgets::Badge;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem},
    Frame,
};
use taranis_core::aggregate::count_where;
use taranis_core::types::{AlertRecord, Severity, SourceStatus, ThreatRecord};
use taranis_core::Catalog;

/// Static security posture shown on the gauge card; presented by the
/// product as chrome, with no backing dataset
const SECURITY_POSTURE: f64 = 75.0;

/// Overview panel widget
pub struct OverviewPanel {
    threats: Vec<ThreatRecord>,
    alerts: Vec<AlertRecord>,
    sources_active: usize,
    sources_total: usize,
    map: WorldMapView,
}

impl OverviewPanel {
    /// Build the overview from a catalog snapshot
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            threats: catalog.threats.clone(),
            alerts: catalog.alerts.clone(),
            sources_active: count_where(&catalog.sources, |s| s.status == SourceStatus::Active),
            sources_total: catalog.sources.len(),
            map: WorldMapView::new(catalog.geo_incidents.clone()),
        }
    }

    /// Count of critical threats
    fn critical_count(&self) -> usize {
        count_where(&self.threats, |t| t.severity == Severity::Critical)
    }

    /// Count of threats demanding an operator response
    fn active_alert_count(&self) -> usize {
        count_where(&self.threats, |t| t.severity.is_actionable())
    }

    /// Render the overview panel
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let threats_height = (self.threats.len() as u16) * 2 + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(14),
                Constraint::Length(threats_height),
            ])
            .split(area);

        self.render_stat_cards(frame, chunks[0]);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(chunks[1]);
        self.map.render(frame, middle[0]);
        self.render_alerts(frame, middle[1]);

        self.render_recent_threats(frame, chunks[2]);
    }

    fn render_stat_cards(&self, frame: &mut Frame, area: Rect) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);

        stat_card(
            frame,
            cards[0],
            "Menaces Critiques",
            Span::styled(
                self.critical_count().to_string(),
                Style::default()
                    .fg(DashboardColors::ERROR)
                    .add_modifier(Modifier::BOLD),
            ),
            "Dernières 24h",
        );
        stat_card(
            frame,
            cards[1],
            "Alertes Actives",
            Span::styled(
                self.active_alert_count().to_string(),
                Style::default()
                    .fg(Severity::High.color())
                    .add_modifier(Modifier::BOLD),
            ),
            "Nécessitent une action",
        );
        stat_card(
            frame,
            cards[2],
            "Sources Actives",
            Span::styled(
                format!("{}/{}", self.sources_active, self.sources_total),
                Style::default()
                    .fg(DashboardColors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ),
            "Sources surveillées",
        );

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title("Niveau de Sécurité")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(DashboardColors::BORDER)),
            )
            .gauge_style(Style::default().fg(DashboardColors::SUCCESS))
            .label(format!("{:.0}%", SECURITY_POSTURE))
            .ratio(SECURITY_POSTURE / 100.0);
        frame.render_widget(gauge, cards[3]);
    }

    fn render_alerts(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = if self.alerts.is_empty() {
            vec![ListItem::new(Line::from(Span::styled(
                "Aucune alerte récente",
                Style::default()
                    .fg(DashboardColors::MUTED)
                    .add_modifier(Modifier::ITALIC),
            )))]
        } else {
            self.alerts
                .iter()
                .flat_map(|alert| {
                    vec![
                        ListItem::new(Line::from(vec![
                            Badge::new(&alert.severity).render_icon_only(),
                            Span::raw(" "),
                            Span::styled(
                                alert.title.clone(),
                                Style::default().add_modifier(Modifier::BOLD),
                            ),
                            Span::styled(
                                format!("  il y a {}min", alert.minutes_ago),
                                Style::default().fg(DashboardColors::SECONDARY),
                            ),
                        ])),
                        ListItem::new(Line::from(Span::styled(
                            format!("  {}", alert.detail),
                            Style::default().fg(DashboardColors::SECONDARY),
                        ))),
                    ]
                })
                .collect()
        };

        let list = List::new(items).block(
            Block::default()
                .title("Alertes Récentes")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DashboardColors::BORDER)),
        );
        frame.render_widget(list, area);
    }

    fn render_recent_threats(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .threats
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
                    ListItem::new(Line::from(Span::styled(
                        format!(
                            "  {} • {} • {}",
                            threat.kind,
                            threat.location,
                            short_datetime(threat.timestamp)
                        ),
                        Style::default().fg(DashboardColors::SECONDARY),
                    ))),
                ]
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title("Menaces Récentes")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DashboardColors::BORDER)),
        );
        frame.render_widget(list, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_counts_from_builtin_catalog() {
        let panel = OverviewPanel::new(&Catalog::builtin());
        assert_eq!(panel.critical_count(), 1);
        assert_eq!(panel.active_alert_count(), 2);
        assert_eq!(panel.sources_active, 4);
        assert_eq!(panel.sources_total, 5);
    }

    #[test]
    fn test_overview_empty_catalog() {
        let panel = OverviewPanel::new(&Catalog::empty());
        assert_eq!(panel.critical_count(), 0);
        assert_eq!(panel.active_alert_count(), 0);
        assert_eq!(panel.map.marker_count(), 0);
    }
}
