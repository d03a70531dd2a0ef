//! Incidents panel - lifecycle stat cards plus active and resolved tables

use super::{short_datetime, stat_card, truncate};
use crate::theme::{DashboardColors, VisualTreatment};
use crate::widgets::Badge;
use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};
use taranis_core::aggregate::count_where;
use taranis_core::types::{IncidentRecord, IncidentStatus, Severity};

/// Incidents panel widget
pub struct IncidentsPanel {
    incidents: Vec<IncidentRecord>,
}

impl IncidentsPanel {
    /// Create a panel over the incident collection
    pub fn new(incidents: Vec<IncidentRecord>) -> Self {
        Self { incidents }
    }

    /// Number of tracked incidents
    pub fn incident_count(&self) -> usize {
        self.incidents.len()
    }

    fn open_count(&self) -> usize {
        count_where(&self.incidents, |i| i.status == IncidentStatus::Open)
    }

    fn investigating_count(&self) -> usize {
        count_where(&self.incidents, |i| {
            i.status == IncidentStatus::Investigating
        })
    }

    fn critical_count(&self) -> usize {
        count_where(&self.incidents, |i| i.severity == Severity::Critical)
    }

    /// Incidents resolved with their last update on the given calendar day
    fn resolved_on(&self, day: chrono::NaiveDate) -> usize {
        count_where(&self.incidents, |i| {
            i.status == IncidentStatus::Resolved && i.updated_at.date_naive() == day
        })
    }

    fn active_incidents(&self) -> Vec<&IncidentRecord> {
        self.incidents.iter().filter(|i| i.status.is_active()).collect()
    }

    fn settled_incidents(&self) -> Vec<&IncidentRecord> {
        self.incidents
            .iter()
            .filter(|i| !i.status.is_active())
            .collect()
    }

    /// Render the incidents panel
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let settled_height = (self.settled_incidents().len() as u16) + 4;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(6),
                Constraint::Length(settled_height),
            ])
            .split(area);

        self.render_stat_cards(frame, chunks[0]);
        self.render_active_table(frame, chunks[1]);
        self.render_settled_table(frame, chunks[2]);
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
            "Incidents Ouverts",
            Span::styled(
                self.open_count().to_string(),
                Style::default()
                    .fg(DashboardColors::ERROR)
                    .add_modifier(Modifier::BOLD),
            ),
            "Nécessitent une action",
        );
        stat_card(
            frame,
            cards[1],
            "Incidents Critiques",
            Span::styled(
                self.critical_count().to_string(),
                Style::default()
                    .fg(DashboardColors::ERROR)
                    .add_modifier(Modifier::BOLD),
            ),
            "Priorité maximale",
        );
        stat_card(
            frame,
            cards[2],
            "En Investigation",
            Span::styled(
                self.investigating_count().to_string(),
                Style::default()
                    .fg(IncidentStatus::Investigating.color())
                    .add_modifier(Modifier::BOLD),
            ),
            "En cours de traitement",
        );
        stat_card(
            frame,
            cards[3],
            "Résolus Aujourd'hui",
            Span::styled(
                self.resolved_on(Utc::now().date_naive()).to_string(),
                Style::default()
                    .fg(DashboardColors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ),
            "Incidents fermés",
        );
    }

    fn render_active_table(&self, frame: &mut Frame, area: Rect) {
        let active = self.active_incidents();

        let rows: Vec<Row> = active
            .iter()
            .map(|incident| {
                Row::new(vec![
                    Cell::from(incident.id.clone())
                        .style(Style::default().fg(DashboardColors::HIGHLIGHT)),
                    Cell::from(truncate(&incident.title, 34)),
                    Cell::from(Badge::new(&incident.severity).render()),
                    Cell::from(Badge::new(&incident.status).render()),
                    Cell::from(truncate(&incident.location, 16)),
                    Cell::from(truncate(&incident.assignee, 16)),
                    Cell::from(short_datetime(incident.updated_at))
                        .style(Style::default().fg(DashboardColors::SECONDARY)),
                ])
            })
            .collect();

        let header = Row::new(vec![
            "ID",
            "Incident",
            "Sévérité",
            "Statut",
            "Localisation",
            "Assigné à",
            "MAJ",
        ])
        .style(
            Style::default()
                .fg(DashboardColors::HEADER)
                .add_modifier(Modifier::BOLD),
        );

        let widths = [
            Constraint::Length(13),
            Constraint::Min(24),
            Constraint::Length(14),
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Length(11),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .title(format!("Incidents Actifs ({})", active.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(DashboardColors::BORDER)),
            )
            .column_spacing(1);

        frame.render_widget(table, area);
    }

    fn render_settled_table(&self, frame: &mut Frame, area: Rect) {
        let settled = self.settled_incidents();

        let rows: Vec<Row> = settled
            .iter()
            .map(|incident| {
                Row::new(vec![
                    Cell::from(incident.id.clone())
                        .style(Style::default().fg(DashboardColors::HIGHLIGHT)),
                    Cell::from(truncate(&incident.title, 34)),
                    Cell::from(Badge::new(&incident.status).render()),
                    Cell::from(format!("{}h", incident.resolution_hours())),
                    Cell::from(Badge::new(&incident.impact).render()),
                ])
            })
            .collect();

        let header = Row::new(vec![
            "ID",
            "Incident",
            "Résolution",
            "Temps de Résolution",
            "Impact",
        ])
        .style(
            Style::default()
                .fg(DashboardColors::HEADER)
                .add_modifier(Modifier::BOLD),
        );

        let widths = [
            Constraint::Length(13),
            Constraint::Min(24),
            Constraint::Length(14),
            Constraint::Length(20),
            Constraint::Length(12),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .title(format!("Incidents Résolus ({})", settled.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(DashboardColors::BORDER)),
            )
            .column_spacing(1);

        frame.render_widget(table, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use taranis_core::fixtures;

    #[test]
    fn test_incident_counts() {
        let panel = IncidentsPanel::new(fixtures::incidents());
        assert_eq!(panel.incident_count(), 4);
        assert_eq!(panel.open_count(), 1);
        assert_eq!(panel.investigating_count(), 2);
        assert_eq!(panel.critical_count(), 2);
    }

    #[test]
    fn test_active_and_settled_partition() {
        let panel = IncidentsPanel::new(fixtures::incidents());
        assert_eq!(
            panel.active_incidents().len() + panel.settled_incidents().len(),
            panel.incident_count()
        );
        assert_eq!(panel.active_incidents().len(), 3);
        assert_eq!(panel.settled_incidents().len(), 1);
    }

    #[test]
    fn test_resolved_on_fixture_day() {
        let panel = IncidentsPanel::new(fixtures::incidents());
        let fixture_day = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        assert_eq!(panel.resolved_on(fixture_day), 1);

        let other_day = NaiveDate::from_ymd_opt(2025, 1, 21).unwrap();
        assert_eq!(panel.resolved_on(other_day), 0);
    }

    #[test]
    fn test_settled_resolution_hours() {
        let panel = IncidentsPanel::new(fixtures::incidents());
        let settled = panel.settled_incidents();
        // INC-2025-003: 2025-01-19T16:20 -> 2025-01-20T08:30 is 16.17h
        assert_eq!(settled[0].resolution_hours(), 16);
    }

    #[test]
    fn test_empty_panel() {
        let panel = IncidentsPanel::new(Vec::new());
        assert_eq!(panel.open_count(), 0);
        assert!(panel.active_incidents().is_empty());
        assert!(panel.settled_incidents().is_empty());
    }
}
