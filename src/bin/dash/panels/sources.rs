//! Sources panel - collection health, volume and reliability

use super::{relative_time, short_datetime, stat_card, truncate};
use crate::theme::{DashboardColors, VisualTreatment};
use crate::widgets::{Badge, Meter};
use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use taranis_core::aggregate::{count_where, group_counts, mean, sum_by};
use taranis_core::types::{SourceRecord, SourceStatus};

/// Sources panel widget
pub struct SourcesPanel {
    sources: Vec<SourceRecord>,
}

impl SourcesPanel {
    /// Create a panel over the source collection
    pub fn new(sources: Vec<SourceRecord>) -> Self {
        Self { sources }
    }

    /// Number of configured sources
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    fn active_count(&self) -> usize {
        count_where(&self.sources, |s| s.status == SourceStatus::Active)
    }

    fn articles_total(&self) -> u64 {
        sum_by(&self.sources, |s| s.articles_count)
    }

    /// Mean reliability; `None` when no sources are configured
    fn mean_reliability(&self) -> Option<f64> {
        mean(&self.sources, |s| f64::from(s.reliability))
    }

    /// Category breakdown sorted by descending count
    fn category_breakdown(&self) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> =
            group_counts(&self.sources, |s| s.category.clone())
                .into_iter()
                .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    /// Render the sources panel
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(7),
                Constraint::Length(3),
            ])
            .split(area);

        self.render_stat_cards(frame, chunks[0]);
        self.render_table(frame, chunks[1]);
        self.render_categories(frame, chunks[2]);
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
            "Sources Actives",
            Span::styled(
                format!("{}/{}", self.active_count(), self.source_count()),
                Style::default()
                    .fg(DashboardColors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ),
            "Sources totales",
        );
        stat_card(
            frame,
            cards[1],
            "Articles Collectés",
            Span::styled(
                self.articles_total().to_string(),
                Style::default()
                    .fg(DashboardColors::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            "Derniers 30 jours",
        );

        let reliability_meter = match self.mean_reliability() {
            Some(value) => Meter::new(value),
            None => Meter::empty(),
        };
        stat_card(
            frame,
            cards[2],
            "Fiabilité Moyenne",
            reliability_meter.width(12).render(),
            "Toutes sources",
        );

        let last_sync = self
            .sources
            .iter()
            .map(|s| s.last_update)
            .max()
            .map(|ts| relative_time(ts, Utc::now()))
            .unwrap_or_else(|| "n/a".to_string());
        stat_card(
            frame,
            cards[3],
            "Dernière Sync",
            Span::styled(
                last_sync,
                Style::default()
                    .fg(DashboardColors::HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            "Synchronisation auto",
        );
    }

    fn render_table(&self, frame: &mut Frame, area: Rect) {
        let rows: Vec<Row> = self
            .sources
            .iter()
            .map(|source| {
                Row::new(vec![
                    Cell::from(Line::from(vec![
                        Badge::new(&source.kind).render_icon_only(),
                        Span::raw(" "),
                        Span::styled(
                            truncate(&source.name, 22),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                    ])),
                    Cell::from(Badge::new(&source.kind).show_icon(false).bold(false).render()),
                    Cell::from(Badge::new(&source.status).render()),
                    Cell::from(Meter::new(f64::from(source.reliability)).render()),
                    Cell::from(source.articles_count.to_string()),
                    Cell::from(short_datetime(source.last_update))
                        .style(Style::default().fg(DashboardColors::SECONDARY)),
                    Cell::from(truncate(&source.category, 20))
                        .style(Style::default().fg(DashboardColors::SECONDARY)),
                ])
            })
            .collect();

        let header = Row::new(vec![
            "Source",
            "Type",
            "Statut",
            "Fiabilité",
            "Articles",
            "MAJ",
            "Catégorie",
        ])
        .style(
            Style::default()
                .fg(DashboardColors::HEADER)
                .add_modifier(Modifier::BOLD),
        );

        let widths = [
            Constraint::Min(24),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Length(11),
            Constraint::Length(20),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .title(format!("Gestion des Sources ({})", self.source_count()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(DashboardColors::BORDER)),
            )
            .column_spacing(1);

        frame.render_widget(table, area);
    }

    fn render_categories(&self, frame: &mut Frame, area: Rect) {
        let text = if self.sources.is_empty() {
            "aucune donnée".to_string()
        } else {
            self.category_breakdown()
                .iter()
                .map(|(category, count)| format!("{} {}", category, count))
                .collect::<Vec<_>>()
                .join("  •  ")
        };

        let paragraph = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(DashboardColors::HIGHLIGHT),
        )))
        .block(
            Block::default()
                .title("Catégories")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DashboardColors::BORDER)),
        );
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taranis_core::fixtures;

    #[test]
    fn test_source_counts() {
        let panel = SourcesPanel::new(fixtures::sources());
        assert_eq!(panel.source_count(), 5);
        assert_eq!(panel.active_count(), 4);
        assert_eq!(panel.articles_total(), 5836);
    }

    #[test]
    fn test_mean_reliability_of_fixture_set() {
        let panel = SourcesPanel::new(fixtures::sources());
        let reliability = panel.mean_reliability().unwrap();
        assert!((reliability - 89.8).abs() < 1e-9);
    }

    #[test]
    fn test_mean_reliability_empty_is_none() {
        let panel = SourcesPanel::new(Vec::new());
        assert_eq!(panel.mean_reliability(), None);
    }

    #[test]
    fn test_category_breakdown_counts_cover_collection() {
        let panel = SourcesPanel::new(fixtures::sources());
        let breakdown = panel.category_breakdown();
        let total: usize = breakdown.iter().map(|(_, count)| count).sum();
        assert_eq!(total, panel.source_count());
        assert_eq!(breakdown.len(), 5);
    }
}
