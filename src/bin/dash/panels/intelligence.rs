//! Intelligence panel - intel records and analyst reports

use super::{short_datetime, stat_card, truncate};
use crate::theme::{DashboardColors, VisualTreatment};
use crate::widgets::{Badge, Meter};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use taranis_core::aggregate::{count_where, group_counts, mean};
use taranis_core::types::{AnalysisRecord, AnalysisStatus, ThreatIntelRecord};
use taranis_core::Catalog;
use tracing::debug;

/// An analyst report with its intel references resolved to titles
struct ResolvedAnalysis {
    record: AnalysisRecord,
    /// One entry per reference; dangling references keep the raw id
    threat_titles: Vec<String>,
}

/// Intelligence panel widget
pub struct IntelligencePanel {
    intel: Vec<ThreatIntelRecord>,
    analyses: Vec<ResolvedAnalysis>,
}

impl IntelligencePanel {
    /// Build the panel, resolving analysis references against the catalog
    ///
    /// References are by convention only; a dangling id is displayed as-is.
    pub fn new(catalog: &Catalog) -> Self {
        let analyses = catalog
            .analyses
            .iter()
            .map(|record| {
                let threat_titles = record
                    .threats
                    .iter()
                    .map(|id| match catalog.intel_by_id(id) {
                        Ok(intel) => intel.title.clone(),
                        Err(err) => {
                            debug!("analysis {}: {}", record.id, err);
                            id.clone()
                        }
                    })
                    .collect();
                ResolvedAnalysis {
                    record: record.clone(),
                    threat_titles,
                }
            })
            .collect();

        Self {
            intel: catalog.intel.clone(),
            analyses,
        }
    }

    /// Number of intelligence records
    pub fn intel_count(&self) -> usize {
        self.intel.len()
    }

    /// Mean analyst confidence; `None` when no records exist
    fn mean_confidence(&self) -> Option<f64> {
        mean(&self.intel, |i| f64::from(i.confidence))
    }

    fn published_count(&self) -> usize {
        let records: Vec<&AnalysisRecord> = self.analyses.iter().map(|a| &a.record).collect();
        count_where(&records, |a| a.status == AnalysisStatus::Published)
    }

    /// Number of distinct providers across the intel collection
    fn distinct_sources(&self) -> usize {
        group_counts(&self.intel, |i| i.source.clone()).len()
    }

    /// Render the intelligence panel
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(12),
                Constraint::Length((self.analyses.len() as u16) * 3 + 2),
            ])
            .split(area);

        self.render_stat_cards(frame, chunks[0]);
        self.render_intel_list(frame, chunks[1]);
        self.render_analyses(frame, chunks[2]);
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
            "Intel Actifs",
            Span::styled(
                self.intel_count().to_string(),
                Style::default()
                    .fg(DashboardColors::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            "Renseignements disponibles",
        );

        let confidence_meter = match self.mean_confidence() {
            Some(value) => Meter::new(value),
            None => Meter::empty(),
        };
        stat_card(
            frame,
            cards[1],
            "Confiance Moyenne",
            confidence_meter.width(12).render(),
            "Tous renseignements",
        );
        stat_card(
            frame,
            cards[2],
            "Analyses Publiées",
            Span::styled(
                self.published_count().to_string(),
                Style::default()
                    .fg(DashboardColors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ),
            "Ce mois-ci",
        );
        stat_card(
            frame,
            cards[3],
            "Sources CTI",
            Span::styled(
                self.distinct_sources().to_string(),
                Style::default()
                    .fg(DashboardColors::HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            "Fournisseurs distincts",
        );
    }

    fn render_intel_list(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = if self.intel.is_empty() {
            vec![ListItem::new(Line::from(Span::styled(
                "Aucun renseignement disponible",
                Style::default()
                    .fg(DashboardColors::MUTED)
                    .add_modifier(Modifier::ITALIC),
            )))]
        } else {
            self.intel
                .iter()
                .flat_map(|intel| {
                    vec![
                        ListItem::new(Line::from(vec![
                            Badge::new(&intel.kind).render_icon_only(),
                            Span::raw(" "),
                            Span::styled(
                                intel.id.clone(),
                                Style::default().fg(DashboardColors::HIGHLIGHT),
                            ),
                            Span::raw(" "),
                            Badge::new(&intel.kind).show_icon(false).render(),
                            Span::raw(" "),
                            Badge::new(&intel.severity).render_icon_only(),
                            Span::raw(" "),
                            Span::styled(
                                truncate(&intel.title, 60),
                                Style::default().add_modifier(Modifier::BOLD),
                            ),
                        ])),
                        ListItem::new(Line::from(vec![
                            Span::raw("  "),
                            Span::raw("Confiance: "),
                            Meter::new(f64::from(intel.confidence)).width(8).render(),
                            Span::styled(
                                format!("  {}", intel.source),
                                Style::default().fg(DashboardColors::HIGHLIGHT),
                            ),
                            Span::styled(
                                format!("  [{}]", intel.tags.join(", ")),
                                Style::default().fg(DashboardColors::SECONDARY),
                            ),
                        ])),
                        ListItem::new(Line::from(Span::styled(
                            format!(
                                "  {} indicateurs • MITRE: {} • vu {} • dernière observation {}",
                                intel.indicators.len(),
                                intel.mitre_attack.join(", "),
                                short_datetime(intel.created_at),
                                short_datetime(intel.last_seen),
                            ),
                            Style::default().fg(DashboardColors::SECONDARY),
                        ))),
                    ]
                })
                .collect()
        };

        let list = List::new(items).block(
            Block::default()
                .title(format!("Threat Intelligence ({})", self.intel_count()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DashboardColors::BORDER)),
        );
        frame.render_widget(list, area);
    }

    fn render_analyses(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .analyses
            .iter()
            .flat_map(|analysis| {
                vec![
                    ListItem::new(Line::from(vec![
                        Badge::new(&analysis.record.status).render(),
                        Span::raw(" "),
                        Span::styled(
                            analysis.record.id.clone(),
                            Style::default().fg(DashboardColors::HIGHLIGHT),
                        ),
                        Span::raw(" "),
                        Span::styled(
                            truncate(&analysis.record.title, 54),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("  — {}", analysis.record.analyst),
                            Style::default().fg(DashboardColors::SECONDARY),
                        ),
                    ])),
                    ListItem::new(Line::from(Span::styled(
                        format!("  {}", truncate(&analysis.record.summary, 100)),
                        Style::default().fg(DashboardColors::TEXT),
                    ))),
                    ListItem::new(Line::from(Span::styled(
                        format!(
                            "  {} recommandations • menaces: {}",
                            analysis.record.recommendations.len(),
                            analysis.threat_titles.join(" ; "),
                        ),
                        Style::default().fg(DashboardColors::SECONDARY),
                    ))),
                ]
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(format!("Analyses ({})", self.analyses.len()))
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
    fn test_intelligence_counts() {
        let panel = IntelligencePanel::new(&Catalog::builtin());
        assert_eq!(panel.intel_count(), 3);
        assert_eq!(panel.published_count(), 1);
        assert_eq!(panel.distinct_sources(), 3);
    }

    #[test]
    fn test_mean_confidence() {
        let panel = IntelligencePanel::new(&Catalog::builtin());
        // (85 + 92 + 78) / 3
        assert_eq!(panel.mean_confidence(), Some(85.0));
    }

    #[test]
    fn test_analysis_references_resolve_to_titles() {
        let panel = IntelligencePanel::new(&Catalog::builtin());
        let monthly = &panel.analyses[0];
        assert_eq!(monthly.threat_titles.len(), 2);
        assert_eq!(
            monthly.threat_titles[0],
            "Lazarus Group - Nouvelles campagnes en Afrique"
        );
    }

    #[test]
    fn test_dangling_reference_keeps_raw_id() {
        let mut catalog = Catalog::builtin();
        catalog.analyses[0].threats.push("TI-2025-999".to_string());

        let panel = IntelligencePanel::new(&catalog);
        assert!(panel.analyses[0]
            .threat_titles
            .contains(&"TI-2025-999".to_string()));
    }

    #[test]
    fn test_empty_catalog() {
        let panel = IntelligencePanel::new(&Catalog::empty());
        assert_eq!(panel.intel_count(), 0);
        assert_eq!(panel.mean_confidence(), None);
        assert_eq!(panel.distinct_sources(), 0);
    }
}
