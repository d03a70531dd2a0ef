//! Analytics panel - trend, distribution and volume charts
//!
//! Four quadrants over the reporting-period series: per-family detection
//! trends, severity distribution with percentage shares, detection-channel
//! volumes and regional volumes with the local share highlighted.

use crate::theme::{DashboardColors, VisualTreatment};
use crate::widgets::{Badge, Sparkline};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use taranis_core::aggregate::share;
use taranis_core::types::{ChannelVolume, RegionVolume, SeverityBucket, TrendPoint};

/// Width of the horizontal bars in the volume charts
const BAR_WIDTH: usize = 20;

/// Proportional horizontal bar against a maximum
fn bar(value: u32, max: u32, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = ((value as usize) * width) / (max as usize);
    "█".repeat(filled.min(width))
}

/// One trend series extracted from the monthly points
struct TrendSeries {
    label: &'static str,
    color: Color,
    values: Vec<u32>,
}

impl TrendSeries {
    fn total(&self) -> u32 {
        self.values.iter().sum()
    }

    fn latest(&self) -> u32 {
        self.values.last().copied().unwrap_or(0)
    }
}

/// Analytics panel widget
pub struct AnalyticsPanel {
    trend: Vec<TrendPoint>,
    severity_distribution: Vec<SeverityBucket>,
    channel_volumes: Vec<ChannelVolume>,
    region_volumes: Vec<RegionVolume>,
}

impl AnalyticsPanel {
    /// Create a panel over the chart series
    pub fn new(
        trend: Vec<TrendPoint>,
        severity_distribution: Vec<SeverityBucket>,
        channel_volumes: Vec<ChannelVolume>,
        region_volumes: Vec<RegionVolume>,
    ) -> Self {
        Self {
            trend,
            severity_distribution,
            channel_volumes,
            region_volumes,
        }
    }

    /// Per-family series across the trend months
    fn trend_series(&self) -> Vec<TrendSeries> {
        vec![
            TrendSeries {
                label: "Malware",
                color: Color::Red,
                values: self.trend.iter().map(|p| p.malware).collect(),
            },
            TrendSeries {
                label: "Phishing",
                color: Color::LightRed,
                values: self.trend.iter().map(|p| p.phishing).collect(),
            },
            TrendSeries {
                label: "Ransomware",
                color: Color::Yellow,
                values: self.trend.iter().map(|p| p.ransomware).collect(),
            },
            TrendSeries {
                label: "APT",
                color: Color::Blue,
                values: self.trend.iter().map(|p| p.apt).collect(),
            },
        ]
    }

    /// Total detections across the severity distribution
    fn severity_total(&self) -> u32 {
        self.severity_distribution.iter().map(|b| b.count).sum()
    }

    /// Render the analytics panel
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        self.render_trend(frame, top[0]);
        self.render_severity_distribution(frame, top[1]);
        self.render_channels(frame, bottom[0]);
        self.render_regions(frame, bottom[1]);
    }

    fn render_trend(&self, frame: &mut Frame, area: Rect) {
        let period = match (self.trend.first(), self.trend.last()) {
            (Some(first), Some(last)) => format!("{}–{}", first.month, last.month),
            _ => "aucune donnée".to_string(),
        };

        let mut items: Vec<ListItem> = Vec::new();
        for series in self.trend_series() {
            let sparkline = Sparkline::new(&series.values)
                .style(Style::default().fg(series.color));
            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<11}", series.label),
                    Style::default().fg(series.color).add_modifier(Modifier::BOLD),
                ),
                sparkline.render(),
                Span::styled(
                    format!("  dernier: {}  total: {}", series.latest(), series.total()),
                    Style::default().fg(DashboardColors::SECONDARY),
                ),
            ])));
        }

        let list = List::new(items).block(
            Block::default()
                .title(format!("Tendances des Menaces ({})", period))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DashboardColors::BORDER)),
        );
        frame.render_widget(list, area);
    }

    fn render_severity_distribution(&self, frame: &mut Frame, area: Rect) {
        let total = self.severity_total();
        let max = self
            .severity_distribution
            .iter()
            .map(|b| b.count)
            .max()
            .unwrap_or(0);

        let items: Vec<ListItem> = self
            .severity_distribution
            .iter()
            .map(|bucket| {
                let pct = share(bucket.count as usize, total as usize)
                    .map(|p| format!("{:.0}%", p))
                    .unwrap_or_else(|| "n/a".to_string());
                ListItem::new(Line::from(vec![
                    Badge::new(&bucket.severity).render_icon_only(),
                    Span::styled(
                        format!(" {:<8}", bucket.severity.label()),
                        Style::default().fg(bucket.severity.color()),
                    ),
                    Span::styled(
                        format!("{:<width$}", bar(bucket.count, max, BAR_WIDTH), width = BAR_WIDTH),
                        Style::default().fg(bucket.severity.color()),
                    ),
                    Span::styled(
                        format!(" {} ({})", bucket.count, pct),
                        Style::default().fg(DashboardColors::SECONDARY),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(format!("Distribution par Sévérité ({} total)", total))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DashboardColors::BORDER)),
        );
        frame.render_widget(list, area);
    }

    fn render_channels(&self, frame: &mut Frame, area: Rect) {
        let max = self
            .channel_volumes
            .iter()
            .map(|c| c.incidents)
            .max()
            .unwrap_or(0);

        let items: Vec<ListItem> = self
            .channel_volumes
            .iter()
            .map(|channel| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<13}", channel.channel),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(
                            "{:<width$}",
                            bar(channel.incidents, max, BAR_WIDTH),
                            width = BAR_WIDTH
                        ),
                        Style::default().fg(DashboardColors::ACCENT),
                    ),
                    Span::styled(
                        format!(" {}", channel.incidents),
                        Style::default().fg(DashboardColors::SECONDARY),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title("Analyse des Sources")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DashboardColors::BORDER)),
        );
        frame.render_widget(list, area);
    }

    fn render_regions(&self, frame: &mut Frame, area: Rect) {
        let max = self
            .region_volumes
            .iter()
            .map(|r| r.incidents)
            .max()
            .unwrap_or(0);

        let items: Vec<ListItem> = self
            .region_volumes
            .iter()
            .map(|region| {
                let mut spans = vec![
                    Span::styled(
                        format!("{:<19}", region.region),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(
                            "{:<width$}",
                            bar(region.incidents, max, BAR_WIDTH),
                            width = BAR_WIDTH
                        ),
                        Style::default().fg(DashboardColors::ACCENT),
                    ),
                    Span::styled(
                        format!(" {}", region.incidents),
                        Style::default().fg(DashboardColors::SECONDARY),
                    ),
                ];
                if region.local > 0 {
                    spans.push(Span::styled(
                        format!("  dont {} Sénégal", region.local),
                        Style::default()
                            .fg(DashboardColors::ERROR)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title("Distribution Géographique")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DashboardColors::BORDER)),
        );
        frame.render_widget(list, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taranis_core::fixtures;

    fn fixture_panel() -> AnalyticsPanel {
        AnalyticsPanel::new(
            fixtures::threat_trend(),
            fixtures::severity_distribution(),
            fixtures::channel_volumes(),
            fixtures::region_volumes(),
        )
    }

    #[test]
    fn test_trend_series_extraction() {
        let panel = fixture_panel();
        let series = panel.trend_series();
        assert_eq!(series.len(), 4);

        let malware = &series[0];
        assert_eq!(malware.values, vec![45, 52, 48, 61, 55, 67]);
        assert_eq!(malware.latest(), 67);
        assert_eq!(malware.total(), 328);
    }

    #[test]
    fn test_severity_total() {
        let panel = fixture_panel();
        assert_eq!(panel.severity_total(), 234 + 456 + 789 + 345);
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(10, 10, 20).chars().count(), 20);
        assert_eq!(bar(5, 10, 20).chars().count(), 10);
        assert_eq!(bar(0, 10, 20), "");
    }

    #[test]
    fn test_bar_zero_max() {
        assert_eq!(bar(5, 0, 20), "");
    }

    #[test]
    fn test_empty_series() {
        let panel = AnalyticsPanel::new(Vec::new(), Vec::new(), Vec::new(), Vec::new());
        assert_eq!(panel.severity_total(), 0);
        assert!(panel.trend_series().iter().all(|s| s.values.is_empty()));
    }
}
