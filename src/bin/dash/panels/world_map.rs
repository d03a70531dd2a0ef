//! World threat map - canvas projection with severity markers
//!
//! Draws the world outline on a ratatui canvas and overlays one marker per
//! geolocated incident cluster, colored by severity, with a legend and a
//! per-city summary below.

use crate::theme::{DashboardColors, VisualTreatment};
use crate::widgets::Badge;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Map, MapResolution},
        Block, Borders, List, ListItem, Paragraph,
    },
    Frame,
};
use taranis_core::types::{GeoIncidentRecord, Severity};

/// World map view with incident markers
pub struct WorldMapView {
    markers: Vec<GeoIncidentRecord>,
}

impl WorldMapView {
    /// Create a map view over the geolocated incident clusters
    pub fn new(markers: Vec<GeoIncidentRecord>) -> Self {
        Self { markers }
    }

    /// Number of markers on the map
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Total incident count across all clusters
    pub fn total_incidents(&self) -> u32 {
        self.markers.iter().map(|m| m.count).sum()
    }

    /// Render map, legend and per-city summary
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(
                "Carte Mondiale des Menaces ({} foyers, {} incidents)",
                self.marker_count(),
                self.total_incidents()
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DashboardColors::BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let summary_height = (self.markers.len() as u16).min(6);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(1),
                Constraint::Length(summary_height),
            ])
            .split(inner);

        self.render_canvas(frame, chunks[0]);
        self.render_legend(frame, chunks[1]);
        self.render_summary(frame, chunks[2]);
    }

    fn render_canvas(&self, frame: &mut Frame, area: Rect) {
        let markers = self.markers.clone();
        let canvas = Canvas::default()
            .x_bounds([-180.0, 180.0])
            .y_bounds([-90.0, 90.0])
            .paint(move |ctx| {
                ctx.draw(&Map {
                    color: DashboardColors::MUTED,
                    resolution: MapResolution::High,
                });
                for marker in &markers {
                    ctx.print(
                        marker.lng,
                        marker.lat,
                        Line::from(Span::styled(
                            "●",
                            Style::default()
                                .fg(marker.severity.color())
                                .add_modifier(Modifier::BOLD),
                        )),
                    );
                }
            });
        frame.render_widget(canvas, area);
    }

    fn render_legend(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for severity in Severity::all() {
            spans.push(Badge::new(&severity).render());
            spans.push(Span::raw("  "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .markers
            .iter()
            .map(|marker| {
                ListItem::new(Line::from(vec![
                    Badge::new(&marker.severity).render_icon_only(),
                    Span::raw(" "),
                    Span::styled(
                        format!("{}, {}", marker.city, marker.country),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        marker.kind.clone(),
                        Style::default().fg(DashboardColors::HIGHLIGHT),
                    ),
                    Span::styled(
                        format!("  {} incidents", marker.count),
                        Style::default().fg(DashboardColors::SECONDARY),
                    ),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items), area);
    }
}
