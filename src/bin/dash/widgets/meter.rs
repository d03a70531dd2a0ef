//! Inline percent meter for reliability and confidence cells
//!
//! A fixed-width text bar plus a percent label, suitable for table cells
//! where a full-width gauge would not fit. Color zones follow the usual
//! green/yellow/red reading of score percentages (high is good).

use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// Inline percent bar
pub struct Meter {
    percent: Option<f64>,
    width: usize,
}

impl Meter {
    /// Create a meter for a 0-100 value, clamped into range
    pub fn new(percent: f64) -> Self {
        Self {
            percent: Some(percent.clamp(0.0, 100.0)),
            width: 10,
        }
    }

    /// Create a meter for an absent value, rendered as "n/a"
    pub fn empty() -> Self {
        Self {
            percent: None,
            width: 10,
        }
    }

    /// Set bar width in characters
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Color zone for a score percentage (high is good)
    fn color(percent: f64) -> Color {
        if percent >= 90.0 {
            Color::Green
        } else if percent >= 75.0 {
            Color::Yellow
        } else {
            Color::Red
        }
    }

    /// Render as a styled span, e.g. `████████░░  95%`
    pub fn render(&self) -> Span<'static> {
        let Some(percent) = self.percent else {
            return Span::styled(
                format!("{:width$}  n/a", "", width = self.width),
                Style::default().fg(Color::DarkGray),
            );
        };

        let filled = ((percent / 100.0) * self.width as f64).round() as usize;
        let filled = filled.min(self.width);
        let bar: String = "█".repeat(filled) + &"░".repeat(self.width - filled);

        Span::styled(
            format!("{} {:>3.0}%", bar, percent),
            Style::default().fg(Self::color(percent)),
        )
    }

    /// Current value
    pub fn percent(&self) -> Option<f64> {
        self.percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_clamps_out_of_range() {
        assert_eq!(Meter::new(150.0).percent(), Some(100.0));
        assert_eq!(Meter::new(-5.0).percent(), Some(0.0));
    }

    #[test]
    fn test_meter_renders_bar_and_label() {
        let span = Meter::new(95.0).render();
        assert!(span.content.contains('█'));
        assert!(span.content.contains("95%"));
    }

    #[test]
    fn test_full_meter_has_no_empty_cells() {
        let span = Meter::new(100.0).render();
        assert!(!span.content.contains('░'));
    }

    #[test]
    fn test_empty_meter_renders_na() {
        let span = Meter::empty().render();
        assert!(span.content.contains("n/a"));
        assert!(!span.content.contains('█'));
    }

    #[test]
    fn test_color_zones() {
        assert_eq!(Meter::color(95.0), Color::Green);
        assert_eq!(Meter::color(80.0), Color::Yellow);
        assert_eq!(Meter::color(60.0), Color::Red);
    }
}
