//! Status badge widget - color-coded enum treatments
//!
//! Renders any closed enumeration value as a styled span through its
//! [`VisualTreatment`], the way the web product rendered severity dots
//! and status pills.

use crate::theme::VisualTreatment;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

/// Badge over a treatment-carrying enum value
pub struct Badge {
    color: ratatui::style::Color,
    label: &'static str,
    icon: &'static str,
    show_icon: bool,
    bold: bool,
}

impl Badge {
    /// Create a badge from a treatment
    pub fn new(treatment: &dyn VisualTreatment) -> Self {
        Self {
            color: treatment.color(),
            label: treatment.label(),
            icon: treatment.icon(),
            show_icon: true,
            bold: true,
        }
    }

    /// Set whether to show the icon glyph
    pub fn show_icon(mut self, show: bool) -> Self {
        self.show_icon = show;
        self
    }

    /// Set whether to render bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Render as a styled span
    pub fn render(&self) -> Span<'static> {
        let content = if self.show_icon {
            format!("{} {}", self.icon, self.label)
        } else {
            self.label.to_string()
        };

        let mut style = Style::default().fg(self.color);
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        Span::styled(content, style)
    }

    /// Render just the icon glyph
    pub fn render_icon_only(&self) -> Span<'static> {
        Span::styled(
            self.icon.to_string(),
            Style::default()
                .fg(self.color)
                .add_modifier(Modifier::BOLD),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taranis_core::types::{IncidentStatus, Severity};

    #[test]
    fn test_badge_includes_icon_and_label() {
        let span = Badge::new(&Severity::Critical).render();
        assert!(span.content.contains("●"));
        assert!(span.content.contains("Critique"));
    }

    #[test]
    fn test_badge_without_icon() {
        let span = Badge::new(&Severity::Low).show_icon(false).render();
        assert_eq!(span.content, "Faible");
    }

    #[test]
    fn test_icon_only() {
        let span = Badge::new(&IncidentStatus::Resolved).render_icon_only();
        assert_eq!(span.content, "✓");
    }
}
