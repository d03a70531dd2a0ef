//! Sparkline widget for inline series visualization
//!
//! One block character per data point, scaled against the series maximum
//! with a zero baseline: the series holds detection counts, so a month
//! with zero detections renders as the lowest block, not as "equal to the
//! minimum".

use ratatui::{style::Style, text::Span};

/// Unicode block characters, lowest to highest
const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Compact zero-baseline sparkline over count data
pub struct Sparkline<'a> {
    data: &'a [u32],
    style: Style,
}

impl<'a> Sparkline<'a> {
    /// Create a sparkline over the series
    pub fn new(data: &'a [u32]) -> Self {
        Self {
            data,
            style: Style::default(),
        }
    }

    /// Set custom style
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Render as a styled span, one character per point
    pub fn render(&self) -> Span<'static> {
        if self.data.is_empty() {
            return Span::styled("─", self.style);
        }

        let max = self.data.iter().copied().max().unwrap_or(0);
        if max == 0 {
            // All-zero series renders as a flat floor
            let chars: String = self.data.iter().map(|_| BLOCKS[0]).collect();
            return Span::styled(chars, self.style);
        }

        let chars: String = self
            .data
            .iter()
            .map(|&value| {
                let level = (value as usize * (BLOCKS.len() - 1)) / max as usize;
                BLOCKS[level]
            })
            .collect();

        Span::styled(chars, self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series_placeholder() {
        let span = Sparkline::new(&[]).render();
        assert_eq!(span.content, "─");
    }

    #[test]
    fn test_one_char_per_point() {
        let data = [45, 52, 48, 61, 55, 67];
        let span = Sparkline::new(&data).render();
        assert_eq!(span.content.chars().count(), 6);
    }

    #[test]
    fn test_maximum_renders_full_block() {
        let data = [1, 2, 8];
        let span = Sparkline::new(&data).render();
        assert_eq!(span.content.chars().last(), Some('█'));
    }

    #[test]
    fn test_zero_baseline() {
        let data = [0, 10];
        let span = Sparkline::new(&data).render();
        let chars: Vec<char> = span.content.chars().collect();
        assert_eq!(chars[0], '▁');
        assert_eq!(chars[1], '█');
    }

    #[test]
    fn test_all_zero_series_is_flat() {
        let data = [0, 0, 0];
        let span = Sparkline::new(&data).render();
        assert!(span.content.chars().all(|c| c == '▁'));
    }

    #[test]
    fn test_monotone_series_is_nondecreasing() {
        let data = [10, 20, 30, 40, 50];
        let span = Sparkline::new(&data).render();
        let levels: Vec<usize> = span
            .content
            .chars()
            .map(|c| BLOCKS.iter().position(|&b| b == c).unwrap())
            .collect();
        assert!(levels.windows(2).all(|w| w[0] <= w[1]));
    }
}
