//! Panel navigation - the active-panel selector
//!
//! The dashboard shows exactly one panel at a time. The selector is a
//! plain enumeration value owned by the app shell; selecting a navigation
//! entry replaces it, with no guards, no side effects and no history.

use clap::ValueEnum;

/// Panel identifiers in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum PanelId {
    Overview,
    Threats,
    Incidents,
    Intelligence,
    Sources,
    Analytics,
}

impl PanelId {
    /// All panel IDs in display order
    pub fn all() -> [PanelId; 6] {
        [
            PanelId::Overview,
            PanelId::Threats,
            PanelId::Incidents,
            PanelId::Intelligence,
            PanelId::Sources,
            PanelId::Analytics,
        ]
    }

    /// Keyboard shortcut (1-6)
    pub fn shortcut_key(&self) -> char {
        match self {
            PanelId::Overview => '1',
            PanelId::Threats => '2',
            PanelId::Incidents => '3',
            PanelId::Intelligence => '4',
            PanelId::Sources => '5',
            PanelId::Analytics => '6',
        }
    }

    /// Panel title shown in the tab bar
    pub fn title(&self) -> &'static str {
        match self {
            PanelId::Overview => "Vue d'ensemble",
            PanelId::Threats => "Menaces",
            PanelId::Incidents => "Incidents",
            PanelId::Intelligence => "Threat Intelligence",
            PanelId::Sources => "Sources",
            PanelId::Analytics => "Analyses",
        }
    }

    /// Resolve a shortcut key to its panel
    pub fn from_shortcut(key: char) -> Option<PanelId> {
        PanelId::all().into_iter().find(|p| p.shortcut_key() == key)
    }

    /// Position in display order
    pub fn index(&self) -> usize {
        PanelId::all()
            .iter()
            .position(|p| p == self)
            .unwrap_or(0)
    }
}

impl Default for PanelId {
    fn default() -> Self {
        PanelId::Overview
    }
}

/// Owns the active panel id and applies selections
pub struct Navigator {
    active: PanelId,
}

impl Navigator {
    /// Create a navigator starting on the given panel
    pub fn new(initial: PanelId) -> Self {
        Self { active: initial }
    }

    /// Currently visible panel
    pub fn active(&self) -> PanelId {
        self.active
    }

    /// Select a panel; re-selecting the active panel is a no-op
    pub fn select(&mut self, requested: PanelId) {
        self.active = requested;
    }

    /// Cycle forward through the display order
    pub fn next(&mut self) {
        let panels = PanelId::all();
        let index = (self.active.index() + 1) % panels.len();
        self.active = panels[index];
    }

    /// Cycle backward through the display order
    pub fn previous(&mut self) {
        let panels = PanelId::all();
        let index = (self.active.index() + panels.len() - 1) % panels.len();
        self.active = panels[index];
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(PanelId::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_panel_is_overview() {
        let nav = Navigator::default();
        assert_eq!(nav.active(), PanelId::Overview);
    }

    #[test]
    fn test_select_replaces_active_panel() {
        let mut nav = Navigator::default();
        nav.select(PanelId::Incidents);
        assert_eq!(nav.active(), PanelId::Incidents);

        nav.select(PanelId::Overview);
        assert_eq!(nav.active(), PanelId::Overview);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut nav = Navigator::default();
        nav.select(PanelId::Sources);
        nav.select(PanelId::Sources);
        assert_eq!(nav.active(), PanelId::Sources);
    }

    #[test]
    fn test_cycling_wraps_around() {
        let mut nav = Navigator::new(PanelId::Analytics);
        nav.next();
        assert_eq!(nav.active(), PanelId::Overview);

        nav.previous();
        assert_eq!(nav.active(), PanelId::Analytics);
    }

    #[test]
    fn test_shortcut_keys_are_distinct() {
        let keys: Vec<char> = PanelId::all().iter().map(|p| p.shortcut_key()).collect();
        let mut deduped = keys.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), keys.len());
    }

    #[test]
    fn test_from_shortcut() {
        assert_eq!(PanelId::from_shortcut('3'), Some(PanelId::Incidents));
        assert_eq!(PanelId::from_shortcut('9'), None);
    }

    #[test]
    fn test_titles_are_nonempty() {
        for panel in PanelId::all() {
            assert!(!panel.title().is_empty());
        }
    }
}
