//! # Selection State
//!
//! The single piece of mutable state in the system: which region, if any,
//! is currently selected. Mutated only by discrete selection events from the
//! UI thread — there are no concurrent writers, and the serving layer wraps
//! this in one lock purely to satisfy `Sync`.

use serde::Serialize;

use regatlas_core::{CountryCode, CountryDataset};

use crate::render::{render_placeholder, render_record};

/// Visual transition delay the UI waits before restoring the initial
/// prompt on close, in milliseconds.
pub const CLEAR_TRANSITION_MS: u64 = 300;

/// Initial panel content shown before any selection and after a close.
pub const INITIAL_PROMPT_HTML: &str =
    "<h2>Tokenization Regulation Atlas</h2>\n\
     <p class=\"prompt\">Click a jurisdiction on the map to see its regulatory framework.</p>\n";

/// The currently selected region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedRegion {
    /// Canonical code of the selection.
    pub code: CountryCode,
    /// Display name shown in the panel heading.
    pub display_name: String,
}

/// Panel state: at most one selected region, plus the panel's current HTML.
///
/// Every transition replaces the HTML wholesale; callers treat a change as
/// the signal to reset the panel's scroll position.
#[derive(Debug, Clone)]
pub struct PanelState {
    selected: Option<SelectedRegion>,
    html: String,
}

impl PanelState {
    /// Fresh state showing the initial prompt.
    pub fn new() -> Self {
        Self {
            selected: None,
            html: INITIAL_PROMPT_HTML.to_string(),
        }
    }

    /// The current selection, if any.
    pub fn selected(&self) -> Option<&SelectedRegion> {
        self.selected.as_ref()
    }

    /// The panel's current HTML.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Select a region, replacing any previous selection and the panel
    /// content wholesale. Returns the code of the region that was
    /// deselected, so its map styling can be restored.
    pub fn select(
        &mut self,
        code: CountryCode,
        display_name: impl Into<String>,
        dataset: &CountryDataset,
    ) -> Option<CountryCode> {
        let display_name = display_name.into();
        self.html = match dataset.get(&code) {
            Some(record) => render_record(&display_name, record),
            None => render_placeholder(&display_name),
        };
        let previous = self.selected.take().map(|region| region.code);
        self.selected = Some(SelectedRegion { code, display_name });
        previous
    }

    /// Clear the selection, reverting to the initial prompt. The UI applies
    /// this after the [`CLEAR_TRANSITION_MS`] delay. Returns the deselected
    /// code so default styling can be restored to all regions.
    pub fn clear(&mut self) -> Option<CountryCode> {
        self.html = INITIAL_PROMPT_HTML.to_string();
        self.selected.take().map(|region| region.code)
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CountryCode {
        CountryCode::new(s).unwrap()
    }

    #[test]
    fn test_initial_state_shows_prompt() {
        let panel = PanelState::new();
        assert!(panel.selected().is_none());
        assert_eq!(panel.html(), INITIAL_PROMPT_HTML);
    }

    #[test]
    fn test_select_renders_record() {
        let dataset = CountryDataset::fallback();
        let mut panel = PanelState::new();
        let previous = panel.select(code("SG"), "Singapore", &dataset);
        assert!(previous.is_none());
        assert_eq!(panel.selected().unwrap().code.as_str(), "SG");
        assert!(panel.html().contains("Monetary Authority of Singapore"));
    }

    #[test]
    fn test_select_unknown_region_shows_placeholder() {
        let dataset = CountryDataset::fallback();
        let mut panel = PanelState::new();
        panel.select(code("JP"), "Japan", &dataset);
        assert!(panel.html().contains("No regulatory information available for Japan"));
    }

    #[test]
    fn test_new_selection_replaces_previous_entirely() {
        let dataset = CountryDataset::fallback();
        let mut panel = PanelState::new();
        panel.select(code("US"), "United States", &dataset);
        assert!(panel.html().contains("Securities and Exchange Commission"));

        let deselected = panel.select(code("SG"), "Singapore", &dataset);
        assert_eq!(deselected.unwrap().as_str(), "US");
        assert_eq!(panel.selected().unwrap().code.as_str(), "SG");
        // No residual US content after the switch.
        assert!(!panel.html().contains("Securities and Exchange Commission"));
        assert!(!panel.html().contains("United States"));
        assert!(panel.html().contains("Monetary Authority of Singapore"));
    }

    #[test]
    fn test_clear_reverts_to_initial_prompt() {
        let dataset = CountryDataset::fallback();
        let mut panel = PanelState::new();
        panel.select(code("CH"), "Switzerland", &dataset);
        let deselected = panel.clear();
        assert_eq!(deselected.unwrap().as_str(), "CH");
        assert!(panel.selected().is_none());
        assert_eq!(panel.html(), INITIAL_PROMPT_HTML);
    }

    #[test]
    fn test_clear_without_selection_is_harmless() {
        let mut panel = PanelState::new();
        assert!(panel.clear().is_none());
        assert_eq!(panel.html(), INITIAL_PROMPT_HTML);
    }
}
