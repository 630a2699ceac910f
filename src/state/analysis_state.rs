//! Analysis narrative state.

use chrono::{DateTime, Utc};

/// State for the AI-generated analysis narrative.
///
/// Each successful request replaces the narrative entirely; a failed
/// request leaves the previous narrative untouched. The narrative is
/// discarded when the watchlist is cleared.
#[derive(Debug, Default)]
pub struct AnalysisState {
    /// The most recently returned narrative.
    pub narrative: Option<String>,
    /// Whether an analysis request is outstanding.
    pub loading: bool,
    /// Timestamp of the last successful analysis.
    pub last_updated: Option<DateTime<Utc>>,
    /// Scroll offset for the insights view.
    pub scroll_offset: u16,
}

impl AnalysisState {
    /// Replace the narrative after a successful request.
    pub fn replace(&mut self, narrative: String) {
        self.narrative = Some(narrative);
        self.last_updated = Some(Utc::now());
        self.scroll_offset = 0;
    }

    /// Discard the held narrative.
    pub fn discard(&mut self) {
        self.narrative = None;
        self.last_updated = None;
        self.scroll_offset = 0;
    }

    /// Check whether a narrative is held.
    pub fn has_narrative(&self) -> bool {
        self.narrative.is_some()
    }
}
