//! News feed state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single market-news headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    /// Display title.
    pub title: String,
    /// Target link.
    pub link: String,
    /// Source label, if the feed provides one.
    pub source: Option<String>,
}

impl Headline {
    /// Create a new headline.
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            source: None,
        }
    }

    /// Attach a source label.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// State for the fetched news feed.
///
/// The headline list is replaced wholesale on every successful refresh;
/// a failed refresh leaves the previous list untouched.
#[derive(Debug, Default)]
pub struct NewsState {
    /// The most recently fetched headlines.
    pub headlines: Vec<Headline>,
    /// Titles of headlines matching the current watchlist, in feed order.
    pub matched: Vec<String>,
    /// Currently selected headline index.
    pub selected_index: Option<usize>,
    /// Whether a fetch is outstanding.
    pub loading: bool,
    /// Last successful refresh timestamp.
    pub last_updated: Option<DateTime<Utc>>,
}

impl NewsState {
    /// Get the currently selected headline.
    pub fn selected_headline(&self) -> Option<&Headline> {
        self.selected_index.and_then(|i| self.headlines.get(i))
    }

    /// Replace the headline list after a successful refresh.
    pub fn replace(&mut self, headlines: Vec<Headline>) {
        self.headlines = headlines;
        self.last_updated = Some(Utc::now());
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        if self.headlines.is_empty() {
            self.selected_index = None;
        } else if let Some(i) = self.selected_index {
            self.selected_index = Some(i.min(self.headlines.len() - 1));
        }
    }
}
