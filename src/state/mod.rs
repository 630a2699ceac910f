//! State management for Tickerdeck.
//!
//! This module provides centralized state management with a unidirectional
//! data flow pattern inspired by Redux/Elm architecture. Derived data (the
//! matched-headline list) is recomputed by the reducer after every action
//! that mutates the watchlist or the news feed.

mod analysis_state;
mod app_state;
pub mod matcher;
mod news_state;
mod watchlist_state;

pub use analysis_state::AnalysisState;
pub use app_state::{AppState, InputMode, View};
pub use news_state::{Headline, NewsState};
pub use watchlist_state::WatchlistState;

use crate::error::Result;
use tokio::sync::mpsc;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SetView(View),
    SetInputMode(InputMode),

    // Watchlist actions
    SubmitSymbols,
    RemoveSymbol(String),
    ClearWatchlist,

    // News actions
    RefreshNews,
    NewsLoaded(Vec<Headline>),
    NewsFailed(String),

    // Analysis actions
    RequestAnalysis,
    AnalysisLoaded(String),
    AnalysisFailed(String),

    // Symbol entry
    InputChar(char),
    InputBackspace,
    InputCursorLeft,
    InputCursorRight,
    CancelInput,

    // UI actions
    ScrollUp,
    ScrollDown,
    GoToTop,
    GoToBottom,
    ToggleHelp,
    ShowNotification(Notification),
    DismissNotification,

    // Error handling
    SetError(String),
    ClearError,

    // Quit
    Quit,
}

/// A notification to display to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration_secs: u64,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
            duration_secs: 3,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
            duration_secs: 3,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Warning,
            duration_secs: 5,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Error,
            duration_secs: 10,
        }
    }
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Watchlist state.
    pub watchlist: WatchlistState,
    /// News feed state.
    pub news: NewsState,
    /// Analysis state.
    pub analysis: AnalysisState,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store with the given action sender.
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            app: AppState::default(),
            watchlist: WatchlistState::default(),
            news: NewsState::default(),
            analysis: AnalysisState::default(),
            action_tx,
        }
    }

    /// Dispatch an action to the store.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| crate::Error::channel(e.to_string()))
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Navigation
            Action::SetView(view) => self.app.current_view = view,
            Action::SetInputMode(mode) => self.app.input_mode = mode,

            // Watchlist actions
            Action::SubmitSymbols => {
                let raw = std::mem::take(&mut self.app.input_buffer);
                self.app.cursor_position = 0;
                self.app.input_mode = InputMode::Normal;

                let added = self.watchlist.add_symbols(&raw);
                if added > 0 {
                    tracing::info!(added, "symbols added to watchlist");
                    self.app.notification = Some(Notification::success(format!(
                        "Added {added} symbol{}",
                        if added == 1 { "" } else { "s" }
                    )));
                }
                self.recompute_matched();
            }
            Action::RemoveSymbol(symbol) => {
                self.watchlist.remove_symbol(&symbol);
                self.recompute_matched();
            }
            Action::ClearWatchlist => {
                // Analysis is meaningless for an empty watchlist.
                self.watchlist.clear();
                self.analysis.discard();
                self.recompute_matched();
            }

            // News actions
            Action::RefreshNews => self.news.loading = true,
            Action::NewsLoaded(headlines) => {
                tracing::info!(count = headlines.len(), "news feed refreshed");
                self.news.replace(headlines);
                self.news.loading = false;
                self.recompute_matched();
            }
            Action::NewsFailed(message) => {
                // Previous headlines stay untouched.
                self.news.loading = false;
                self.app.error = Some(message);
            }

            // Analysis actions
            Action::RequestAnalysis => self.analysis.loading = true,
            Action::AnalysisLoaded(narrative) => {
                tracing::info!("analysis narrative received");
                self.analysis.replace(narrative);
                self.analysis.loading = false;
            }
            Action::AnalysisFailed(message) => {
                // Previous narrative stays untouched.
                self.analysis.loading = false;
                self.app.error = Some(message);
            }

            // Symbol entry
            Action::InputChar(c) => self.app.push_char(c),
            Action::InputBackspace => self.app.pop_char(),
            Action::InputCursorLeft => self.app.cursor_left(),
            Action::InputCursorRight => self.app.cursor_right(),
            Action::CancelInput => {
                self.app.clear_input();
                self.app.input_mode = InputMode::Normal;
            }

            // UI actions
            Action::ScrollUp => self.scroll(-1),
            Action::ScrollDown => self.scroll(1),
            Action::GoToTop => self.go_to_top(),
            Action::GoToBottom => self.go_to_bottom(),
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::ShowNotification(notification) => {
                self.app.notification = Some(notification);
            }
            Action::DismissNotification => {
                self.app.notification = None;
            }

            // Error handling
            Action::SetError(error) => {
                self.app.error = Some(error);
            }
            Action::ClearError => {
                self.app.error = None;
            }

            // Quit
            Action::Quit => {
                self.app.should_quit = true;
            }
        }
    }

    /// Recompute the matched-headline list from the current watchlist and
    /// news feed. Called after every action that mutates either input.
    fn recompute_matched(&mut self) {
        self.news.matched = matcher::matched_titles(&self.watchlist.symbols, &self.news.headlines);
    }

    fn scroll(&mut self, delta: i32) {
        match self.app.current_view {
            View::Watchlist => {
                if self.watchlist.symbols.is_empty() {
                    return;
                }
                let current = self.watchlist.selected_index.unwrap_or(0) as i32;
                let new_index = (current + delta).max(0) as usize;
                let max_index = self.watchlist.symbols.len() - 1;
                self.watchlist.selected_index = Some(new_index.min(max_index));
            }
            View::News => {
                if self.news.headlines.is_empty() {
                    return;
                }
                let current = self.news.selected_index.unwrap_or(0) as i32;
                let new_index = (current + delta).max(0) as usize;
                let max_index = self.news.headlines.len() - 1;
                self.news.selected_index = Some(new_index.min(max_index));
            }
            View::Insights => {
                let current = self.analysis.scroll_offset as i32;
                self.analysis.scroll_offset = (current + delta).max(0) as u16;
            }
        }
    }

    fn go_to_top(&mut self) {
        match self.app.current_view {
            View::Watchlist => {
                if !self.watchlist.symbols.is_empty() {
                    self.watchlist.selected_index = Some(0);
                }
            }
            View::News => {
                if !self.news.headlines.is_empty() {
                    self.news.selected_index = Some(0);
                }
            }
            View::Insights => self.analysis.scroll_offset = 0,
        }
    }

    fn go_to_bottom(&mut self) {
        match self.app.current_view {
            View::Watchlist => {
                if !self.watchlist.symbols.is_empty() {
                    self.watchlist.selected_index = Some(self.watchlist.symbols.len() - 1);
                }
            }
            View::News => {
                if !self.news.headlines.is_empty() {
                    self.news.selected_index = Some(self.news.headlines.len() - 1);
                }
            }
            View::Insights => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_store() -> Store {
        let (action_tx, _action_rx) = mpsc::unbounded_channel();
        Store::new(action_tx)
    }

    fn feed() -> Vec<Headline> {
        vec![
            Headline::new("TCS shares rally", "https://example.com/tcs"),
            Headline::new("Gold prices fall", "https://example.com/gold"),
            Headline::new("INFY wins mega deal", "https://example.com/infy").with_source("Wire"),
        ]
    }

    #[test]
    fn test_submit_symbols_consumes_input_buffer() {
        let mut store = test_store();
        store.app.input_buffer = "tcs, INFY ,, tcs".to_string();
        store.app.cursor_position = store.app.input_buffer.len();
        store.app.input_mode = InputMode::Insert;

        store.reduce(Action::SubmitSymbols);

        assert_eq!(store.watchlist.symbols, vec!["TCS", "INFY"]);
        assert_eq!(store.app.input_buffer, "");
        assert_eq!(store.app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_matched_recomputed_on_watchlist_and_news_changes() {
        let mut store = test_store();
        store.reduce(Action::NewsLoaded(feed()));
        assert_eq!(store.news.matched, Vec::<String>::new());

        store.app.input_buffer = "TCS".to_string();
        store.reduce(Action::SubmitSymbols);
        assert_eq!(store.news.matched, vec!["TCS shares rally"]);

        store.app.input_buffer = "INFY".to_string();
        store.reduce(Action::SubmitSymbols);
        assert_eq!(
            store.news.matched,
            vec!["TCS shares rally", "INFY wins mega deal"]
        );

        store.reduce(Action::RemoveSymbol("TCS".to_string()));
        assert_eq!(store.news.matched, vec!["INFY wins mega deal"]);
    }

    #[test]
    fn test_clear_watchlist_discards_narrative() {
        let mut store = test_store();
        store.app.input_buffer = "TCS".to_string();
        store.reduce(Action::SubmitSymbols);
        store.reduce(Action::AnalysisLoaded("IT sector looks strong.".to_string()));
        assert!(store.analysis.has_narrative());

        store.reduce(Action::ClearWatchlist);

        assert!(store.watchlist.is_empty());
        assert!(!store.analysis.has_narrative());
        assert_eq!(store.news.matched, Vec::<String>::new());
    }

    #[test]
    fn test_remove_symbol_keeps_narrative() {
        let mut store = test_store();
        store.app.input_buffer = "TCS, INFY".to_string();
        store.reduce(Action::SubmitSymbols);
        store.reduce(Action::AnalysisLoaded("IT sector looks strong.".to_string()));

        store.reduce(Action::RemoveSymbol("TCS".to_string()));

        assert!(store.analysis.has_narrative());
    }

    #[test]
    fn test_news_failure_preserves_headlines() {
        let mut store = test_store();
        store.reduce(Action::NewsLoaded(feed()));
        store.reduce(Action::RefreshNews);
        assert!(store.news.loading);

        store.reduce(Action::NewsFailed("Failed to fetch news.".to_string()));

        assert_eq!(store.news.headlines, feed());
        assert!(!store.news.loading);
        assert_eq!(store.app.error.as_deref(), Some("Failed to fetch news."));
    }

    #[test]
    fn test_news_loaded_replaces_wholesale() {
        let mut store = test_store();
        store.reduce(Action::NewsLoaded(feed()));

        let replacement = vec![Headline::new("Markets open flat", "#")];
        store.reduce(Action::NewsLoaded(replacement.clone()));

        assert_eq!(store.news.headlines, replacement);
    }

    #[test]
    fn test_analysis_failure_preserves_narrative() {
        let mut store = test_store();
        store.reduce(Action::AnalysisLoaded("First narrative.".to_string()));
        store.reduce(Action::RequestAnalysis);
        store.reduce(Action::AnalysisFailed("Analysis failed.".to_string()));

        assert_eq!(store.analysis.narrative.as_deref(), Some("First narrative."));
        assert!(!store.analysis.loading);
        assert_eq!(store.app.error.as_deref(), Some("Analysis failed."));
    }

    #[test]
    fn test_late_analysis_response_applied_after_clear() {
        // No staleness check: a response that arrives after the watchlist
        // changed is applied as-is.
        let mut store = test_store();
        store.app.input_buffer = "TCS".to_string();
        store.reduce(Action::SubmitSymbols);
        store.reduce(Action::RequestAnalysis);
        store.reduce(Action::ClearWatchlist);

        store.reduce(Action::AnalysisLoaded("Late narrative.".to_string()));

        assert_eq!(store.analysis.narrative.as_deref(), Some("Late narrative."));
    }

    #[test]
    fn test_dismiss_error() {
        let mut store = test_store();
        store.reduce(Action::SetError("boom".to_string()));
        assert!(store.app.error.is_some());

        store.reduce(Action::ClearError);
        assert!(store.app.error.is_none());
    }

    #[test]
    fn test_show_and_dismiss_notification() {
        let mut store = test_store();
        store.reduce(Action::ShowNotification(Notification::info("hello")));
        assert!(store.app.notification.is_some());

        store.reduce(Action::DismissNotification);
        assert!(store.app.notification.is_none());
    }
}
