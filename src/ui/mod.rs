//! UI rendering using ratatui.
//!
//! This module contains all TUI components and rendering logic.

mod layout;
mod widgets;

pub use layout::Layout;
pub use widgets::{
    HelpPanel, InsightsPanel, NewsList, StatusBar, SymbolInput, TabBar, WatchlistPanel,
};

use crate::state::Store;
use ratatui::Frame;

/// Main UI renderer.
pub struct Ui;

impl Ui {
    /// Render the entire UI.
    pub fn render(frame: &mut Frame, store: &Store) {
        let layout = Layout::new(frame.area());

        // Render status bar
        StatusBar::render(frame, layout.status_area, store);

        // Render tab bar
        TabBar::render(frame, layout.tab_area, store);

        // Render main content based on current view
        match store.app.current_view {
            crate::state::View::Watchlist => {
                WatchlistPanel::render(frame, layout.main_area, store);
            }
            crate::state::View::News => {
                NewsList::render(frame, layout.main_area, store);
            }
            crate::state::View::Insights => {
                InsightsPanel::render(frame, layout.main_area, store);
            }
        }

        // Render symbol entry popup while editing
        if store.app.is_editing() {
            SymbolInput::render(frame, frame.area(), store);
        }

        // Render help panel if visible
        if store.app.show_help {
            HelpPanel::render(frame, frame.area());
        }

        // Render notification if present
        if let Some(notification) = &store.app.notification {
            widgets::render_notification(frame, layout.notification_area, notification);
        }

        // Render error if present
        if let Some(error) = &store.app.error {
            widgets::render_error(frame, layout.notification_area, error);
        }
    }
}
