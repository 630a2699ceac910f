//! Event handler for processing input events.

use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::{Action, InputMode, Store, View};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Key bindings.
    keybindings: KeyBindings,
    /// Store snapshot for state-aware handling.
    store_snapshot: Option<StoreSnapshot>,
}

/// Snapshot of relevant store state for event handling.
#[derive(Clone)]
struct StoreSnapshot {
    input_mode: InputMode,
    current_view: View,
    selected_symbol: Option<String>,
    news_loading: bool,
    analysis_loading: bool,
    error_present: bool,
    notification_present: bool,
    help_visible: bool,
}

impl EventHandler {
    /// Create a new event handler with the given key bindings.
    pub fn new(keybindings: KeyBindings) -> Self {
        Self {
            keybindings,
            store_snapshot: None,
        }
    }

    /// Update the store snapshot for state-aware event handling.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        self.store_snapshot = Some(StoreSnapshot {
            input_mode: store.app.input_mode,
            current_view: store.app.current_view,
            selected_symbol: store.watchlist.selected_symbol().cloned(),
            news_loading: store.news.loading,
            analysis_loading: store.analysis.loading,
            error_present: store.app.error.is_some(),
            notification_present: store.app.notification.is_some(),
            help_visible: store.app.show_help,
        });
    }

    /// Get the next action from user input.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            match event {
                CrosstermEvent::Key(key) => {
                    if let Some(action) = self.handle_key(key) {
                        return Ok(Some(action));
                    }
                }
                CrosstermEvent::Mouse(mouse) => {
                    if let Some(action) = self.handle_mouse(mouse) {
                        return Ok(Some(action));
                    }
                }
                CrosstermEvent::Resize(_, _) => {
                    // Terminal will automatically redraw
                }
                _ => {}
            }
        }
        Ok(None)
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let snapshot = self.store_snapshot.as_ref()?;

        match snapshot.input_mode {
            InputMode::Normal => self.handle_normal_mode(key, snapshot),
            InputMode::Insert => self.handle_insert_mode(key),
        }
    }

    /// Handle a mouse event and return an optional action.
    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        }
    }

    fn handle_normal_mode(&self, key: KeyEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let input = super::InputEvent::from(key);

        // Esc dismisses whatever overlay is on screen.
        if input.matches(&self.keybindings.back) {
            if snapshot.error_present {
                return Some(Action::ClearError);
            }
            if snapshot.notification_present {
                return Some(Action::DismissNotification);
            }
            if snapshot.help_visible {
                return Some(Action::ToggleHelp);
            }
            return None;
        }

        // Global shortcuts
        if input.matches(&self.keybindings.quit) {
            return Some(Action::Quit);
        }

        if input.matches(&self.keybindings.help) {
            return Some(Action::ToggleHelp);
        }

        // Refresh and analyze are ignored while a request is outstanding.
        if input.matches(&self.keybindings.refresh) {
            if snapshot.news_loading {
                return None;
            }
            return Some(Action::RefreshNews);
        }

        if input.matches(&self.keybindings.analyze) {
            if snapshot.analysis_loading {
                return None;
            }
            return Some(Action::RequestAnalysis);
        }

        if input.matches(&self.keybindings.add) {
            return Some(Action::SetInputMode(InputMode::Insert));
        }

        if input.matches(&self.keybindings.clear) {
            return Some(Action::ClearWatchlist);
        }

        // View switching
        if input.matches(&self.keybindings.watchlist) {
            return Some(Action::SetView(View::Watchlist));
        }
        if input.matches(&self.keybindings.news) {
            return Some(Action::SetView(View::News));
        }
        if input.matches(&self.keybindings.insights) {
            return Some(Action::SetView(View::Insights));
        }

        // Navigation
        if input.matches(&self.keybindings.up) || key.code == KeyCode::Up {
            return Some(Action::ScrollUp);
        }
        if input.matches(&self.keybindings.down) || key.code == KeyCode::Down {
            return Some(Action::ScrollDown);
        }
        if key.code == KeyCode::Home {
            return Some(Action::GoToTop);
        }
        if key.code == KeyCode::End {
            return Some(Action::GoToBottom);
        }

        // View-specific actions
        match snapshot.current_view {
            View::Watchlist => self.handle_watchlist_view(key, snapshot),
            View::News | View::Insights => None,
        }
    }

    fn handle_watchlist_view(&self, key: KeyEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let input = super::InputEvent::from(key);

        if input.matches(&self.keybindings.remove)
            && let Some(symbol) = &snapshot.selected_symbol
        {
            return Some(Action::RemoveSymbol(symbol.clone()));
        }

        None
    }

    fn handle_insert_mode(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::CancelInput),
            KeyCode::Enter => Some(Action::SubmitSymbols),
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Left => Some(Action::InputCursorLeft),
            KeyCode::Right => Some(Action::InputCursorRight),
            _ => {
                let input = super::InputEvent::from(key);
                input.char().map(Action::InputChar)
            }
        }
    }
}
