//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, state management, and rendering.

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::events::EventHandler;
use crate::state::{Action, Store};
use crate::ui::Ui;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tokio::sync::mpsc;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action sender for spawned request tasks.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// API client.
    api_client: ApiClient,
    /// Configuration.
    config: Config,
}

impl App {
    /// Create a new application.
    pub fn new(config: Config) -> Result<Self> {
        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        // Create store
        let store = Store::new(action_tx.clone());

        // Create event handler
        let event_handler = EventHandler::new(config.keybindings.clone());

        // Create API client
        let api_client = ApiClient::new(config.api.clone())?;

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_tx,
            action_rx,
            api_client,
            config,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        // Initial news fetch
        if self.config.ui.fetch_on_start {
            self.store.dispatch(Action::RefreshNews)?;
        }

        // Main event loop
        loop {
            // Update event handler with current state
            self.event_handler.update_store_snapshot(&self.store);

            // Render UI
            self.terminal.draw(|frame| {
                Ui::render(frame, &self.store);
            })?;

            // Handle events and actions
            tokio::select! {
                // Handle terminal events
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.handle_action(action);
                    }
                }

                // Handle actions from the channel
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }
            }

            // Check if we should quit
            if self.store.app.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle an action.
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::RefreshNews => {
                self.refresh_news();
            }
            Action::RequestAnalysis => {
                self.request_analysis();
            }
            _ => {
                // Let the store handle the action
                self.store.reduce(action);
            }
        }
    }

    /// Kick off a news feed refresh.
    ///
    /// The fetch runs as a spawned task and reports back through the action
    /// channel; a second refresh while one is outstanding is ignored.
    fn refresh_news(&mut self) {
        if self.store.news.loading {
            return;
        }
        self.store.reduce(Action::RefreshNews);

        let client = self.api_client.clone();
        let action_tx = self.action_tx.clone();

        tokio::spawn(async move {
            let action = match client.fetch_news().await {
                Ok(headlines) => Action::NewsLoaded(headlines),
                Err(e) => {
                    tracing::warn!("news fetch failed: {e}");
                    Action::NewsFailed("Failed to fetch news. Please try again.".to_string())
                }
            };
            let _ = action_tx.send(action);
        });
    }

    /// Kick off an analysis request for the current watchlist.
    ///
    /// An empty watchlist fails fast without a network call. Responses are
    /// applied whenever they arrive; there is no staleness check.
    fn request_analysis(&mut self) {
        if self.store.analysis.loading {
            return;
        }
        if self.store.watchlist.is_empty() {
            self.store.reduce(Action::SetError(
                "Add symbols to your watchlist first.".to_string(),
            ));
            return;
        }
        self.store.reduce(Action::RequestAnalysis);

        let symbols = self.store.watchlist.symbols.clone();
        let matched = self.store.news.matched.clone();
        let client = self.api_client.clone();
        let action_tx = self.action_tx.clone();

        tokio::spawn(async move {
            let action = match client.analyze(&symbols, &matched).await {
                Ok(narrative) => Action::AnalysisLoaded(narrative),
                Err(e) => {
                    tracing::warn!("analysis failed: {e}");
                    Action::AnalysisFailed("Analysis failed. Please try again.".to_string())
                }
            };
            let _ = action_tx.send(action);
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
