//! # Tickerdeck - Watchlist & Market News TUI
//!
//! A terminal dashboard for tracking a stock watchlist against a live
//! market-news feed, with AI-generated insights. Built with ratatui and
//! reqwest.
//!
//! ## Architecture
//!
//! The application follows a clean architecture pattern:
//!
//! - **App**: Core application state and lifecycle management
//! - **UI**: Layout and rendering logic
//! - **API**: Backend news/analysis integration layer
//! - **State**: Centralized state management and derived matching
//! - **Events**: Input handling and event processing
//! - **Config**: Configuration management

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
