//! TUI widgets.

mod help;
mod insights;
mod news_list;
mod notifications;
mod status_bar;
mod symbol_input;
mod tab_bar;
mod watchlist;

pub use help::HelpPanel;
pub use insights::InsightsPanel;
pub use news_list::NewsList;
pub use notifications::{render_error, render_notification};
pub use status_bar::StatusBar;
pub use symbol_input::SymbolInput;
pub use tab_bar::TabBar;
pub use watchlist::WatchlistPanel;
