//! Watchlist widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::state::Store;

/// Watchlist panel showing tracked symbols.
pub struct WatchlistPanel;

impl WatchlistPanel {
    /// Render the watchlist.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let block = Block::default()
            .title(format!(" Watchlist ({}) ", store.watchlist.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        if store.watchlist.is_empty() {
            let hint = Paragraph::new(Line::from(vec![
                Span::raw("No symbols tracked. Press "),
                Span::styled("i", Style::default().fg(Color::Cyan)),
                Span::raw(" to add comma-separated symbols (e.g. TCS, INFY)."),
            ]))
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hint, area);
            return;
        }

        let items: Vec<ListItem> = store
            .watchlist
            .symbols
            .iter()
            .map(|symbol| {
                let matched = store
                    .news
                    .matched
                    .iter()
                    .filter(|title| title.to_uppercase().contains(symbol))
                    .count();

                let mut spans = vec![Span::styled(
                    format!("{symbol:<8}"),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )];
                if matched > 0 {
                    spans.push(Span::styled(
                        format!("  {matched} matching headline{}", if matched == 1 { "" } else { "s" }),
                        Style::default().fg(Color::Green),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(store.watchlist.selected_index);

        frame.render_stateful_widget(list, area, &mut state);
    }
}
