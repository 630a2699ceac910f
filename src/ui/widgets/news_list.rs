//! News feed widget.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::state::Store;

/// News feed panel: the general feed on top, matched headlines below.
pub struct NewsList;

impl NewsList {
    /// Render the news feed.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        Self::render_feed(frame, chunks[0], store);
        Self::render_matched(frame, chunks[1], store);

        if store.news.loading {
            render_loading(frame, chunks[0]);
        }
    }

    fn render_feed(frame: &mut Frame, area: Rect, store: &Store) {
        let block = Block::default()
            .title(format!(
                " Latest Market News ({}) ",
                store.news.headlines.len()
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        if store.news.headlines.is_empty() {
            let hint = Paragraph::new("No news available at the moment. Press r to refresh.")
                .block(block)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hint, area);
            return;
        }

        let items: Vec<ListItem> = store
            .news
            .headlines
            .iter()
            .map(|headline| {
                let mut spans = vec![Span::raw(truncate_string(
                    &headline.title,
                    area.width.saturating_sub(20) as usize,
                ))];
                if let Some(source) = &headline.source {
                    spans.push(Span::styled(
                        format!("  - {source}"),
                        Style::default().fg(Color::DarkGray),
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
        state.select(store.news.selected_index);

        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_matched(frame: &mut Frame, area: Rect, store: &Store) {
        let block = Block::default()
            .title(format!(" Matched ({}) ", store.news.matched.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));

        if store.news.matched.is_empty() {
            let hint = if store.watchlist.is_empty() {
                "Add symbols to your watchlist to highlight matching headlines."
            } else {
                "No headlines mention your watchlist symbols."
            };
            let paragraph = Paragraph::new(hint)
                .block(block)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(paragraph, area);
            return;
        }

        let items: Vec<ListItem> = store
            .news
            .matched
            .iter()
            .map(|title| {
                ListItem::new(Line::from(Span::styled(
                    truncate_string(title, area.width.saturating_sub(6) as usize),
                    Style::default().fg(Color::Green),
                )))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let loading = Line::from(vec![Span::styled(
        "Fetching...",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC),
    )]);

    let block = Block::default();
    let inner = block.inner(area);

    // Render at bottom right
    let loading_area = Rect {
        x: inner.x + inner.width.saturating_sub(15),
        y: inner.y + inner.height.saturating_sub(1),
        width: 15.min(inner.width),
        height: 1,
    };

    frame.render_widget(ratatui::widgets::Paragraph::new(loading), loading_area);
}
