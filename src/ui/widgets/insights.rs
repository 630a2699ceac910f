//! AI insights widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::Store;

/// Insights panel showing the analysis narrative.
pub struct InsightsPanel;

impl InsightsPanel {
    /// Render the insights panel.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let title = match store.analysis.last_updated {
            Some(at) => format!(" AI Insights (updated {}) ", at.format("%H:%M:%S")),
            None => " AI Insights ".to_string(),
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta));

        if store.analysis.loading {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                "Analyzing your watchlist...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )))
            .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        match &store.analysis.narrative {
            Some(narrative) => {
                let paragraph = Paragraph::new(narrative.as_str())
                    .block(block)
                    .wrap(Wrap { trim: false })
                    .scroll((store.analysis.scroll_offset, 0));
                frame.render_widget(paragraph, area);
            }
            None => {
                let hint = Paragraph::new(Line::from(vec![
                    Span::raw("No analysis yet. Press "),
                    Span::styled("a", Style::default().fg(Color::Cyan)),
                    Span::raw(" to analyze your watchlist against the news feed."),
                ]))
                .block(block)
                .style(Style::default().fg(Color::DarkGray));
                frame.render_widget(hint, area);
            }
        }
    }
}
