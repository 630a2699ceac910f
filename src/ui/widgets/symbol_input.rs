//! Symbol entry popup.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::super::layout::centered_rect;
use crate::state::Store;

/// Popup for entering comma-separated symbols.
pub struct SymbolInput;

impl SymbolInput {
    /// Render the input popup and place the cursor.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let popup_area = centered_rect(60, 20, area);
        let input_area = Rect {
            height: 3.min(popup_area.height),
            ..popup_area
        };

        frame.render_widget(Clear, input_area);

        let paragraph = Paragraph::new(Line::from(Span::raw(&store.app.input_buffer)))
            .block(
                Block::default()
                    .title(" Add symbols (comma-separated, Enter to submit) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(paragraph, input_area);

        frame.set_cursor_position((
            input_area.x + 1 + store.app.cursor_position as u16,
            input_area.y + 1,
        ));
    }
}
