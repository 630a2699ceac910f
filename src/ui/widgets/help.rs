//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::super::layout::centered_rect;

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 80, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let section = |title: &'static str| {
            Line::from(vec![Span::styled(
                title,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )])
        };
        let entry = |key: &'static str, desc: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {key:<6}"), Style::default().fg(Color::Cyan)),
                Span::raw(desc),
            ])
        };

        let help_text = vec![
            section("Watchlist"),
            Line::from(""),
            entry("i", "Add symbols (comma-separated)"),
            entry("d", "Remove selected symbol"),
            entry("c", "Clear watchlist"),
            Line::from(""),
            section("Actions"),
            Line::from(""),
            entry("r", "Refresh news feed"),
            entry("a", "Analyze watchlist"),
            entry("Esc", "Dismiss error/notification"),
            Line::from(""),
            section("Views"),
            Line::from(""),
            entry("1", "Watchlist view"),
            entry("2", "News view"),
            entry("3", "Insights view"),
            Line::from(""),
            section("Navigation"),
            Line::from(""),
            entry("j/↓", "Move down"),
            entry("k/↑", "Move up"),
            entry("Home", "Go to top"),
            entry("End", "Go to bottom"),
            Line::from(""),
            entry("?", "Toggle help"),
            entry("q", "Quit"),
        ];

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(help, popup_area);
    }
}
