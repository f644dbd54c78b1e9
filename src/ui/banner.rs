// Banner rendering module
//
// Renders the top banner with ASCII art logo and the live signal status.

use crate::app::AppState;
use crate::theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render_banner(f: &mut Frame, area: Rect, app: &AppState) {
    let status_text = format!(
        "   [~ Signal: {}] [Refresh: {}ms]",
        app.animation.header_label, app.refresh_config.refresh_ms
    );

    let banner_text = vec![
        Line::from(vec![Span::styled(
            "    _     ___  ____  __        __    _    __     __ _____ ",
            Style::default()
                .fg(Color::Rgb(56, 120, 220))
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled(
                "   / \\   |_ _||  _ \\ \\ \\      / /   / \\   \\ \\   / /| ____|",
                Style::default().fg(Color::Rgb(66, 133, 244)),
            ),
            Span::styled(
                "   >>> Terminal Wi-Fi Indicator v0.1.0 <<<",
                Style::default()
                    .fg(theme::SIGNAL_WHITE)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                "  / _ \\   | |  | |_) | \\ \\ /\\ / /   / _ \\   \\ \\ / /  |  _|  ",
                Style::default().fg(Color::Rgb(76, 146, 255)),
            ),
            Span::styled(
                "   \"Watching the air for a handshake.\"",
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(vec![Span::styled(
            " / ___ \\  | |  |  _ <    \\ V  V /   / ___ \\   \\ V /   | |___ ",
            Style::default().fg(Color::Rgb(86, 156, 247)),
        )]),
        Line::from(vec![
            Span::styled(
                "/_/   \\_\\|___| |_| \\_\\    \\_/\\_/   /_/   \\_\\   \\_/    |_____|",
                Style::default().fg(Color::Rgb(96, 170, 255)),
            ),
            Span::styled(status_text, Style::default().fg(theme::SKY_BLUE)),
        ]),
    ];

    let banner = Paragraph::new(banner_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(theme::SKY_BLUE)),
        )
        .alignment(Alignment::Left);

    f.render_widget(banner, area);
}
