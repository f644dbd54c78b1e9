// Status Bar rendering module
//
// Renders the bottom status bar with keyboard shortcuts and state
// indicators.

use crate::app::{AppState, CHANGE_HIGHLIGHT_DURATION};
use crate::theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    // Calculate available width for hints (subtract borders and icon)
    let available_width = area.width.saturating_sub(4);

    // Define all hints with priority levels
    struct Hint {
        priority: u8,
        key: &'static str,
        desc: &'static str,
        color: Color,
    }

    let hints = vec![
        Hint {
            priority: 1,
            key: "Q:",
            desc: "Quit | ",
            color: Color::Red,
        },
        Hint {
            priority: 1,
            key: "SPACE:",
            desc: "Connect | ",
            color: theme::SKY_BLUE,
        },
        Hint {
            priority: 2,
            key: "+/-:",
            desc: "Speed | ",
            color: theme::SKY_BLUE,
        },
    ];

    // Build status text, adding hints until we run out of space
    let mut spans = vec![Span::styled(" (( ", Style::default().fg(theme::SKY_BLUE))];

    let mut current_length = 4;

    // Process hints by priority
    for priority in 1..=2 {
        for hint in &hints {
            if hint.priority == priority {
                let hint_length = hint.key.len() + hint.desc.len();
                if current_length + hint_length <= available_width as usize {
                    spans.push(Span::styled(
                        hint.key,
                        Style::default().fg(hint.color).add_modifier(Modifier::BOLD),
                    ));
                    spans.push(Span::raw(hint.desc));
                    current_length += hint_length;
                }
            }
        }
    }

    // State indicators always follow the hints
    spans.push(Span::raw(" "));
    spans.extend(build_state_indicators(app));

    let status_text = Line::from(spans);

    let status_bar = Paragraph::new(status_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(theme::SKY_BLUE)),
        )
        .alignment(Alignment::Left);

    f.render_widget(status_bar, area);
}

/// Build state indicator spans for the status bar:
/// the current signal phase, the refresh interval (highlighted briefly
/// after a change), and the dot-budget reduction flag when active.
pub fn build_state_indicators(app: &AppState) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    // Signal phase indicator
    let phase_color = match app.animation.header_label {
        "Connected" => theme::LINK_GREEN,
        "Searching" => theme::SKY_BLUE,
        _ => theme::MIST_GRAY,
    };
    spans.push(Span::styled("[", Style::default().fg(theme::MIST_GRAY)));
    spans.push(Span::styled(
        app.animation.header_label,
        Style::default().fg(phase_color).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled("] ", Style::default().fg(theme::MIST_GRAY)));

    // Refresh interval, highlighted right after a change
    let recently_changed = app
        .refresh_config
        .last_change
        .map(|last| last.elapsed() < CHANGE_HIGHLIGHT_DURATION)
        .unwrap_or(false);
    let refresh_style = if recently_changed {
        Style::default()
            .fg(theme::SIGNAL_WHITE)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(theme::MIST_GRAY)
    };
    spans.push(Span::styled("[", Style::default().fg(theme::MIST_GRAY)));
    spans.push(Span::styled(
        format!("{}ms", app.refresh_config.refresh_ms),
        refresh_style,
    ));
    spans.push(Span::styled("]", Style::default().fg(theme::MIST_GRAY)));

    // Dot budget indicator, only shown while reduced
    if app.animation_reduced {
        spans.push(Span::styled(
            " [REDUCED]",
            Style::default().fg(Color::Yellow),
        ));
    }

    spans
}
