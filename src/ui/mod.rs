// UI rendering module
//
// This module contains all UI rendering components for airwave.
// The main draw() function orchestrates rendering of all UI panels.

mod banner;
pub mod burst;
mod indicator;
mod status_bar;

use crate::app::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use banner::render_banner;
use indicator::render_indicator;
use status_bar::render_status_bar;

/// Main UI drawing function
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let size = f.area();

    // Main layout: banner, indicator, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Banner
            Constraint::Min(0),    // Indicator canvas
            Constraint::Length(3), // Status bar
        ])
        .split(size);

    render_banner(f, chunks[0], app);
    render_indicator(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
}
