// Indicator rendering module
//
// Renders the Wi-Fi glyph canvas: the signal dot, three arcs displaced by
// their offsets, the enclosing ring, the searching halo, the connected
// burst overlay, and the header label.

use crate::app::AppState;
use crate::theme;
use crate::ui::burst;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Context, Points},
        Block, BorderType, Borders,
    },
    Frame,
};

/// Shared origin of the dot and the arcs in canvas space. Offsets displace
/// shapes vertically from here.
const GLYPH_ORIGIN: (f64, f64) = (50.0, 40.0);

/// Center of the enclosing ring and the searching halo
const RING_CENTER: (f64, f64) = (50.0, 48.0);

/// Canvas units of vertical travel per offset unit
const OFFSET_SCALE: f64 = 0.55;

/// Radii of the small, medium and large arc
const ARC_RADII: [f64; 3] = [7.0, 13.0, 19.0];

/// Angular sweep of each arc in degrees, with 90 pointing straight up
const ARC_SWEEP: (i32, i32) = (40, 140);

/// Radius of the enclosing ring
const RING_RADIUS: f64 = 27.0;

/// The searching halo grows from the glyph out to this radius
const HALO_MAX_RADIUS: f64 = 44.0;

/// Sample step for arc point rendering, degrees
const ARC_SAMPLE_STEP: usize = 3;

/// Sample step for the dotted rings, degrees
const RING_SAMPLE_STEP: usize = 10;

/// Baseline of the header label
const LABEL_Y: f64 = 8.0;

pub fn render_indicator(f: &mut Frame, area: Rect, app: &AppState) {
    // Capture everything the paint closure needs by value
    let offsets = app.animation.offsets;
    let arc_color = app.animation.arc_color;
    let shadow_color = app.animation.shadow_color;
    let rotation = app.animation.arc_rotation();
    let label = app.animation.header_label;
    let is_animating = app.animation.is_animating;
    let pulse_phase = app.pulse_phase;
    let burst_dots = burst::visible_dots(&app.animation, app.animation_reduced);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme::NIGHT_NAVY)),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, 100.0])
        .y_bounds([0.0, 100.0])
        .paint(move |ctx| {
            let (ox, oy) = GLYPH_ORIGIN;
            let (rx, ry) = RING_CENTER;

            // Searching halo first, so the glyph sits on top of it
            if is_animating {
                let halo_radius = 6.0 + f64::from(pulse_phase) * (HALO_MAX_RADIUS - 6.0);
                draw_ring(ctx, rx, ry, halo_radius, theme::halo_color(pulse_phase));
            }

            // Enclosing ring carries the shadow color
            draw_ring(ctx, rx, ry, RING_RADIUS, shadow_color);

            // The three arcs, innermost first
            let arc_offsets = [offsets.small_arc, offsets.medium_arc, offsets.large_arc];
            for (radius, offset) in ARC_RADII.iter().zip(arc_offsets) {
                let y = oy - f64::from(offset) * OFFSET_SCALE;
                draw_arc(ctx, ox, y, *radius, rotation, arc_color);
            }

            // Signal dot below the arcs
            let dot_y = oy - f64::from(offsets.dot) * OFFSET_SCALE - 8.0;
            ctx.print(
                ox - 0.5,
                dot_y,
                Span::styled(
                    "●",
                    Style::default().fg(arc_color).add_modifier(Modifier::BOLD),
                ),
            );

            // Connected burst overlay
            burst::draw_burst(ctx, &burst_dots);

            // Header label, pulsing while the search runs
            let label_color = if is_animating {
                theme::label_pulse_color(pulse_phase)
            } else {
                theme::SIGNAL_WHITE
            };
            let label_offset = (label.len() as f64 / 2.0) * 1.2;
            ctx.print(
                50.0 - label_offset,
                LABEL_Y,
                Span::styled(
                    label,
                    Style::default().fg(label_color).add_modifier(Modifier::BOLD),
                ),
            );
        });

    f.render_widget(canvas, area);
}

/// Draw one arc as a run of sampled points. `rotation` swings the whole
/// sweep around the arc's center.
fn draw_arc(ctx: &mut Context<'_>, cx: f64, cy: f64, radius: f64, rotation: f64, color: Color) {
    let (start, end) = ARC_SWEEP;
    let coords: Vec<(f64, f64)> = (start..=end)
        .step_by(ARC_SAMPLE_STEP)
        .map(|deg| {
            let angle = (f64::from(deg) + rotation).to_radians();
            (cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect();

    ctx.draw(&Points {
        coords: &coords,
        color,
    });
}

/// Draw a dotted ring centered on (cx, cy)
fn draw_ring(ctx: &mut Context<'_>, cx: f64, cy: f64, radius: f64, color: Color) {
    let coords: Vec<(f64, f64)> = (0..360)
        .step_by(RING_SAMPLE_STEP)
        .map(|deg| {
            let angle = f64::from(deg).to_radians();
            (cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .filter(|&(x, y)| (0.0..=100.0).contains(&x) && (0.0..=100.0).contains(&y))
        .collect();

    ctx.draw(&Points {
        coords: &coords,
        color,
    });
}
