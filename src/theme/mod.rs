// Theme module - Color constants and palette helpers
//
// Color palette for the Wi-Fi screen: a night-sky backdrop with a white
// signal glyph that turns green once the connection lands.

use ratatui::style::Color;

/// Arc and dot color while searching
/// RGB: (236, 244, 255)
pub const SIGNAL_WHITE: Color = Color::Rgb(236, 244, 255);

/// Shadow/glow color while searching, also used for chrome accents
/// RGB: (86, 156, 247)
pub const SKY_BLUE: Color = Color::Rgb(86, 156, 247);

/// Arc and dot color once connected
/// RGB: (129, 199, 132)
pub const LINK_GREEN: Color = Color::Rgb(129, 199, 132);

/// Shadow color once connected - stands in for a translucent white glow
/// RGB: (203, 209, 222)
pub const GLOW_WHITE: Color = Color::Rgb(203, 209, 222);

/// Backdrop tone for rings and faded chrome
/// RGB: (43, 58, 94)
pub const NIGHT_NAVY: Color = Color::Rgb(43, 58, 94);

/// Inactive/dimmed text
/// RGB: (122, 132, 156)
pub const MIST_GRAY: Color = Color::Rgb(122, 132, 156);

/// Interpolate between two RGB colors based on a ratio (0.0 ~ 1.0)
pub fn interpolate_color(color1: (u8, u8, u8), color2: (u8, u8, u8), ratio: f32) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    let r = (color1.0 as f32 + (color2.0 as f32 - color1.0 as f32) * ratio) as u8;
    let g = (color1.1 as f32 + (color2.1 as f32 - color1.1 as f32) * ratio) as u8;
    let b = (color1.2 as f32 + (color2.2 as f32 - color1.2 as f32) * ratio) as u8;
    Color::Rgb(r, g, b)
}

/// Color of the expanding halo ring for a given pulse phase.
/// Bright blue as the ring leaves the glyph, fading into the backdrop as
/// it grows.
pub fn halo_color(phase: f32) -> Color {
    interpolate_color((86, 156, 247), (43, 58, 94), phase)
}

/// Label color while searching: breathes between dim and bright so the
/// text reads as a pulse rather than a static caption.
pub fn label_pulse_color(phase: f32) -> Color {
    // Triangle wave so the fade is symmetric in both directions
    let wave = if phase < 0.5 {
        phase * 2.0
    } else {
        (1.0 - phase) * 2.0
    };
    interpolate_color((122, 132, 156), (236, 244, 255), wave)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_color_endpoints() {
        assert_eq!(
            interpolate_color((0, 0, 0), (255, 255, 255), 0.0),
            Color::Rgb(0, 0, 0)
        );
        assert_eq!(
            interpolate_color((0, 0, 0), (255, 255, 255), 1.0),
            Color::Rgb(255, 255, 255)
        );
    }

    #[test]
    fn test_interpolate_color_clamps_ratio() {
        assert_eq!(
            interpolate_color((10, 20, 30), (200, 200, 200), -1.0),
            Color::Rgb(10, 20, 30)
        );
        assert_eq!(
            interpolate_color((10, 20, 30), (200, 200, 200), 2.0),
            Color::Rgb(200, 200, 200)
        );
    }

    #[test]
    fn test_label_pulse_is_symmetric() {
        assert_eq!(label_pulse_color(0.25), label_pulse_color(0.75));
        assert_eq!(label_pulse_color(0.0), Color::Rgb(122, 132, 156));
    }
}
