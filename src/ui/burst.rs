// Burst rendering module
//
// Renders the connected particle burst: a random scatter of dots revealed
// one by one on a short stagger while the controller holds the burst flag
// up. The dot budget halves when frame-time monitoring has kicked in.

use crate::animation::{WifiAnimation, BURST_DOTS};
use crate::theme;
use ratatui::{style::Style, text::Span, widgets::canvas::Context};

/// Symbol used to render burst dots
const DOT_SYMBOL: &str = "•";

/// Dot budget for the current frame
pub fn dot_budget(reduced: bool) -> usize {
    if reduced {
        BURST_DOTS / 2
    } else {
        BURST_DOTS
    }
}

/// Scatter positions visible this frame, stagger and budget applied
pub fn visible_dots(anim: &WifiAnimation, reduced: bool) -> Vec<(f64, f64)> {
    let count = anim.burst_visible_dots().min(dot_budget(reduced));
    anim.burst_scatter.iter().take(count).copied().collect()
}

/// Paint the burst dots onto the canvas
pub fn draw_burst(ctx: &mut Context<'_>, dots: &[(f64, f64)]) {
    for &(x, y) in dots {
        ctx.print(
            x,
            y,
            Span::styled(DOT_SYMBOL, Style::default().fg(theme::GLOW_WHITE)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{BASE_STEP, SEARCH_STEPS};
    use std::time::Duration;

    #[test]
    fn test_dot_budget_halves_when_reduced() {
        assert_eq!(dot_budget(false), BURST_DOTS);
        assert_eq!(dot_budget(true), BURST_DOTS / 2);
    }

    #[test]
    fn test_no_dots_outside_burst_window() {
        let anim = WifiAnimation::new();
        assert!(visible_dots(&anim, false).is_empty());
    }

    #[test]
    fn test_budget_caps_visible_dots() {
        let mut anim = WifiAnimation::new();
        anim.activate();
        anim.advance(BASE_STEP * SEARCH_STEPS);
        anim.advance(Duration::from_millis(390));

        // 40 dots into the stagger, the reduced budget still caps at 25
        assert_eq!(visible_dots(&anim, false).len(), 40);
        assert_eq!(visible_dots(&anim, true).len(), BURST_DOTS / 2);
    }
}
