// Connection animation controller
//
// Drives the Wi-Fi search choreography: a bouncing signal dot, three
// oscillating arcs, and the connected particle burst. All timing runs
// through the virtual-clock Scheduler, so the choreography is exercised in
// tests with synthetic durations instead of wall-clock waits.

pub mod scheduler;

use rand::Rng;
use ratatui::style::Color;
use std::time::Duration;

use crate::theme;
use scheduler::{Scheduler, TimerToken};

// ============================================================================
// Choreography constants
// ============================================================================

/// Base step of the choreography. Every timer period is a multiple of this.
pub const BASE_STEP: Duration = Duration::from_millis(350);

/// Number of base steps the search phase runs before the connected
/// transition fires.
pub const SEARCH_STEPS: u32 = 12;

/// Vertical travel per bounce tick for the dot and the small arc.
const OFFSET_STEP: f32 = 15.0;

/// The signal dot bounces inside this closed range. -25 is the top of the
/// travel (negative offsets displace upward), 20 the bottom.
const DOT_TOP: f32 = -25.0;
const DOT_BOTTOM: f32 = 20.0;

/// Resting pose for every shape, restored before each connected transition.
const REST_OFFSETS: Offsets = Offsets {
    dot: 20.0,
    small_arc: 16.0,
    medium_arc: 14.5,
    large_arc: 14.0,
};

/// Number of dots in the connected burst.
pub const BURST_DOTS: usize = 50;

/// Per-dot reveal stagger inside the burst.
pub const BURST_STAGGER: Duration = Duration::from_millis(10);

/// Slack after the connected transition before the burst hides again.
const BURST_LINGER: Duration = Duration::from_millis(50);

/// Burst dots scatter inside this canvas-space box.
const SCATTER_X: std::ops::Range<f64> = 4.0..96.0;
const SCATTER_Y: std::ops::Range<f64> = 8.0..92.0;

const IDLE_LABEL: &str = "Wi-Fi";
const SEARCHING_LABEL: &str = "Searching";
const CONNECTED_LABEL: &str = "Connected";

// ============================================================================
// Types
// ============================================================================

/// Timer-driven steps of the choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Bounce the dot and small arc, sink the medium arc.
    Bounce,
    /// Lift the medium arc back up.
    Lift,
    /// Reverse the small arc and re-seat the outer arcs.
    Swap,
    /// Search window elapsed; switch to the connected look.
    Connect,
    /// Hide the burst again.
    Fade,
}

/// Vertical displacement of each shape, in canvas units. Positive values
/// displace downward, matching screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offsets {
    pub dot: f32,
    pub small_arc: f32,
    pub medium_arc: f32,
    pub large_arc: f32,
}

/// State machine behind the Wi-Fi screen.
///
/// A plain struct the renderer polls each frame; nothing here touches the
/// terminal. The direction flags are instance fields, so two screens never
/// interfere with each other.
pub struct WifiAnimation {
    /// True while the search choreography is running.
    pub is_animating: bool,
    /// True while the connected burst is on screen.
    pub show_burst: bool,
    pub offsets: Offsets,
    pub arc_color: Color,
    pub shadow_color: Color,
    pub header_label: &'static str,
    /// Scatter positions for the burst, regenerated on every connect.
    pub burst_scatter: Vec<(f64, f64)>,

    /// Virtual time at which the current burst appeared.
    burst_shown_at: Option<Duration>,
    /// Sign of the dot's next move: true = upward (negative delta).
    moving_upwards: bool,
    /// Sign of the small arc's next move, flipped by the swap ticker.
    move_arc: bool,

    scheduler: Scheduler<Step>,
    bounce_ticker: Option<TimerToken>,
    lift_ticker: Option<TimerToken>,
    swap_ticker: Option<TimerToken>,
    connect_timer: Option<TimerToken>,
    fade_timer: Option<TimerToken>,
}

impl WifiAnimation {
    pub fn new() -> Self {
        Self {
            is_animating: false,
            show_burst: false,
            offsets: REST_OFFSETS,
            arc_color: theme::SIGNAL_WHITE,
            shadow_color: theme::SKY_BLUE,
            header_label: IDLE_LABEL,
            burst_scatter: Vec::new(),
            burst_shown_at: None,
            moving_upwards: true,
            move_arc: true,
            scheduler: Scheduler::new(),
            bounce_ticker: None,
            lift_ticker: None,
            swap_ticker: None,
            connect_timer: None,
            fade_timer: None,
        }
    }

    /// Entry point for the activation gesture.
    ///
    /// Safe to call while a previous run is still in flight: stale timers
    /// are dropped before the new choreography is armed, so ticks never
    /// double up.
    pub fn activate(&mut self) {
        self.cancel_timers();
        self.reset_values();

        self.bounce_ticker = Some(self.scheduler.schedule_every(BASE_STEP, Step::Bounce));
        self.lift_ticker = Some(self.scheduler.schedule_every(BASE_STEP * 2, Step::Lift));
        self.swap_ticker = Some(self.scheduler.schedule_every(BASE_STEP * 3, Step::Swap));
        self.connect_timer = Some(
            self.scheduler
                .schedule_once(BASE_STEP * SEARCH_STEPS, Step::Connect),
        );

        tracing::debug!("search choreography armed");
    }

    /// Advance the virtual clock and apply every step that came due.
    pub fn advance(&mut self, dt: Duration) {
        let steps = self.scheduler.advance(dt);
        for step in steps {
            self.apply(step);
        }
    }

    /// Stop the choreography and park every shape at its resting pose.
    ///
    /// Does not unregister the periodic tickers; each one observes the
    /// cleared flag on its next fire and removes itself, so a tick already
    /// scheduled still lands once.
    pub fn restore_animation(&mut self) {
        self.is_animating = false;
        self.moving_upwards = true;
        self.move_arc = true;
        self.offsets = REST_OFFSETS;
    }

    /// Seed the searching pose and raise the animating flag.
    pub fn reset_values(&mut self) {
        self.is_animating = true;
        self.header_label = SEARCHING_LABEL;
        self.offsets.small_arc -= 7.5;
        self.offsets.dot -= OFFSET_STEP;
        self.offsets.medium_arc = -5.5;
        self.offsets.large_arc = -19.0;
        self.show_burst = false;
        self.burst_shown_at = None;
        self.arc_color = theme::SIGNAL_WHITE;
        self.shadow_color = theme::SKY_BLUE;
    }

    /// Rotation applied to the arcs while searching, in degrees.
    #[allow(clippy::ifs_same_cond)]
    pub fn arc_rotation(&self) -> f64 {
        if self.is_animating && self.move_arc {
            180.0
        } else if self.is_animating && self.move_arc {
            // Same condition as the arm above, so the reverse swing never
            // fires; kept as-is rather than guessing at a trigger.
            -180.0
        } else {
            0.0
        }
    }

    /// How many burst dots are revealed right now. Dots appear one by one
    /// on a short stagger and all vanish together when the flag drops.
    pub fn burst_visible_dots(&self) -> usize {
        match self.burst_shown_at {
            Some(shown_at) if self.show_burst => {
                let elapsed = self.scheduler.now().saturating_sub(shown_at);
                let revealed = (elapsed.as_millis() / BURST_STAGGER.as_millis()) as usize + 1;
                revealed.min(self.burst_scatter.len())
            }
            _ => 0,
        }
    }

    /// Number of timers still registered. The search phase holds four;
    /// a drained scheduler means the screen is fully settled.
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    fn apply(&mut self, step: Step) {
        match step {
            Step::Bounce => {
                if !self.is_animating {
                    Self::retire(&mut self.scheduler, &mut self.bounce_ticker);
                    return;
                }
                let delta = if self.moving_upwards {
                    -OFFSET_STEP
                } else {
                    OFFSET_STEP
                };
                self.offsets.dot += delta;
                self.offsets.small_arc += if self.move_arc {
                    -OFFSET_STEP
                } else {
                    OFFSET_STEP
                };
                // Clamp comparison: an exact-equality check here would let
                // the bounce run away unbounded if the offset ever skipped
                // a boundary.
                if self.offsets.dot <= DOT_TOP {
                    self.moving_upwards = false;
                } else if self.offsets.dot >= DOT_BOTTOM {
                    self.moving_upwards = true;
                }
                if self.move_arc {
                    self.offsets.medium_arc -= OFFSET_STEP;
                }
            }
            Step::Lift => {
                if !self.is_animating {
                    Self::retire(&mut self.scheduler, &mut self.lift_ticker);
                    return;
                }
                self.offsets.medium_arc += OFFSET_STEP;
            }
            Step::Swap => {
                if !self.is_animating {
                    Self::retire(&mut self.scheduler, &mut self.swap_ticker);
                    return;
                }
                self.move_arc = !self.move_arc;
                self.offsets.small_arc = if self.move_arc { 8.5 } else { -15.0 };
                if self.moving_upwards {
                    self.offsets.large_arc = -19.0;
                    self.offsets.medium_arc = -5.5;
                } else {
                    self.offsets.large_arc = 14.0;
                    self.offsets.medium_arc = 0.0;
                }
            }
            Step::Connect => {
                self.connect_timer = None;
                self.restore_animation();
                self.arc_color = theme::LINK_GREEN;
                self.shadow_color = theme::GLOW_WHITE;
                self.header_label = CONNECTED_LABEL;
                self.show_burst = true;
                self.burst_scatter = scatter_burst();
                self.burst_shown_at = Some(self.scheduler.now());
                self.fade_timer = Some(
                    self.scheduler
                        .schedule_once(BASE_STEP + BURST_LINGER, Step::Fade),
                );
                tracing::debug!("connected transition applied");
            }
            Step::Fade => {
                self.fade_timer = None;
                self.show_burst = false;
                self.burst_shown_at = None;
            }
        }
    }

    fn cancel_timers(&mut self) {
        let tokens = [
            self.bounce_ticker.take(),
            self.lift_ticker.take(),
            self.swap_ticker.take(),
            self.connect_timer.take(),
            self.fade_timer.take(),
        ];
        for token in tokens.into_iter().flatten() {
            self.scheduler.cancel(token);
        }
    }

    fn retire(scheduler: &mut Scheduler<Step>, slot: &mut Option<TimerToken>) {
        if let Some(token) = slot.take() {
            scheduler.cancel(token);
        }
    }
}

impl Default for WifiAnimation {
    fn default() -> Self {
        Self::new()
    }
}

/// Random scatter for the connected burst, in canvas coordinates.
fn scatter_burst() -> Vec<(f64, f64)> {
    let mut rng = rand::rng();
    (0..BURST_DOTS)
        .map(|_| {
            (
                rng.random_range(SCATTER_X),
                rng.random_range(SCATTER_Y),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn quad(anim: &WifiAnimation) -> (f32, f32, f32, f32) {
        (
            anim.offsets.dot,
            anim.offsets.small_arc,
            anim.offsets.medium_arc,
            anim.offsets.large_arc,
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The signal dot never leaves [-25, 20], no matter how long the
        /// search runs (the connect transition is pushed out of the way so
        /// the bounce ticker keeps going).
        #[test]
        fn prop_dot_stays_in_travel_range(ticks in 1usize..200usize) {
            let mut anim = WifiAnimation::new();
            anim.activate();
            // Drop the connect timer so the search never ends
            let token = anim.connect_timer.take().unwrap();
            anim.scheduler.cancel(token);

            for _ in 0..ticks {
                anim.advance(BASE_STEP);
                prop_assert!(anim.offsets.dot >= -25.0);
                prop_assert!(anim.offsets.dot <= 20.0);
            }
        }

        /// restore_animation parks the shapes at the rest pose from any
        /// point in the choreography.
        #[test]
        fn prop_restore_is_canonical(ticks in 0usize..50usize) {
            let mut anim = WifiAnimation::new();
            anim.activate();
            for _ in 0..ticks {
                anim.advance(Duration::from_millis(117));
            }

            anim.restore_animation();
            prop_assert_eq!(quad(&anim), (20.0, 16.0, 14.5, 14.0));
            prop_assert!(!anim.is_animating);
            prop_assert!(anim.moving_upwards);
            prop_assert!(anim.move_arc);
        }
    }

    #[test]
    fn test_reset_values_from_rest_pose() {
        let mut anim = WifiAnimation::new();
        anim.reset_values();

        assert_eq!(quad(&anim), (5.0, 8.5, -5.5, -19.0));
        assert_eq!(anim.header_label, "Searching");
        assert!(anim.is_animating);
        assert!(!anim.show_burst);
        assert_eq!(anim.arc_color, theme::SIGNAL_WHITE);
        assert_eq!(anim.shadow_color, theme::SKY_BLUE);
    }

    #[test]
    fn test_reset_then_restore_round_trips_to_rest() {
        let mut anim = WifiAnimation::new();
        anim.reset_values();
        anim.restore_animation();

        assert_eq!(quad(&anim), (20.0, 16.0, 14.5, 14.0));
        assert!(!anim.is_animating);
    }

    #[test]
    fn test_idle_screen_defaults() {
        let anim = WifiAnimation::new();
        assert_eq!(anim.header_label, "Wi-Fi");
        assert_eq!(quad(&anim), (20.0, 16.0, 14.5, 14.0));
        assert!(!anim.is_animating);
        assert_eq!(anim.pending_timers(), 0);
    }

    #[test]
    fn test_search_runs_until_connect_fires() {
        let mut anim = WifiAnimation::new();
        anim.activate();
        assert_eq!(anim.pending_timers(), 4);

        // Just shy of the 12-step window: still searching
        anim.advance(BASE_STEP * SEARCH_STEPS - Duration::from_millis(1));
        assert_eq!(anim.header_label, "Searching");
        assert!(anim.is_animating);
        assert!(!anim.show_burst);

        // Crossing 12 * 350ms = 4.2s applies the connected look
        anim.advance(Duration::from_millis(1));
        assert_eq!(anim.header_label, "Connected");
        assert!(!anim.is_animating);
        assert!(anim.show_burst);
        assert_eq!(anim.arc_color, theme::LINK_GREEN);
        assert_eq!(anim.shadow_color, theme::GLOW_WHITE);
        assert_eq!(quad(&anim), (20.0, 16.0, 14.5, 14.0));
        assert_eq!(anim.burst_scatter.len(), BURST_DOTS);
    }

    #[test]
    fn test_burst_hides_after_linger() {
        let mut anim = WifiAnimation::new();
        anim.activate();
        anim.advance(BASE_STEP * SEARCH_STEPS);
        assert!(anim.show_burst);

        // The fade timer sits at 350ms + 50ms past the transition
        anim.advance(Duration::from_millis(399));
        assert!(anim.show_burst);
        anim.advance(Duration::from_millis(1));
        assert!(!anim.show_burst);
        assert_eq!(anim.burst_visible_dots(), 0);
    }

    #[test]
    fn test_burst_reveals_dots_on_stagger() {
        let mut anim = WifiAnimation::new();
        anim.activate();
        anim.advance(BASE_STEP * SEARCH_STEPS);

        assert_eq!(anim.burst_visible_dots(), 1);
        anim.advance(Duration::from_millis(95));
        assert_eq!(anim.burst_visible_dots(), 10);
        // The 400ms window cuts the stagger short: the last dots of the
        // scatter never get their turn before the fade lands.
        anim.advance(Duration::from_millis(300));
        assert_eq!(anim.burst_visible_dots(), 40);
    }

    #[test]
    fn test_tickers_retire_after_connect() {
        let mut anim = WifiAnimation::new();
        anim.activate();

        // Well past the transition, every ticker has observed the cleared
        // flag once, the fade has fired, and the scheduler is drained.
        anim.advance(BASE_STEP * SEARCH_STEPS);
        anim.advance(BASE_STEP * 4);
        assert_eq!(anim.pending_timers(), 0);
        assert!(!anim.show_burst);
    }

    #[test]
    fn test_double_activation_does_not_leak_or_compound() {
        let mut anim = WifiAnimation::new();
        anim.activate();
        anim.advance(BASE_STEP * 3);

        anim.activate();
        assert_eq!(anim.pending_timers(), 4);
        assert!(anim.is_animating);
        assert_eq!(anim.header_label, "Searching");

        // One bounce tick after re-activation moves the dot by exactly one
        // step; leaked tickers from the first run would double it.
        let before = anim.offsets.dot;
        anim.advance(BASE_STEP);
        assert_eq!((anim.offsets.dot - before).abs(), OFFSET_STEP);
    }

    #[test]
    fn test_bounce_sequence_from_searching_pose() {
        let mut anim = WifiAnimation::new();
        anim.activate();

        // From 5, moving upward: 5 -> -10 -> -25 (top, flips) -> -10 -> 5
        let expected = [-10.0, -25.0, -10.0, 5.0];
        for want in expected {
            anim.advance(BASE_STEP);
            assert_eq!(anim.offsets.dot, want);
        }
    }

    #[test]
    fn test_rotation_follows_searching_state() {
        let mut anim = WifiAnimation::new();
        assert_eq!(anim.arc_rotation(), 0.0);

        anim.activate();
        assert_eq!(anim.arc_rotation(), 180.0);

        // After the first swap tick move_arc is false and the arcs sit flat
        anim.advance(BASE_STEP * 3);
        assert_eq!(anim.arc_rotation(), 0.0);

        anim.restore_animation();
        assert_eq!(anim.arc_rotation(), 0.0);
    }
}
