// Application state management
//
// This module contains the main AppState struct and re-exports
// configuration types from the config submodule.

pub mod config;
pub mod event;

// Re-export config types for convenience
pub use config::{RefreshConfig, CHANGE_HIGHLIGHT_DURATION};

use crate::animation::WifiAnimation;
use config::{FRAME_TIME_THRESHOLD_MS, SLOW_FRAME_COUNT_THRESHOLD, TICK_INTERVAL_MS};
use std::time::Instant;

/// Main application state
pub struct AppState {
    /// Whether the application is running
    pub running: bool,

    /// The connection animation controller
    pub animation: WifiAnimation,

    /// Pulse phase for the halo ring and label fade (0.0 ~ 1.0)
    pub pulse_phase: f32,

    /// Last tick time for the pulse phase
    pub last_tick: Instant,

    /// Last time the animation clock was advanced
    last_advance: Instant,

    /// Refresh interval configuration
    pub refresh_config: RefreshConfig,

    /// Timestamp of the last frame render, for frame-time tracking
    last_frame_time: Instant,

    /// Counter for consecutive slow frames (frame time > 100ms)
    slow_frame_count: u32,

    /// Whether the burst dot budget has been auto-reduced because frames
    /// kept missing the threshold
    pub animation_reduced: bool,
}

impl AppState {
    /// Create a new AppState with default values
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            running: true,
            animation: WifiAnimation::new(),
            pulse_phase: 0.0,
            last_tick: now,
            last_advance: now,
            refresh_config: RefreshConfig::new(),
            last_frame_time: now,
            slow_frame_count: 0,
            animation_reduced: false,
        }
    }

    /// Update state on each pass of the run loop
    pub fn on_tick(&mut self) {
        let now = Instant::now();

        // Feed measured elapsed time to the animation's virtual clock
        let dt = now.duration_since(self.last_advance);
        self.last_advance = now;
        self.animation.advance(dt);

        // Advance the cosmetic pulse phase every ~100ms
        let elapsed_tick = now.duration_since(self.last_tick).as_millis();
        if elapsed_tick >= TICK_INTERVAL_MS {
            self.last_tick = now;

            self.pulse_phase += 0.05;
            if self.pulse_phase >= 1.0 {
                self.pulse_phase = 0.0;
            }
        }
    }

    /// The activation gesture: kick off (or restart) the search choreography
    pub fn tap(&mut self) {
        self.animation.activate();
        // A fresh run is a natural point to try the full dot budget again
        self.reset_animation_reduction();
    }

    /// Increase refresh rate (decrease interval, clamp to the minimum)
    pub fn increase_refresh_rate(&mut self) {
        let new_interval = self
            .refresh_config
            .refresh_ms
            .saturating_sub(config::REFRESH_STEP);
        self.refresh_config.refresh_ms = new_interval.max(config::MIN_REFRESH_MS);
        self.refresh_config.last_change = Some(Instant::now());
    }

    /// Decrease refresh rate (increase interval, clamp to the maximum)
    pub fn decrease_refresh_rate(&mut self) {
        let new_interval = self
            .refresh_config
            .refresh_ms
            .saturating_add(config::REFRESH_STEP);
        self.refresh_config.refresh_ms = new_interval.min(config::MAX_REFRESH_MS);
        self.refresh_config.last_change = Some(Instant::now());
    }

    /// Update frame time tracking and auto-reduce the burst dot budget if
    /// rendering keeps falling behind.
    ///
    /// Called at the start of each frame render. After enough consecutive
    /// frames over the threshold, the burst renders half its dots until the
    /// user activates again.
    pub fn update_frame_time(&mut self) {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time).as_millis();
        self.last_frame_time = now;

        if frame_time > FRAME_TIME_THRESHOLD_MS {
            self.slow_frame_count += 1;

            if self.slow_frame_count >= SLOW_FRAME_COUNT_THRESHOLD && !self.animation_reduced {
                self.animation_reduced = true;
                tracing::info!(
                    frame_time_ms = frame_time,
                    slow_frame_count = self.slow_frame_count,
                    "Auto-reducing burst dot budget due to slow frame times"
                );
            }
        } else if !self.animation_reduced {
            // Reset the counter on a fast frame unless already reduced
            self.slow_frame_count = 0;
        }
    }

    /// Reset the dot budget reduction so the next burst tries full size
    pub fn reset_animation_reduction(&mut self) {
        self.animation_reduced = false;
        self.slow_frame_count = 0;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
