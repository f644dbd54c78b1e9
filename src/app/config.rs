// Application configuration types
//
// This module contains configuration structs and constants for:
// - UI refresh intervals
// - Pulse animation cadence
// - Frame-time monitoring thresholds

use std::time::{Duration, Instant};

// ============================================================================
// Constants
// ============================================================================

/// Minimum refresh interval in milliseconds
pub const MIN_REFRESH_MS: u64 = 15;

/// Maximum refresh interval in milliseconds
pub const MAX_REFRESH_MS: u64 = 500;

/// Refresh interval adjustment step in milliseconds
pub const REFRESH_STEP: u64 = 5;

/// Duration to highlight a recently changed refresh interval
pub const CHANGE_HIGHLIGHT_DURATION: Duration = Duration::from_millis(500);

/// Tick interval for the cosmetic pulse phase (100ms)
pub const TICK_INTERVAL_MS: u128 = 100;

/// Frame time threshold for auto-reducing the burst dot budget (100ms)
pub const FRAME_TIME_THRESHOLD_MS: u128 = 100;

/// Number of consecutive slow frames before the dot budget is reduced
pub const SLOW_FRAME_COUNT_THRESHOLD: u32 = 5;

// ============================================================================
// Configuration Structs
// ============================================================================

/// Configuration for the UI refresh interval
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Refresh interval in milliseconds (15-500ms)
    pub refresh_ms: u64,

    /// Timestamp of last interval change (for visual feedback)
    pub last_change: Option<Instant>,
}

impl RefreshConfig {
    /// Create a new RefreshConfig with default values
    pub fn new() -> Self {
        Self {
            refresh_ms: 33,
            last_change: None,
        }
    }

    /// Get UI refresh interval as Duration
    pub fn ui_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_ms)
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self::new()
    }
}
