//! Application constants and configuration

use std::time::Duration;

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pull distance (in points) at which a release starts a refresh.
pub const TRIGGER_DISTANCE: f32 = 80.0;

/// Pointer deltas are scaled by this while pulling so the gesture has
/// some resistance.
pub const DRAG_MULTIPLIER: f32 = 0.5;

/// Simulated network delay for a refresh cycle.
pub const REFRESH_DELAY: Duration = Duration::from_millis(3000);

/// Height of the indicator overlay drawn across the top of the list.
pub const INDICATOR_HEIGHT: f32 = 80.0;

/// Height of the linear progress bar inside the indicator.
pub const BAR_HEIGHT: f32 = 4.0;

/// Peak alpha of the gradient backdrop, reached at full pull progress.
pub const BACKDROP_MAX_ALPHA: f32 = 0.45;

/// Number of rows in the demo list.
pub const ROW_COUNT: usize = 10;
