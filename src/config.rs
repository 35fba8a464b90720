//! Bottom sheet configuration.
//!
//! Centralizes the timing constants, snap thresholds and CSS animation names
//! shared by the controller and the view layer.

// =============================================================================
// Timing
// =============================================================================

/// Delay held before a rest-state change is committed (milliseconds).
///
/// Matches the duration of the CSS keyframes in `sheet.module.css`.
pub const DEFAULT_ANIMATION_DELAY_MS: u32 = 250;

// =============================================================================
// Geometry
// =============================================================================

/// Offset a freshly created sheet starts at, far below any real viewport so
/// nothing flashes before the opening animation runs.
pub const INITIAL_HIDDEN_OFFSET: f64 = -9000.0;

/// Snap thresholds, expressed against the viewport height.
pub mod thresholds {
    /// Fixed-height sheets reset when released above `-height / RESET_DIVISOR`.
    pub const FIXED_RESET_DIVISOR: f64 = 10.0;

    /// Expandable sheets rest half open at `-height / HALF_DIVISOR`.
    pub const HALF_DIVISOR: f64 = 2.0;

    /// Expandable sheets return to half open above `-height / 10 * MIDDLE_TENTHS`.
    pub const MIDDLE_TENTHS: f64 = 7.0;

    /// Expandable sheets not resting half open return to half open above
    /// `-height / 3 * FULL_TO_HALF_THIRDS`.
    pub const FULL_TO_HALF_THIRDS: f64 = 2.0;
}

// =============================================================================
// Animation Class Names
// =============================================================================

/// Global CSS class names of the sheet keyframe animations.
pub mod animation_classes {
    pub const OPEN_MODAL: &str = "bottom-sheet__animate-open-modal";
    pub const OPEN_HALF: &str = "bottom-sheet__animate-open";
    pub const RESET_MODAL: &str = "bottom-sheet__animate-reset-modal";
    pub const RESET_HALF: &str = "bottom-sheet__animate-reset";
    pub const RESET_FULL: &str = "bottom-sheet__animate-reset-full";
    pub const OPEN_FULL: &str = "bottom-sheet__animate-open-full";
    pub const CLOSE: &str = "bottom-sheet__animate-close";
}

// =============================================================================
// Logging
// =============================================================================

/// Log target used by the controller and the view layer.
pub const LOG_TARGET: &str = "bottom_sheet";
