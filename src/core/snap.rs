//! Release-time snap decisions.
//!
//! Given where the finger left the sheet, pick the rest position it should
//! animate to. Offsets are bottom-edge offsets: `0` is fully raised, more
//! negative is further down.

use crate::config::thresholds;

/// Where a released sheet should go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapTarget {
    /// Released above the top of travel; nothing to do.
    Stay,
    /// Spring back to the open position (fixed-height).
    Reset,
    /// Expand to fullscreen (expandable).
    Full,
    /// Return to half open (expandable).
    Half,
    /// Animate closed (fixed-height).
    Close,
    /// Dragged past the close threshold; dismiss without animating.
    Dismiss,
}

/// Offset of an expandable sheet resting half open.
#[inline]
pub fn half_offset(viewport_height: f64) -> f64 {
    -(viewport_height / thresholds::HALF_DIVISOR)
}

/// Offset above which a released fixed-height sheet springs back open.
#[inline]
pub fn fixed_reset_threshold(viewport_height: f64) -> f64 {
    -(viewport_height / thresholds::FIXED_RESET_DIVISOR)
}

/// Snap decision for a fixed-height sheet.
pub fn fixed_height(offset: f64, viewport_height: f64) -> SnapTarget {
    if offset > 0.0 {
        SnapTarget::Stay
    } else if offset > fixed_reset_threshold(viewport_height) {
        SnapTarget::Reset
    } else {
        SnapTarget::Close
    }
}

/// Snap decision for an expandable sheet.
///
/// The checks overlap and are evaluated in order: fullscreen wins over both
/// half-open conditions.
pub fn expandable(offset: f64, rest_offset: f64, viewport_height: f64) -> SnapTarget {
    let half = half_offset(viewport_height);

    let to_full = offset > half && rest_offset != 0.0;
    let to_middle = offset > -(viewport_height / 10.0 * thresholds::MIDDLE_TENTHS);
    let to_half_from_full =
        offset > -(viewport_height / 3.0 * thresholds::FULL_TO_HALF_THIRDS) && rest_offset != half;

    if to_full {
        SnapTarget::Full
    } else if to_middle || to_half_from_full {
        SnapTarget::Half
    } else {
        SnapTarget::Dismiss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f64 = 800.0;

    #[test]
    fn test_fixed_height_thresholds() {
        assert_eq!(fixed_reset_threshold(H), -80.0);
        assert_eq!(fixed_height(10.0, H), SnapTarget::Stay);
        assert_eq!(fixed_height(-1.0, H), SnapTarget::Reset);
        assert_eq!(fixed_height(-79.0, H), SnapTarget::Reset);
        assert_eq!(fixed_height(-80.0, H), SnapTarget::Close);
        assert_eq!(fixed_height(-400.0, H), SnapTarget::Close);
    }

    #[test]
    fn test_expandable_from_half() {
        let rest = half_offset(H);
        assert_eq!(rest, -400.0);
        // Raised above the half line
        assert_eq!(expandable(-50.0, rest, H), SnapTarget::Full);
        assert_eq!(expandable(-399.0, rest, H), SnapTarget::Full);
        // Pulled down a little
        assert_eq!(expandable(-500.0, rest, H), SnapTarget::Half);
        assert_eq!(expandable(-559.0, rest, H), SnapTarget::Half);
        // Past 70% of the viewport
        assert_eq!(expandable(-560.0, rest, H), SnapTarget::Dismiss);
        assert_eq!(expandable(-700.0, rest, H), SnapTarget::Dismiss);
    }

    #[test]
    fn test_expandable_from_full() {
        // Fullscreen sheets never re-trigger Full
        assert_eq!(expandable(-100.0, 0.0, H), SnapTarget::Half);
        assert_eq!(expandable(-559.0, 0.0, H), SnapTarget::Half);
        assert_eq!(expandable(-534.0, 0.0, H), SnapTarget::Half);
        assert_eq!(expandable(-560.0, 0.0, H), SnapTarget::Dismiss);
        assert_eq!(expandable(-600.0, 0.0, H), SnapTarget::Dismiss);
    }

    #[test]
    fn test_expandable_rule_order() {
        // From an off-rest baseline, the full rule wins even though the
        // half-open rules also hold.
        let rest = -300.0;
        assert_eq!(expandable(-200.0, rest, H), SnapTarget::Full);
        assert_eq!(expandable(-530.0, rest, H), SnapTarget::Half);
        assert_eq!(expandable(-600.0, rest, H), SnapTarget::Dismiss);
    }
}
