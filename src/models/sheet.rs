//! Sheet state types shared by the controller and the view.

use std::fmt;

use crate::config::animation_classes;

/// Expansion behaviour, fixed when the sheet is initialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SheetMode {
    /// Two rest states: closed and open.
    #[default]
    FixedHeight,
    /// Three rest states: closed, half open and fullscreen.
    Expandable,
}

impl SheetMode {
    pub fn from_expandable(is_expandable: bool) -> Self {
        if is_expandable {
            Self::Expandable
        } else {
            Self::FixedHeight
        }
    }

    #[inline]
    pub fn is_expandable(self) -> bool {
        self == Self::Expandable
    }
}

/// Lifecycle phase of a sheet.
///
/// `Hidden -> Opening -> Resting <-> Dragging -> Settling -> Resting`,
/// with `Closing -> Closed` reachable from any live phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SheetPhase {
    /// Created but not yet initialized.
    #[default]
    Hidden,
    /// Opening animation running.
    Opening,
    /// Sitting at a rest position.
    Resting,
    /// A touch gesture is in progress.
    Dragging,
    /// Snap animation toward a rest position running.
    Settling,
    /// Close animation running.
    Closing,
    /// Dismissed; the owning view is expected to unmount.
    Closed,
}

impl SheetPhase {
    /// Whether the sheet is leaving or has left the screen.
    #[inline]
    pub fn is_closing(self) -> bool {
        matches!(self, Self::Closing | Self::Closed)
    }
}

/// Named transition currently applied to the sheet container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationTrigger {
    #[default]
    None,
    OpenModal,
    OpenHalf,
    ResetModal,
    ResetHalf,
    ResetFull,
    OpenFull,
    Close,
}

impl AnimationTrigger {
    /// CSS class that plays this transition (empty for [`AnimationTrigger::None`]).
    pub fn class_name(self) -> &'static str {
        match self {
            Self::None => "",
            Self::OpenModal => animation_classes::OPEN_MODAL,
            Self::OpenHalf => animation_classes::OPEN_HALF,
            Self::ResetModal => animation_classes::RESET_MODAL,
            Self::ResetHalf => animation_classes::RESET_HALF,
            Self::ResetFull => animation_classes::RESET_FULL,
            Self::OpenFull => animation_classes::OPEN_FULL,
            Self::Close => animation_classes::CLOSE,
        }
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::None
    }
}

impl fmt::Display for AnimationTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            other => write!(f, "{}", other.class_name()),
        }
    }
}

/// Render descriptor produced by the controller for the view layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetFrame {
    /// Bottom-edge offset of the container in pixels.
    pub offset: f64,
    /// Transition to apply to the container.
    pub animation: AnimationTrigger,
    /// Whether the sheet is pinned fullscreen (content may scroll).
    pub is_fullscreen: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_expandable() {
        assert_eq!(SheetMode::from_expandable(true), SheetMode::Expandable);
        assert_eq!(SheetMode::from_expandable(false), SheetMode::FixedHeight);
        assert!(SheetMode::Expandable.is_expandable());
        assert!(!SheetMode::FixedHeight.is_expandable());
    }

    #[test]
    fn test_class_names() {
        assert_eq!(AnimationTrigger::None.class_name(), "");
        assert_eq!(
            AnimationTrigger::OpenHalf.class_name(),
            "bottom-sheet__animate-open"
        );
        assert_eq!(
            AnimationTrigger::ResetModal.class_name(),
            "bottom-sheet__animate-reset-modal"
        );
        assert!(AnimationTrigger::None.is_none());
        assert!(!AnimationTrigger::OpenFull.is_none());
    }

    #[test]
    fn test_trigger_display() {
        assert_eq!(AnimationTrigger::None.to_string(), "none");
        assert_eq!(
            AnimationTrigger::Close.to_string(),
            "bottom-sheet__animate-close"
        );
    }

    #[test]
    fn test_closing_phases() {
        assert!(SheetPhase::Closing.is_closing());
        assert!(SheetPhase::Closed.is_closing());
        assert!(!SheetPhase::Settling.is_closing());
        assert!(!SheetPhase::Hidden.is_closing());
    }
}
