//! Gesture-to-position state machine.
//!
//! [`SheetController`] owns the sheet's vertical offset and turns touch input
//! into offset changes, snap decisions and animation triggers. It never
//! touches the DOM or a clock: operations that need a delayed commit return a
//! [`Reaction::Schedule`] ticket, and the host calls [`SheetController::commit`]
//! once the animation delay has elapsed.
//!
//! # Superseded timers
//!
//! Every scheduled transition bumps a generation counter. A ticket only
//! commits while it is still the active pending transition, so a timer that
//! fires after a newer transition was scheduled is a no-op.

use log::debug;

use super::snap::{self, SnapTarget};
use crate::config::{DEFAULT_ANIMATION_DELAY_MS, INITIAL_HIDDEN_OFFSET, LOG_TARGET};
use crate::models::{AnimationTrigger, SheetFrame, SheetMode, SheetOptions, SheetPhase};

// ============================================================================
// Reaction
// ============================================================================

/// Handle for a deferred commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    delay_ms: u32,
}

impl Ticket {
    /// How long the host should wait before calling `commit`.
    #[inline]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

/// What the host has to do after an operation.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reaction {
    /// Nothing further.
    Idle,
    /// Call [`SheetController::commit`] with the ticket after its delay.
    Schedule(Ticket),
    /// The sheet is closed; invoke the close callback.
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Commit {
    FinishOpening,
    Rest {
        offset: f64,
        is_fullscreen: Option<bool>,
    },
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pending {
    generation: u64,
    commit: Commit,
}

// ============================================================================
// SheetController
// ============================================================================

/// Drag state machine for a single mounted sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetController {
    viewport_height: f64,
    offset: f64,
    rest_offset: f64,
    mode: SheetMode,
    custom_height: Option<f64>,
    is_fullscreen: bool,
    is_content_scrolled: bool,
    gesture_origin: Option<f64>,
    animation: AnimationTrigger,
    phase: SheetPhase,
    animation_delay_ms: u32,
    generation: u64,
    pending: Option<Pending>,
}

impl SheetController {
    /// Creates a hidden, uninitialized sheet.
    pub fn new(animation_delay_ms: u32) -> Self {
        Self {
            viewport_height: 0.0,
            offset: INITIAL_HIDDEN_OFFSET,
            rest_offset: INITIAL_HIDDEN_OFFSET,
            mode: SheetMode::default(),
            custom_height: None,
            is_fullscreen: false,
            is_content_scrolled: false,
            gesture_origin: None,
            animation: AnimationTrigger::None,
            phase: SheetPhase::Hidden,
            animation_delay_ms,
            generation: 0,
            pending: None,
        }
    }

    /// Creates a sheet from validated options and starts its opening animation.
    pub fn mount(options: &SheetOptions, viewport_height: f64) -> (Self, Reaction) {
        let mut sheet = Self::new(options.animation_delay_ms);
        let reaction = sheet.initialize(options.mode(), viewport_height, options.custom_height);
        (sheet, reaction)
    }

    /// Sets the mode and first rest position, and triggers the opening animation.
    ///
    /// `custom_height` is kept only for fixed-height sheets.
    pub fn initialize(
        &mut self,
        mode: SheetMode,
        viewport_height: f64,
        custom_height: Option<f64>,
    ) -> Reaction {
        self.mode = mode;
        self.viewport_height = viewport_height;
        self.is_fullscreen = false;
        self.is_content_scrolled = false;
        self.gesture_origin = None;

        let (rest, trigger) = match mode {
            SheetMode::FixedHeight => {
                self.custom_height = custom_height;
                (0.0, AnimationTrigger::OpenModal)
            }
            SheetMode::Expandable => {
                self.custom_height = None;
                (snap::half_offset(viewport_height), AnimationTrigger::OpenHalf)
            }
        };
        self.offset = rest;
        self.rest_offset = rest;

        debug!(
            target: LOG_TARGET,
            "opening {:?} sheet at {} (viewport {})", mode, rest, viewport_height
        );
        self.schedule(trigger, Commit::FinishOpening, SheetPhase::Opening)
    }

    /// Records the gesture origin. A touch start during a gesture restarts it.
    pub fn on_touch_start(&mut self, touch_y: f64) {
        if self.is_content_scrolled || self.phase.is_closing() {
            return;
        }
        self.gesture_origin = Some(touch_y);
        if self.phase == SheetPhase::Resting {
            self.phase = SheetPhase::Dragging;
        }
    }

    /// Moves the sheet with the finger. Returns the new offset when accepted.
    pub fn on_touch_move(&mut self, touch_y: f64) -> Option<f64> {
        if self.is_content_scrolled || self.phase.is_closing() {
            return None;
        }
        let origin = self.gesture_origin?;

        // Finger moving up raises the sheet
        let delta = origin - touch_y;
        let candidate = self.rest_offset + delta;

        if candidate > 0.0 {
            return None;
        }
        if self.is_fullscreen && candidate > self.rest_offset {
            return None;
        }
        if !self.mode.is_expandable() && candidate > self.offset {
            return None;
        }

        self.offset = candidate;
        Some(candidate)
    }

    /// Ends the gesture and decides where the sheet settles.
    pub fn on_touch_end(&mut self) -> Reaction {
        self.gesture_origin = None;
        if self.phase == SheetPhase::Dragging {
            self.phase = SheetPhase::Resting;
        }

        if self.is_content_scrolled || self.phase.is_closing() || self.offset == self.rest_offset
        {
            return Reaction::Idle;
        }

        let target = match self.mode {
            SheetMode::FixedHeight => snap::fixed_height(self.offset, self.viewport_height),
            SheetMode::Expandable => {
                snap::expandable(self.offset, self.rest_offset, self.viewport_height)
            }
        };
        debug!(
            target: LOG_TARGET,
            "released at {} (rest {}): {:?}", self.offset, self.rest_offset, target
        );

        match target {
            SnapTarget::Stay => Reaction::Idle,
            SnapTarget::Reset => self.schedule(
                AnimationTrigger::ResetModal,
                Commit::Rest {
                    offset: 0.0,
                    is_fullscreen: None,
                },
                SheetPhase::Settling,
            ),
            SnapTarget::Full => self.schedule(
                AnimationTrigger::OpenFull,
                Commit::Rest {
                    offset: 0.0,
                    is_fullscreen: Some(true),
                },
                SheetPhase::Settling,
            ),
            SnapTarget::Half => self.schedule(
                AnimationTrigger::ResetHalf,
                Commit::Rest {
                    offset: snap::half_offset(self.viewport_height),
                    is_fullscreen: Some(false),
                },
                SheetPhase::Settling,
            ),
            SnapTarget::Close => self.begin_close(),
            SnapTarget::Dismiss => self.finish_close(),
        }
    }

    /// Tracks the scroll position of the sheet's inner content.
    ///
    /// While content is scrolled past its top, drag input is ignored and an
    /// expanded sheet stays pinned fullscreen.
    pub fn on_content_scroll(&mut self, scroll_top: f64) {
        self.is_content_scrolled = scroll_top > 0.0;
        if self.is_content_scrolled && self.mode.is_expandable() && self.rest_offset == 0.0 {
            self.is_fullscreen = true;
        }
    }

    /// Closes the sheet with the close animation. Repeated calls while
    /// closing are no-ops.
    pub fn dismiss(&mut self) -> Reaction {
        if self.phase.is_closing() {
            return Reaction::Idle;
        }
        self.begin_close()
    }

    /// Records a new viewport height. Current offsets are left alone; only
    /// later snap decisions use it.
    pub fn on_viewport_height_change(&mut self, height: f64) {
        self.viewport_height = height;
    }

    /// Applies the deferred change for `ticket` if it is still current.
    pub fn commit(&mut self, ticket: Ticket) -> Reaction {
        let Some(pending) = self.pending else {
            return Reaction::Idle;
        };
        if pending.generation != ticket.generation {
            debug!(
                target: LOG_TARGET,
                "dropping superseded commit {} (active {})", ticket.generation, pending.generation
            );
            return Reaction::Idle;
        }
        self.pending = None;

        match pending.commit {
            Commit::FinishOpening => {
                self.animation = AnimationTrigger::None;
                self.phase = SheetPhase::Resting;
                Reaction::Idle
            }
            Commit::Rest {
                offset,
                is_fullscreen,
            } => {
                self.offset = offset;
                self.rest_offset = offset;
                if let Some(is_fullscreen) = is_fullscreen {
                    self.is_fullscreen = is_fullscreen;
                }
                self.animation = AnimationTrigger::None;
                if self.phase == SheetPhase::Settling {
                    self.phase = SheetPhase::Resting;
                }
                debug!(target: LOG_TARGET, "settled at {}", offset);
                Reaction::Idle
            }
            Commit::Close => self.finish_close(),
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Render descriptor for the view layer.
    #[inline]
    pub fn frame(&self) -> SheetFrame {
        SheetFrame {
            offset: self.offset,
            animation: self.animation,
            is_fullscreen: self.is_fullscreen,
        }
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    pub fn rest_offset(&self) -> f64 {
        self.rest_offset
    }

    #[inline]
    pub fn mode(&self) -> SheetMode {
        self.mode
    }

    /// Fixed pixel height, fixed-height sheets only.
    #[inline]
    pub fn custom_height(&self) -> Option<f64> {
        self.custom_height
    }

    #[inline]
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    #[inline]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    #[inline]
    pub fn is_content_scrolled(&self) -> bool {
        self.is_content_scrolled
    }

    /// Whether a touch gesture is in progress.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.gesture_origin.is_some()
    }

    #[inline]
    pub fn animation(&self) -> AnimationTrigger {
        self.animation
    }

    #[inline]
    pub fn phase(&self) -> SheetPhase {
        self.phase
    }

    #[inline]
    pub fn animation_delay_ms(&self) -> u32 {
        self.animation_delay_ms
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    fn schedule(&mut self, trigger: AnimationTrigger, commit: Commit, phase: SheetPhase) -> Reaction {
        self.generation += 1;
        self.pending = Some(Pending {
            generation: self.generation,
            commit,
        });
        self.animation = trigger;
        self.phase = phase;
        Reaction::Schedule(Ticket {
            generation: self.generation,
            delay_ms: self.animation_delay_ms,
        })
    }

    fn begin_close(&mut self) -> Reaction {
        debug!(target: LOG_TARGET, "closing sheet");
        self.schedule(AnimationTrigger::Close, Commit::Close, SheetPhase::Closing)
    }

    fn finish_close(&mut self) -> Reaction {
        // Invalidate anything still in flight
        self.generation += 1;
        self.pending = None;
        self.gesture_origin = None;
        self.is_fullscreen = false;
        self.offset = -self.viewport_height;
        self.rest_offset = -self.viewport_height;
        self.animation = AnimationTrigger::None;
        self.phase = SheetPhase::Closed;
        debug!(target: LOG_TARGET, "sheet closed");
        Reaction::Closed
    }
}

impl Default for SheetController {
    fn default() -> Self {
        Self::new(DEFAULT_ANIMATION_DELAY_MS)
    }
}

// ============================================================================
// Tests
// ============================================================================
