//! Reactive handle around a mounted sheet's controller.
//!
//! The handle is provided as context to everything rendered inside the
//! sheet, so nested content can close it with [`SheetHandle::dismiss`].

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::core::{Reaction, SheetController};
use crate::models::SheetFrame;

/// Copyable handle to a mounted bottom sheet.
#[derive(Clone, Copy)]
pub struct SheetHandle {
    controller: StoredValue<SheetController, LocalStorage>,
    frame: RwSignal<SheetFrame>,
    on_close: Option<Callback<()>>,
}

impl SheetHandle {
    pub(super) fn new(controller: SheetController, on_close: Option<Callback<()>>) -> Self {
        let frame = RwSignal::new(controller.frame());
        Self {
            controller: StoredValue::new_local(controller),
            frame,
            on_close,
        }
    }

    /// Close the sheet with its closing animation.
    pub fn dismiss(&self) {
        self.apply(SheetController::dismiss);
    }

    /// Current render descriptor.
    pub fn frame(&self) -> ReadSignal<SheetFrame> {
        self.frame.read_only()
    }

    pub(super) fn touch_start(&self, touch_y: f64) {
        self.controller
            .try_update_value(|c| c.on_touch_start(touch_y));
    }

    /// Returns `true` when the sheet followed the finger.
    pub(super) fn touch_move(&self, touch_y: f64) -> bool {
        let moved = self
            .controller
            .try_update_value(|c| c.on_touch_move(touch_y))
            .flatten();
        match moved {
            Some(offset) => {
                self.frame.update(|f| f.offset = offset);
                true
            }
            None => false,
        }
    }

    pub(super) fn touch_end(&self) {
        self.apply(SheetController::on_touch_end);
    }

    pub(super) fn content_scroll(&self, scroll_top: f64) {
        if let Some(frame) = self.controller.try_update_value(|c| {
            c.on_content_scroll(scroll_top);
            c.frame()
        }) {
            self.frame.set(frame);
        }
    }

    pub(super) fn viewport_resized(&self, height: f64) {
        self.controller
            .try_update_value(|c| c.on_viewport_height_change(height));
    }

    /// Run `op` on the controller, publish the new frame and act on the reaction.
    pub(super) fn apply(&self, op: impl FnOnce(&mut SheetController) -> Reaction) {
        let Some((reaction, frame)) = self.controller.try_update_value(|c| {
            let reaction = op(c);
            (reaction, c.frame())
        }) else {
            return;
        };
        self.frame.set(frame);
        self.react(reaction);
    }

    pub(super) fn react(&self, reaction: Reaction) {
        match reaction {
            Reaction::Idle => {}
            Reaction::Schedule(ticket) => {
                let handle = *self;
                // A disposed sheet makes the commit a no-op
                Timeout::new(ticket.delay_ms(), move || {
                    handle.apply(|c| c.commit(ticket));
                })
                .forget();
            }
            Reaction::Closed => {
                if let Some(on_close) = self.on_close {
                    on_close.run(());
                }
            }
        }
    }
}

/// Handle of the enclosing [`BottomSheet`](super::BottomSheet).
///
/// # Panics
///
/// Panics when called outside a bottom sheet's children.
pub fn use_sheet_handle() -> SheetHandle {
    use_context::<SheetHandle>().expect("SheetHandle must be provided by a BottomSheet")
}
