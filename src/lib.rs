//! Draggable bottom sheet for Leptos.
//!
//! A panel anchored to the bottom edge of the viewport that follows vertical
//! touch drags and snaps between rest positions: closed and open for
//! fixed-height sheets, closed, half open and fullscreen for expandable ones.
//!
//! - [`core`] - Gesture state machine, snap rules, viewport source
//! - [`models`] - Sheet modes, frames and options
//! - [`components`] - The [`BottomSheet`](components::BottomSheet) component
//! - [`utils`] - Browser viewport access

pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use components::{BottomSheet, SheetHandle, use_sheet_handle};
pub use crate::core::{ConfigError, Reaction, SheetController, Ticket, ViewportHeightSource};
pub use models::{AnimationTrigger, SheetFrame, SheetMode, SheetOptions, SheetPhase};
