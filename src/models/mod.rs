//! Data models and types for the bottom sheet.
//!
//! Contains:
//! - [`SheetMode`], [`SheetPhase`] - How the sheet behaves and where it is in its lifecycle
//! - [`AnimationTrigger`], [`SheetFrame`] - Render-ready state consumed by the view
//! - [`SheetOptions`], [`RawSheetOptions`] - Validated and raw configuration

mod options;
mod sheet;

pub use options::{RawSheetOptions, SheetOptions};
pub use sheet::{AnimationTrigger, SheetFrame, SheetMode, SheetPhase};
