//! UI components built with Leptos.
//!
//! - [`sheet`] - Draggable bottom sheet overlay

pub mod sheet;

pub use sheet::{BottomSheet, SheetHandle, use_sheet_handle};
