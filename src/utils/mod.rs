//! Browser utilities.
//!
//! Provides:
//! - [`WindowViewport`] - Viewport height source backed by the window

pub mod dom;

pub use dom::{WindowViewport, viewport_height};
