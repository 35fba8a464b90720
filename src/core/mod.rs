//! Core gesture logic for the bottom sheet.
//!
//! Provides:
//! - [`SheetController`] - Touch-to-offset state machine with deferred commits
//! - [`snap`] - Release-time snap decisions
//! - [`ViewportHeightSource`] - Injected viewport height with scoped subscriptions

mod controller;
pub mod error;
pub mod snap;
mod viewport;

pub use controller::{Reaction, SheetController, Ticket};
pub use error::ConfigError;
pub use viewport::{ManualViewport, Subscription, ViewportHeightSource};
