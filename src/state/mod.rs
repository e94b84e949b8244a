//! Application state management module.
//!
//! This module contains the dashboard state owned by the main thread:
//! - `State`, holding the mounted widgets, focus, theme and log panel
//! - `WidgetSlot`, one mounted widget (props from the owner plus its own
//!   view state)
//! - State error handling

mod error;
mod state_impl;

pub use error::StateError;
pub use state_impl::{State, WidgetSlot};
