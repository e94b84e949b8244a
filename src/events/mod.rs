//! Event handling module.
//!
//! This module contains the handler for terminal events: key presses routed
//! through the configured hotkeys, and ticks driving the loading spinner.

pub mod terminal;
