//! A terminal dashboard of collapsible widgets.
//!
//! The widget itself lives in [`widget`] and has no terminal dependency: its
//! props, collapse state and pure render function can be used and tested on
//! their own. The remaining modules host widgets in a `ratatui` terminal
//! application.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod ui;
pub mod widget;
