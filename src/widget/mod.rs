//! Collapsible dashboard widget.
//!
//! This module holds everything a widget is, independent of any terminal or
//! rendering backend:
//! - `WidgetProps` supplied by the owning container on every render
//! - `WidgetViewState`, the collapse flag owned by one widget instance
//! - `render`, a pure function from props and state to a `ViewTree`
//!
//! Drawing a `ViewTree` to the terminal is done by `crate::ui`.

mod props;
mod state;
mod view;

pub use props::{LoadState, WidgetProps};
pub use state::{reduce, CollapseState, WidgetAction, WidgetViewState};
pub use view::{
    render, Region, RegionKind, ToggleControl, ViewTree, HIDE_LABEL, PLACEHOLDER_TEXT, SHOW_LABEL,
};
