//! Dashboard state error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No widget is mounted at the index
    #[error("Widget not found at index {index} ({count} mounted)")]
    WidgetNotFound { index: usize, count: usize },

    /// The dashboard has nothing to show
    #[error("No widgets configured")]
    NoWidgets,
}
