use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Specifying whether a widget's data is still pending.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LoadState {
    Loading,
    Loaded,
}

/// Inputs supplied to a widget by its owner for a single render.
///
/// The same shape is used for the `widgets` list of the configuration file.
///
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WidgetProps {
    pub header: String,
    #[serde(default)]
    pub loading: bool,
    /// Accepted from the owner but never inspected when rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Opaque payload. The body shows placeholder content instead.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub data: Value,
}

impl WidgetProps {
    /// Return props for a loaded widget with the given header and no data.
    ///
    pub fn new(header: impl Into<String>) -> Self {
        WidgetProps {
            header: header.into(),
            loading: false,
            error: None,
            data: Value::Null,
        }
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// Return the load state selected by the `loading` flag.
    ///
    pub fn load_state(&self) -> LoadState {
        if self.loading {
            LoadState::Loading
        } else {
            LoadState::Loaded
        }
    }
}
