use super::props::{LoadState, WidgetProps};
use super::state::{CollapseState, WidgetAction, WidgetViewState};

/// Text shown in the body in place of the widget's data.
///
pub const PLACEHOLDER_TEXT: &str = "Widget Content Placeholder";

/// Toggle label while the body is visible.
///
pub const HIDE_LABEL: &str = "hide";

/// Toggle label while the body is hidden.
///
pub const SHOW_LABEL: &str = "show";

/// Specifying the addressable regions of a rendered widget.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum RegionKind {
    Loading,
    Header,
    Body,
}

/// The control that fires `WidgetAction::Toggle`.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ToggleControl {
    pub label: &'static str,
    pub action: WidgetAction,
}

impl ToggleControl {
    /// Return the control for the given collapse state. The label names the
    /// action activating it would perform.
    ///
    pub fn for_state(collapse: CollapseState) -> Self {
        let label = match collapse {
            CollapseState::Expanded => HIDE_LABEL,
            CollapseState::Collapsed => SHOW_LABEL,
        };
        ToggleControl {
            label,
            action: WidgetAction::Toggle,
        }
    }
}

/// One region of a rendered widget.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Region {
    Loading,
    Header { text: String, toggle: ToggleControl },
    Body { text: String },
}

impl Region {
    pub fn kind(&self) -> RegionKind {
        match self {
            Region::Loading => RegionKind::Loading,
            Region::Header { .. } => RegionKind::Header,
            Region::Body { .. } => RegionKind::Body,
        }
    }

    fn contains_text(&self, needle: &str) -> bool {
        match self {
            Region::Loading => false,
            Region::Header { text, toggle } => {
                text.contains(needle) || toggle.label.contains(needle)
            }
            Region::Body { text } => text.contains(needle),
        }
    }
}

/// Structural description of what a widget shows, in display order.
///
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ViewTree {
    regions: Vec<Region>,
}

impl ViewTree {
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn find(&self, kind: RegionKind) -> Option<&Region> {
        self.regions.iter().find(|region| region.kind() == kind)
    }

    pub fn contains(&self, kind: RegionKind) -> bool {
        self.find(kind).is_some()
    }

    /// Return true if any region displays the given text.
    ///
    pub fn contains_text(&self, needle: &str) -> bool {
        self.regions.iter().any(|region| region.contains_text(needle))
    }

    /// Return the header text, if the header is rendered.
    ///
    pub fn header_text(&self) -> Option<&str> {
        match self.find(RegionKind::Header) {
            Some(Region::Header { text, .. }) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Return the toggle control, if the header is rendered.
    ///
    pub fn toggle(&self) -> Option<&ToggleControl> {
        match self.find(RegionKind::Header) {
            Some(Region::Header { toggle, .. }) => Some(toggle),
            _ => None,
        }
    }

    pub fn toggle_label(&self) -> Option<&'static str> {
        self.toggle().map(|toggle| toggle.label)
    }
}

/// Render the widget for the given props and view state.
///
/// While loading only the loading region is produced. Once loaded the header
/// and toggle are always produced, and the body only while expanded. The
/// `error` and `data` props do not influence the result.
///
pub fn render(props: &WidgetProps, state: &WidgetViewState) -> ViewTree {
    let regions = match props.load_state() {
        LoadState::Loading => vec![Region::Loading],
        LoadState::Loaded => {
            let mut regions = vec![Region::Header {
                text: props.header.clone(),
                toggle: ToggleControl::for_state(state.collapse()),
            }];
            if !state.is_collapsed() {
                regions.push(Region::Body {
                    text: PLACEHOLDER_TEXT.to_string(),
                });
            }
            regions
        }
    };
    ViewTree { regions }
}
