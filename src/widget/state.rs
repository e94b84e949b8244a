/// Specifying whether a widget's body is shown.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum CollapseState {
    #[default]
    Expanded,
    Collapsed,
}

impl CollapseState {
    /// Return the opposite state.
    ///
    pub fn toggled(self) -> Self {
        match self {
            CollapseState::Expanded => CollapseState::Collapsed,
            CollapseState::Collapsed => CollapseState::Expanded,
        }
    }

    pub fn is_collapsed(self) -> bool {
        self == CollapseState::Collapsed
    }
}

/// Actions a widget instance reacts to.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WidgetAction {
    Toggle,
}

/// View state owned by a single widget instance.
///
/// Every instance starts expanded. Nothing outside `dispatch` changes it, so
/// a change of props (including `loading`) never affects the collapse state.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct WidgetViewState {
    collapse: CollapseState,
}

impl WidgetViewState {
    /// Return the state of a freshly mounted widget.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collapse(&self) -> CollapseState {
        self.collapse
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapse.is_collapsed()
    }

    /// Apply the action in place and return the collapse state from before
    /// the action.
    ///
    pub fn dispatch(&mut self, action: WidgetAction) -> CollapseState {
        let previous = self.collapse;
        *self = reduce(*self, action);
        previous
    }
}

/// Return the state that results from applying the action.
///
pub fn reduce(state: WidgetViewState, action: WidgetAction) -> WidgetViewState {
    match action {
        WidgetAction::Toggle => WidgetViewState {
            collapse: state.collapse.toggled(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_expanded() {
        let state = WidgetViewState::new();
        assert_eq!(state.collapse(), CollapseState::Expanded);
        assert!(!state.is_collapsed());
    }

    #[test]
    fn test_toggle_collapses_expanded() {
        let state = reduce(WidgetViewState::new(), WidgetAction::Toggle);
        assert_eq!(state.collapse(), CollapseState::Collapsed);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let initial = WidgetViewState::new();
        let twice = reduce(reduce(initial, WidgetAction::Toggle), WidgetAction::Toggle);
        assert_eq!(twice, initial);

        let collapsed = reduce(initial, WidgetAction::Toggle);
        let back = reduce(reduce(collapsed, WidgetAction::Toggle), WidgetAction::Toggle);
        assert_eq!(back, collapsed);
    }

    #[test]
    fn test_dispatch_returns_previous_state() {
        let mut state = WidgetViewState::new();
        assert_eq!(state.dispatch(WidgetAction::Toggle), CollapseState::Expanded);
        assert!(state.is_collapsed());
        assert_eq!(state.dispatch(WidgetAction::Toggle), CollapseState::Collapsed);
        assert!(!state.is_collapsed());
    }

    #[test]
    fn test_collapse_state_toggled() {
        assert_eq!(CollapseState::Expanded.toggled(), CollapseState::Collapsed);
        assert_eq!(CollapseState::Collapsed.toggled(), CollapseState::Expanded);
    }
}
