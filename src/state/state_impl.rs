use super::StateError;
use crate::config::hotkeys::HotkeyMap;
use crate::config::Config;
use crate::logger::LogBuffer;
use crate::ui::Theme;
use crate::widget::{render, CollapseState, ViewTree, WidgetAction, WidgetProps, WidgetViewState};
use log::*;

/// A mounted widget: the props its owner supplies and the view state the
/// instance owns.
///
#[derive(Debug, Clone)]
pub struct WidgetSlot {
    props: WidgetProps,
    view: WidgetViewState,
}

impl WidgetSlot {
    /// Mount a new instance. View state always starts fresh.
    ///
    pub fn mount(props: WidgetProps) -> Self {
        WidgetSlot {
            props,
            view: WidgetViewState::new(),
        }
    }

    pub fn props(&self) -> &WidgetProps {
        &self.props
    }

    pub fn view_state(&self) -> &WidgetViewState {
        &self.view
    }

    /// Render the instance's current view tree.
    ///
    pub fn tree(&self) -> ViewTree {
        render(&self.props, &self.view)
    }
}

/// Houses data representative of application state.
///
pub struct State {
    widgets: Vec<WidgetSlot>,
    focused: usize,
    theme: Theme,
    hotkeys: HotkeyMap,
    trace_toggles: bool,
    show_log: bool,
    log: LogBuffer,
    spinner_index: usize,
}

impl State {
    /// Return a new instance mounting one widget per props value.
    ///
    pub fn new(widgets: Vec<WidgetProps>, theme: Theme, hotkeys: HotkeyMap, log: LogBuffer) -> Self {
        State {
            widgets: widgets.into_iter().map(WidgetSlot::mount).collect(),
            focused: 0,
            theme,
            hotkeys,
            trace_toggles: false,
            show_log: false,
            log,
            spinner_index: 0,
        }
    }

    /// Build the state described by the configuration. An unknown theme
    /// falls back to the default palette.
    ///
    pub fn from_config(config: &Config, log: LogBuffer) -> Result<Self, StateError> {
        if config.widgets.is_empty() {
            return Err(StateError::NoWidgets);
        }
        let theme = match config.theme() {
            Ok(theme) => theme,
            Err(e) => {
                warn!("{}, falling back to the default theme", e);
                Theme::default()
            }
        };
        let mut state = State::new(config.widgets.clone(), theme, config.hotkeys.clone(), log);
        state.set_trace_toggles(config.trace_toggles);
        Ok(state)
    }

    pub fn set_trace_toggles(&mut self, enabled: bool) {
        self.trace_toggles = enabled;
    }

    pub fn get_widgets(&self) -> &[WidgetSlot] {
        &self.widgets
    }

    pub fn get_widget(&self, index: usize) -> Result<&WidgetSlot, StateError> {
        let count = self.widgets.len();
        self.widgets
            .get(index)
            .ok_or(StateError::WidgetNotFound { index, count })
    }

    fn get_widget_mut(&mut self, index: usize) -> Result<&mut WidgetSlot, StateError> {
        let count = self.widgets.len();
        self.widgets
            .get_mut(index)
            .ok_or(StateError::WidgetNotFound { index, count })
    }

    /// Return the view tree of the widget at the index.
    ///
    pub fn view_tree(&self, index: usize) -> Result<ViewTree, StateError> {
        self.get_widget(index).map(WidgetSlot::tree)
    }

    pub fn get_focused_index(&self) -> usize {
        self.focused
    }

    pub fn is_focused(&self, index: usize) -> bool {
        !self.widgets.is_empty() && self.focused == index
    }

    /// Move focus to the next widget, wrapping to the first.
    ///
    pub fn next_widget(&mut self) {
        if !self.widgets.is_empty() {
            self.focused = (self.focused + 1) % self.widgets.len();
        }
    }

    /// Move focus to the previous widget, wrapping to the last.
    ///
    pub fn previous_widget(&mut self) {
        if !self.widgets.is_empty() {
            self.focused = (self.focused + self.widgets.len() - 1) % self.widgets.len();
        }
    }

    /// Dispatch a toggle to the widget at the index and return its new
    /// collapse state.
    ///
    pub fn toggle_widget(&mut self, index: usize) -> Result<CollapseState, StateError> {
        let trace = self.trace_toggles;
        let slot = self.get_widget_mut(index)?;
        let previous = slot.view.dispatch(WidgetAction::Toggle);
        if trace {
            info!(
                "Widget '{}' toggled, was collapsed: {}",
                slot.props.header,
                previous.is_collapsed()
            );
        }
        Ok(slot.view.collapse())
    }

    pub fn toggle_focused(&mut self) -> Result<CollapseState, StateError> {
        self.toggle_widget(self.focused)
    }

    /// Replace the props of the widget at the index. The instance stays
    /// mounted, so its view state is kept.
    ///
    pub fn set_props(&mut self, index: usize, props: WidgetProps) -> Result<(), StateError> {
        self.get_widget_mut(index)?.props = props;
        Ok(())
    }

    pub fn set_loading(&mut self, index: usize, loading: bool) -> Result<(), StateError> {
        self.get_widget_mut(index)?.props.loading = loading;
        Ok(())
    }

    /// Flip the focused widget's `loading` prop and return the new value.
    ///
    pub fn toggle_focused_loading(&mut self) -> Result<bool, StateError> {
        let index = self.focused;
        let loading = !self.get_widget(index)?.props.loading;
        self.set_loading(index, loading)?;
        Ok(loading)
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn get_hotkeys(&self) -> &HotkeyMap {
        &self.hotkeys
    }

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    pub fn toggle_log(&mut self) {
        self.show_log = !self.show_log;
    }

    /// Return the captured log lines, oldest first.
    ///
    pub fn get_log_entries(&self) -> Vec<String> {
        self.log.entries()
    }

    pub fn advance_spinner(&mut self) {
        self.spinner_index = self.spinner_index.wrapping_add(1);
    }

    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::hotkeys::default_hotkeys;
    use crate::widget::{RegionKind, SHOW_LABEL};

    fn state_with(headers: &[&str]) -> State {
        State::new(
            headers.iter().map(|h| WidgetProps::new(*h)).collect(),
            Theme::default(),
            default_hotkeys(),
            LogBuffer::default(),
        )
    }

    #[test]
    fn test_widgets_mount_expanded() {
        let state = state_with(&["Sales", "Traffic"]);
        for slot in state.get_widgets() {
            assert_eq!(slot.view_state().collapse(), CollapseState::Expanded);
            assert!(slot.tree().contains(RegionKind::Body));
        }
    }

    #[test]
    fn test_focus_wraps_around() {
        let mut state = state_with(&["a", "b", "c"]);
        assert_eq!(state.get_focused_index(), 0);
        state.previous_widget();
        assert_eq!(state.get_focused_index(), 2);
        state.next_widget();
        assert_eq!(state.get_focused_index(), 0);
        state.next_widget();
        state.next_widget();
        assert!(state.is_focused(2));
    }

    #[test]
    fn test_focus_on_empty_dashboard_is_noop() {
        let mut state = state_with(&[]);
        state.next_widget();
        state.previous_widget();
        assert_eq!(state.get_focused_index(), 0);
        assert!(!state.is_focused(0));
        assert!(matches!(
            state.toggle_focused(),
            Err(StateError::WidgetNotFound { index: 0, count: 0 })
        ));
    }

    #[test]
    fn test_toggle_only_affects_focused_widget() {
        let mut state = state_with(&["Sales", "Traffic"]);
        state.next_widget();
        assert_eq!(state.toggle_focused().unwrap(), CollapseState::Collapsed);

        assert!(!state.get_widget(0).unwrap().view_state().is_collapsed());
        assert!(state.get_widget(1).unwrap().view_state().is_collapsed());
        assert_eq!(state.view_tree(1).unwrap().toggle_label(), Some(SHOW_LABEL));
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut state = state_with(&["Sales"]);
        assert!(matches!(
            state.toggle_widget(3),
            Err(StateError::WidgetNotFound { index: 3, count: 1 })
        ));
    }

    #[test]
    fn test_loading_change_keeps_collapse_state() {
        let mut state = state_with(&["Sales"]);
        state.toggle_focused().unwrap();

        assert!(state.toggle_focused_loading().unwrap());
        assert_eq!(
            state.view_tree(0).unwrap().regions().len(),
            1,
            "only the loading region while loading"
        );
        assert!(!state.toggle_focused_loading().unwrap());

        let tree = state.view_tree(0).unwrap();
        assert!(!tree.contains(RegionKind::Body));
        assert_eq!(tree.toggle_label(), Some(SHOW_LABEL));
    }

    #[test]
    fn test_set_props_keeps_view_state() {
        let mut state = state_with(&["Sales"]);
        state.toggle_widget(0).unwrap();
        state
            .set_props(0, WidgetProps::new("Sales (EUR)").with_error("stale"))
            .unwrap();
        let slot = state.get_widget(0).unwrap();
        assert_eq!(slot.props().header, "Sales (EUR)");
        assert!(slot.view_state().is_collapsed());
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::new();
        config.theme_name = "does-not-exist".to_string();
        config.trace_toggles = true;
        let state = State::from_config(&config, LogBuffer::default()).unwrap();
        assert_eq!(state.get_widgets().len(), config.widgets.len());
        assert_eq!(state.get_theme(), &Theme::default());
    }

    #[test]
    fn test_from_config_without_widgets() {
        let mut config = Config::new();
        config.widgets.clear();
        assert!(matches!(
            State::from_config(&config, LogBuffer::default()),
            Err(StateError::NoWidgets)
        ));
    }

    #[test]
    fn test_log_panel_and_entries() {
        let log = LogBuffer::default();
        log.push("first".to_string());
        let mut state = State::new(vec![], Theme::default(), default_hotkeys(), log.clone());
        assert!(!state.is_log_visible());
        state.toggle_log();
        assert!(state.is_log_visible());
        log.push("second".to_string());
        assert_eq!(state.get_log_entries(), vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_spinner_advances() {
        let mut state = state_with(&["Sales"]);
        state.advance_spinner();
        state.advance_spinner();
        assert_eq!(state.get_spinner_index(), 2);
    }
}
