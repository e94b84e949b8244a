use super::Frame;
use crate::state::State;
use crate::ui::widgets::{spinner, styling};
use crate::widget::{Region, RegionKind, ViewTree};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::Span,
    widgets::{block::Title, Block, Borders, Paragraph, Wrap},
};

/// Return the height a panel needs for the given view tree.
///
pub fn panel_height(tree: &ViewTree) -> Constraint {
    if tree.contains(RegionKind::Loading) {
        Constraint::Length(3)
    } else if tree.contains(RegionKind::Body) {
        Constraint::Length(5)
    } else {
        // Borders only, the header lives in the top border.
        Constraint::Length(2)
    }
}

/// Render one widget's view tree as a bordered panel. The header text sits
/// on the left of the top border and the toggle label on the right.
///
pub fn panel(frame: &mut Frame, size: Rect, tree: &ViewTree, focused: bool, state: &State) {
    let theme = state.get_theme();
    let mut block = Block::default().borders(Borders::ALL).border_style(if focused {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    });

    let mut body = None;
    for region in tree.regions() {
        match region {
            Region::Loading => {
                frame.render_widget(spinner::widget(state, size.height).block(block), size);
                return;
            }
            Region::Header { text, toggle } => {
                let title_style = if focused {
                    styling::active_block_title_style(theme)
                } else {
                    styling::normal_block_title_style(theme)
                };
                block = block
                    .title(Span::styled(format!(" {} ", text), title_style))
                    .title(
                        Title::from(Span::styled(
                            format!("[{}]", toggle.label),
                            styling::toggle_style(theme),
                        ))
                        .alignment(Alignment::Right),
                    );
            }
            Region::Body { text } => body = Some(text.as_str()),
        }
    }

    match body {
        Some(text) => {
            let paragraph = Paragraph::new(text)
                .style(styling::normal_text_style(theme))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(paragraph, size);
        }
        None => frame.render_widget(block, size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::hotkeys::default_hotkeys;
    use crate::logger::LogBuffer;
    use crate::ui::Theme;
    use crate::widget::{render, WidgetAction, WidgetProps, WidgetViewState};
    use ratatui::{backend::TestBackend, Terminal};
    use serde_json::json;

    fn state() -> State {
        State::new(vec![], Theme::default(), default_hotkeys(), LogBuffer::default())
    }

    fn draw(tree: &ViewTree) -> String {
        let state = state();
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        terminal
            .draw(|frame| panel(frame, frame.size(), tree, true, &state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_expanded_panel_shows_header_toggle_and_body() {
        let props = WidgetProps::new("Sales").with_data(json!({}));
        let screen = draw(&render(&props, &WidgetViewState::new()));
        assert!(screen.contains("Sales"));
        assert!(screen.contains("[hide]"));
        assert!(screen.contains("Widget Content Placeholder"));
    }

    #[test]
    fn test_collapsed_panel_hides_body() {
        let mut view = WidgetViewState::new();
        view.dispatch(WidgetAction::Toggle);
        let screen = draw(&render(&WidgetProps::new("Sales"), &view));
        assert!(screen.contains("Sales"));
        assert!(screen.contains("[show]"));
        assert!(!screen.contains("Widget Content Placeholder"));
    }

    #[test]
    fn test_loading_panel_shows_only_spinner() {
        let props = WidgetProps::new("Sales").with_loading(true);
        let screen = draw(&render(&props, &WidgetViewState::new()));
        assert!(screen.contains("Loading..."));
        assert!(!screen.contains("Sales"));
        assert!(!screen.contains("[hide]"));
        assert!(!screen.contains("Placeholder"));
    }

    #[test]
    fn test_panel_height() {
        let props = WidgetProps::new("Sales");
        let mut view = WidgetViewState::new();
        assert_eq!(panel_height(&render(&props, &view)), Constraint::Length(5));
        view.dispatch(WidgetAction::Toggle);
        assert_eq!(panel_height(&render(&props, &view)), Constraint::Length(2));
        let loading = props.with_loading(true);
        assert_eq!(panel_height(&render(&loading, &view)), Constraint::Length(3));
    }
}
