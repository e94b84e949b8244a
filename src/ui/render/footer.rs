use super::Frame;
use crate::config::hotkeys::{build_footer_text, HotkeyAction};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, widgets::Paragraph};

/// Render footer widget listing the bound hotkeys.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let controls_text = build_footer_text(
        state.get_hotkeys(),
        &[
            (
                HotkeyAction::FocusNext,
                "focus",
                Some(HotkeyAction::FocusPrev),
            ),
            (HotkeyAction::ToggleWidget, "toggle", None),
            (HotkeyAction::ToggleLoading, "loading", None),
            (HotkeyAction::ToggleLog, "log", None),
            (HotkeyAction::Quit, "quit", None),
        ],
    );

    let paragraph = Paragraph::new(controls_text).style(styling::footer_style(state.get_theme()));
    frame.render_widget(paragraph, size);
}
