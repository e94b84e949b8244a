use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Alignment,
    text::{Line, Span, Text},
    widgets::Paragraph,
};

/// Braille animation frames, advanced once per tick.
///
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const LABEL: &str = "Loading...";

/// Return the frame for the given spinner index.
///
pub fn frame(index: usize) -> &'static str {
    FRAMES[index % FRAMES.len()]
}

/// Return a centered spinner paragraph for an area of the given height. The
/// paragraph holds no block; callers attach their own.
///
pub fn widget(state: &State, height: u16) -> Paragraph<'static> {
    let style = styling::spinner_style(state.get_theme());
    // Borders take two rows, the spinner line one more.
    let padding = height.saturating_sub(3) / 2;
    let mut lines: Vec<Line> = (0..padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(vec![
        Span::styled(frame(state.get_spinner_index()), style),
        Span::raw(" "),
        Span::styled(LABEL, style),
    ]));
    Paragraph::new(Text::from(lines)).alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_wraps() {
        assert_eq!(frame(0), FRAMES[0]);
        assert_eq!(frame(FRAMES.len()), FRAMES[0]);
        assert_eq!(frame(FRAMES.len() + 3), FRAMES[3]);
    }
}
