use super::{dashboard, footer, log, Frame};
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.size());

    if state.is_log_visible() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[0]);
        dashboard(frame, columns[0], state);
        log(frame, columns[1], state);
    } else {
        dashboard(frame, rows[0], state);
    }

    footer(frame, rows[1], state);
}
