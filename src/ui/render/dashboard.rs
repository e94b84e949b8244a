use super::panel::{panel, panel_height};
use super::Frame;
use crate::state::State;
use crate::widget::ViewTree;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Render the mounted widgets stacked top to bottom, in mount order.
///
pub fn dashboard(frame: &mut Frame, size: Rect, state: &State) {
    let trees: Vec<ViewTree> = state.get_widgets().iter().map(|slot| slot.tree()).collect();

    let mut constraints: Vec<Constraint> = trees.iter().map(panel_height).collect();
    // Absorb the leftover rows so panels keep their own heights.
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    for (index, tree) in trees.iter().enumerate() {
        let area = chunks[index];
        if area.height == 0 {
            break;
        }
        panel(frame, area, tree, state.is_focused(index), state);
    }
}
