//! Drawing the curation list

use super::state::{CurationState, Mode};

const NORMAL_HELP: &str =
    "up/k down/j move | space include | c change type | e edit | enter confirm | q abort";
const EDIT_HELP: &str = "editing description | enter save | esc cancel";

/// Lines making up one frame of the review screen
pub fn render_frame(state: &CurationState) -> Vec<String> {
    let help = match state.mode() {
        Mode::Normal => NORMAL_HELP,
        Mode::Edit => EDIT_HELP,
    };
    let mut lines = vec![format!("Review commits ({})", help), String::new()];

    if state.items().is_empty() {
        lines.push("  no commits to review".to_string());
        return lines;
    }

    for (idx, item) in state.items().iter().enumerate() {
        let pointer = if idx == state.cursor() { '>' } else { ' ' };
        let mark = if item.included { 'x' } else { ' ' };
        lines.push(format!("{} [{}] {}", pointer, mark, item.commit));
    }

    if state.mode() == Mode::Edit {
        lines.push(String::new());
        lines.push(format!("description: {}_", state.edit_buffer()));
    }

    lines
}
