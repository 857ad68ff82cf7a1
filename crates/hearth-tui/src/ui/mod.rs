//! UI rendering
//!
//! Pure rendering functions that convert region backing state into ratatui
//! widgets. Geometry mirrors the classic chat layout: transcript on the
//! left, three-row input line beneath it, 20-column user sidebar on the
//! right.

mod input;
mod messages;
mod users;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::surface::ViewState;

const USER_SIDEBAR_WIDTH: u16 = 20;
const MAIN_MIN_WIDTH: u16 = 20;
const MESSAGES_MIN_HEIGHT: u16 = 3;
const INPUT_HEIGHT: u16 = 3;

/// Render the entire UI.
pub fn render(frame: &mut Frame, state: &ViewState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(MAIN_MIN_WIDTH), Constraint::Length(USER_SIDEBAR_WIDTH)])
        .split(frame.area());

    let [main_area, users_area] = chunks.as_ref() else {
        return;
    };

    render_main_area(frame, state, *main_area);
    users::render(frame, state, *users_area);
}

/// Render the main column (transcript + input line).
fn render_main_area(frame: &mut Frame, state: &ViewState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(MESSAGES_MIN_HEIGHT), Constraint::Length(INPUT_HEIGHT)])
        .split(area);

    let [messages_area, input_area] = chunks.as_ref() else {
        return;
    };

    messages::render(frame, state, *messages_area);
    input::render(frame, state, *input_area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn render_rows(state: &ViewState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn regions_carry_their_titles() {
        let rows = render_rows(&ViewState::new(), 60, 12);

        assert!(rows[0].contains(" messages: "));
        assert!(rows[0].contains(" users: "));
        assert!(rows[9].contains(" send: "));
    }

    #[test]
    fn transcript_lines_render_without_raw_escapes() {
        let mut state = ViewState::new();
        state.messages.push_back("[3:04PM] \u{1b}[31m boss \u{1b}[0m: hi".to_string());

        let rows = render_rows(&state, 60, 12);

        assert!(rows[1].contains("[3:04PM]"));
        assert!(rows[1].contains("boss"));
        assert!(rows.iter().all(|row| !row.contains('\u{1b}')));
    }

    #[test]
    fn user_sidebar_shows_snapshot_and_title() {
        let mut state = ViewState::new();
        state.users_title = "3 users:".to_string();
        state.users = vec!["\u{1b}[31mboss\u{1b}[0m".to_string(), "alice".to_string()];

        let rows = render_rows(&state, 60, 12);

        assert!(rows[0].contains("3 users:"));
        assert!(rows[1].contains("boss"));
        assert!(rows[2].contains("alice"));
    }

    #[test]
    fn input_line_shows_buffer_behind_prompt() {
        let mut state = ViewState::new();
        state.input = "hello".to_string();
        state.input_cursor = 5;

        let rows = render_rows(&state, 60, 12);

        assert!(rows[10].contains("> hello"));
    }
}
