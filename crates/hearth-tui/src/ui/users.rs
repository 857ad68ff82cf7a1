//! User sidebar
//!
//! Displays the current user snapshot, one colored nick per line, under the
//! title pushed with the snapshot.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListItem},
};

use crate::{ansi, surface::ViewState};

/// Render the user sidebar.
pub fn render(frame: &mut Frame, state: &ViewState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(state.users_title.clone());

    let items: Vec<ListItem> =
        state.users.iter().map(|line| ListItem::new(ansi::styled_line(line))).collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
