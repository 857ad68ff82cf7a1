//! Transcript pane
//!
//! Displays composed message lines, newest at the bottom.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListItem},
};

use crate::{ansi, surface::ViewState};

const BORDER_SIZE: u16 = 2;

/// Render the transcript pane.
pub fn render(frame: &mut Frame, state: &ViewState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" messages: ");

    let visible_height = area.height.saturating_sub(BORDER_SIZE) as usize;
    let skip = state.messages.len().saturating_sub(visible_height);

    let items: Vec<ListItem> = state
        .messages
        .iter()
        .skip(skip)
        .map(|line| ListItem::new(ansi::styled_line(line)))
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
