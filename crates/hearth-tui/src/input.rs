//! Input state and key handling for the TUI.
//!
//! Owns the text input buffer, its cursor, and the submit history.
//! Character-level editing follows the usual line-editor conventions;
//! Up/Down recall previous submissions, Enter submits. All of this runs on
//! the runtime's single input path.

use hearth_core::InputHistory;

/// Key input events from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Character input.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Escape key.
    Esc,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow (recall older).
    Up,
    /// Down arrow (recall newer).
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
}

/// What the runtime should do after a key was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Nothing beyond redrawing the input region.
    Edited,
    /// Send the submitted line to the transport.
    Submit(String),
    /// Quit the application.
    Quit,
}

/// Input state for the TUI.
///
/// Manages the text buffer, cursor position, and input history.
#[derive(Debug)]
pub struct InputState {
    /// Text buffer for user input.
    buffer: String,
    /// Cursor position within the buffer.
    cursor: usize,
    /// Previously submitted lines.
    history: InputHistory,
}

impl InputState {
    /// Create an empty input state recalling up to `max_history` lines.
    pub fn new(max_history: usize) -> Self {
        Self { buffer: String::new(), cursor: 0, history: InputHistory::new(max_history) }
    }

    /// Current text in the input buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handle a key input event.
    pub fn handle_key(&mut self, key: KeyInput) -> InputAction {
        match key {
            KeyInput::Char(c) => {
                self.buffer.insert(self.cursor, c);
                self.cursor = self.cursor.saturating_add(1);
                InputAction::Edited
            },
            KeyInput::Backspace => {
                if self.cursor > 0 {
                    self.cursor = self.cursor.saturating_sub(1);
                    self.buffer.remove(self.cursor);
                }
                InputAction::Edited
            },
            KeyInput::Delete => {
                if self.cursor < self.buffer.len() {
                    self.buffer.remove(self.cursor);
                }
                InputAction::Edited
            },
            KeyInput::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                InputAction::Edited
            },
            KeyInput::Right => {
                if self.cursor < self.buffer.len() {
                    self.cursor = self.cursor.saturating_add(1);
                }
                InputAction::Edited
            },
            KeyInput::Home => {
                self.cursor = 0;
                InputAction::Edited
            },
            KeyInput::End => {
                self.cursor = self.buffer.len();
                InputAction::Edited
            },
            KeyInput::Up => {
                self.recall_older();
                InputAction::Edited
            },
            KeyInput::Down => {
                self.recall_newer();
                InputAction::Edited
            },
            KeyInput::Enter => self.handle_enter(),
            KeyInput::Esc => InputAction::Quit,
        }
    }

    /// Handle Enter: record and submit the buffer as an outgoing line.
    fn handle_enter(&mut self) -> InputAction {
        if self.buffer.is_empty() {
            return InputAction::Edited;
        }

        let text = std::mem::take(&mut self.buffer);
        self.cursor = 0;
        self.history.push(&text);
        InputAction::Submit(text)
    }

    /// Replace the buffer with the next older entry, cursor at end of text.
    fn recall_older(&mut self) {
        if let Some(entry) = self.history.older() {
            let entry = entry.to_string();
            self.cursor = entry.len();
            self.buffer = entry;
        }
    }

    /// Replace the buffer with the next newer entry, cursor at end of text.
    fn recall_newer(&mut self) {
        if let Some(entry) = self.history.newer() {
            let entry = entry.to_string();
            self.cursor = entry.len();
            self.buffer = entry;
        }
    }
}
