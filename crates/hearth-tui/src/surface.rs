//! Terminal-owning surface implementation.
//!
//! [`TerminalSurface`] implements the render surface over ratatui: it owns
//! the terminal plus the backing state for each region and redraws the
//! whole frame after every applied update, so the display always reflects
//! the last update the dispatcher's drain task applied.

use std::{
    collections::VecDeque,
    io::{Stdout, stdout},
};

use hearth_app::{Region, Surface, SurfaceError};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::ui;

/// Bounded transcript scrollback, in composed lines.
const MAX_SCROLLBACK: usize = 512;

/// Backing state for the three display regions.
///
/// Lines carry raw SGR escapes straight from the formatter; conversion to
/// styled text happens at draw time (see [`crate::ansi`]).
#[derive(Debug)]
pub struct ViewState {
    /// Transcript lines, oldest first, bounded by the scrollback cap.
    pub messages: VecDeque<String>,
    /// User sidebar lines, one per user.
    pub users: Vec<String>,
    /// User sidebar title.
    pub users_title: String,
    /// Input buffer contents.
    pub input: String,
    /// Edit-cursor position within the input buffer.
    pub input_cursor: usize,
}

impl ViewState {
    /// Empty state with the initial region titles.
    pub fn new() -> Self {
        Self {
            messages: VecDeque::new(),
            users: Vec::new(),
            users_title: " users: ".to_string(),
            input: String::new(),
            input_cursor: 0,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal surface drawing to stdout.
pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: ViewState,
}

impl TerminalSurface {
    /// Create a surface drawing to stdout.
    ///
    /// Raw mode and the alternate screen are the runtime's business; this
    /// only builds the terminal.
    pub fn new() -> Result<Self, SurfaceError> {
        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal, state: ViewState::new() })
    }

    fn draw(&mut self) -> Result<(), SurfaceError> {
        self.terminal.draw(|frame| ui::render(frame, &self.state))?;
        Ok(())
    }
}

impl Surface for TerminalSurface {
    fn append_line(&mut self, region: Region, line: &str) -> Result<(), SurfaceError> {
        match region {
            Region::Messages => {
                self.state.messages.push_back(line.to_string());
                while self.state.messages.len() > MAX_SCROLLBACK {
                    self.state.messages.pop_front();
                }
            },
            Region::Users => self.state.users.push(line.to_string()),
            Region::Input => {
                return Err(SurfaceError::Unsupported { region, operation: "append_line" });
            },
        }
        self.draw()
    }

    fn clear(&mut self, region: Region) -> Result<(), SurfaceError> {
        match region {
            Region::Messages => self.state.messages.clear(),
            Region::Users => self.state.users.clear(),
            Region::Input => {
                return Err(SurfaceError::Unsupported { region, operation: "clear" });
            },
        }
        self.draw()
    }

    fn set_title(&mut self, region: Region, title: &str) -> Result<(), SurfaceError> {
        match region {
            Region::Users => self.state.users_title = title.to_string(),
            Region::Messages | Region::Input => {
                return Err(SurfaceError::Unsupported { region, operation: "set_title" });
            },
        }
        self.draw()
    }

    fn set_input(&mut self, text: &str, cursor: usize) -> Result<(), SurfaceError> {
        self.state.input = text.to_string();
        self.state.input_cursor = cursor;
        self.draw()
    }
}
