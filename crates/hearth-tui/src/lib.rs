//! Terminal UI for Hearth
//!
//! A thin shell over the application layer that provides terminal-specific
//! I/O: a ratatui implementation of the render surface, crossterm keyboard
//! handling with input history, and the async event loop. A simulated
//! transport stands in for the network so the client runs standalone.
//!
//! This crate only handles terminal rendering and input; all formatting and
//! ordering rules live in `hearth-core` and `hearth-app`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod ansi;
pub mod input;
pub mod runtime;
pub mod sim;
pub mod surface;
pub mod ui;

pub use input::{InputAction, InputState, KeyInput};
pub use runtime::{Runtime, RuntimeError};
pub use surface::{TerminalSurface, ViewState};
