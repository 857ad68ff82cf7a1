//! Terminal-surface seam.
//!
//! The rendering layer never touches a terminal directly: it writes to
//! named regions through this trait and the frontend decides what a region
//! is. The same updates run against the real terminal in production and
//! against recording fakes in tests.

use std::fmt;

use thiserror::Error;

/// Named display regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Scrolling chat transcript.
    Messages,
    /// Connected-user sidebar.
    Users,
    /// Input line.
    Input,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::Messages => "messages",
            Region::Users => "users",
            Region::Input => "input",
        };
        f.write_str(name)
    }
}

/// Surface operation failures.
///
/// A failure aborts the single update that raised it; the update stream
/// carries on (see [`crate::Dispatcher`]). Nothing here is fatal.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The region does not support the requested operation.
    #[error("region {region} does not support {operation}")]
    Unsupported {
        /// Region the operation targeted.
        region: Region,
        /// Operation name.
        operation: &'static str,
    },

    /// Terminal I/O failed while applying the update.
    #[error("terminal draw failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A terminal surface exposing named writable regions.
pub trait Surface: Send {
    /// Append one newline-terminated line to a region.
    fn append_line(&mut self, region: Region, line: &str) -> Result<(), SurfaceError>;

    /// Clear a region's content.
    fn clear(&mut self, region: Region) -> Result<(), SurfaceError>;

    /// Set a region's title.
    fn set_title(&mut self, region: Region, title: &str) -> Result<(), SurfaceError>;

    /// Replace the input region's buffer and edit-cursor position.
    fn set_input(&mut self, text: &str, cursor: usize) -> Result<(), SurfaceError>;
}
