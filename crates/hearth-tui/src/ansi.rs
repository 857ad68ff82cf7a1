//! Styled-text conversion.
//!
//! Composed lines carry raw SGR escape sequences. ratatui widgets render
//! styled spans, not escapes, so lines are converted on the way into a
//! widget; a line that fails to parse falls back to its plain text.

use ansi_to_tui::IntoText;
use ratatui::text::Text;

/// Convert one composed line into styled ratatui text.
pub fn styled_line(line: &str) -> Text<'static> {
    line.into_text().unwrap_or_else(|_| Text::from(line.to_string()))
}
