//! Rendering and input-history core for a terminal chat client.
//!
//! Pure building blocks with no I/O:
//!
//! - [`flair`]: ordered badge/color table and last-match-wins resolution
//! - [`userlist`]: connected-user snapshots sorted by flair priority
//! - [`format`]: one styled display line per chat event
//! - [`history`]: bounded input recall with a navigation cursor
//!
//! Everything here is synchronous and reentrant; concurrency lives in the
//! application layer.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod flair;
pub mod format;
pub mod history;
pub mod userlist;

pub use flair::{FLAIR_TABLE, FlairDef, ResolvedFlair, resolve};
pub use format::{
    Broadcast, ChatMessage, broadcast_line, error_line, message_line, user_line, users_title,
};
pub use history::InputHistory;
pub use userlist::{ChatUser, UserList, sort_by_flair};
