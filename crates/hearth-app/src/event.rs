//! Typed transport events.
//!
//! The transport collaborator parses the wire protocol and pushes these
//! fully-typed events; the rendering layer never sees raw protocol data.
//! Events are transient: consumed once, rendered, discarded.

use hearth_core::{Broadcast, ChatMessage, UserList};

/// Events pushed by the transport.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// A user-attributed chat message.
    Message(ChatMessage),

    /// A system-wide broadcast.
    Broadcast(Broadcast),

    /// The transport failed to deliver an outgoing message.
    SendError {
        /// Failure description, rendered inline.
        text: String,
    },

    /// Full snapshot of connected users, replacing the previous one.
    UserList(UserList),
}
