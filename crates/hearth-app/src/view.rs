//! Event-to-render glue.
//!
//! One incoming [`ChatEvent`] becomes one submitted surface update:
//! formatting and sorting happen synchronously here (pure core calls), the
//! mutation itself is applied later by the dispatcher's drain task.

use hearth_core::{Broadcast, ChatMessage, UserList, format, userlist};

use crate::{dispatcher::Dispatcher, event::ChatEvent, surface::Region};

/// Renders incoming chat events onto the shared surface.
///
/// Holds the session's own nick for self-mention highlighting. Cheap to
/// clone and safe to drive from any event callback; ordering across
/// concurrent callers is whatever order their `submit`s land in.
#[derive(Clone)]
pub struct ChatView {
    dispatcher: Dispatcher,
    self_nick: String,
}

impl ChatView {
    /// Create a view rendering through `dispatcher`.
    pub fn new(dispatcher: Dispatcher, self_nick: impl Into<String>) -> Self {
        Self { dispatcher, self_nick: self_nick.into() }
    }

    /// Render one incoming event.
    pub fn handle(&self, event: ChatEvent) {
        match event {
            ChatEvent::Message(msg) => self.show_message(&msg),
            ChatEvent::Broadcast(broadcast) => self.show_broadcast(&broadcast),
            ChatEvent::SendError { text } => self.show_send_error(&text),
            ChatEvent::UserList(list) => self.show_users(list),
        }
    }

    fn show_message(&self, msg: &ChatMessage) {
        let line = format::message_line(msg, &self.self_nick);
        self.dispatcher.submit(move |surface| surface.append_line(Region::Messages, &line));
    }

    fn show_broadcast(&self, broadcast: &Broadcast) {
        let line = format::broadcast_line(broadcast);
        self.dispatcher.submit(move |surface| surface.append_line(Region::Messages, &line));
    }

    fn show_send_error(&self, text: &str) {
        let line = format::error_line(text);
        self.dispatcher.submit(move |surface| surface.append_line(Region::Messages, &line));
    }

    /// Sort the snapshot, then rewrite the user region in one update:
    /// title from the reported count, full clear, one colored line per
    /// user.
    fn show_users(&self, mut list: UserList) {
        userlist::sort_by_flair(&mut list.users);

        let title = format::users_title(list.count);
        let lines: Vec<String> = list.users.iter().map(format::user_line).collect();

        self.dispatcher.submit(move |surface| {
            surface.set_title(Region::Users, &title)?;
            surface.clear(Region::Users)?;
            for line in &lines {
                surface.append_line(Region::Users, line)?;
            }
            Ok(())
        });
    }
}
