//! Display-line composition.
//!
//! Every incoming event becomes exactly one plain-text line with raw SGR
//! escape sequences embedded. User-supplied text is passed through verbatim:
//! control sequences inside message text are not escaped before composing.

use chrono::{Local, TimeZone};

use crate::{flair, userlist::ChatUser};

/// SGR reset sequence, also the neutral wrapper for unflaired nicks.
pub const RESET: &str = "\u{1b}[0m";

const ACCENT: &str = "\u{1b}[36m";
const HIGHLIGHT: &str = "\u{1b}[46;1m";
const BROADCAST_COLOR: &str = "\u{1b}[33;1m";
const ERROR_COLOR: &str = "\u{1b}[31m";

/// A user-attributed chat message. Consumed once, rendered, discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Sender nick.
    pub nick: String,
    /// Sender feature keys.
    pub features: Vec<String>,
    /// Send time, epoch milliseconds.
    pub timestamp_ms: i64,
    /// Message text.
    pub text: String,
}

/// A system-wide message not attributed to an individual user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Broadcast {
    /// Send time, epoch milliseconds.
    pub timestamp_ms: i64,
    /// Broadcast text.
    pub text: String,
}

/// Compose the display line for a chat message.
///
/// The nick is decorated with the resolved flair badge and color; the text
/// gets a highlight background when it mentions `self_nick`
/// (case-insensitive, empty never matches).
pub fn message_line(msg: &ChatMessage, self_nick: &str) -> String {
    let time = kitchen_time(msg.timestamp_ms);

    let mut tagged = msg.nick.clone();
    let mut colored = None;

    if let Some(resolved) = flair::resolve(&msg.features) {
        tagged = format!("[{}]{tagged}", resolved.def.badge);
        colored = Some(format!("{} {tagged} {RESET}", resolved.def.color));
    }

    // One-off decoration for this nick, overriding any flair color.
    if msg.nick == "Polecat" {
        tagged = format!("[*]{tagged}");
        colored = Some(format!("{ACCENT} {tagged} {RESET}"));
    }

    let nick = colored.unwrap_or_else(|| format!("{RESET} {tagged} {RESET}"));

    let text = if mentions(&msg.text, self_nick) {
        format!("{HIGHLIGHT}{} {RESET}", msg.text)
    } else {
        msg.text.clone()
    };

    format!("[{time}] {nick}: {text}")
}

/// Compose the display line for a broadcast.
pub fn broadcast_line(broadcast: &Broadcast) -> String {
    let time = kitchen_time(broadcast.timestamp_ms);
    format!("{BROADCAST_COLOR}[{time}]  Broadcast: {} {RESET}", broadcast.text)
}

/// Compose the inline line for a failed send. Carries no timestamp.
pub fn error_line(text: &str) -> String {
    format!("{ERROR_COLOR}*Error sending message: {text}*{RESET}")
}

/// Compose one user-region line: the nick in its flair color.
pub fn user_line(user: &ChatUser) -> String {
    let color = flair::resolve(&user.features).map_or(RESET, |r| r.def.color);
    format!("{color}{}{RESET}", user.nick)
}

/// User-region title for a snapshot reporting `count` users.
pub fn users_title(count: usize) -> String {
    format!("{count} users:")
}

fn mentions(text: &str, self_nick: &str) -> bool {
    !self_nick.is_empty() && text.to_lowercase().contains(&self_nick.to_lowercase())
}

/// Local wall-clock kitchen time (`3:04PM`) for an epoch-millisecond stamp.
fn kitchen_time(timestamp_ms: i64) -> String {
    Local
        .timestamp_opt(timestamp_ms / 1000, 0)
        .single()
        .map_or_else(String::new, |t| t.format("%-I:%M%p").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Epoch milliseconds for a fixed local wall-clock time, so formatted
    /// output is stable regardless of the host timezone.
    fn afternoon_ms() -> i64 {
        let dt = Local.with_ymd_and_hms(2024, 6, 1, 15, 4, 0).single().unwrap();
        dt.timestamp() * 1000
    }

    fn msg(nick: &str, features: &[&str], text: &str) -> ChatMessage {
        ChatMessage {
            nick: nick.to_string(),
            features: features.iter().map(|f| (*f).to_string()).collect(),
            timestamp_ms: afternoon_ms(),
            text: text.to_string(),
        }
    }

    #[test]
    fn kitchen_time_has_no_hour_padding() {
        assert_eq!(kitchen_time(afternoon_ms()), "3:04PM");
    }

    #[test]
    fn unflaired_nick_gets_neutral_wrapper() {
        let line = message_line(&msg("alice", &[], "hi"), "");
        assert_eq!(line, format!("[3:04PM] {RESET} alice {RESET}: hi"));
    }

    #[test]
    fn flaired_nick_gets_badge_and_color() {
        let line = message_line(&msg("alice", &["flair3"], "hi"), "");
        assert_eq!(line, format!("[3:04PM] \u{1b}[34m [t3]alice {RESET}: hi"));
    }

    #[test]
    fn multiple_flairs_render_the_resolved_badge() {
        let line = message_line(&msg("alice", &["flair1", "flair3"], "hi"), "");
        assert!(line.contains("[t3]alice"));
        assert!(!line.contains("[t2]"));
    }

    #[test]
    fn polecat_always_gets_accent_badge() {
        let plain = message_line(&msg("Polecat", &[], "hi"), "");
        assert!(plain.contains("\u{1b}[36m [*]Polecat "));

        // A flair badge survives underneath, but the accent color wins.
        let flaired = message_line(&msg("Polecat", &["admin"], "hi"), "");
        assert!(flaired.contains("\u{1b}[36m [*][@]Polecat "));
        assert!(!flaired.contains("\u{1b}[31m"));
    }

    #[test]
    fn self_mention_is_highlighted_case_insensitively() {
        let line = message_line(&msg("alice", &[], "BOB says hi"), "bob");
        assert!(line.ends_with(&format!("{HIGHLIGHT}BOB says hi {RESET}")));
    }

    #[test]
    fn empty_self_nick_never_highlights() {
        let line = message_line(&msg("alice", &[], "anything at all"), "");
        assert!(!line.contains(HIGHLIGHT));
    }

    #[test]
    fn broadcast_line_shape() {
        let broadcast =
            Broadcast { timestamp_ms: afternoon_ms(), text: "servers restarting".to_string() };
        assert_eq!(
            broadcast_line(&broadcast),
            format!("{BROADCAST_COLOR}[3:04PM]  Broadcast: servers restarting {RESET}")
        );
    }

    #[test]
    fn error_line_shape() {
        assert_eq!(
            error_line("duplicate message"),
            format!("{ERROR_COLOR}*Error sending message: duplicate message*{RESET}")
        );
    }

    #[test]
    fn user_line_uses_flair_color() {
        let admin = ChatUser { nick: "boss".to_string(), features: vec!["admin".to_string()] };
        assert_eq!(user_line(&admin), format!("\u{1b}[31mboss{RESET}"));

        let plain = ChatUser { nick: "alice".to_string(), features: Vec::new() };
        assert_eq!(user_line(&plain), format!("{RESET}alice{RESET}"));
    }

    #[test]
    fn empty_flair_color_renders_uncolored() {
        let notable = ChatUser { nick: "nb".to_string(), features: vec!["flair2".to_string()] };
        assert_eq!(user_line(&notable), format!("nb{RESET}"));
    }

    #[test]
    fn users_title_shape() {
        assert_eq!(users_title(17), "17 users:");
    }
}
