//! Connected-user snapshots and flair-priority ordering.
//!
//! Snapshots arrive wholesale from the transport; nothing here diffs them or
//! tracks identity across snapshots.

use crate::flair;

/// A connected chat participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatUser {
    /// Display nick.
    pub nick: String,
    /// Feature keys attached by the transport. Read-only here.
    pub features: Vec<String>,
}

/// A snapshot of connected users.
///
/// `count` is reported by the transport independently of `users.len()` and
/// drives the user-region title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserList {
    /// Reported user count.
    pub count: usize,
    /// Users in transport order.
    pub users: Vec<ChatUser>,
}

/// Sort users by resolved flair priority, highest first.
///
/// Stable: unflaired users sort after all flaired users and keep their
/// relative order, as do same-priority peers.
pub fn sort_by_flair(users: &mut [ChatUser]) {
    users.sort_by(|a, b| {
        let a_priority = flair::resolve(&a.features).map(|r| r.priority);
        let b_priority = flair::resolve(&b.features).map(|r| r.priority);
        b_priority.cmp(&a_priority)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(nick: &str, features: &[&str]) -> ChatUser {
        ChatUser {
            nick: nick.to_string(),
            features: features.iter().map(|f| (*f).to_string()).collect(),
        }
    }

    #[test]
    fn flaired_users_sort_first() {
        let mut users = vec![user("a", &[]), user("b", &["flair1"]), user("c", &[])];

        sort_by_flair(&mut users);

        let nicks: Vec<&str> = users.iter().map(|u| u.nick.as_str()).collect();
        assert_eq!(nicks, ["b", "a", "c"]);
    }

    #[test]
    fn higher_priority_sorts_first() {
        let mut users =
            vec![user("viper", &["vip"]), user("boss", &["admin"]), user("robot", &["bot"])];

        sort_by_flair(&mut users);

        let nicks: Vec<&str> = users.iter().map(|u| u.nick.as_str()).collect();
        assert_eq!(nicks, ["boss", "viper", "robot"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let mut users = vec![
            user("first", &["vip"]),
            user("second", &["vip"]),
            user("third", &["vip", "flair2"]),
        ];

        sort_by_flair(&mut users);

        // third also matches vip last, so all three tie on priority
        let nicks: Vec<&str> = users.iter().map(|u| u.nick.as_str()).collect();
        assert_eq!(nicks, ["first", "second", "third"]);
    }

    #[test]
    fn empty_input_is_fine() {
        let mut users: Vec<ChatUser> = Vec::new();
        sort_by_flair(&mut users);
        assert!(users.is_empty());
    }
}
