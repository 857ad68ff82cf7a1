//! Property-based tests for the rendering core.
//!
//! Verifies that history-cursor and sorter invariants hold under arbitrary
//! operation sequences and inputs.

use hearth_core::{ChatUser, InputHistory, flair, sort_by_flair};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum HistoryOp {
    Push(String),
    Older,
    Newer,
}

fn op_strategy() -> impl Strategy<Value = HistoryOp> {
    prop_oneof![
        2 => "[a-z]{0,8}".prop_map(HistoryOp::Push),
        2 => Just(HistoryOp::Older),
        1 => Just(HistoryOp::Newer),
    ]
}

fn user_strategy() -> impl Strategy<Value = ChatUser> {
    let keys = prop::sample::subsequence(
        vec!["flair1", "flair2", "flair3", "flair8", "bot", "vip", "admin", "unlisted"],
        0..=3,
    );
    ("[a-z]{1,6}", keys).prop_map(|(nick, keys)| ChatUser {
        nick,
        features: keys.into_iter().map(str::to_string).collect(),
    })
}

proptest! {
    #[test]
    fn prop_history_cursor_stays_in_bounds(
        max in 1usize..8,
        ops in prop::collection::vec(op_strategy(), 0..50),
    ) {
        let mut history = InputHistory::new(max);

        for op in ops {
            match op {
                HistoryOp::Push(line) => history.push(&line),
                HistoryOp::Older => {
                    let _ = history.older();
                },
                HistoryOp::Newer => {
                    let _ = history.newer();
                },
            }

            prop_assert!(history.len() <= max);
            if let Some(cursor) = history.cursor() {
                prop_assert!(cursor < history.len());
            }
        }
    }

    #[test]
    fn prop_navigation_walks_newest_first_up_to_capacity(
        lines in prop::collection::vec("[a-z]{1,8}", 1..10),
    ) {
        let mut history = InputHistory::new(5);
        for line in &lines {
            history.push(line);
        }

        let mut walked = Vec::new();
        while let Some(entry) = history.older() {
            walked.push(entry.to_string());
        }

        let expected: Vec<String> = lines.iter().rev().take(5).cloned().collect();
        prop_assert_eq!(walked, expected);
    }

    #[test]
    fn prop_sort_matches_stable_reference_order(
        users in prop::collection::vec(user_strategy(), 0..12),
    ) {
        let mut sorted = users.clone();
        sort_by_flair(&mut sorted);

        // Reference: decorate with (priority, input index), sort, undecorate.
        let mut decorated: Vec<(Option<usize>, usize, ChatUser)> = users
            .into_iter()
            .enumerate()
            .map(|(i, u)| (flair::resolve(&u.features).map(|r| r.priority), i, u))
            .collect();
        decorated.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        let expected: Vec<ChatUser> = decorated.into_iter().map(|(_, _, u)| u).collect();

        prop_assert_eq!(sorted, expected);
    }
}
