//! Flair definitions and resolution.
//!
//! The flair table is an ordered, process-wide constant: order encodes
//! priority. Resolution scans the whole table and keeps the last matching
//! entry, so a later entry always overrides an earlier one when both match.
//! The user-list sort order depends on this exact precedence rule.

/// A single badge/color definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlairDef {
    /// Feature key that activates this flair.
    pub key: &'static str,
    /// Short badge token, rendered bracketed before the nick.
    pub badge: &'static str,
    /// Raw SGR escape sequence embedded verbatim in composed lines.
    /// May be empty, in which case the flair renders uncolored.
    pub color: &'static str,
}

/// Ordered flair table. Later entries take precedence over earlier ones.
pub const FLAIR_TABLE: &[FlairDef] = &[
    FlairDef { key: "flair2", badge: "n", color: "" },
    FlairDef { key: "flair9", badge: "tw", color: "\u{1b}[34;1m" },
    FlairDef { key: "flair13", badge: "t1", color: "\u{1b}[34;1m" },
    FlairDef { key: "flair1", badge: "t2", color: "\u{1b}[34;1m" },
    FlairDef { key: "flair3", badge: "t3", color: "\u{1b}[34m" },
    FlairDef { key: "flair8", badge: "t4", color: "\u{1b}[35m" },
    FlairDef { key: "flair11", badge: "bot2", color: "\u{1b}[30;1m" },
    FlairDef { key: "bot", badge: "bot", color: "\u{1b}[33m" },
    FlairDef { key: "vip", badge: "vip", color: "\u{1b}[32m" },
    FlairDef { key: "admin", badge: "@", color: "\u{1b}[31m" },
];

/// A flair resolved against [`FLAIR_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFlair {
    /// Index of the matched entry in the table; higher wins.
    pub priority: usize,
    /// The matched definition.
    pub def: &'static FlairDef,
}

/// Case-insensitive feature membership test.
pub fn has_feature(features: &[String], key: &str) -> bool {
    features.iter().any(|feature| feature.eq_ignore_ascii_case(key))
}

/// Resolve the applicable flair for a feature set.
///
/// Scans the table in declared order without stopping at the first match:
/// the last matching entry wins. Returns `None` when nothing matches.
pub fn resolve(features: &[String]) -> Option<ResolvedFlair> {
    let mut resolved = None;
    for (priority, def) in FLAIR_TABLE.iter().enumerate() {
        if has_feature(features, def.key) {
            resolved = Some(ResolvedFlair { priority, def });
        }
    }
    resolved
}
