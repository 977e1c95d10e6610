//! Reaction kinds and per-post reaction tallies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fixed emotive responses a viewer may attach to a post.
///
/// Selection is mutually exclusive per viewer per post: picking a new kind
/// releases the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReactionKind {
    ThumbsUp,
    ThumbsDown,
    Heart,
    Confused,
    Cheer,
}

impl ReactionKind {
    /// Every reaction kind, in display order.
    pub const ALL: [ReactionKind; 5] = [
        ReactionKind::ThumbsUp,
        ReactionKind::ThumbsDown,
        ReactionKind::Heart,
        ReactionKind::Confused,
        ReactionKind::Cheer,
    ];

    /// Stable wire/debug label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::ThumbsUp => "thumbsUp",
            Self::ThumbsDown => "thumbsDown",
            Self::Heart => "heart",
            Self::Confused => "confused",
            Self::Cheer => "cheer",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tally of reactions on a single post.
///
/// Counts never go negative: release uses saturating arithmetic so that a
/// stale release against a zero count stays at zero instead of wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionCounts {
    pub thumbs_up: u32,
    pub thumbs_down: u32,
    pub heart: u32,
    pub confused: u32,
    pub cheer: u32,
}

impl ReactionCounts {
    /// Count for one kind.
    #[must_use]
    pub fn get(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::ThumbsUp => self.thumbs_up,
            ReactionKind::ThumbsDown => self.thumbs_down,
            ReactionKind::Heart => self.heart,
            ReactionKind::Confused => self.confused,
            ReactionKind::Cheer => self.cheer,
        }
    }

    /// Record one selection of `kind`.
    pub fn record(&mut self, kind: ReactionKind) {
        let slot = self.slot(kind);
        *slot = slot.saturating_add(1);
    }

    /// Release one selection of `kind`.
    pub fn release(&mut self, kind: ReactionKind) {
        let slot = self.slot(kind);
        *slot = slot.saturating_sub(1);
    }

    /// Sum across all kinds.
    #[must_use]
    pub fn total(&self) -> u32 {
        ReactionKind::ALL.iter().map(|k| self.get(*k)).sum()
    }

    fn slot(&mut self, kind: ReactionKind) -> &mut u32 {
        match kind {
            ReactionKind::ThumbsUp => &mut self.thumbs_up,
            ReactionKind::ThumbsDown => &mut self.thumbs_down,
            ReactionKind::Heart => &mut self.heart,
            ReactionKind::Confused => &mut self.confused,
            ReactionKind::Cheer => &mut self.cheer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_release_round_trip() {
        let mut counts = ReactionCounts::default();
        counts.record(ReactionKind::Heart);
        counts.record(ReactionKind::Heart);
        counts.release(ReactionKind::Heart);
        assert_eq!(counts.get(ReactionKind::Heart), 1);
        assert_eq!(counts.total(), 1);
    }

    #[test]
    fn release_saturates_at_zero() {
        let mut counts = ReactionCounts::default();
        counts.release(ReactionKind::Cheer);
        assert_eq!(counts.get(ReactionKind::Cheer), 0);
    }

    #[test]
    fn serializes_with_original_field_names() {
        let counts = ReactionCounts::default();
        let json = serde_json::to_value(counts).expect("serialize");
        assert!(json.get("thumbsUp").is_some());
        assert!(json.get("cheer").is_some());
    }
}
