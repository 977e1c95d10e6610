//! Seeded board content.
//!
//! Implements the board-content collaborator contract with fully
//! deterministic output: the generator is keyed on the seed and the board,
//! so fixtures never drift between runs.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use commons_core::{
    BoardContentProvider, BoardId, Post, PostId, ReactionCounts, ReactionKind, TimeStamp,
};

/// Base creation time for generated posts; posts step backwards from here
/// so feeds come out newest first.
const BASE_MILLIS: u64 = 1_718_000_000_000;

/// Spacing between generated posts.
const STEP_MILLIS: u64 = 3_600_000;

const TITLES: [&str; 8] = [
    "Anyone else up for a study group?",
    "Lost and found by the cafeteria",
    "Weekend meetup thread",
    "Looking for recommendations",
    "This week's highlights",
    "Question about the schedule",
    "Sharing some photos from yesterday",
    "Tips for newcomers",
];

const BODIES: [&str; 6] = [
    "Drop a reply if you're interested.",
    "Happened around noon, details inside.",
    "Let's compare notes before the deadline.",
    "First time posting here, be kind!",
    "Figured this board would want to know.",
    "More in the comments.",
];

const IMAGE_POOL: [&str; 4] = [
    "images/campus-lawn.jpg",
    "images/library-steps.jpg",
    "images/cafeteria.jpg",
    "images/notice-wall.jpg",
];

/// Deterministic mock content, five-ish posts per board by default.
#[derive(Debug, Clone, Copy)]
pub struct SeededBoardContent {
    seed: u64,
}

impl SeededBoardContent {
    /// Provider keyed on `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn rng_for(&self, board: BoardId) -> ChaCha8Rng {
        let lane = BoardId::ALL
            .iter()
            .position(|b| *b == board)
            .unwrap_or_default() as u64;
        ChaCha8Rng::seed_from_u64(self.seed.wrapping_mul(31).wrapping_add(lane))
    }
}

impl BoardContentProvider for SeededBoardContent {
    fn posts_for(&self, board: BoardId, count: usize) -> Vec<Post> {
        let mut rng = self.rng_for(board);
        (0..count)
            .map(|index| {
                let at = TimeStamp::from_millis(BASE_MILLIS - index as u64 * STEP_MILLIS);
                let mut reactions = ReactionCounts::default();
                for kind in ReactionKind::ALL {
                    for _ in 0..rng.gen_range(0..4u32) {
                        reactions.record(kind);
                    }
                }
                let images = if rng.gen_bool(0.3) {
                    vec![IMAGE_POOL[rng.gen_range(0..IMAGE_POOL.len())].to_string()]
                } else {
                    Vec::new()
                };
                Post {
                    id: PostId::compose(board, at),
                    author: board.author_sentinel().to_string(),
                    avatar: board.avatar_sentinel().to_string(),
                    title: TITLES[rng.gen_range(0..TITLES.len())].to_string(),
                    content: BODIES[rng.gen_range(0..BODIES.len())].to_string(),
                    images,
                    timestamp: at.format_display(),
                    batch: "N/A".to_string(),
                    reactions,
                    comments: rng.gen_range(0..9),
                    is_bookmarked: false,
                    viewer_reaction: None,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_posts() {
        let a = SeededBoardContent::new(7).posts_for(BoardId::Music, 5);
        let b = SeededBoardContent::new(7).posts_for(BoardId::Music, 5);
        assert_eq!(a, b);
    }

    #[test]
    fn feeds_come_out_newest_first_with_fresh_viewer_state() {
        let posts = SeededBoardContent::new(7).posts_for(BoardId::Batch, 5);
        assert_eq!(posts.len(), 5);
        for pair in posts.windows(2) {
            assert!(pair[0].id > pair[1].id || pair[0].timestamp >= pair[1].timestamp);
        }
        for post in &posts {
            assert_eq!(post.viewer_reaction, None);
            assert!(!post.is_bookmarked);
        }
    }

    #[test]
    fn boards_get_distinct_content() {
        let provider = SeededBoardContent::new(7);
        let music = provider.posts_for(BoardId::Music, 5);
        let sports = provider.posts_for(BoardId::Sports, 5);
        assert_ne!(music[0].id, sports[0].id);
    }

    #[test]
    fn announcements_are_staff_authored() {
        let posts = SeededBoardContent::new(7).posts_for(BoardId::Announcements, 3);
        assert!(posts.iter().all(|p| p.author == "Admin"));
    }
}
