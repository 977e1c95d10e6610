//! The board store: every board's feed plus the bookmark view.
//!
//! Single source of truth for post state. The bookmark set is a denormalized
//! second copy of bookmarked posts, so every mutation that can touch a
//! bookmarked post is applied to both copies. That dual write is the main
//! correctness hazard here; the mutation helpers below are the only code
//! paths that touch either collection.
//!
//! Lookups by post id that miss are silent no-ops: a stale reference held by
//! a lingering overlay must never crash the session.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use commons_core::{BoardContentProvider, BoardId, Post, PostDraft, PostId, ReactionKind, TimeStamp};

/// Board feeds (newest first) and the bookmark view over them.
#[derive(Debug, Clone, Serialize)]
pub struct BoardsState {
    feeds: IndexMap<BoardId, Vec<Post>>,
    bookmarks: Vec<Post>,
}

impl Default for BoardsState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardsState {
    /// Empty feeds for the full board set.
    #[must_use]
    pub fn new() -> Self {
        Self::with_boards(BoardId::ALL)
    }

    /// Empty feeds for a subset of boards. Embedders hosting a partial
    /// community use this; operations against an unhosted board are no-ops.
    #[must_use]
    pub fn with_boards(boards: impl IntoIterator<Item = BoardId>) -> Self {
        Self {
            feeds: boards.into_iter().map(|b| (b, Vec::new())).collect(),
            bookmarks: Vec::new(),
        }
    }

    /// Fill every hosted board from the content provider.
    pub fn seed(&mut self, provider: &dyn BoardContentProvider, per_board: usize) {
        for (board, feed) in &mut self.feeds {
            *feed = provider.posts_for(*board, per_board);
        }
    }

    /// Whether `board` is hosted by this store.
    #[must_use]
    pub fn has_board(&self, board: BoardId) -> bool {
        self.feeds.contains_key(&board)
    }

    /// A board's feed, newest first. Empty for unhosted boards.
    #[must_use]
    pub fn feed(&self, board: BoardId) -> &[Post] {
        self.feeds.get(&board).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The bookmark view, in bookmarking order.
    #[must_use]
    pub fn bookmarks(&self) -> &[Post] {
        &self.bookmarks
    }

    /// Look a post up in its board feed.
    #[must_use]
    pub fn find(&self, id: &PostId) -> Option<&Post> {
        self.feeds
            .values()
            .flat_map(|feed| feed.iter())
            .find(|p| p.id == *id)
    }

    /// The bookmark-set copy of a post, if bookmarked.
    #[must_use]
    pub fn find_bookmarked(&self, id: &PostId) -> Option<&Post> {
        self.bookmarks.iter().find(|p| p.id == *id)
    }

    /// Create a post from the composer's draft and prepend it to `board`.
    ///
    /// Returns the new post's id, or `None` when the board is not hosted.
    pub fn create_post(&mut self, board: BoardId, draft: PostDraft, at: TimeStamp) -> Option<PostId> {
        let feed = self.feeds.get_mut(&board)?;
        let post = draft.into_post(board, at);
        let id = post.id.clone();
        feed.insert(0, post);
        Some(id)
    }

    /// Toggle the viewer's reaction on a post.
    ///
    /// Selecting the already-selected kind clears it; selecting a different
    /// kind releases the previous one first. The identical mutation is
    /// applied to the board copy and, when present, the bookmark copy, so
    /// the two stay numerically equal.
    ///
    /// Returns whether the post was found.
    pub fn toggle_reaction(&mut self, id: &PostId, kind: ReactionKind) -> bool {
        let mut found = false;
        for feed in self.feeds.values_mut() {
            if let Some(post) = feed.iter_mut().find(|p| p.id == *id) {
                apply_reaction(post, kind);
                found = true;
                break;
            }
        }
        if !found {
            debug!(post = %id, "reaction against unknown post ignored");
            return false;
        }
        if let Some(copy) = self.bookmarks.iter_mut().find(|p| p.id == *id) {
            apply_reaction(copy, kind);
        }
        true
    }

    /// Flip a post's bookmark flag, keeping the bookmark set consistent:
    /// a post is in the set iff its flag is true.
    ///
    /// Returns whether the post was found.
    pub fn toggle_bookmark(&mut self, id: &PostId) -> bool {
        let mut snapshot = None;
        for feed in self.feeds.values_mut() {
            if let Some(post) = feed.iter_mut().find(|p| p.id == *id) {
                post.is_bookmarked = !post.is_bookmarked;
                snapshot = Some(post.clone());
                break;
            }
        }
        let Some(snapshot) = snapshot else {
            debug!(post = %id, "bookmark against unknown post ignored");
            return false;
        };
        if snapshot.is_bookmarked {
            if !self.bookmarks.iter().any(|p| p.id == *id) {
                self.bookmarks.push(snapshot);
            }
        } else {
            self.bookmarks.retain(|p| p.id != *id);
        }
        true
    }

    /// Remove a post from its board feed and from the bookmark set.
    ///
    /// Returns whether anything was removed.
    pub fn delete_post(&mut self, id: &PostId) -> bool {
        let mut removed = false;
        for feed in self.feeds.values_mut() {
            let before = feed.len();
            feed.retain(|p| p.id != *id);
            removed |= feed.len() != before;
        }
        let before = self.bookmarks.len();
        self.bookmarks.retain(|p| p.id != *id);
        removed |= self.bookmarks.len() != before;
        removed
    }
}

/// The toggle rule shared by both copies of a post.
fn apply_reaction(post: &mut Post, kind: ReactionKind) {
    if post.viewer_reaction == Some(kind) {
        post.reactions.release(kind);
        post.viewer_reaction = None;
    } else {
        if let Some(previous) = post.viewer_reaction {
            post.reactions.release(previous);
        }
        post.reactions.record(kind);
        post.viewer_reaction = Some(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            content: "Test".to_string(),
            batch: None,
            images: Vec::new(),
        }
    }

    fn stamp(n: u64) -> TimeStamp {
        TimeStamp::from_millis(1_718_000_000_000 + n)
    }

    #[test]
    fn created_posts_are_prepended() {
        let mut boards = BoardsState::new();
        boards.create_post(BoardId::Batch, draft("first"), stamp(0));
        boards.create_post(BoardId::Batch, draft("second"), stamp(1));
        let feed = boards.feed(BoardId::Batch);
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].title, "second");
        assert_eq!(feed[1].title, "first");
    }

    #[test]
    fn reaction_toggle_is_mutually_exclusive() {
        let mut boards = BoardsState::new();
        let id = boards
            .create_post(BoardId::Batch, draft("Hi"), stamp(0))
            .expect("hosted board");

        assert!(boards.toggle_reaction(&id, ReactionKind::Heart));
        let post = boards.find(&id).expect("present");
        assert_eq!(post.reactions.heart, 1);
        assert_eq!(post.viewer_reaction, Some(ReactionKind::Heart));

        // switching kinds releases the previous selection
        assert!(boards.toggle_reaction(&id, ReactionKind::Cheer));
        let post = boards.find(&id).expect("present");
        assert_eq!(post.reactions.heart, 0);
        assert_eq!(post.reactions.cheer, 1);
        assert_eq!(post.viewer_reaction, Some(ReactionKind::Cheer));

        // re-selecting clears
        assert!(boards.toggle_reaction(&id, ReactionKind::Cheer));
        let post = boards.find(&id).expect("present");
        assert_eq!(post.reactions.total(), 0);
        assert_eq!(post.viewer_reaction, None);
    }

    #[test]
    fn bookmark_copy_mirrors_reactions() {
        let mut boards = BoardsState::new();
        let id = boards
            .create_post(BoardId::Music, draft("Mixtape"), stamp(0))
            .expect("hosted board");

        boards.toggle_bookmark(&id);
        boards.toggle_reaction(&id, ReactionKind::Heart);

        let feed_copy = boards.find(&id).expect("feed copy");
        let bookmark_copy = boards.find_bookmarked(&id).expect("bookmark copy");
        assert_eq!(feed_copy, bookmark_copy);

        boards.toggle_reaction(&id, ReactionKind::Heart);
        let feed_copy = boards.find(&id).expect("feed copy");
        let bookmark_copy = boards.find_bookmarked(&id).expect("bookmark copy");
        assert_eq!(feed_copy.reactions.heart, 0);
        assert_eq!(feed_copy, bookmark_copy);
    }

    #[test]
    fn bookmark_membership_tracks_the_flag() {
        let mut boards = BoardsState::new();
        let id = boards
            .create_post(BoardId::Movie, draft("Premiere"), stamp(0))
            .expect("hosted board");

        assert!(boards.toggle_bookmark(&id));
        assert_eq!(boards.bookmarks().len(), 1);
        assert!(boards.find(&id).expect("present").is_bookmarked);

        assert!(boards.toggle_bookmark(&id));
        assert!(boards.bookmarks().is_empty());
        assert!(!boards.find(&id).expect("present").is_bookmarked);
    }

    #[test]
    fn delete_removes_both_copies_and_later_calls_are_no_ops() {
        let mut boards = BoardsState::new();
        let id = boards
            .create_post(BoardId::Sports, draft("Finals"), stamp(0))
            .expect("hosted board");
        boards.toggle_bookmark(&id);

        assert!(boards.delete_post(&id));
        assert!(boards.feed(BoardId::Sports).is_empty());
        assert!(boards.bookmarks().is_empty());

        assert!(!boards.toggle_reaction(&id, ReactionKind::Heart));
        assert!(!boards.toggle_bookmark(&id));
        assert!(!boards.delete_post(&id));
    }

    #[test]
    fn unhosted_board_rejects_creation() {
        let mut boards = BoardsState::with_boards([BoardId::Batch]);
        assert!(boards
            .create_post(BoardId::Music, draft("nope"), stamp(0))
            .is_none());
    }
}
