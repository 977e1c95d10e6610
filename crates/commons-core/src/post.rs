//! Post records and the board content contract.

use serde::{Deserialize, Serialize};

use crate::board::BoardId;
use crate::identifiers::PostId;
use crate::reaction::{ReactionCounts, ReactionKind};
use crate::time::TimeStamp;

/// Classification tag shown when a post carries none.
pub const BATCH_UNTAGGED: &str = "N/A";

/// A single board post.
///
/// Serialized field names match the shape the screens already consume
/// (`isBookmarked`, `userReaction`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique id, `<board-slug>-<millis>` for locally created posts.
    pub id: PostId,
    /// Display author; a sentinel, never the viewer's real name.
    pub author: String,
    /// Avatar glyph paired with the author sentinel.
    pub avatar: String,
    pub title: String,
    pub content: String,
    /// Image references, in attachment order.
    pub images: Vec<String>,
    /// Pre-formatted creation time, `YYYY.MM.DD HH:MM`.
    pub timestamp: String,
    /// Classification tag; [`BATCH_UNTAGGED`] when absent.
    pub batch: String,
    pub reactions: ReactionCounts,
    /// Comment count; display-only in this core.
    pub comments: u32,
    pub is_bookmarked: bool,
    /// The single reaction kind currently selected by the viewer, if any.
    #[serde(rename = "userReaction")]
    pub viewer_reaction: Option<ReactionKind>,
}

impl Post {
    /// Share line handed to the clipboard collaborator.
    #[must_use]
    pub fn share_text(&self) -> String {
        format!("Check out this post: \"{}\" by {}", self.title, self.author)
    }
}

/// What a viewer submits from the composer.
///
/// Empty titles and contents are accepted here; form validation is a screen
/// concern, not a store concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    /// Optional classification tag.
    pub batch: Option<String>,
    /// Image references, in attachment order.
    pub images: Vec<String>,
}

impl PostDraft {
    /// Materialize this draft into a post on `board` created at `at`.
    #[must_use]
    pub fn into_post(self, board: BoardId, at: TimeStamp) -> Post {
        Post {
            id: PostId::compose(board, at),
            author: board.author_sentinel().to_string(),
            avatar: board.avatar_sentinel().to_string(),
            title: self.title,
            content: self.content,
            images: self.images,
            timestamp: at.format_display(),
            batch: self.batch.unwrap_or_else(|| BATCH_UNTAGGED.to_string()),
            reactions: ReactionCounts::default(),
            comments: 0,
            is_bookmarked: false,
            viewer_reaction: None,
        }
    }
}

/// Supplies the initial posts for each board at startup.
///
/// External collaborator: the core only requires conforming [`Post`] values.
pub trait BoardContentProvider {
    /// Initial posts for `board`, newest first, at most `count` of them.
    fn posts_for(&self, board: BoardId, count: usize) -> Vec<Post>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_materializes_with_board_sentinels() {
        let at = TimeStamp::from_millis(1_718_000_000_000);
        let post = PostDraft {
            title: "Lost keys".to_string(),
            content: "Found near the library".to_string(),
            batch: None,
            images: Vec::new(),
        }
        .into_post(BoardId::Announcements, at);

        assert_eq!(post.id.as_str(), "announcements-1718000000000");
        assert_eq!(post.author, "Admin");
        assert_eq!(post.batch, BATCH_UNTAGGED);
        assert_eq!(post.reactions.total(), 0);
        assert_eq!(post.viewer_reaction, None);
        assert!(!post.is_bookmarked);
    }

    #[test]
    fn share_text_quotes_title_and_names_author() {
        let at = TimeStamp::from_millis(1_718_000_000_000);
        let post = PostDraft {
            title: "Hi".to_string(),
            content: "Test".to_string(),
            batch: None,
            images: Vec::new(),
        }
        .into_post(BoardId::Batch, at);

        assert_eq!(
            post.share_text(),
            "Check out this post: \"Hi\" by Anonymous"
        );
    }
}
