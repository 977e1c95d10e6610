//! Community app state: the secondary view and its overlays.

use serde::Serialize;

use commons_core::{BoardId, PostId};

/// Secondary view inside the community app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum CommunityView {
    #[default]
    Home,
    /// A board feed.
    Board(BoardId),
    /// The bookmarks page.
    Bookmarks,
}

/// Community view plus the two overlays, which are orthogonal to it: a post
/// detail can be open on top of a board or the bookmarks page, and the
/// composer on top of a board.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommunityState {
    view: CommunityView,
    selected_post: Option<PostId>,
    composer_open: bool,
}

impl CommunityState {
    /// Current secondary view.
    #[must_use]
    pub fn view(&self) -> CommunityView {
        self.view
    }

    /// Post shown in the detail overlay, if open.
    #[must_use]
    pub fn selected_post(&self) -> Option<&PostId> {
        self.selected_post.as_ref()
    }

    /// Whether the composer overlay is open.
    #[must_use]
    pub fn composer_open(&self) -> bool {
        self.composer_open
    }

    /// The board whose feed is visible, when on a board view.
    #[must_use]
    pub fn active_board(&self) -> Option<BoardId> {
        match self.view {
            CommunityView::Board(board) => Some(board),
            _ => None,
        }
    }

    /// Home is always a clean slate: view reset and both overlays cleared,
    /// regardless of what was open when the user navigated away.
    pub fn reset_home(&mut self) {
        self.view = CommunityView::Home;
        self.selected_post = None;
        self.composer_open = false;
    }

    /// Show a board feed. Access policy is the dispatcher's job; this state
    /// only records the outcome.
    pub fn open_board(&mut self, board: BoardId) {
        self.view = CommunityView::Board(board);
    }

    /// Show the bookmarks page.
    pub fn open_bookmarks(&mut self) {
        self.view = CommunityView::Bookmarks;
    }

    /// Open the post detail overlay without touching the secondary view.
    pub fn open_post(&mut self, post: PostId) {
        self.selected_post = Some(post);
    }

    /// Close the post detail overlay only.
    pub fn close_post(&mut self) {
        self.selected_post = None;
    }

    /// Close the detail overlay if it references `post`. Used when a post is
    /// deleted while its overlay is open, so the overlay never shows a stale
    /// reference.
    pub fn clear_selected_if(&mut self, post: &PostId) {
        if self.selected_post.as_ref() == Some(post) {
            self.selected_post = None;
        }
    }

    /// Open the composer overlay.
    pub fn open_composer(&mut self) {
        self.composer_open = true;
    }

    /// Close the composer overlay.
    pub fn close_composer(&mut self) {
        self.composer_open = false;
    }
}
