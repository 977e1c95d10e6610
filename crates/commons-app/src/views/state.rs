//! The aggregated view state and its render mapping.

use serde::Serialize;

use commons_core::BoardId;

use super::boards::BoardsState;
use super::community::{CommunityState, CommunityView};
use super::notices::NoticeState;
use super::session::{AuthStage, SessionState};
use super::shell::{MarketplaceMode, ShellState, SubApp};

/// Everything a frontend needs to render one frame.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ViewState {
    pub session: SessionState,
    pub shell: ShellState,
    pub community: CommunityState,
    pub boards: BoardsState,
    pub notices: NoticeState,
}

/// The screen to mount for the current state.
///
/// Overlays (post detail, composer) are read separately from
/// [`CommunityState`]; this is the base screen underneath them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    Loading,
    Login,
    Registration,
    CommunityHome,
    CommunityBoard(BoardId),
    CommunityBookmarks,
    Matching,
    Messages,
    Profile,
    Marketplace(MarketplaceMode),
    /// The recovery screen: reachable whenever the state tree has no other
    /// rendering path. Its single action dispatches the home reset.
    Fallback,
}

impl ViewState {
    /// Fresh state: loading screen, community shell, empty boards.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map the current state to a screen. Total: every representable state
    /// renders something, and inconsistencies degrade to
    /// [`RenderTarget::Fallback`] rather than leaving the view controller
    /// stranded.
    #[must_use]
    pub fn render_target(&self) -> RenderTarget {
        match self.session.stage() {
            AuthStage::Loading => RenderTarget::Loading,
            AuthStage::Login => RenderTarget::Login,
            AuthStage::Registration => RenderTarget::Registration,
            AuthStage::Authenticated => match self.shell.current() {
                SubApp::Matching => RenderTarget::Matching,
                SubApp::Messages => RenderTarget::Messages,
                SubApp::Profile => RenderTarget::Profile,
                SubApp::Cart => RenderTarget::Marketplace(MarketplaceMode::Cart),
                SubApp::Counselling => RenderTarget::Marketplace(MarketplaceMode::Counselling),
                SubApp::Community => match self.community.view() {
                    CommunityView::Home => RenderTarget::CommunityHome,
                    CommunityView::Bookmarks => RenderTarget::CommunityBookmarks,
                    CommunityView::Board(board) if self.boards.has_board(board) => {
                        RenderTarget::CommunityBoard(board)
                    }
                    CommunityView::Board(_) => RenderTarget::Fallback,
                },
            },
        }
    }
}
