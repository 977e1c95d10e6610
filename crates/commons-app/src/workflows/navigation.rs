//! Navigation workflows: community views and overlays.
//!
//! Top-level destination changes go through the [`Navigator`]'s commands;
//! these cover the community app's internal navigation.
//!
//! [`Navigator`]: crate::ui::Navigator

use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

use commons_core::{BoardId, PostId};

use crate::core::{AppCore, DispatchOutcome, Intent};

/// Universal reset: community app, home view, overlays cleared.
pub fn go_home(core: &Arc<RwLock<AppCore>>) -> DispatchOutcome {
    core.write().dispatch(Intent::GoHome)
}

/// Open a board, subject to its access policy. A rejection surfaces an
/// access-restricted notice and leaves the view unchanged.
pub fn open_board(core: &Arc<RwLock<AppCore>>, board: BoardId) -> DispatchOutcome {
    core.write().dispatch(Intent::OpenBoard { board })
}

/// Open the bookmarks page.
pub fn open_bookmarks(core: &Arc<RwLock<AppCore>>) -> DispatchOutcome {
    core.write().dispatch(Intent::OpenBookmarks)
}

/// Open the post detail overlay.
pub fn open_post(core: &Arc<RwLock<AppCore>>, post: PostId) -> DispatchOutcome {
    core.write().dispatch(Intent::OpenPost { post })
}

/// Close the post detail overlay.
pub fn close_post(core: &Arc<RwLock<AppCore>>) -> DispatchOutcome {
    core.write().dispatch(Intent::ClosePost)
}

/// Open the new-post composer.
pub fn open_composer(core: &Arc<RwLock<AppCore>>) -> DispatchOutcome {
    core.write().dispatch(Intent::OpenComposer)
}

/// Close the new-post composer.
pub fn close_composer(core: &Arc<RwLock<AppCore>>) -> DispatchOutcome {
    core.write().dispatch(Intent::CloseComposer)
}

/// Dismiss a notice banner.
pub fn dismiss_notice(core: &Arc<RwLock<AppCore>>, notice: Uuid) -> DispatchOutcome {
    core.write().dispatch(Intent::DismissNotice { notice })
}
