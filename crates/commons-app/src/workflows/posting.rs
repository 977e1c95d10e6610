//! Posting workflows: create, react, bookmark, share, report, delete.

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

use commons_core::{BoardId, PostDraft, PostId, ReactionKind, TimeStamp};

use crate::core::{AppCore, DispatchOutcome, Intent};

/// Submit the composer's draft to `board` at `at`.
///
/// Returns the new post's id when the submission applied.
pub fn create_post(
    core: &Arc<RwLock<AppCore>>,
    board: BoardId,
    draft: PostDraft,
    at: TimeStamp,
) -> Option<PostId> {
    let outcome = core.write().dispatch(Intent::SubmitPost { board, draft, at });
    outcome.is_applied().then(|| PostId::compose(board, at))
}

/// Toggle the viewer's reaction on a post.
pub fn react(core: &Arc<RwLock<AppCore>>, post: PostId, kind: ReactionKind) -> DispatchOutcome {
    core.write().dispatch(Intent::ToggleReaction { post, kind })
}

/// Toggle the viewer's bookmark on a post.
pub fn toggle_bookmark(core: &Arc<RwLock<AppCore>>, post: PostId) -> DispatchOutcome {
    core.write().dispatch(Intent::ToggleBookmark { post })
}

/// Delete a post everywhere it appears.
pub fn delete_post(core: &Arc<RwLock<AppCore>>, post: PostId) -> DispatchOutcome {
    core.write().dispatch(Intent::DeletePost { post })
}

/// Share line for a post, ready for the clipboard collaborator. Placing it
/// on the clipboard is the frontend's side effect, not the core's.
///
/// `None` when the post no longer exists.
pub fn share_post(core: &Arc<RwLock<AppCore>>, post: &PostId) -> Option<String> {
    let text = core.read().views().boards.find(post).map(|p| p.share_text());
    if let Some(text) = &text {
        info!(post = %post, text = %text, "share text produced");
    }
    text
}

/// Acknowledge a report. No state changes; this is the contract point a
/// future moderation pipeline hangs off.
pub fn report_post(core: &Arc<RwLock<AppCore>>, post: PostId, reason: String) -> DispatchOutcome {
    core.write().dispatch(Intent::ReportPost { post, reason })
}
