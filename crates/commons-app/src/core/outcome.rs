//! Dispatch outcomes.
//!
//! Nothing in the core raises: a dispatch either applies, is ignored
//! (fail-soft no-op), or is actively rejected with a viewer-facing notice
//! already surfaced. The outcome is data so callers and tests can assert on
//! it.

use thiserror::Error;

use commons_core::BoardId;

/// What dispatching an [`Intent`](super::Intent) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// State changed, or an idempotent transition re-confirmed its target.
    Applied,
    /// Fail-soft no-op; the session is untouched.
    Ignored(IgnoreReason),
    /// Actively refused; a notice was surfaced and state is untouched.
    Rejected(RejectReason),
}

impl DispatchOutcome {
    /// Whether the intent took effect.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Why an intent was silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IgnoreReason {
    /// The post id resolved to nothing; stale references must not crash the
    /// session.
    #[error("no post with the given id")]
    UnknownPost,
    /// The board is not hosted by this store.
    #[error("board is not hosted")]
    UnknownBoard,
    /// The notice was already dismissed or never existed.
    #[error("no notice with the given id")]
    UnknownNotice,
    /// The auth machine has no such transition from its current stage.
    #[error("transition not valid in the current auth stage")]
    InvalidAuthTransition,
    /// Navigation requires an authenticated session.
    #[error("navigation requires an authenticated session")]
    NotAuthenticated,
}

/// Why an intent was actively refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// The board's access policy excludes this viewer.
    #[error("board '{board}' is restricted for this viewer")]
    BoardRestricted {
        /// The gated board.
        board: BoardId,
    },
}
