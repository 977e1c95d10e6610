//! Viewer-facing notices: access banners and home-screen notifications.

use serde::Serialize;
use uuid::Uuid;

use commons_core::{BoardAccess, BoardId};

/// Severity of a notice, which frontends map to banner styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    /// Short label for logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A notice surfaced to the viewer.
#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    /// Dismissal handle.
    pub id: Uuid,
    pub level: NoticeLevel,
    pub title: String,
    pub body: String,
    /// Board this notice points at; activating such a notice navigates
    /// there.
    pub destination: Option<BoardId>,
}

impl Notice {
    /// Construct a plain notice.
    pub fn new(level: NoticeLevel, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            title: title.into(),
            body: body.into(),
            destination: None,
        }
    }

    /// The banner shown when the board access policy rejects the viewer.
    #[must_use]
    pub fn access_restricted(board: BoardId) -> Self {
        let body = match board.access() {
            BoardAccess::GenderOnly(required) => format!(
                "The {} board is open to {} students only.",
                board.title(),
                required
            ),
            BoardAccess::Open => format!("The {} board is unavailable.", board.title()),
        };
        Self::new(NoticeLevel::Warning, "ACCESS RESTRICTED", body)
    }

    /// A home-screen notification that points at a board.
    pub fn board_update(
        board: BoardId,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let mut notice = Self::new(NoticeLevel::Info, title, body);
        notice.destination = Some(board);
        notice
    }
}

/// The notice stack, oldest first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NoticeState {
    items: Vec<Notice>,
}

impl NoticeState {
    /// Surface a notice.
    pub fn push(&mut self, notice: Notice) {
        self.items.push(notice);
    }

    /// Dismiss by id. Returns whether anything was removed.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// All pending notices, oldest first.
    #[must_use]
    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    /// Number of pending notices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
