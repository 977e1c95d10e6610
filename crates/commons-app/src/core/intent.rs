//! Intents: user actions dispatched into the core.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use commons_core::{BoardId, PostDraft, PostId, ReactionKind, TimeStamp, ViewerProfile};

/// A top-level navigation target.
///
/// This is the closed command set of the shared navigation-handler object:
/// every sub-application and both classifiers speak in these values, so none
/// of them needs to know its siblings exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// Marketplace ("add2cart")
    Cart,
    /// Counselling appointments
    Counselling,
    /// Community home (the universal reset)
    Home,
    /// Matching
    Matching,
    /// Profile
    Profile,
    /// Messaging
    Messages,
}

impl Destination {
    /// Every destination, in bottom-nav order then messages.
    pub const ALL: [Destination; 6] = [
        Destination::Cart,
        Destination::Counselling,
        Destination::Home,
        Destination::Matching,
        Destination::Profile,
        Destination::Messages,
    ];

    /// Stable label for logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cart => "add2cart",
            Self::Counselling => "counselling",
            Self::Home => "home",
            Self::Matching => "matching",
            Self::Profile => "profile",
            Self::Messages => "messages",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A user action that mutates session state when dispatched.
///
/// Intents that need the current time carry it explicitly (`at`); the core
/// never reads a clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Intent {
    // =========================================================================
    // Session Intents
    // =========================================================================
    /// The loading screen finished.
    LoadComplete,

    /// Switch from the login screen to registration.
    GoToRegistration,

    /// Return from registration to the login screen.
    BackToLogin,

    /// Login finished with the viewer's identity.
    LoginComplete {
        /// Identity supplied by the login screen.
        profile: ViewerProfile,
    },

    /// Registration finished with the viewer's identity.
    RegistrationComplete {
        /// Identity supplied by the registration screen.
        profile: ViewerProfile,
    },

    // =========================================================================
    // Navigation Intents
    // =========================================================================
    /// Mount the sub-application for a destination.
    NavigateTo {
        /// Target sub-application.
        destination: Destination,
    },

    /// Universal reset: community app, home view, overlays cleared.
    GoHome,

    /// Open a community board (subject to the board's access policy).
    OpenBoard {
        /// Board to open.
        board: BoardId,
    },

    /// Open the bookmarks view inside the community app.
    OpenBookmarks,

    /// Open the post detail overlay.
    OpenPost {
        /// Post to show.
        post: PostId,
    },

    /// Close the post detail overlay.
    ClosePost,

    /// Open the new-post composer overlay.
    OpenComposer,

    /// Close the new-post composer overlay.
    CloseComposer,

    // =========================================================================
    // Board Intents
    // =========================================================================
    /// Submit the composer's draft to a board.
    SubmitPost {
        /// Board receiving the post.
        board: BoardId,
        /// The submitted draft.
        draft: PostDraft,
        /// Submission time; becomes the post's id and display timestamp.
        at: TimeStamp,
    },

    /// Toggle the viewer's reaction on a post.
    ToggleReaction {
        /// Target post.
        post: PostId,
        /// Reaction kind being toggled.
        kind: ReactionKind,
    },

    /// Toggle the viewer's bookmark on a post.
    ToggleBookmark {
        /// Target post.
        post: PostId,
    },

    /// Delete a post everywhere it appears.
    DeletePost {
        /// Target post.
        post: PostId,
    },

    /// Acknowledge a report; stub contract point for a moderation pipeline.
    ReportPost {
        /// Target post.
        post: PostId,
        /// Viewer-supplied reason.
        reason: String,
    },

    // =========================================================================
    // Notice Intents
    // =========================================================================
    /// Dismiss a notice banner.
    DismissNotice {
        /// The notice's dismissal handle.
        notice: Uuid,
    },
}

impl Intent {
    /// Short description for logs.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::LoadComplete => "load complete",
            Self::GoToRegistration => "go to registration",
            Self::BackToLogin => "back to login",
            Self::LoginComplete { .. } => "login complete",
            Self::RegistrationComplete { .. } => "registration complete",
            Self::NavigateTo { .. } => "navigate",
            Self::GoHome => "go home",
            Self::OpenBoard { .. } => "open board",
            Self::OpenBookmarks => "open bookmarks",
            Self::OpenPost { .. } => "open post",
            Self::ClosePost => "close post",
            Self::OpenComposer => "open composer",
            Self::CloseComposer => "close composer",
            Self::SubmitPost { .. } => "submit post",
            Self::ToggleReaction { .. } => "toggle reaction",
            Self::ToggleBookmark { .. } => "toggle bookmark",
            Self::DeletePost { .. } => "delete post",
            Self::ReportPost { .. } => "report post",
            Self::DismissNotice { .. } => "dismiss notice",
        }
    }

    /// Whether this intent is a navigation command (gated on authentication).
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateTo { .. }
                | Self::GoHome
                | Self::OpenBoard { .. }
                | Self::OpenBookmarks
                | Self::OpenPost { .. }
                | Self::ClosePost
                | Self::OpenComposer
                | Self::CloseComposer
        )
    }
}
