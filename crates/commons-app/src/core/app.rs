//! The application core: configuration, state ownership, and dispatch.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use commons_core::{BoardContentProvider, TimeStamp};

use crate::timers::{TimerHandle, TimerQueue};
use crate::views::{Notice, RenderTarget, SubApp, ViewState};

use super::intent::{Destination, Intent};
use super::outcome::{DispatchOutcome, IgnoreReason, RejectReason};

/// Startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Posts seeded per board at bootstrap.
    pub posts_per_board: usize,
    /// Delay before the community's internal messages screen redirects to
    /// the messaging sub-app.
    pub messages_redirect_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            posts_per_board: 5,
            messages_redirect_ms: 500,
        }
    }
}

/// Single owner of the session's state.
///
/// All mutation goes through [`dispatch`](Self::dispatch), which is
/// synchronous and infallible: outcomes are data, never panics. The core is
/// single-writer by contract; embedders that want to share it wrap it in
/// `Arc<RwLock<_>>` (see [`UiAppCore`](crate::ui::UiAppCore)) and all
/// mutations stay serialized by that lock.
#[derive(Debug)]
pub struct AppCore {
    config: AppConfig,
    views: ViewState,
    timers: TimerQueue,
}

impl AppCore {
    /// Core with empty boards.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            views: ViewState::new(),
            timers: TimerQueue::new(),
        }
    }

    /// Core with every board seeded from the content provider, plus the
    /// home screen's starting notification.
    #[must_use]
    pub fn bootstrap(config: AppConfig, provider: &dyn BoardContentProvider) -> Self {
        let mut core = Self::new(config);
        let per_board = core.config.posts_per_board;
        core.views.boards.seed(provider, per_board);
        core.views.notices.push(Notice::board_update(
            commons_core::BoardId::Announcements,
            "NEW ANNOUNCEMENT",
            "Official updates were posted while you were away.",
        ));
        info!(posts_per_board = per_board, "board content seeded");
        core
    }

    /// Startup configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The state tree frontends render from.
    #[must_use]
    pub fn views(&self) -> &ViewState {
        &self.views
    }

    /// The screen for the current state.
    #[must_use]
    pub fn render_target(&self) -> RenderTarget {
        self.views.render_target()
    }

    /// Schedule `intent` to be dispatched once [`advance`](Self::advance)
    /// passes `now + delay_ms`. Dropping the returned handle cancels it.
    #[must_use = "dropping the handle cancels the deferred intent"]
    pub fn schedule_in(&mut self, delay_ms: u64, intent: Intent, now: TimeStamp) -> TimerHandle {
        self.timers
            .schedule(now.saturating_add_millis(delay_ms), intent)
    }

    /// Dispatch every deferred intent that has come due.
    pub fn advance(&mut self, now: TimeStamp) -> Vec<DispatchOutcome> {
        let due = self.timers.drain_due(now);
        due.into_iter().map(|intent| self.dispatch(intent)).collect()
    }

    /// Apply a user action.
    ///
    /// Never panics and never leaves state half-applied: an intent either
    /// fully applies or the state is untouched.
    pub fn dispatch(&mut self, intent: Intent) -> DispatchOutcome {
        let description = intent.description();
        let outcome = self.apply(intent);
        match &outcome {
            DispatchOutcome::Applied => debug!(intent = description, "applied"),
            DispatchOutcome::Ignored(reason) => {
                debug!(intent = description, %reason, "ignored")
            }
            DispatchOutcome::Rejected(reason) => {
                warn!(intent = description, %reason, "rejected")
            }
        }
        outcome
    }

    fn apply(&mut self, intent: Intent) -> DispatchOutcome {
        if intent.is_navigation() && !self.views.session.is_authenticated() {
            return DispatchOutcome::Ignored(IgnoreReason::NotAuthenticated);
        }

        match intent {
            // Session
            Intent::LoadComplete => self.auth_step(|v| v.session.load_complete()),
            Intent::GoToRegistration => self.auth_step(|v| v.session.go_to_registration()),
            Intent::BackToLogin => self.auth_step(|v| v.session.back_to_login()),
            Intent::LoginComplete { profile } => {
                self.auth_step(move |v| v.session.login_complete(profile))
            }
            Intent::RegistrationComplete { profile } => {
                self.auth_step(move |v| v.session.registration_complete(profile))
            }

            // Navigation
            Intent::NavigateTo { destination } => self.navigate_to(destination),
            Intent::GoHome => self.go_home(),
            Intent::OpenBoard { board } => self.open_board(board),
            Intent::OpenBookmarks => {
                self.views.shell.set_current(SubApp::Community);
                self.views.community.open_bookmarks();
                DispatchOutcome::Applied
            }
            Intent::OpenPost { post } => {
                if self.views.boards.find(&post).is_none() {
                    return DispatchOutcome::Ignored(IgnoreReason::UnknownPost);
                }
                self.views.community.open_post(post);
                DispatchOutcome::Applied
            }
            Intent::ClosePost => {
                self.views.community.close_post();
                DispatchOutcome::Applied
            }
            Intent::OpenComposer => {
                self.views.community.open_composer();
                DispatchOutcome::Applied
            }
            Intent::CloseComposer => {
                self.views.community.close_composer();
                DispatchOutcome::Applied
            }

            // Board mutations
            Intent::SubmitPost { board, draft, at } => {
                match self.views.boards.create_post(board, draft, at) {
                    Some(_) => {
                        // submission closes the composer
                        self.views.community.close_composer();
                        DispatchOutcome::Applied
                    }
                    None => DispatchOutcome::Ignored(IgnoreReason::UnknownBoard),
                }
            }
            Intent::ToggleReaction { post, kind } => {
                if self.views.boards.toggle_reaction(&post, kind) {
                    DispatchOutcome::Applied
                } else {
                    DispatchOutcome::Ignored(IgnoreReason::UnknownPost)
                }
            }
            Intent::ToggleBookmark { post } => {
                if self.views.boards.toggle_bookmark(&post) {
                    DispatchOutcome::Applied
                } else {
                    DispatchOutcome::Ignored(IgnoreReason::UnknownPost)
                }
            }
            Intent::DeletePost { post } => {
                if self.views.boards.delete_post(&post) {
                    // a detail overlay referencing the deleted post would be
                    // stale; close it
                    self.views.community.clear_selected_if(&post);
                    DispatchOutcome::Applied
                } else {
                    DispatchOutcome::Ignored(IgnoreReason::UnknownPost)
                }
            }
            Intent::ReportPost { post, reason } => {
                info!(post = %post, reason = %reason, "post reported");
                DispatchOutcome::Applied
            }

            // Notices
            Intent::DismissNotice { notice } => {
                if self.views.notices.dismiss(notice) {
                    DispatchOutcome::Applied
                } else {
                    DispatchOutcome::Ignored(IgnoreReason::UnknownNotice)
                }
            }
        }
    }

    fn auth_step(
        &mut self,
        transition: impl FnOnce(&mut ViewState) -> bool,
    ) -> DispatchOutcome {
        if transition(&mut self.views) {
            DispatchOutcome::Applied
        } else {
            DispatchOutcome::Ignored(IgnoreReason::InvalidAuthTransition)
        }
    }

    fn navigate_to(&mut self, destination: Destination) -> DispatchOutcome {
        match destination {
            Destination::Home => self.go_home(),
            other => {
                self.views.shell.set_current(SubApp::from(other));
                DispatchOutcome::Applied
            }
        }
    }

    /// Home is always a clean slate: community shell, home view, overlays
    /// cleared.
    fn go_home(&mut self) -> DispatchOutcome {
        self.views.shell.set_current(SubApp::Community);
        self.views.community.reset_home();
        DispatchOutcome::Applied
    }

    fn open_board(&mut self, board: commons_core::BoardId) -> DispatchOutcome {
        let gender = self.views.session.gender().unwrap_or_default();
        if !board.is_open_to(gender) {
            self.views.notices.push(Notice::access_restricted(board));
            return DispatchOutcome::Rejected(RejectReason::BoardRestricted { board });
        }
        self.views.shell.set_current(SubApp::Community);
        self.views.community.open_board(board);
        DispatchOutcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use commons_core::{BoardId, Gender, PostDraft, PostId, ViewerProfile};

    use crate::views::{CommunityView, RenderTarget};

    fn authed_core(gender: Gender) -> AppCore {
        let mut core = AppCore::new(AppConfig::default());
        core.dispatch(Intent::LoadComplete);
        core.dispatch(Intent::LoginComplete {
            profile: ViewerProfile::new("Sam", gender, "\u{1F331}"),
        });
        core
    }

    #[test]
    fn navigation_before_auth_is_ignored() {
        let mut core = AppCore::new(AppConfig::default());
        let outcome = core.dispatch(Intent::NavigateTo {
            destination: Destination::Matching,
        });
        assert_matches!(
            outcome,
            DispatchOutcome::Ignored(IgnoreReason::NotAuthenticated)
        );
        assert_eq!(core.render_target(), RenderTarget::Loading);
    }

    #[test]
    fn go_home_resets_view_and_overlays() {
        let mut core = authed_core(Gender::Male);
        core.dispatch(Intent::OpenBoard {
            board: BoardId::Batch,
        });
        core.dispatch(Intent::OpenComposer);
        core.dispatch(Intent::GoHome);

        let community = &core.views().community;
        assert_eq!(community.view(), CommunityView::Home);
        assert!(community.selected_post().is_none());
        assert!(!community.composer_open());
    }

    #[test]
    fn gender_gate_rejects_and_surfaces_a_notice() {
        let mut core = authed_core(Gender::Female);
        let before = core.views().community.view();

        let outcome = core.dispatch(Intent::OpenBoard {
            board: BoardId::Mens,
        });
        assert_matches!(
            outcome,
            DispatchOutcome::Rejected(RejectReason::BoardRestricted {
                board: BoardId::Mens
            })
        );
        assert_eq!(core.views().community.view(), before);
        assert_eq!(core.views().notices.len(), 1);

        // the matching board is open
        let outcome = core.dispatch(Intent::OpenBoard {
            board: BoardId::Womens,
        });
        assert!(outcome.is_applied());
        assert_eq!(
            core.views().community.view(),
            CommunityView::Board(BoardId::Womens)
        );
    }

    #[test]
    fn deleting_an_open_post_closes_its_overlay() {
        let mut core = authed_core(Gender::Male);
        core.dispatch(Intent::SubmitPost {
            board: BoardId::Batch,
            draft: PostDraft {
                title: "Hi".to_string(),
                content: "Test".to_string(),
                batch: None,
                images: Vec::new(),
            },
            at: commons_core::TimeStamp::from_millis(1_718_000_000_000),
        });
        let id = PostId::from("batch-1718000000000");
        core.dispatch(Intent::OpenPost { post: id.clone() });
        assert!(core.views().community.selected_post().is_some());

        core.dispatch(Intent::DeletePost { post: id });
        assert!(core.views().community.selected_post().is_none());
    }

    #[test]
    fn mutations_on_stale_ids_are_ignored() {
        let mut core = authed_core(Gender::Male);
        let ghost = PostId::from("music-404");
        assert_matches!(
            core.dispatch(Intent::ToggleBookmark { post: ghost.clone() }),
            DispatchOutcome::Ignored(IgnoreReason::UnknownPost)
        );
        assert_matches!(
            core.dispatch(Intent::OpenPost { post: ghost }),
            DispatchOutcome::Ignored(IgnoreReason::UnknownPost)
        );
    }

    #[test]
    fn deferred_intents_fire_through_advance() {
        let mut core = authed_core(Gender::Male);
        let now = commons_core::TimeStamp::from_millis(10_000);
        let handle = core.schedule_in(
            500,
            Intent::NavigateTo {
                destination: Destination::Messages,
            },
            now,
        );

        assert!(core.advance(commons_core::TimeStamp::from_millis(10_400)).is_empty());
        let outcomes = core.advance(commons_core::TimeStamp::from_millis(10_500));
        assert_eq!(outcomes.len(), 1);
        assert_eq!(core.views().shell.current(), SubApp::Messages);
        drop(handle);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut core = authed_core(Gender::Male);
        let now = commons_core::TimeStamp::from_millis(10_000);
        let handle = core.schedule_in(
            500,
            Intent::NavigateTo {
                destination: Destination::Messages,
            },
            now,
        );
        drop(handle);
        assert!(core.advance(commons_core::TimeStamp::from_millis(60_000)).is_empty());
        assert_eq!(core.views().shell.current(), SubApp::Community);
    }
}
