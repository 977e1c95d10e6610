//! Session state: the auth machine and the viewer's identity.

use serde::Serialize;
use tracing::warn;

use commons_core::{Gender, ViewerProfile};

/// Where the session is in the auth flow.
///
/// Linear progression with one allowed loop: `Loading → Login ⇄ Registration
/// → Authenticated`. `Authenticated` is terminal for the session; there is
/// no logout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum AuthStage {
    #[default]
    Loading,
    Login,
    Registration,
    Authenticated,
}

/// Auth stage plus the identity captured when it completed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionState {
    stage: AuthStage,
    viewer: Option<ViewerProfile>,
}

impl SessionState {
    /// Current auth stage.
    #[must_use]
    pub fn stage(&self) -> AuthStage {
        self.stage
    }

    /// Whether the session has authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.stage == AuthStage::Authenticated
    }

    /// The viewer's identity, once authenticated.
    #[must_use]
    pub fn viewer(&self) -> Option<&ViewerProfile> {
        self.viewer.as_ref()
    }

    /// The viewer's gender attribute, once authenticated.
    #[must_use]
    pub fn gender(&self) -> Option<Gender> {
        self.viewer.as_ref().map(|v| v.gender)
    }

    /// `Loading → Login`.
    pub fn load_complete(&mut self) -> bool {
        self.step(AuthStage::Loading, AuthStage::Login)
    }

    /// `Login → Registration`.
    pub fn go_to_registration(&mut self) -> bool {
        self.step(AuthStage::Login, AuthStage::Registration)
    }

    /// `Registration → Login`.
    pub fn back_to_login(&mut self) -> bool {
        self.step(AuthStage::Registration, AuthStage::Login)
    }

    /// `Login → Authenticated`, capturing the viewer's identity.
    pub fn login_complete(&mut self, profile: ViewerProfile) -> bool {
        self.finish(AuthStage::Login, profile)
    }

    /// `Registration → Authenticated`, capturing the viewer's identity.
    pub fn registration_complete(&mut self, profile: ViewerProfile) -> bool {
        self.finish(AuthStage::Registration, profile)
    }

    fn step(&mut self, from: AuthStage, to: AuthStage) -> bool {
        if self.stage != from {
            warn!(stage = ?self.stage, ?from, ?to, "invalid auth transition");
            return false;
        }
        self.stage = to;
        true
    }

    fn finish(&mut self, from: AuthStage, profile: ViewerProfile) -> bool {
        if !self.step(from, AuthStage::Authenticated) {
            return false;
        }
        self.viewer = Some(profile);
        true
    }
}
