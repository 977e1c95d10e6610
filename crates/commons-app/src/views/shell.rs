//! Shell state: which top-level sub-application is mounted.

use serde::Serialize;
use tracing::debug;

use crate::core::Destination;

/// The composed sub-applications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum SubApp {
    /// Community + registration app; the default and the universal fallback.
    #[default]
    Community,
    Matching,
    Messages,
    Profile,
    Cart,
    Counselling,
}

impl SubApp {
    /// Stable label for logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Community => "community",
            Self::Matching => "matching",
            Self::Messages => "messages",
            Self::Profile => "profile",
            Self::Cart => "add2cart",
            Self::Counselling => "counselling",
        }
    }
}

impl From<Destination> for SubApp {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Cart => Self::Cart,
            Destination::Counselling => Self::Counselling,
            Destination::Home => Self::Community,
            Destination::Matching => Self::Matching,
            Destination::Profile => Self::Profile,
            Destination::Messages => Self::Messages,
        }
    }
}

/// Which page the marketplace module serves.
///
/// Cart and counselling are one sub-application differentiated by this mode
/// value at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarketplaceMode {
    Cart,
    Counselling,
}

/// The mounted sub-application.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ShellState {
    current: SubApp,
}

impl ShellState {
    /// Currently mounted sub-application.
    #[must_use]
    pub fn current(&self) -> SubApp {
        self.current
    }

    /// Mount `app`. Idempotent: setting the current value again is a no-op,
    /// which is what makes overlapping classifiers safe to run on one click.
    /// Returns whether anything changed.
    pub fn set_current(&mut self, app: SubApp) -> bool {
        if self.current == app {
            return false;
        }
        debug!(from = self.current.label(), to = app.label(), "sub-app transition");
        self.current = app;
        true
    }
}
