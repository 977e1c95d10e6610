//! UI-facing facade.
//!
//! This module exposes the narrow surface frontends should use:
//!
//! - [`UiAppCore`] — shared handle around the core
//! - [`Navigator`] — the navigation-handler object passed by reference into
//!   every mounted sub-application and into the interceptor
//!
//! The navigator's command set is fixed and zero-argument; every command is
//! idempotent and safe to invoke redundantly, which is what lets two
//! overlapping classifiers evaluate the same click.

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

use commons_core::TimeStamp;

use crate::core::{AppCore, Destination, DispatchOutcome, Intent};
use crate::timers::TimerHandle;
use crate::views::SubApp;

/// Shared handle around [`AppCore`] to discourage direct access to
/// internals.
#[derive(Clone)]
pub struct UiAppCore {
    inner: Arc<RwLock<AppCore>>,
}

impl UiAppCore {
    /// Wrap an existing shared core.
    #[must_use]
    pub fn new(inner: Arc<RwLock<AppCore>>) -> Self {
        Self { inner }
    }

    /// The underlying shared core, for workflows that take it directly.
    #[must_use]
    pub fn raw(&self) -> &Arc<RwLock<AppCore>> {
        &self.inner
    }

    /// A navigator bound to this core.
    #[must_use]
    pub fn navigator(&self) -> Navigator {
        Navigator::new(Arc::clone(&self.inner))
    }

    /// Read a value out of the view state.
    pub fn with_views<T>(&self, read: impl FnOnce(&crate::views::ViewState) -> T) -> T {
        read(self.inner.read().views())
    }
}

impl From<Arc<RwLock<AppCore>>> for UiAppCore {
    fn from(inner: Arc<RwLock<AppCore>>) -> Self {
        Self::new(inner)
    }
}

/// The shared navigation-handler object.
///
/// A sub-application holding this can request a transition without knowing
/// its siblings exist; the interceptor invokes the same commands, so
/// inferred and direct navigation converge on identical behavior.
#[derive(Clone)]
pub struct Navigator {
    core: Arc<RwLock<AppCore>>,
}

impl Navigator {
    /// Navigator over a shared core.
    #[must_use]
    pub fn new(core: Arc<RwLock<AppCore>>) -> Self {
        Self { core }
    }

    /// Navigate to any destination.
    pub fn go_to(&self, destination: Destination) -> DispatchOutcome {
        info!(destination = %destination, "navigating");
        self.core.write().dispatch(Intent::NavigateTo { destination })
    }

    /// Mount the marketplace cart.
    pub fn go_to_cart(&self) -> DispatchOutcome {
        self.go_to(Destination::Cart)
    }

    /// Mount the counselling app.
    pub fn go_to_counselling(&self) -> DispatchOutcome {
        self.go_to(Destination::Counselling)
    }

    /// Reset to the community home screen.
    pub fn go_to_home(&self) -> DispatchOutcome {
        self.go_to(Destination::Home)
    }

    /// Mount the matching app.
    pub fn go_to_matching(&self) -> DispatchOutcome {
        self.go_to(Destination::Matching)
    }

    /// Mount the profile app.
    pub fn go_to_profile(&self) -> DispatchOutcome {
        self.go_to(Destination::Profile)
    }

    /// Mount the messaging app.
    pub fn go_to_messages(&self) -> DispatchOutcome {
        self.go_to(Destination::Messages)
    }

    /// The currently mounted sub-application.
    #[must_use]
    pub fn current(&self) -> SubApp {
        self.core.read().views().shell.current()
    }

    /// Defer a navigation until `delay_ms` past `now`. The transition is
    /// cancelled if the returned handle is dropped first.
    #[must_use = "dropping the handle cancels the deferred navigation"]
    pub fn schedule(
        &self,
        delay_ms: u64,
        destination: Destination,
        now: TimeStamp,
    ) -> TimerHandle {
        self.core
            .write()
            .schedule_in(delay_ms, Intent::NavigateTo { destination }, now)
    }
}
