//! The messages-redirect screen.
//!
//! The community app's internal messages page is a placeholder: it shows a
//! short loading state, then hops to the real messaging sub-app. The hop is
//! a deferred navigation owned by a scoped handle — unmounting before the
//! deadline cancels it, so the transition can never fire against a
//! torn-down context.

use commons_core::TimeStamp;

use crate::core::Destination;
use crate::timers::TimerHandle;
use crate::ui::Navigator;

/// Deferred hop to the messaging sub-app.
#[derive(Debug)]
pub struct MessagesRedirect {
    delay_ms: u64,
    timer: Option<TimerHandle>,
}

impl MessagesRedirect {
    /// Redirect after `delay_ms`.
    #[must_use]
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            timer: None,
        }
    }

    /// Arm the redirect. Re-arming replaces (and thereby cancels) a pending
    /// hop.
    pub fn arm(&mut self, navigator: &Navigator, now: TimeStamp) {
        self.timer = Some(navigator.schedule(self.delay_ms, Destination::Messages, now));
    }

    /// Cancel a pending hop, if any. Called on unmount.
    pub fn disarm(&mut self) {
        self.timer = None;
    }

    /// Whether a hop is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.timer.as_ref().is_some_and(TimerHandle::is_armed)
    }
}
