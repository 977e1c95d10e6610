//! Deferred transitions.
//!
//! Single-threaded timer queue: nothing fires on its own. The embedder calls
//! [`AppCore::advance`](crate::core::AppCore::advance) from its dispatch
//! loop, which drains due entries through normal intent dispatch.
//!
//! Scheduling returns a [`TimerHandle`]; dropping the handle cancels the
//! entry. Holding the handle for exactly as long as the owning screen is
//! mounted guarantees a pending transition can never fire against a
//! torn-down context.

use parking_lot::Mutex;
use std::sync::{Arc, Weak};

use commons_core::TimeStamp;

use crate::core::Intent;

#[derive(Debug)]
struct TimerEntry {
    id: u64,
    due: TimeStamp,
    intent: Intent,
}

#[derive(Debug, Default)]
struct QueueInner {
    next_id: u64,
    entries: Vec<TimerEntry>,
}

/// Pending deferred intents, ordered by deadline.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    inner: Arc<Mutex<QueueInner>>,
}

impl TimerQueue {
    /// Empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `intent` to fire once `now >= due`.
    #[must_use = "dropping the handle cancels the timer"]
    pub fn schedule(&self, due: TimeStamp, intent: Intent) -> TimerHandle {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push(TimerEntry { id, due, intent });
        TimerHandle {
            queue: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Remove and return every due intent, deadline order.
    pub fn drain_due(&self, now: TimeStamp) -> Vec<Intent> {
        let mut inner = self.inner.lock();
        let mut due: Vec<TimerEntry> = Vec::new();
        let mut remaining = Vec::with_capacity(inner.entries.len());
        for entry in inner.entries.drain(..) {
            if entry.due <= now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        inner.entries = remaining;
        due.sort_by_key(|e| (e.due, e.id));
        due.into_iter().map(|e| e.intent).collect()
    }

    /// Number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scoped ownership of one pending timer. Dropping it cancels the entry if
/// it has not fired yet.
#[derive(Debug)]
pub struct TimerHandle {
    queue: Weak<Mutex<QueueInner>>,
    id: u64,
}

impl TimerHandle {
    /// Whether the entry is still pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.queue
            .upgrade()
            .map(|q| q.lock().entries.iter().any(|e| e.id == self.id))
            .unwrap_or(false)
    }

    /// Cancel explicitly. Equivalent to dropping the handle.
    pub fn cancel(self) {}
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            queue.lock().entries.retain(|e| e.id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Destination;

    fn nav() -> Intent {
        Intent::NavigateTo {
            destination: Destination::Messages,
        }
    }

    fn at(ms: u64) -> TimeStamp {
        TimeStamp::from_millis(ms)
    }

    #[test]
    fn entries_fire_only_once_due() {
        let queue = TimerQueue::new();
        let handle = queue.schedule(at(500), nav());
        assert!(queue.drain_due(at(499)).is_empty());
        assert_eq!(queue.drain_due(at(500)).len(), 1);
        assert!(!handle.is_armed());
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let queue = TimerQueue::new();
        let handle = queue.schedule(at(500), nav());
        drop(handle);
        assert!(queue.is_empty());
        assert!(queue.drain_due(at(1_000)).is_empty());
    }

    #[test]
    fn drain_orders_by_deadline() {
        let queue = TimerQueue::new();
        let _late = queue.schedule(
            at(900),
            Intent::NavigateTo {
                destination: Destination::Profile,
            },
        );
        let _early = queue.schedule(at(100), nav());
        let fired = queue.drain_due(at(1_000));
        assert_eq!(fired.len(), 2);
        assert!(matches!(
            fired[0],
            Intent::NavigateTo {
                destination: Destination::Messages
            }
        ));
    }
}
