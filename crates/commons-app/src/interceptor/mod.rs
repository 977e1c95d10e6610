//! # Navigation Intent Interception
//!
//! Classifies raw activation events against UI trees the core does not
//! control, and turns them into navigation commands — without the mounted
//! sub-application knowing its siblings exist.
//!
//! The event bus is the capture phase: every registered classifier observes
//! an event strictly before the element's own default action, and any match
//! suppresses that default. Both built-in classifiers (signature and
//! positional) are registered on the same stream, so a single click can be
//! evaluated twice; navigation transitions are idempotent, which is what
//! makes the overlap tolerable.
//!
//! Listener registration is scoped: installation returns a guard and the
//! listeners are removed when the guard drops, on every exit path.

mod event;
mod rules;

pub use event::{ActivationEvent, ButtonProbe, UiNode};
pub use rules::{
    positional_rules, signature_rules, NavigationRule, RuleSet, Signature, Trigger,
};

use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tracing::debug;

use crate::core::Destination;
use crate::ui::Navigator;

struct Listener {
    id: u64,
    rules: RuleSet,
    navigator: Navigator,
}

#[derive(Default)]
struct BusInner {
    next_id: u64,
    listeners: Vec<Listener>,
}

/// The capture-phase event stream classifiers register on.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<Mutex<BusInner>>,
}

/// What one dispatch did.
#[derive(Debug, Default)]
pub struct Dispatch {
    /// `(classifier label, destination)` for every classifier that fired.
    pub matched: Vec<(&'static str, Destination)>,
    /// Whether the element's default action was suppressed.
    pub default_suppressed: bool,
}

impl Dispatch {
    /// Whether the event was left untouched for default handling.
    #[must_use]
    pub fn passed_through(&self) -> bool {
        !self.default_suppressed
    }
}

impl EventBus {
    /// Empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a classifier. It observes every event until the guard
    /// drops.
    #[must_use = "dropping the guard removes the listener"]
    pub fn install(&self, rules: RuleSet, navigator: Navigator) -> ListenerGuard {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        debug!(classifier = rules.label, "listener installed");
        inner.listeners.push(Listener {
            id,
            rules,
            navigator,
        });
        ListenerGuard {
            bus: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }

    /// Run the capture phase for one activation.
    ///
    /// Every listener observes the event in registration order; each fires
    /// at most one destination (first-match-wins within its rule set) and a
    /// firing suppresses the element's default action. An event matching no
    /// listener passes through untouched.
    pub fn dispatch(&self, event: &ActivationEvent) -> Dispatch {
        let mut report = Dispatch::default();
        let Some(probe) = event.probe() else {
            return report;
        };

        // snapshot under the lock, invoke outside it: a handler may install
        // or remove listeners reentrantly
        let snapshot: Vec<(RuleSet, Navigator)> = {
            let inner = self.inner.lock();
            inner
                .listeners
                .iter()
                .map(|l| (l.rules.clone(), l.navigator.clone()))
                .collect()
        };

        for (rules, navigator) in snapshot {
            if let Some(destination) = rules.classify(&probe) {
                debug!(
                    classifier = rules.label,
                    destination = %destination,
                    "intent classified"
                );
                navigator.go_to(destination);
                report.matched.push((rules.label, destination));
                report.default_suppressed = true;
            }
        }
        report
    }
}

/// Scoped registration of one classifier. Dropping it removes the listener.
pub struct ListenerGuard {
    bus: Weak<Mutex<BusInner>>,
    id: u64,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.lock().listeners.retain(|l| l.id != self.id);
        }
    }
}

/// The built-in interceptor: the signature classifier and the positional
/// classifier, installed together against one navigator.
pub struct NavigationInterceptor;

impl NavigationInterceptor {
    /// Install both built-in classifiers. They stay registered until the
    /// returned guard drops — including unmount driven by an error
    /// elsewhere, since the guard releases on every exit path.
    #[must_use = "dropping the guard removes both classifiers"]
    pub fn install(bus: &EventBus, navigator: Navigator) -> InterceptorGuard {
        InterceptorGuard {
            _signature: bus.install(signature_rules(), navigator.clone()),
            _positional: bus.install(positional_rules(), navigator),
        }
    }
}

/// Guard over the two built-in classifier registrations.
pub struct InterceptorGuard {
    _signature: ListenerGuard,
    _positional: ListenerGuard,
}
