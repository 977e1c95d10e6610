//! # Sub-Application Host
//!
//! Pure mapping from shell state to exactly one mounted sub-application.
//! Every sub-app receives the same [`Navigator`] instance the interceptor
//! uses, so a sub-app's own buttons and the classifier's inferred commands
//! converge on identical behavior.
//!
//! Sub-applications are capability objects: besides mount/unmount hooks,
//! each may contribute declarative navigation rules that are registered on
//! the event bus only while it is mounted and removed when it unmounts.

mod apps;
mod redirect;

pub use apps::{CommunityApp, MarketplaceApp, MatchingApp, MessagesApp, ProfileApp};
pub use redirect::MessagesRedirect;

use tracing::debug;

use commons_core::TimeStamp;

use crate::core::AppConfig;
use crate::interceptor::{EventBus, InterceptorGuard, ListenerGuard, NavigationInterceptor, NavigationRule, RuleSet};
use crate::ui::Navigator;
use crate::views::SubApp;

/// One of the composed sub-applications, as the host sees it.
///
/// Implementations are thin: real screens live outside the core. The hooks
/// exist so a sub-app can acquire scoped resources on mount (timers,
/// listeners) and is forced to release them on unmount — every unmount path
/// runs `on_unmount`, including replacement due to an error elsewhere.
pub trait SubApplication {
    /// Which shell slot this sub-app fills.
    fn id(&self) -> SubApp;

    /// Declarative navigation intents contributed while mounted.
    fn navigation_rules(&self) -> Vec<NavigationRule> {
        Vec::new()
    }

    /// Called when the host mounts this sub-application.
    fn on_mount(&mut self, navigator: &Navigator, now: TimeStamp) {
        let _ = (navigator, now);
    }

    /// Called when the host unmounts this sub-application.
    fn on_unmount(&mut self) {}
}

/// Mounts exactly one sub-application at a time, following shell state.
pub struct SubAppHost {
    navigator: Navigator,
    bus: EventBus,
    apps: Vec<Box<dyn SubApplication>>,
    synced_to: Option<SubApp>,
    mounted_index: Option<usize>,
    mounted_rules: Option<ListenerGuard>,
    // the built-in classifiers live exactly as long as the host holds a
    // navigation handler
    _interceptor: InterceptorGuard,
}

impl SubAppHost {
    /// Host with the default registry: community, matching, messages,
    /// profile, and the marketplace in both of its modes.
    #[must_use]
    pub fn new(navigator: Navigator, bus: EventBus, config: &AppConfig) -> Self {
        let apps: Vec<Box<dyn SubApplication>> = vec![
            Box::new(CommunityApp::new(config.messages_redirect_ms)),
            Box::new(MatchingApp),
            Box::new(MessagesApp),
            Box::new(ProfileApp),
            Box::new(MarketplaceApp::cart()),
            Box::new(MarketplaceApp::counselling()),
        ];
        Self::with_apps(navigator, bus, apps)
    }

    /// Host over a custom registry.
    #[must_use]
    pub fn with_apps(
        navigator: Navigator,
        bus: EventBus,
        apps: Vec<Box<dyn SubApplication>>,
    ) -> Self {
        let interceptor = NavigationInterceptor::install(&bus, navigator.clone());
        Self {
            navigator,
            bus,
            apps,
            synced_to: None,
            mounted_index: None,
            mounted_rules: None,
            _interceptor: interceptor,
        }
    }

    /// Add or replace a sub-application. Replacement unmounts first.
    pub fn register(&mut self, app: Box<dyn SubApplication>) {
        if let Some(existing) = self.apps.iter().position(|a| a.id() == app.id()) {
            if self.mounted_index == Some(existing) {
                self.unmount_current();
                self.synced_to = None;
            }
            self.apps[existing] = app;
        } else {
            self.apps.push(app);
        }
    }

    /// The mounted sub-application's slot, if any.
    #[must_use]
    pub fn mounted(&self) -> Option<SubApp> {
        self.mounted_index.map(|i| self.apps[i].id())
    }

    /// Re-read shell state and swap the mounted sub-application if it
    /// changed. Unregistered slots fall back to the community app, the
    /// default destination.
    pub fn sync(&mut self, now: TimeStamp) {
        let current = self.navigator.current();
        if self.synced_to == Some(current) {
            return;
        }

        self.unmount_current();

        let index = self
            .apps
            .iter()
            .position(|a| a.id() == current)
            .or_else(|| self.apps.iter().position(|a| a.id() == SubApp::Community));

        if let Some(index) = index {
            let rules = self.apps[index].navigation_rules();
            if !rules.is_empty() {
                self.mounted_rules = Some(
                    self.bus
                        .install(RuleSet::new("sub-app", rules), self.navigator.clone()),
                );
            }
            debug!(sub_app = self.apps[index].id().label(), "mounting");
            self.apps[index].on_mount(&self.navigator, now);
            self.mounted_index = Some(index);
        }
        self.synced_to = Some(current);
    }

    fn unmount_current(&mut self) {
        if let Some(index) = self.mounted_index.take() {
            debug!(sub_app = self.apps[index].id().label(), "unmounting");
            self.apps[index].on_unmount();
        }
        // contributed rules leave the bus with their owner
        self.mounted_rules = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::RwLock;
    use std::sync::{Arc, Mutex as StdMutex};

    use commons_core::{Gender, ViewerProfile};

    use crate::core::{AppCore, Intent};

    fn shared_core() -> Arc<RwLock<AppCore>> {
        let mut core = AppCore::new(AppConfig::default());
        core.dispatch(Intent::LoadComplete);
        core.dispatch(Intent::LoginComplete {
            profile: ViewerProfile::new("Lee", Gender::Male, "\u{1F331}"),
        });
        Arc::new(RwLock::new(core))
    }

    fn now() -> TimeStamp {
        TimeStamp::from_millis(50_000)
    }

    /// Records mount/unmount order.
    struct Probe {
        id: SubApp,
        log: Arc<StdMutex<Vec<String>>>,
    }

    impl SubApplication for Probe {
        fn id(&self) -> SubApp {
            self.id
        }
        fn on_mount(&mut self, _navigator: &Navigator, _now: TimeStamp) {
            self.log
                .lock()
                .expect("probe log")
                .push(format!("mount:{}", self.id.label()));
        }
        fn on_unmount(&mut self) {
            self.log
                .lock()
                .expect("probe log")
                .push(format!("unmount:{}", self.id.label()));
        }
    }

    #[test]
    fn host_follows_shell_state() {
        let core = shared_core();
        let navigator = Navigator::new(Arc::clone(&core));
        let log = Arc::new(StdMutex::new(Vec::new()));
        let apps: Vec<Box<dyn SubApplication>> = vec![
            Box::new(Probe {
                id: SubApp::Community,
                log: Arc::clone(&log),
            }),
            Box::new(Probe {
                id: SubApp::Matching,
                log: Arc::clone(&log),
            }),
        ];
        let mut host = SubAppHost::with_apps(navigator.clone(), EventBus::new(), apps);

        host.sync(now());
        assert_eq!(host.mounted(), Some(SubApp::Community));

        navigator.go_to_matching();
        host.sync(now());
        assert_eq!(host.mounted(), Some(SubApp::Matching));

        let entries = log.lock().expect("probe log").clone();
        assert_eq!(
            entries,
            vec!["mount:community", "unmount:community", "mount:matching"]
        );
    }

    #[test]
    fn unregistered_slots_fall_back_to_community() {
        let core = shared_core();
        let navigator = Navigator::new(Arc::clone(&core));
        let log = Arc::new(StdMutex::new(Vec::new()));
        let apps: Vec<Box<dyn SubApplication>> = vec![Box::new(Probe {
            id: SubApp::Community,
            log: Arc::clone(&log),
        })];
        let mut host = SubAppHost::with_apps(navigator.clone(), EventBus::new(), apps);

        navigator.go_to_profile();
        host.sync(now());
        assert_eq!(host.mounted(), Some(SubApp::Community));
    }

    #[test]
    fn mounted_sub_app_rules_are_scoped_to_the_mount() {
        let core = shared_core();
        let navigator = Navigator::new(Arc::clone(&core));
        let bus = EventBus::new();
        let mut host = SubAppHost::new(navigator.clone(), bus.clone(), &AppConfig::default());

        // built-in classifiers only
        host.sync(now());
        assert_eq!(bus.listener_count(), 2);

        navigator.go_to_cart();
        host.sync(now());
        // the marketplace contributes its own rule set while mounted
        assert_eq!(bus.listener_count(), 3);

        navigator.go_to_matching();
        host.sync(now());
        assert_eq!(bus.listener_count(), 2);
    }
}
