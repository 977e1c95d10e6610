//! Built-in sub-application shims.
//!
//! The real screens are independently authored and render outside the core;
//! these shims are their in-core representatives — they fill the host's
//! slots, contribute navigation capabilities, and own whatever scoped
//! resources their screens need.

use commons_core::TimeStamp;

use crate::core::Destination;
use crate::interceptor::NavigationRule;
use crate::ui::Navigator;
use crate::views::{MarketplaceMode, SubApp};

use super::redirect::MessagesRedirect;
use super::SubApplication;

/// Community + registration app. Owns the internal messages placeholder and
/// its redirect timer.
#[derive(Debug)]
pub struct CommunityApp {
    redirect: MessagesRedirect,
}

impl CommunityApp {
    /// Community app whose messages placeholder hops after
    /// `redirect_delay_ms`.
    #[must_use]
    pub fn new(redirect_delay_ms: u64) -> Self {
        Self {
            redirect: MessagesRedirect::new(redirect_delay_ms),
        }
    }

    /// The community's internal messages entry was opened: show the
    /// placeholder and schedule the hop to the messaging sub-app.
    pub fn open_internal_messages(&mut self, navigator: &Navigator, now: TimeStamp) {
        self.redirect.arm(navigator, now);
    }

    /// Whether the placeholder's hop is pending.
    #[must_use]
    pub fn redirect_armed(&self) -> bool {
        self.redirect.is_armed()
    }
}

impl SubApplication for CommunityApp {
    fn id(&self) -> SubApp {
        SubApp::Community
    }

    fn on_unmount(&mut self) {
        // a pending hop must not fire against a torn-down screen
        self.redirect.disarm();
    }
}

/// Matching app shim.
#[derive(Debug, Default)]
pub struct MatchingApp;

impl SubApplication for MatchingApp {
    fn id(&self) -> SubApp {
        SubApp::Matching
    }
}

/// Messaging app shim.
#[derive(Debug, Default)]
pub struct MessagesApp;

impl SubApplication for MessagesApp {
    fn id(&self) -> SubApp {
        SubApp::Messages
    }
}

/// Profile app shim.
#[derive(Debug, Default)]
pub struct ProfileApp;

impl SubApplication for ProfileApp {
    fn id(&self) -> SubApp {
        SubApp::Profile
    }
}

/// The marketplace module. One app, two pages: it fills the cart slot and
/// the counselling slot depending on the mode it was constructed with.
#[derive(Debug)]
pub struct MarketplaceApp {
    mode: MarketplaceMode,
}

impl MarketplaceApp {
    /// Marketplace serving the cart page.
    #[must_use]
    pub fn cart() -> Self {
        Self {
            mode: MarketplaceMode::Cart,
        }
    }

    /// Marketplace serving the counselling page.
    #[must_use]
    pub fn counselling() -> Self {
        Self {
            mode: MarketplaceMode::Counselling,
        }
    }

    /// Which page this instance serves.
    #[must_use]
    pub fn mode(&self) -> MarketplaceMode {
        self.mode
    }
}

impl SubApplication for MarketplaceApp {
    fn id(&self) -> SubApp {
        match self.mode {
            MarketplaceMode::Cart => SubApp::Cart,
            MarketplaceMode::Counselling => SubApp::Counselling,
        }
    }

    fn navigation_rules(&self) -> Vec<NavigationRule> {
        match self.mode {
            // the cart page's own checkout affordances route back to itself
            MarketplaceMode::Cart => vec![NavigationRule::signature(
                Destination::Cart,
                &["CHECKOUT", "MY CART"],
                &[],
            )],
            MarketplaceMode::Counselling => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::RwLock;
    use std::sync::Arc;

    use commons_core::{Gender, ViewerProfile};

    use crate::core::{AppConfig, AppCore, Intent};

    fn shared_core() -> Arc<RwLock<AppCore>> {
        let mut core = AppCore::new(AppConfig::default());
        core.dispatch(Intent::LoadComplete);
        core.dispatch(Intent::LoginComplete {
            profile: ViewerProfile::new("Ira", Gender::Male, "\u{1F331}"),
        });
        Arc::new(RwLock::new(core))
    }

    #[test]
    fn unmount_disarms_the_internal_messages_redirect() {
        let core = shared_core();
        let navigator = Navigator::new(Arc::clone(&core));
        let mut community = CommunityApp::new(500);

        community.open_internal_messages(&navigator, TimeStamp::from_millis(1_000));
        assert!(community.redirect_armed());

        community.on_unmount();
        assert!(!community.redirect_armed());
        assert!(core.write().advance(TimeStamp::from_millis(60_000)).is_empty());
    }

    #[test]
    fn marketplace_fills_both_slots() {
        assert_eq!(MarketplaceApp::cart().id(), SubApp::Cart);
        assert_eq!(MarketplaceApp::counselling().id(), SubApp::Counselling);
        assert!(!MarketplaceApp::cart().navigation_rules().is_empty());
    }
}
