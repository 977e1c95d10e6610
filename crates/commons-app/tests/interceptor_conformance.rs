//! Conformance of the event classifiers against the behaviors the composed
//! screens rely on: signature matches outside nav bars, positional matches
//! inside them, pass-through for everything else, and scoped teardown.

use parking_lot::RwLock;
use std::sync::Arc;

use commons_app::core::{AppConfig, AppCore, Intent};
use commons_app::interceptor::{EventBus, NavigationInterceptor, UiNode};
use commons_app::ui::Navigator;
use commons_app::views::SubApp;
use commons_core::{Gender, ViewerProfile};
use commons_testkit::tree;

fn shared_core() -> Arc<RwLock<AppCore>> {
    let mut core = AppCore::new(AppConfig::default());
    core.dispatch(Intent::LoadComplete);
    core.dispatch(Intent::LoginComplete {
        profile: ViewerProfile::new("Kai", Gender::Male, "\u{1F331}"),
    });
    Arc::new(RwLock::new(core))
}

fn installed_bus(core: &Arc<RwLock<AppCore>>) -> (EventBus, commons_app::interceptor::InterceptorGuard) {
    let bus = EventBus::new();
    let guard = NavigationInterceptor::install(&bus, Navigator::new(Arc::clone(core)));
    (bus, guard)
}

#[test]
fn matching_text_outside_any_nav_bar_triggers_exactly_once() {
    let core = shared_core();
    let (bus, _guard) = installed_bus(&core);

    // a plain content button, container recognizable as nothing special
    let root = UiNode::new("div")
        .class("content-area")
        .child(UiNode::new("button").text("MATCHING"));
    let event = tree::click(root, vec![0]).expect("valid path");

    let report = bus.dispatch(&event);
    assert_eq!(report.matched.len(), 1);
    assert!(report.default_suppressed);
    assert_eq!(core.read().views().shell.current(), SubApp::Matching);
}

#[test]
fn ordinal_zero_in_a_nav_bar_means_cart_whatever_the_text_says() {
    let core = shared_core();
    let (bus, _guard) = installed_bus(&core);

    // a bottom bar whose buttons say nothing about carts
    let bar = UiNode::new("div")
        .class("fixed")
        .class("bottom-0")
        .child(UiNode::new("button").text("ONE"))
        .child(UiNode::new("button").text("TWO"))
        .child(UiNode::new("button").text("THREE"));
    let event = tree::click(UiNode::new("div").child(bar), vec![0, 0]).expect("valid path");

    let report = bus.dispatch(&event);
    assert!(report.default_suppressed);
    assert_eq!(core.read().views().shell.current(), SubApp::Cart);
}

#[test]
fn the_real_bottom_bar_converges_under_dual_evaluation() {
    let core = shared_core();
    let (bus, _guard) = installed_bus(&core);

    // leftmost slot: shopping-cart icon at ordinal 0; both classifiers fire
    // and agree, and the double invocation is behaviorally a single one
    let screen = tree::screen_with_bottom_nav(UiNode::new("main"), None);
    let event = tree::click_bottom_nav(screen, 0).expect("valid path");

    let report = bus.dispatch(&event);
    assert_eq!(report.matched.len(), 2);
    assert_eq!(core.read().views().shell.current(), SubApp::Cart);
}

#[test]
fn mail_icon_routes_to_messages() {
    let core = shared_core();
    let (bus, _guard) = installed_bus(&core);

    let root = UiNode::new("header").child(tree::icon_button("mail"));
    let event = tree::click(root, vec![0, 0]).expect("valid path");

    let report = bus.dispatch(&event);
    assert!(report.default_suppressed);
    assert_eq!(core.read().views().shell.current(), SubApp::Messages);
}

#[test]
fn ordinary_buttons_pass_through_untouched() {
    let core = shared_core();
    let (bus, _guard) = installed_bus(&core);

    let root = UiNode::new("form").child(UiNode::new("button").text("SUBMIT POST"));
    let event = tree::click(root, vec![0]).expect("valid path");

    let report = bus.dispatch(&event);
    assert!(report.passed_through());
    assert_eq!(core.read().views().shell.current(), SubApp::Community);
}

#[test]
fn teardown_restores_default_handling_on_every_path() {
    let core = shared_core();
    let bus = EventBus::new();

    {
        let _guard = NavigationInterceptor::install(&bus, Navigator::new(Arc::clone(&core)));
        assert_eq!(bus.listener_count(), 2);
        // guard dropped here, as an unmount (or unwind) would drop it
    }
    assert_eq!(bus.listener_count(), 0);

    let screen = tree::screen_with_bottom_nav(UiNode::new("main"), None);
    let event = tree::click_bottom_nav(screen, 3).expect("valid path");
    let report = bus.dispatch(&event);
    assert!(report.passed_through());
    assert_eq!(core.read().views().shell.current(), SubApp::Community);
}

#[test]
fn clicks_inside_icons_resolve_to_their_button() {
    let core = shared_core();
    let (bus, _guard) = installed_bus(&core);

    // target the svg inside the users button, not the button itself
    let root = UiNode::new("div").child(tree::icon_button("users"));
    let event = tree::click(root, vec![0, 0]).expect("valid path");

    bus.dispatch(&event);
    assert_eq!(core.read().views().shell.current(), SubApp::Matching);
}
