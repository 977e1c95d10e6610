//! Scripted UI trees.
//!
//! Builders for the element shapes the composed screens actually render, so
//! interceptor tests can click on realistic structures instead of
//! hand-rolling trees in every test.

use commons_app::interceptor::{ActivationEvent, UiNode};

/// A lucide-style icon node, e.g. `icon("shopping-cart")` →
/// `<svg class="lucide lucide-shopping-cart">`.
#[must_use]
pub fn icon(name: &str) -> UiNode {
    UiNode::new("svg")
        .class("lucide")
        .class(format!("lucide-{name}"))
}

/// An icon-only button, as the screens render toolbar affordances.
#[must_use]
pub fn icon_button(icon_name: &str) -> UiNode {
    UiNode::new("button").child(icon(icon_name))
}

/// A button with an icon and a visible label.
#[must_use]
pub fn labeled_button(icon_name: &str, label: &str) -> UiNode {
    UiNode::new("button")
        .child(icon(icon_name))
        .child(UiNode::new("span").class("pixel-text").text(label))
}

/// The five-slot bottom navigation bar, in on-screen order.
///
/// Matches the real bar: a fixed bottom container with one button per tab;
/// only the active tab shows its label.
#[must_use]
pub fn bottom_nav(active: Option<usize>) -> UiNode {
    let tabs = [
        ("shopping-cart", "ADD2CART"),
        ("users", "MATCH"),
        ("home", "HOME"),
        ("message-circle", "COUNSELLING"),
        ("user", "PROFILE"),
    ];
    let mut bar = UiNode::new("div").class("fixed").class("bottom-0");
    for (index, (icon_name, label)) in tabs.iter().enumerate() {
        let button = if active == Some(index) {
            labeled_button(icon_name, label)
        } else {
            icon_button(icon_name)
        };
        bar = bar.child(button);
    }
    bar
}

/// A full screen: arbitrary content above a bottom nav bar.
#[must_use]
pub fn screen_with_bottom_nav(content: UiNode, active: Option<usize>) -> UiNode {
    UiNode::new("div")
        .class("min-h-screen")
        .child(content)
        .child(bottom_nav(active))
}

/// A click on the bottom-nav button at `ordinal` (0 = leftmost), landing on
/// the icon inside the button as real clicks do.
///
/// The screen must have been built with [`screen_with_bottom_nav`].
#[must_use]
pub fn click_bottom_nav(screen: UiNode, ordinal: usize) -> Option<ActivationEvent> {
    ActivationEvent::new(screen, vec![1, ordinal, 0])
}

/// A click on a free-standing node at `path`.
#[must_use]
pub fn click(root: UiNode, path: Vec<usize>) -> Option<ActivationEvent> {
    ActivationEvent::new(root, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_nav_buttons_resolve_with_ordinals() {
        let screen = screen_with_bottom_nav(UiNode::new("main"), None);
        let event = click_bottom_nav(screen, 3).expect("valid path");
        let probe = event.probe().expect("button under click");
        assert_eq!(probe.nav_ordinal, Some(3));
        assert!(probe.markup.contains("lucide-message-circle"));
    }

    #[test]
    fn active_tab_carries_its_label() {
        let screen = screen_with_bottom_nav(UiNode::new("main"), Some(1));
        let event = click_bottom_nav(screen, 1).expect("valid path");
        assert_eq!(event.probe().expect("button").text, "MATCH");
    }
}
