//! Declarative navigation rules.
//!
//! Instead of each sub-application sniffing markup, classification is data:
//! an ordered list of rules evaluated first-match-wins against the resolved
//! button. Two built-in rule sets reproduce the legacy heuristics exactly —
//! the text/markup signatures and the positional bottom-nav mapping — and
//! sub-applications may contribute their own rules through the host.

use crate::core::Destination;

use super::event::ButtonProbe;

/// Text/markup signature for one destination.
#[derive(Debug, Clone, Copy)]
pub struct Signature {
    /// Keywords probed against the button's case-normalized text.
    pub keywords: &'static [&'static str],
    /// Tokens probed against the button's lowered markup, for icon-only
    /// buttons that carry no text.
    pub markup: &'static [&'static str],
}

/// What fires a rule.
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// Any keyword in the text, or any token in the markup.
    Signature(Signature),
    /// Fixed position among sibling buttons inside a recognized bottom
    /// navigation bar, regardless of text or icon.
    NavBarOrdinal(usize),
}

/// One declarative navigation intent: when the trigger fires, go there.
#[derive(Debug, Clone, Copy)]
pub struct NavigationRule {
    pub destination: Destination,
    pub trigger: Trigger,
}

impl NavigationRule {
    /// Rule fired by text keywords or markup tokens.
    #[must_use]
    pub fn signature(
        destination: Destination,
        keywords: &'static [&'static str],
        markup: &'static [&'static str],
    ) -> Self {
        Self {
            destination,
            trigger: Trigger::Signature(Signature { keywords, markup }),
        }
    }

    /// Rule fired by bottom-nav position.
    #[must_use]
    pub fn nav_ordinal(destination: Destination, ordinal: usize) -> Self {
        Self {
            destination,
            trigger: Trigger::NavBarOrdinal(ordinal),
        }
    }

    /// Whether this rule fires for the probed button.
    #[must_use]
    pub fn matches(&self, probe: &ButtonProbe) -> bool {
        match &self.trigger {
            Trigger::Signature(sig) => {
                sig.keywords.iter().any(|k| probe.text.contains(k))
                    || sig.markup.iter().any(|t| probe.markup.contains(t))
            }
            Trigger::NavBarOrdinal(ordinal) => probe.nav_ordinal == Some(*ordinal),
        }
    }
}

/// An ordered rule list evaluated first-match-wins.
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Label used in dispatch reports and logs.
    pub label: &'static str,
    rules: Vec<NavigationRule>,
}

impl RuleSet {
    /// Rule set with the given label.
    #[must_use]
    pub fn new(label: &'static str, rules: Vec<NavigationRule>) -> Self {
        Self { label, rules }
    }

    /// The rules, in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[NavigationRule] {
        &self.rules
    }

    /// First matching rule's destination; `None` leaves the event untouched.
    #[must_use]
    pub fn classify(&self, probe: &ButtonProbe) -> Option<Destination> {
        self.rules
            .iter()
            .find(|rule| rule.matches(probe))
            .map(|rule| rule.destination)
    }
}

/// The text/markup signature classifier.
///
/// Ordering is load-bearing: "MATCH"/"users" must be probed before
/// "PROFILE"/"user", since the matching icon token contains the profile one.
#[must_use]
pub fn signature_rules() -> RuleSet {
    RuleSet::new(
        "signature",
        vec![
            NavigationRule::signature(
                Destination::Cart,
                &["ADD2CART", "CART"],
                &["shoppingcart", "shopping-cart"],
            ),
            NavigationRule::signature(
                Destination::Counselling,
                &["COUNSELLING", "COUNSEL"],
                &["messagecircle"],
            ),
            NavigationRule::signature(Destination::Home, &["HOME"], &["home"]),
            NavigationRule::signature(Destination::Matching, &["MATCH"], &["users"]),
            NavigationRule::signature(Destination::Profile, &["PROFILE"], &["user"]),
            NavigationRule::signature(Destination::Messages, &[], &["mail", "envelope"]),
        ],
    )
}

/// The positional bottom-nav classifier: leftmost to rightmost.
#[must_use]
pub fn positional_rules() -> RuleSet {
    RuleSet::new(
        "positional",
        vec![
            NavigationRule::nav_ordinal(Destination::Cart, 0),
            NavigationRule::nav_ordinal(Destination::Counselling, 1),
            NavigationRule::nav_ordinal(Destination::Home, 2),
            NavigationRule::nav_ordinal(Destination::Matching, 3),
            NavigationRule::nav_ordinal(Destination::Profile, 4),
        ],
    )
}
