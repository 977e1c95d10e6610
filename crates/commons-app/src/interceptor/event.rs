//! Activation events over a UI-tree snapshot.
//!
//! The mounted sub-applications are third-party: the classifier cannot ask
//! them what a control means. It only gets the rendered element tree and a
//! target path, and works outward from there — nearest enclosing
//! interactive element, its visible text, and a lowered serialization of its
//! internal markup for icon-only buttons.

use serde::Serialize;

/// One element in the snapshot tree.
#[derive(Debug, Clone, Serialize)]
pub struct UiNode {
    tag: String,
    classes: Vec<String>,
    text: String,
    children: Vec<UiNode>,
}

impl UiNode {
    /// Element with the given tag, no classes, no text, no children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Builder: add a class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Builder: set the element's own text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builder: append a child.
    #[must_use]
    pub fn child(mut self, child: UiNode) -> Self {
        self.children.push(child);
        self
    }

    /// Element tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether this element receives activation (buttons only, as in the
    /// composed apps).
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.tag == "button"
    }

    /// The class attribute as rendered: classes joined by spaces.
    #[must_use]
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    /// Visible text of this element and its descendants, in document order.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut pieces = Vec::new();
        self.collect_text(&mut pieces);
        pieces.join(" ")
    }

    fn collect_text<'a>(&'a self, pieces: &mut Vec<&'a str>) {
        if !self.text.is_empty() {
            pieces.push(&self.text);
        }
        for child in &self.children {
            child.collect_text(pieces);
        }
    }

    /// Lowered serialization of this element's children — the equivalent of
    /// reading its inner markup to spot icon classes on text-free buttons.
    #[must_use]
    pub fn inner_markup(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.serialize_into(&mut out);
        }
        out.to_lowercase()
    }

    fn serialize_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&self.class_attr());
            out.push('"');
        }
        out.push('>');
        out.push_str(&self.text);
        for child in &self.children {
            child.serialize_into(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }

    /// Node at `path` (child indices from this node).
    #[must_use]
    pub fn node_at(&self, path: &[usize]) -> Option<&UiNode> {
        let mut node = self;
        for index in path {
            node = node.children.get(*index)?;
        }
        Some(node)
    }

    /// Paths of every interactive descendant, preorder (document order).
    fn descendant_buttons(&self) -> Vec<Vec<usize>> {
        let mut found = Vec::new();
        for (index, child) in self.children.iter().enumerate() {
            if child.is_interactive() {
                found.push(vec![index]);
            }
            for mut sub in child.descendant_buttons() {
                sub.insert(0, index);
                found.push(sub);
            }
        }
        found
    }
}

/// A raw activation (click/tap) against a tree snapshot.
#[derive(Debug, Clone)]
pub struct ActivationEvent {
    root: UiNode,
    target: Vec<usize>,
}

impl ActivationEvent {
    /// Event on the node at `target` (child indices from `root`). `None` if
    /// the path does not resolve.
    #[must_use]
    pub fn new(root: UiNode, target: Vec<usize>) -> Option<Self> {
        root.node_at(&target)?;
        Some(Self { root, target })
    }

    /// The snapshot root.
    #[must_use]
    pub fn root(&self) -> &UiNode {
        &self.root
    }

    /// The activated node.
    #[must_use]
    pub fn target_node(&self) -> &UiNode {
        // path validated at construction
        self.root.node_at(&self.target).unwrap_or(&self.root)
    }

    /// Path of the nearest enclosing interactive element, target-inclusive.
    #[must_use]
    pub fn closest_button(&self) -> Option<Vec<usize>> {
        for cut in (0..=self.target.len()).rev() {
            let path = &self.target[..cut];
            if let Some(node) = self.root.node_at(path) {
                if node.is_interactive() {
                    return Some(path.to_vec());
                }
            }
        }
        None
    }

    /// Everything the rules probe: resolved once per event and shared by
    /// every registered classifier. `None` when the activation did not land
    /// on or inside a button, in which case the event passes through.
    #[must_use]
    pub fn probe(&self) -> Option<ButtonProbe> {
        let path = self.closest_button()?;
        let button = self.root.node_at(&path)?;
        Some(ButtonProbe {
            text: button.text_content().to_uppercase(),
            markup: button.inner_markup(),
            nav_ordinal: self.bottom_nav_ordinal(&path),
        })
    }

    /// Ordinal of the button among its parent's interactive descendants, in
    /// document order — but only when an enclosing container is recognizable
    /// as a bottom navigation bar.
    fn bottom_nav_ordinal(&self, button_path: &[usize]) -> Option<usize> {
        let in_nav_bar = (0..=button_path.len()).rev().any(|cut| {
            self.root
                .node_at(&button_path[..cut])
                .is_some_and(is_bottom_nav_container)
        });
        if !in_nav_bar {
            return None;
        }

        let (last, parent_path) = button_path.split_last()?;
        let parent = self.root.node_at(parent_path)?;
        parent
            .descendant_buttons()
            .iter()
            .position(|rel| rel.len() == 1 && rel[0] == *last)
    }
}

/// A container counts as a bottom navigation bar when its class attribute
/// mentions "bottom" or "nav", or carries the fixed/bottom-0 pair.
fn is_bottom_nav_container(node: &UiNode) -> bool {
    let attr = node.class_attr();
    attr.contains("bottom")
        || attr.contains("nav")
        || (node.classes.iter().any(|c| c == "fixed") && node.classes.iter().any(|c| c == "bottom-0"))
}

/// What the rules see for one activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonProbe {
    /// Case-normalized visible text of the resolved button.
    pub text: String,
    /// Lowered serialization of the button's internal markup.
    pub markup: String,
    /// Position among sibling buttons, when inside a recognized bottom nav
    /// bar.
    pub nav_ordinal: Option<usize>,
}
