//! # View Nodes
//!
//! In-memory element tree that views own and mutate in place. The terminal
//! renderer lays it out; tests inspect it directly.
//!
//! Every mutating helper is idempotent: calling it twice with the same
//! arguments leaves the node exactly as one call would.

use super::actions::UiAction;
use std::collections::BTreeMap;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    tag: String,
    classes: Vec<String>,
    text: String,
    attributes: BTreeMap<String, String>,
    value: String,
    hidden: bool,
    disabled: bool,
    checked: bool,
    action: Option<UiAction>,
    children: Vec<Node>,
}

impl Node {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    // Builders used by templates

    pub fn with_class(mut self, class: &str) -> Self {
        self.toggle_class(class, true);
        self
    }

    pub fn with_text(mut self, text: impl Display) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_action(mut self, action: UiAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    // Accessors

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn action(&self) -> Option<&UiAction> {
        self.action.as_ref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// Own text followed by every visible descendant's text
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        parts.join(" ")
    }

    fn collect_text(&self, parts: &mut Vec<String>) {
        if self.hidden {
            return;
        }
        if !self.text.is_empty() {
            parts.push(self.text.clone());
        }
        for child in &self.children {
            child.collect_text(parts);
        }
    }

    // DOM-style helpers

    pub fn set_text(&mut self, text: impl Display) {
        self.text = text.to_string();
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// Add the class when `on`, remove it otherwise
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if class.is_empty() {
            return;
        }
        let present = self.has_class(class);
        if on && !present {
            self.classes.push(class.to_string());
        } else if !on && present {
            self.classes.retain(|c| c != class);
        }
    }

    /// Set the image source; `alt` is only written when provided
    pub fn set_image(&mut self, src: &str, alt: Option<&str>) {
        self.set_attr("src", src);
        if let Some(alt) = alt.filter(|a| !a.is_empty()) {
            self.set_attr("alt", alt);
        }
    }

    /// Remove from layout flow
    pub fn set_hidden(&mut self) {
        self.hidden = true;
    }

    /// Restore to layout flow
    pub fn set_visible(&mut self) {
        self.hidden = false;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Bind an action, replacing any previous binding
    pub fn set_action(&mut self, action: UiAction) {
        self.action = Some(action);
    }

    pub fn clear_action(&mut self) {
        self.action = None;
    }

    pub fn replace_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    pub fn append(&mut self, child: Node) {
        self.children.push(child);
    }

    // Queries

    /// First node carrying `class`, searching depth first from this node
    pub fn find(&self, class: &str) -> Option<&Node> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(class))
    }

    pub fn find_mut(&mut self, class: &str) -> Option<&mut Node> {
        if self.has_class(class) {
            return Some(self);
        }
        for child in &mut self.children {
            if let Some(found) = child.find_mut(class) {
                return Some(found);
            }
        }
        None
    }

    /// Every node carrying `class`, in document order
    pub fn find_all(&self, class: &str) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect_class(class, &mut found);
        found
    }

    fn collect_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Node>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in &self.children {
            child.collect_class(class, found);
        }
    }

    /// Apply `f` to the first node carrying `class`; false when none matched
    pub fn update(&mut self, class: &str, f: impl FnOnce(&mut Node)) -> bool {
        match self.find_mut(class) {
            Some(node) => {
                f(node);
                true
            }
            None => {
                tracing::warn!("node with class '{}' not found under <{}>", class, self.tag);
                false
            }
        }
    }

    /// Apply `f` to every node carrying `class`
    pub fn update_all(&mut self, class: &str, f: &mut impl FnMut(&mut Node)) {
        if self.has_class(class) {
            f(self);
        }
        for child in &mut self.children {
            child.update_all(class, f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::events::BasketTab;

    fn sample() -> Node {
        Node::new("div").with_class("card").with_children(vec![
            Node::new("h2").with_class("card__title").with_text("Lot"),
            Node::new("ul")
                .with_class("card__list")
                .with_child(Node::new("li").with_class("item").with_text("one"))
                .with_child(Node::new("li").with_class("item").with_text("two")),
        ])
    }

    #[test]
    fn toggle_class_should_be_idempotent() {
        let mut node = Node::new("span");
        node.toggle_class("active", true);
        node.toggle_class("active", true);
        assert_eq!(node.classes(), &["active".to_string()]);

        node.toggle_class("active", false);
        node.toggle_class("active", false);
        assert!(node.classes().is_empty());
    }

    #[test]
    fn set_image_should_keep_alt_when_label_missing() {
        let mut img = Node::new("img");
        img.set_image("/a.png", Some("Vase"));
        img.set_image("/b.png", None);

        assert_eq!(img.attr("src"), Some("/b.png"));
        assert_eq!(img.attr("alt"), Some("Vase"));
    }

    #[test]
    fn visibility_helpers_should_toggle_hidden() {
        let mut node = Node::new("div");
        node.set_hidden();
        node.set_hidden();
        assert!(node.is_hidden());
        node.set_visible();
        assert!(!node.is_hidden());
    }

    #[test]
    fn set_action_should_replace_previous_binding() {
        let mut button = Node::new("button");
        button.set_action(UiAction::SelectTab(BasketTab::Active));
        button.set_action(UiAction::SelectTab(BasketTab::Closed));

        assert_eq!(
            button.action(),
            Some(&UiAction::SelectTab(BasketTab::Closed))
        );
    }

    #[test]
    fn find_should_search_depth_first() {
        let node = sample();
        assert_eq!(node.find("item").map(Node::text), Some("one"));
        assert_eq!(node.find_all("item").len(), 2);
        assert!(node.find("missing").is_none());
    }

    #[test]
    fn update_should_mutate_matching_node() {
        let mut node = sample();
        assert!(node.update("card__title", |title| title.set_text("Vase")));
        assert!(!node.update("missing", |_| {}));
        assert_eq!(node.find("card__title").unwrap().text(), "Vase");
    }

    #[test]
    fn text_content_should_skip_hidden_subtrees() {
        let mut node = sample();
        node.update("card__list", Node::set_hidden);
        assert_eq!(node.text_content(), "Lot");
    }
}
