//! # Component Contract
//!
//! A component owns a node subtree and knows how to write a data value into
//! it. Each implementation spells out its setters in `apply`, so rendering is
//! an explicit `(prior node, data) -> node` step rather than reflective
//! property assignment.

use super::node::Node;

pub trait Component<T: ?Sized> {
    /// Root node of the component
    fn container(&self) -> &Node;

    /// Write `data` into the subtree through the component's setters
    fn apply(&mut self, data: &T);

    /// Apply `data` when given and return the root. Without data this is an
    /// idempotent peek at the current node.
    fn render(&mut self, data: Option<&T>) -> Node {
        if let Some(data) = data {
            self.apply(data);
        }
        self.container().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Label {
        root: Node,
        applied: usize,
    }

    impl Component<str> for Label {
        fn container(&self) -> &Node {
            &self.root
        }

        fn apply(&mut self, data: &str) {
            self.applied += 1;
            self.root.set_text(data);
        }
    }

    #[test]
    fn render_without_data_should_not_apply() {
        let mut label = Label {
            root: Node::new("span").with_text("initial"),
            applied: 0,
        };

        let first = label.render(None);
        let second = label.render(None);

        assert_eq!(first, second);
        assert_eq!(first.text(), "initial");
        assert_eq!(label.applied, 0);
    }

    #[test]
    fn render_with_data_should_apply_setters() {
        let mut label = Label {
            root: Node::new("span"),
            applied: 0,
        };

        let node = label.render(Some("hello"));

        assert_eq!(node.text(), "hello");
        assert_eq!(label.applied, 1);
    }
}
