//! # Page Layout
//!
//! Flattens a page node tree into terminal lines. Hidden subtrees are
//! skipped, every node with an action becomes a focus stop, and the focus
//! order is the document order.

use super::{Node, UiAction};

const INDENT_STEP: u16 = 2;

/// How a line should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Plain,
    Heading,
    Muted,
    Error,
    Control,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLine {
    pub text: String,
    pub indent: u16,
    pub style: LineStyle,
    /// Focus stop drawn on this line
    pub focus: Option<usize>,
}

/// A node the operator can move to and activate
#[derive(Debug, Clone, PartialEq)]
pub struct Focusable {
    pub line: usize,
    pub action: UiAction,
    pub disabled: bool,
    /// Current text of an input node
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub lines: Vec<ScreenLine>,
    pub focusables: Vec<Focusable>,
}

impl PageLayout {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Plain text of the whole page, one line per row
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("{}{}", " ".repeat(line.indent as usize), line.text))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Index of the first focus stop carrying `action`
    pub fn focus_of(&self, action: &UiAction) -> Option<usize> {
        self.focusables
            .iter()
            .position(|focusable| &focusable.action == action)
    }
}

pub fn layout(root: &Node) -> PageLayout {
    let mut page = PageLayout::default();
    place(root, 0, &mut page);
    page
}

fn place(node: &Node, indent: u16, page: &mut PageLayout) {
    if node.is_hidden() {
        return;
    }

    if let Some(action) = node.action() {
        place_control(node, action, indent, page);
        return;
    }

    match node.tag() {
        "img" => {
            if let Some(label) = node.attr("alt").or_else(|| node.attr("src")) {
                push_line(page, format!("[{label}]"), indent, LineStyle::Muted);
            }
        }
        "h1" | "h2" => {
            if !node.text().is_empty() {
                push_line(page, node.text().to_uppercase(), indent, LineStyle::Heading);
            }
        }
        "li" => {
            if !node.text().is_empty() {
                push_line(page, format!("• {}", node.text()), indent, LineStyle::Plain);
            }
        }
        _ => {
            if !node.text().is_empty() {
                push_line(page, node.text().to_string(), indent, text_style(node));
            }
        }
    }

    let child_indent = match node.tag() {
        "article" | "ul" | "form" | "nav" => indent + INDENT_STEP,
        _ => indent,
    };
    for child in node.children() {
        place(child, child_indent, page);
    }

    if node.tag() == "article" {
        push_line(page, String::new(), indent, LineStyle::Plain);
    }
}

fn place_control(node: &Node, action: &UiAction, indent: u16, page: &mut PageLayout) {
    let text = if node.attr("type") == Some("checkbox") {
        let mark = if node.is_checked() { 'x' } else { ' ' };
        format!("[{mark}] {}", node.text())
    } else if action.is_text_input() {
        let label = node.attr("placeholder").unwrap_or_default();
        format!("{label}: {}_", node.value())
    } else {
        let mut label = node.text().to_string();
        // Nested badge, e.g. the basket counter
        for child in node.children().iter().filter(|child| !child.is_hidden()) {
            if !child.text().is_empty() {
                label = format!("{label} ({})", child.text());
            }
        }
        format!("[ {label} ]")
    };

    let style = if node.is_disabled() {
        LineStyle::Muted
    } else {
        LineStyle::Control
    };
    let focus = page.focusables.len();
    page.focusables.push(Focusable {
        line: page.lines.len(),
        action: action.clone(),
        disabled: node.is_disabled(),
        value: node.value().to_string(),
    });
    page.lines.push(ScreenLine {
        text,
        indent,
        style,
        focus: Some(focus),
    });
}

fn text_style(node: &Node) -> LineStyle {
    if node.has_class("form__errors") || node.has_class("state_error") {
        LineStyle::Error
    } else if node.has_class("card__status") || node.has_class("loading") {
        LineStyle::Muted
    } else {
        LineStyle::Plain
    }
}

fn push_line(page: &mut PageLayout, text: String, indent: u16, style: LineStyle) {
    page.lines.push(ScreenLine {
        text,
        indent,
        style,
        focus: None,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::events::{BasketTab, StoreEvent};
    use crate::storefront::views::templates;

    #[test]
    fn hidden_subtrees_should_not_be_laid_out() {
        let root = Node::new("div").with_children(vec![
            Node::new("p").with_text("видно"),
            Node::new("div")
                .hidden()
                .with_child(Node::new("button").with_text("скрыто").with_action(UiAction::Checkout)),
        ]);

        let page = layout(&root);

        assert_eq!(page.text(), "видно");
        assert!(page.focusables.is_empty());
    }

    #[test]
    fn actions_should_become_focus_stops_in_order() {
        let page = layout(&templates::basket_tabs());

        assert_eq!(page.focusables.len(), 2);
        assert_eq!(
            page.focusables[1].action,
            UiAction::SelectTab(BasketTab::Closed)
        );
        assert_eq!(page.lines[page.focusables[1].line].text, "[ Закрытые ]");
        assert_eq!(page.focus_of(&UiAction::SelectTab(BasketTab::Active)), Some(0));
    }

    #[test]
    fn checkbox_should_show_checked_state() {
        let mut row = templates::sold_row();
        row.update("bid__selector-input", |checkbox| {
            checkbox.set_action(UiAction::ToggleSelection { id: "c1".to_string() });
            checkbox.set_checked(true);
        });

        let page = layout(&row);

        assert_eq!(page.lines[0].text, "[x] Выбрать");
        assert_eq!(page.lines[0].indent, INDENT_STEP);
    }

    #[test]
    fn inputs_should_show_value_and_disabled_buttons_stay_listed() {
        let page = layout(&templates::order_form());
        let email = &page.focusables[0];

        assert_eq!(page.lines[email.line].text, "Email: _");
        let submit = page.focusables.last().unwrap();
        assert!(submit.disabled);
        assert_eq!(page.lines[submit.line].style, LineStyle::Muted);
    }

    #[test]
    fn button_badge_should_be_inlined() {
        let button = Node::new("button")
            .with_text("Корзина")
            .with_action(UiAction::Emit(StoreEvent::BasketOpen))
            .with_child(Node::new("span").with_text("3"));

        let page = layout(&button);

        assert_eq!(page.lines.len(), 1);
        assert_eq!(page.lines[0].text, "[ Корзина (3) ]");
    }
}
