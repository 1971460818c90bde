//! Checkout form: contact fields, validation errors and the submit button

use super::{templates, Component, Node};
use crate::storefront::events::{OrderField, SharedEventBus, StoreEvent};
use crate::storefront::models::OrderState;

/// What the form shows; derived from the session's order state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFormData {
    pub email: String,
    pub phone: String,
    pub valid: bool,
    pub errors: String,
}

impl From<&OrderState> for OrderFormData {
    fn from(state: &OrderState) -> Self {
        Self {
            email: state.email.clone(),
            phone: state.phone.clone(),
            valid: state.valid,
            errors: state.errors.clone(),
        }
    }
}

pub struct OrderFormView {
    container: Node,
    bus: SharedEventBus,
}

impl OrderFormView {
    pub fn new(bus: SharedEventBus) -> Self {
        Self {
            container: templates::order_form(),
            bus,
        }
    }

    /// Operator edited a field; the session revalidates on the event
    pub fn handle_input(&mut self, field: OrderField, value: &str) {
        self.set_field(field, value);
        self.bus.publish(StoreEvent::OrderFieldChanged {
            field,
            value: value.to_string(),
        });
    }

    pub fn submit(&self) {
        tracing::debug!("order form submitted");
        self.bus.publish(StoreEvent::OrderSubmit);
    }

    pub fn field_value(&self, field: OrderField) -> &str {
        self.field_node(field).map(Node::value).unwrap_or_default()
    }

    pub fn errors(&self) -> &str {
        self.container
            .find("form__errors")
            .map(Node::text)
            .unwrap_or_default()
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.container
            .find("form__submit")
            .is_some_and(|button| !button.is_disabled())
    }

    fn field_node(&self, field: OrderField) -> Option<&Node> {
        self.container
            .find_all("form__input")
            .into_iter()
            .find(|input| input.attr("name") == Some(field.as_str()))
    }

    fn set_field(&mut self, field: OrderField, value: &str) {
        self.container.update_all("form__input", &mut |input| {
            if input.attr("name") == Some(field.as_str()) {
                input.set_value(value);
            }
        });
    }
}

impl Component<OrderFormData> for OrderFormView {
    fn container(&self) -> &Node {
        &self.container
    }

    fn apply(&mut self, data: &OrderFormData) {
        self.set_field(OrderField::Email, &data.email);
        self.set_field(OrderField::Phone, &data.phone);

        let valid = data.valid;
        self.container
            .update("form__submit", |button| button.set_disabled(!valid));
        self.container
            .update("form__errors", |el| el.set_text(&data.errors));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::events::{SimpleEventBus, Topic};
    use std::sync::{Arc, Mutex};

    fn form() -> (OrderFormView, Arc<Mutex<Vec<StoreEvent>>>) {
        let bus = SimpleEventBus::shared();
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();
        bus.subscribe_all(Arc::new(move |_: Topic, event: &StoreEvent| {
            sink.lock().unwrap().push(event.clone());
        }));
        (OrderFormView::new(bus), received)
    }

    #[test]
    fn fresh_form_should_disable_submit() {
        let (mut view, _) = form();
        view.render(Some(&OrderFormData::from(&OrderState::new())));

        assert!(!view.is_submit_enabled());
        assert_eq!(view.errors(), "Заполните поля");
    }

    #[test]
    fn valid_state_should_enable_submit() {
        let (mut view, _) = form();
        let data = OrderFormData {
            email: "a@b.co".to_string(),
            phone: "+7 900 000 00 00".to_string(),
            valid: true,
            errors: String::new(),
        };
        view.render(Some(&data));

        assert!(view.is_submit_enabled());
        assert_eq!(view.field_value(OrderField::Email), "a@b.co");
        assert_eq!(view.field_value(OrderField::Phone), "+7 900 000 00 00");
        assert_eq!(view.errors(), "");
    }

    #[test]
    fn typing_should_emit_field_change() {
        let (mut view, received) = form();
        view.handle_input(OrderField::Phone, "8900");

        assert_eq!(view.field_value(OrderField::Phone), "8900");
        assert_eq!(
            *received.lock().unwrap(),
            vec![StoreEvent::OrderFieldChanged {
                field: OrderField::Phone,
                value: "8900".to_string()
            }]
        );
        assert_eq!(
            received.lock().unwrap()[0].topic(),
            Topic::OrderPhoneChange
        );
    }

    #[test]
    fn submit_should_emit_order_submit() {
        let (view, received) = form();
        view.submit();
        assert_eq!(*received.lock().unwrap(), vec![StoreEvent::OrderSubmit]);
    }
}
