use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use checkout_flow::{
    CheckoutAppearance, CheckoutFlow, CheckoutInputs, CheckoutNotifier, CheckoutStep,
    CreateOrderResponse, ObservedOrder, OrderCreationError, OrderGateway, OrderPanel, OrderState,
    PaymentRequest,
};

/// Gateway answering with canned bodies, counting calls
struct StubGateway {
    calls: Cell<usize>,
    status_ok: bool,
    body: &'static str,
}

impl StubGateway {
    fn ok(body: &'static str) -> Self {
        Self {
            calls: Cell::new(0),
            status_ok: true,
            body,
        }
    }

    fn failing(body: &'static str) -> Self {
        Self {
            status_ok: false,
            ..Self::ok(body)
        }
    }
}

#[async_trait(?Send)]
impl OrderGateway for StubGateway {
    async fn create_order(
        &self,
        _request: &PaymentRequest,
    ) -> checkout_flow::Result<CreateOrderResponse> {
        self.calls.set(self.calls.get() + 1);
        if self.status_ok {
            CreateOrderResponse::from_slice(self.body.as_bytes())
        } else {
            Err(OrderCreationError::from_gateway_body(self.body.as_bytes()))
        }
    }
}

#[derive(Default)]
struct RecordingNotifier {
    events: RefCell<Vec<&'static str>>,
}

impl CheckoutNotifier for RecordingNotifier {
    fn on_processing_payment(&self) {
        self.events.borrow_mut().push("processing");
    }

    fn on_payment_completed(&self) {
        self.events.borrow_mut().push("completed");
    }
}

fn inputs(amount: &str) -> CheckoutInputs {
    CheckoutInputs {
        amount: amount.into(),
        is_amount_valid: true,
        receipt_email: "buyer@example.com".into(),
        wallet_address: "9xQeWvG8".into(),
    }
}

fn phase_update(phase: &str) -> ObservedOrder {
    ObservedOrder::from_json(&format!(r#"{{"orderId":"o1","phase":"{phase}"}}"#)).unwrap()
}

#[tokio::test]
async fn repeated_identical_inputs_create_one_order() {
    let mut flow = CheckoutFlow::new(
        StubGateway::ok(r#"{"order":{"orderId":"o1"},"clientSecret":"cs1"}"#),
        RecordingNotifier::default(),
    );

    for _ in 0..5 {
        flow.set_inputs(inputs("25")).await;
    }

    assert_eq!(flow.gateway().calls.get(), 1);
    assert!(matches!(flow.controller().state(), OrderState::Created(_)));
}

#[tokio::test]
async fn successful_order_renders_widget_without_spinner() {
    let mut flow = CheckoutFlow::new(
        StubGateway::ok(r#"{"order":{"orderId":"o1"},"clientSecret":"cs1"}"#),
        RecordingNotifier::default(),
    );
    flow.set_inputs(inputs("25")).await;

    let view = flow
        .controller()
        .view(CheckoutStep::Options, None, &CheckoutAppearance::default());

    match view.panel {
        Some(OrderPanel::Widget(props)) => {
            assert_eq!(props.order_id, "o1");
            assert_eq!(props.client_secret, "cs1");
        }
        other => panic!("expected widget, got {other:?}"),
    }
}

#[tokio::test]
async fn gateway_failure_shows_message_and_does_not_retry() {
    let mut flow = CheckoutFlow::new(
        StubGateway::failing(r#"{"error":"insufficient_funds","details":{}}"#),
        RecordingNotifier::default(),
    );

    flow.set_inputs(inputs("25")).await;
    flow.set_inputs(inputs("25")).await;
    assert_eq!(flow.gateway().calls.get(), 1);

    let view = flow
        .controller()
        .view(CheckoutStep::Options, None, &CheckoutAppearance::default());
    assert_eq!(view.panel, Some(OrderPanel::Error("insufficient_funds".into())));

    flow.set_inputs(inputs("30")).await;
    assert_eq!(flow.gateway().calls.get(), 2);
}

#[tokio::test]
async fn malformed_success_body_becomes_error() {
    let mut flow = CheckoutFlow::new(
        StubGateway::ok(r#"{"unexpected":true}"#),
        RecordingNotifier::default(),
    );

    let state = flow.set_inputs(inputs("25")).await;
    assert!(matches!(state, OrderState::Failed(_)));
}

#[tokio::test]
async fn phases_drive_callbacks_once_each() {
    let mut flow = CheckoutFlow::new(
        StubGateway::ok(r#"{"order":{"orderId":"o1"},"clientSecret":"cs1"}"#),
        RecordingNotifier::default(),
    );
    flow.set_inputs(inputs("25")).await;

    flow.observe_order(None);
    for phase in ["quote", "payment", "delivery", "delivery", "completed", "completed"] {
        flow.observe_order(Some(&phase_update(phase)));
    }

    assert_eq!(*flow.notifier().events.borrow(), vec!["processing", "completed"]);
}

#[tokio::test]
async fn phase_update_with_odd_quote_still_notifies() {
    let mut flow = CheckoutFlow::new(
        StubGateway::ok(r#"{"order":{"orderId":"o1"},"clientSecret":"cs1"}"#),
        RecordingNotifier::default(),
    );
    flow.set_inputs(inputs("25")).await;

    for json in [
        r#"{"phase":"delivery","lineItems":null}"#,
        r#"{"phase":"completed","lineItems":[{"quote":{"totalPrice":{"amount":"25.75"}}}]}"#,
    ] {
        flow.observe_order(Some(&ObservedOrder::from_json(json).unwrap()));
    }

    assert_eq!(*flow.notifier().events.borrow(), vec!["processing", "completed"]);
}
