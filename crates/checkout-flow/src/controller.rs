//! Checkout Controller
//!
//! Finite-state machine behind the checkout widget.
//!
//! ```text
//!             inputs complete               Ok(order)
//!  ┌─────────┐ ─────────────▶ ┌──────────┐ ───────────▶ ┌─────────┐
//!  │ NoOrder │                │ Creating │              │ Created │
//!  └─────────┘   ┌──────────▶ └──────────┘ ──┐          └─────────┘
//!                │ inputs changed            │ Err(msg)
//!           ┌────────┐                       │
//!           │ Failed │ ◀─────────────────────┘
//!           └────────┘
//! ```
//!
//! Order phases reported by the SDK are tracked separately and turned into
//! one-shot notifications.

use crate::breakdown::PriceBreakdown;
use crate::error::OrderCreationError;
use crate::order::{CheckoutInputs, CreateOrderResponse, ObservedOrder, Order, OrderPhase, PaymentRequest};
use crate::widget::{CheckoutAppearance, EmbeddedCheckoutProps};

/// Step of the surrounding page, driven from outside
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckoutStep {
    #[default]
    Options,
    Processing,
    Completed,
}

/// Local order-creation state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OrderState {
    #[default]
    NoOrder,
    Creating,
    Created(Order),
    Failed(String),
}

/// Notification derived from an order phase change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseNotification {
    /// Payment accepted, tokens on their way
    ProcessingPayment,
    /// Tokens delivered
    PaymentCompleted,
}

/// What sits under the breakdown
#[derive(Clone, Debug, PartialEq)]
pub enum OrderPanel {
    Loading,
    Error(String),
    Widget(EmbeddedCheckoutProps),
}

/// Render model for one frame of the checkout
#[derive(Clone, Debug, PartialEq)]
pub struct CheckoutView {
    /// Shown only while choosing options
    pub breakdown: Option<PriceBreakdown>,

    /// Shown once the amount is present and valid
    pub panel: Option<OrderPanel>,

    /// Content is centred outside the options step
    pub centered: bool,
}

/// Checkout state machine
#[derive(Clone, Debug, Default)]
pub struct CheckoutController {
    inputs: CheckoutInputs,
    state: OrderState,
    requested: Option<PaymentRequest>,
    last_phase: Option<OrderPhase>,
    processing_notified: bool,
    completed_notified: bool,
}

impl CheckoutController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(&self) -> &CheckoutInputs {
        &self.inputs
    }

    pub fn state(&self) -> &OrderState {
        &self.state
    }

    pub fn is_creating(&self) -> bool {
        matches!(self.state, OrderState::Creating)
    }

    pub fn order(&self) -> Option<&Order> {
        match &self.state {
            OrderState::Created(order) => Some(order),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            OrderState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The order exists but was created for different inputs than the current ones
    pub fn is_stale(&self) -> bool {
        self.order().is_some() && self.requested != self.inputs.payment_request()
    }

    /// Record new inputs.
    ///
    /// Returns the request to dispatch when this update starts an order
    /// creation. Nothing is returned while a creation is in flight or once
    /// an order exists. After a failure, a retry needs inputs that differ
    /// from the ones that failed.
    pub fn update_inputs(&mut self, inputs: CheckoutInputs) -> Option<PaymentRequest> {
        let changed = inputs != self.inputs;
        self.inputs = inputs;

        match &self.state {
            OrderState::Creating => None,
            OrderState::Created(order) => {
                if changed && self.is_stale() {
                    tracing::warn!(
                        order_id = %order.order_id,
                        "Inputs changed after the order was created; keeping existing order"
                    );
                }
                None
            }
            OrderState::NoOrder | OrderState::Failed(_) => self.retry_pending(),
        }
    }

    /// Start a creation for the current inputs if they have not been tried yet.
    ///
    /// Call after `complete_creation`: inputs recorded while the previous
    /// creation was in flight are picked up here.
    pub fn retry_pending(&mut self) -> Option<PaymentRequest> {
        if !matches!(self.state, OrderState::NoOrder | OrderState::Failed(_)) {
            return None;
        }

        let request = self.inputs.payment_request()?;
        if matches!(self.state, OrderState::Failed(_)) && self.requested.as_ref() == Some(&request) {
            return None;
        }

        Some(self.begin_creation(request))
    }

    fn begin_creation(&mut self, request: PaymentRequest) -> PaymentRequest {
        tracing::debug!(amount = %request.amount, "Creating order");
        self.state = OrderState::Creating;
        self.requested = Some(request.clone());
        request
    }

    /// Settle the in-flight creation. Ignored unless a creation is in flight.
    pub fn complete_creation(
        &mut self,
        result: Result<CreateOrderResponse, OrderCreationError>,
    ) -> &OrderState {
        if !self.is_creating() {
            tracing::warn!(state = ?self.state, "Ignoring order result with no creation in flight");
            return &self.state;
        }

        self.state = match result {
            Ok(response) => {
                let order = Order::from(response);
                tracing::info!(order_id = %order.order_id, "Order created");
                OrderState::Created(order)
            }
            Err(err) => {
                tracing::error!(error = %err, "Error creating order");
                OrderState::Failed(err.message().to_string())
            }
        };

        &self.state
    }

    /// Feed the latest SDK order.
    ///
    /// Returns a notification when the phase has just moved into `delivery`
    /// or `completed`; each fires at most once.
    pub fn observe_order(&mut self, order: Option<&ObservedOrder>) -> Option<PhaseNotification> {
        let phase = order?.phase.clone()?;
        if self.last_phase.as_ref() == Some(&phase) {
            return None;
        }
        self.last_phase = Some(phase.clone());

        let notification = match phase {
            OrderPhase::Delivery if !self.processing_notified => {
                self.processing_notified = true;
                PhaseNotification::ProcessingPayment
            }
            OrderPhase::Completed if !self.completed_notified => {
                self.completed_notified = true;
                PhaseNotification::PaymentCompleted
            }
            _ => return None,
        };

        tracing::info!(?phase, ?notification, "Order phase changed");
        Some(notification)
    }

    /// Build the render model
    pub fn view(
        &self,
        step: CheckoutStep,
        observed: Option<&ObservedOrder>,
        appearance: &CheckoutAppearance,
    ) -> CheckoutView {
        let breakdown = (step == CheckoutStep::Options).then(|| {
            PriceBreakdown::compute(
                observed.and_then(ObservedOrder::first_quote),
                &self.inputs.amount,
                self.inputs.is_amount_valid,
            )
        });

        let panel = if self.inputs.has_valid_amount() {
            match &self.state {
                OrderState::NoOrder => None,
                OrderState::Creating => Some(OrderPanel::Loading),
                OrderState::Failed(message) => Some(OrderPanel::Error(message.clone())),
                OrderState::Created(order) => {
                    // the form keeps the email the order was created with
                    let receipt_email = self
                        .requested
                        .as_ref()
                        .map_or(self.inputs.receipt_email.as_str(), |r| r.receipt_email.as_str());
                    Some(OrderPanel::Widget(EmbeddedCheckoutProps::new(
                        order,
                        receipt_email,
                        appearance,
                    )))
                }
            }
        } else {
            None
        };

        CheckoutView {
            breakdown,
            panel,
            centered: step != CheckoutStep::Options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::CreatedOrder;

    fn inputs() -> CheckoutInputs {
        CheckoutInputs {
            amount: "25".into(),
            is_amount_valid: true,
            receipt_email: "buyer@example.com".into(),
            wallet_address: "9xQeWvG8".into(),
        }
    }

    fn response(order_id: &str, client_secret: &str) -> CreateOrderResponse {
        CreateOrderResponse {
            order: CreatedOrder {
                order_id: order_id.into(),
            },
            client_secret: client_secret.into(),
        }
    }

    fn phase(phase: OrderPhase) -> ObservedOrder {
        ObservedOrder {
            phase: Some(phase),
            ..Default::default()
        }
    }

    #[test]
    fn test_incomplete_inputs_do_not_create() {
        let mut controller = CheckoutController::new();
        let mut partial = inputs();
        partial.receipt_email.clear();

        assert!(controller.update_inputs(partial).is_none());
        assert_eq!(controller.state(), &OrderState::NoOrder);
    }

    #[test]
    fn test_single_flight_across_rapid_updates() {
        let mut controller = CheckoutController::new();
        let mut dispatched = 0;

        let mut typing = inputs();
        typing.amount = "2".into();
        for update in [typing, inputs(), inputs(), inputs()] {
            if controller.update_inputs(update).is_some() {
                dispatched += 1;
            }
        }
        assert!(controller.is_creating());

        controller.complete_creation(Ok(response("o1", "cs1")));
        assert!(controller.update_inputs(inputs()).is_none());
        assert_eq!(dispatched, 1);
    }

    #[test]
    fn test_creation_success_shows_widget() {
        let mut controller = CheckoutController::new();
        controller.update_inputs(inputs()).unwrap();

        let view = controller.view(CheckoutStep::Options, None, &CheckoutAppearance::default());
        assert_eq!(view.panel, Some(OrderPanel::Loading));

        controller.complete_creation(Ok(response("o1", "cs1")));
        let view = controller.view(CheckoutStep::Options, None, &CheckoutAppearance::default());

        match view.panel {
            Some(OrderPanel::Widget(props)) => {
                assert_eq!(props.order_id, "o1");
                assert_eq!(props.client_secret, "cs1");
                assert_eq!(props.payment.receipt_email, "buyer@example.com");
            }
            other => panic!("expected widget, got {other:?}"),
        }
        assert!(!controller.is_creating());
    }

    #[test]
    fn test_failure_waits_for_input_change() {
        let mut controller = CheckoutController::new();
        controller.update_inputs(inputs()).unwrap();
        controller.complete_creation(Err(OrderCreationError::new("insufficient_funds")));

        assert_eq!(controller.error(), Some("insufficient_funds"));
        assert!(!controller.is_creating());
        assert!(controller.update_inputs(inputs()).is_none());

        let mut changed = inputs();
        changed.amount = "30".into();
        let request = controller.update_inputs(changed).unwrap();
        assert_eq!(request.amount, "30");
        assert!(controller.is_creating());
    }

    #[test]
    fn test_inputs_typed_during_failed_creation_are_retried() {
        let mut controller = CheckoutController::new();

        let mut typing = inputs();
        typing.amount = "2".into();
        assert_eq!(controller.update_inputs(typing).unwrap().amount, "2");
        assert!(controller.update_inputs(inputs()).is_none());

        controller.complete_creation(Err(OrderCreationError::new("amount too small")));
        let retry = controller.retry_pending().unwrap();
        assert_eq!(retry.amount, "25");
        assert!(controller.is_creating());

        controller.complete_creation(Err(OrderCreationError::new("amount too small")));
        assert!(controller.retry_pending().is_none());
        assert!(controller.update_inputs(inputs()).is_none());
        assert_eq!(controller.error(), Some("amount too small"));
    }

    #[test]
    fn test_no_retry_after_success() {
        let mut controller = CheckoutController::new();
        controller.update_inputs(inputs()).unwrap();
        controller.complete_creation(Ok(response("o1", "cs1")));
        assert!(controller.retry_pending().is_none());
    }

    #[test]
    fn test_email_edit_after_creation_keeps_widget_config() {
        let mut controller = CheckoutController::new();
        let appearance = CheckoutAppearance::default();
        controller.update_inputs(inputs()).unwrap();
        controller.complete_creation(Ok(response("o1", "cs1")));
        let before = controller.view(CheckoutStep::Options, None, &appearance).panel;

        let mut edited = inputs();
        edited.receipt_email = "other@example.com".into();
        controller.update_inputs(edited);
        let after = controller.view(CheckoutStep::Options, None, &appearance).panel;

        assert_eq!(before, after);
    }

    #[test]
    fn test_stray_completion_is_ignored() {
        let mut controller = CheckoutController::new();
        controller.complete_creation(Ok(response("o1", "cs1")));
        assert_eq!(controller.state(), &OrderState::NoOrder);
    }

    #[test]
    fn test_changed_inputs_mark_order_stale() {
        let mut controller = CheckoutController::new();
        controller.update_inputs(inputs()).unwrap();
        controller.complete_creation(Ok(response("o1", "cs1")));
        assert!(!controller.is_stale());

        let mut changed = inputs();
        changed.wallet_address = "7Np41oeY".into();
        assert!(controller.update_inputs(changed).is_none());
        assert!(controller.is_stale());
        assert_eq!(controller.order().unwrap().order_id, "o1");
    }

    #[test]
    fn test_phase_notifications_fire_once_in_order() {
        let mut controller = CheckoutController::new();
        let mut fired = Vec::new();

        let updates = [
            None,
            Some(phase(OrderPhase::Payment)),
            Some(phase(OrderPhase::Delivery)),
            Some(phase(OrderPhase::Delivery)),
            Some(phase(OrderPhase::Delivery)),
            Some(phase(OrderPhase::Completed)),
            Some(phase(OrderPhase::Completed)),
        ];
        for update in &updates {
            fired.extend(controller.observe_order(update.as_ref()));
        }

        assert_eq!(
            fired,
            vec![PhaseNotification::ProcessingPayment, PhaseNotification::PaymentCompleted]
        );
    }

    #[test]
    fn test_view_gating() {
        let mut controller = CheckoutController::new();
        let appearance = CheckoutAppearance::default();

        let mut invalid = inputs();
        invalid.is_amount_valid = false;
        controller.update_inputs(invalid);
        let view = controller.view(CheckoutStep::Options, None, &appearance);
        assert!(view.breakdown.is_some());
        assert!(view.panel.is_none());

        let view = controller.view(CheckoutStep::Processing, None, &appearance);
        assert!(view.breakdown.is_none());
        assert!(view.centered);
    }
}
