//! Checkout Flow
//!
//! Async driver wiring the controller to an order gateway and a notifier.

use async_trait::async_trait;

use crate::controller::{CheckoutController, OrderState, PhaseNotification};
use crate::error::Result;
use crate::order::{CheckoutInputs, CreateOrderResponse, ObservedOrder, PaymentRequest};

/// Something that can create orders (the `/api/create-order` endpoint in practice)
#[async_trait(?Send)]
pub trait OrderGateway {
    async fn create_order(&self, request: &PaymentRequest) -> Result<CreateOrderResponse>;
}

/// Receives the lifecycle notifications
pub trait CheckoutNotifier {
    fn on_processing_payment(&self);
    fn on_payment_completed(&self);
}

impl PhaseNotification {
    /// Deliver to a notifier
    pub fn dispatch<N: CheckoutNotifier + ?Sized>(self, notifier: &N) {
        match self {
            PhaseNotification::ProcessingPayment => notifier.on_processing_payment(),
            PhaseNotification::PaymentCompleted => notifier.on_payment_completed(),
        }
    }
}

/// Controller + gateway + notifier
pub struct CheckoutFlow<G, N> {
    controller: CheckoutController,
    gateway: G,
    notifier: N,
}

impl<G: OrderGateway, N: CheckoutNotifier> CheckoutFlow<G, N> {
    pub fn new(gateway: G, notifier: N) -> Self {
        Self {
            controller: CheckoutController::new(),
            gateway,
            notifier,
        }
    }

    pub fn controller(&self) -> &CheckoutController {
        &self.controller
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Apply new inputs, creating the order if this update calls for it
    pub async fn set_inputs(&mut self, inputs: CheckoutInputs) -> &OrderState {
        let mut next = self.controller.update_inputs(inputs);
        while let Some(request) = next {
            let result = self.gateway.create_order(&request).await;
            self.controller.complete_creation(result);
            next = self.controller.retry_pending();
        }

        self.controller.state()
    }

    /// Apply an SDK order update, notifying on phase changes
    pub fn observe_order(&mut self, order: Option<&ObservedOrder>) {
        if let Some(notification) = self.controller.observe_order(order) {
            notification.dispatch(&self.notifier);
        }
    }
}
