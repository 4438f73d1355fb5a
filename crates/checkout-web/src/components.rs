//! UI Components

use checkout_flow::{
    CheckoutAppearance, CheckoutController, CheckoutInputs, CheckoutNotifier, CheckoutStep,
    EmbeddedCheckoutProps, ObservedOrder, OrderGateway, OrderPanel, Price, PriceBreakdown,
};
use leptos::html::Div;
use leptos::prelude::*;

use crate::api::HttpOrderGateway;
use crate::sdk::{self, OrderListener};

/// Lifecycle callbacks passed in by the page
struct CallbackNotifier {
    on_processing_payment: Callback<()>,
    on_payment_completed: Callback<()>,
}

impl CheckoutNotifier for CallbackNotifier {
    fn on_processing_payment(&self) {
        self.on_processing_payment.run(());
    }

    fn on_payment_completed(&self) {
        self.on_payment_completed.run(());
    }
}

/// Deposit checkout: creates the order, shows the price breakdown and hosts
/// the embedded payment form.
#[component]
pub fn Checkout(
    #[prop(into)] amount: Signal<String>,
    #[prop(into)] wallet_address: Signal<String>,
    #[prop(into)] receipt_email: Signal<String>,
    #[prop(into)] is_amount_valid: Signal<bool>,
    #[prop(into)] step: Signal<CheckoutStep>,
    #[prop(into)] on_processing_payment: Callback<()>,
    #[prop(into)] on_payment_completed: Callback<()>,
    #[prop(optional)] appearance: CheckoutAppearance,
) -> impl IntoView {
    let controller = RwSignal::new(CheckoutController::new());
    let observed = RwSignal::new(None::<ObservedOrder>);
    let gateway = HttpOrderGateway::from_window();
    let notifier = CallbackNotifier {
        on_processing_payment,
        on_payment_completed,
    };

    // Forward input changes; the controller decides whether to create an order
    Effect::new(move |_| {
        let inputs = CheckoutInputs {
            amount: amount.get(),
            is_amount_valid: is_amount_valid.get(),
            receipt_email: receipt_email.get(),
            wallet_address: wallet_address.get(),
        };

        let mut request = None;
        controller.update(|c| request = c.update_inputs(inputs));

        if let Some(request) = request {
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                // inputs typed while a creation was in flight are sent next
                let mut next = Some(request);
                while let Some(request) = next.take() {
                    let result = gateway.create_order(&request).await;
                    if let Err(e) = &result {
                        leptos::logging::error!("Error creating order: {}", e);
                    }
                    controller.update(|c| {
                        c.complete_creation(result);
                        next = c.retry_pending();
                    });
                }
            });
        }
    });

    // Forward SDK order updates; phase changes become callbacks
    Effect::new(move |_| {
        let order = observed.get();
        let mut notification = None;
        controller.update(|c| notification = c.observe_order(order.as_ref()));

        if let Some(notification) = notification {
            notification.dispatch(&notifier);
        }
    });

    let view_model = Memo::new(move |_| {
        let step = step.get();
        observed.with(|order| controller.with(|c| c.view(step, order.as_ref(), &appearance)))
    });
    let breakdown = Memo::new(move |_| view_model.with(|v| v.breakdown.clone()));
    let panel = Memo::new(move |_| view_model.with(|v| v.panel.clone()));

    view! {
        <div class=move || {
            if view_model.with(|v| v.centered) { "checkout checkout-centered" } else { "checkout" }
        }>
            {move || breakdown.get().map(|breakdown| view! { <AmountBreakdown breakdown=breakdown /> })}
            {move || {
                panel
                    .get()
                    .map(|panel| match panel {
                        OrderPanel::Loading => view! { <LoadingIndicator /> }.into_any(),
                        OrderPanel::Error(message) => view! { <ErrorBox message=message /> }.into_any(),
                        OrderPanel::Widget(config) => {
                            view! {
                                <CrossmintCheckout config=config on_order_update=observed.write_only() />
                            }
                                .into_any()
                        }
                    })
            }}
        </div>
    }
}

fn format_price(price: &Price) -> String {
    format!("{:.2} {}", price.amount, price.currency.to_uppercase())
        .trim_end()
        .to_string()
}

/// Input amount against the processor's quote
#[component]
pub fn AmountBreakdown(breakdown: PriceBreakdown) -> impl IntoView {
    let invalid = !breakdown.is_amount_valid;
    let quoted = breakdown.is_quoted();
    let amount = format!("${:.2}", breakdown.input_amount);
    let rate = breakdown.unit_price.as_ref().map(format_price);
    let status = breakdown.quote_status.clone();
    let fees = breakdown.fees.map(|fees| format!("${fees:.2}"));
    let total = breakdown.total_price.as_ref().map(format_price);

    view! {
        <div class="breakdown" class:breakdown-invalid=invalid class:breakdown-quoted=quoted>
            <div class="row">
                <span>"You pay"</span>
                <span>{amount}</span>
            </div>
            {rate.map(|rate| view! {
                <div class="row muted">
                    <span>"Rate"</span>
                    <span>{rate}" per USDC"</span>
                </div>
            })}
            {fees.map(|fees| view! {
                <div class="row muted">
                    <span>"Fees"</span>
                    <span>{fees}</span>
                </div>
            })}
            {total.map(|total| view! {
                <div class="row total">
                    <span>"Total"</span>
                    <span>{total}</span>
                </div>
            })}
            {status.map(|status| view! { <p class="quote-status">"Quote: "{status}</p> })}
        </div>
    }
}

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <p>"Creating order..."</p>
        </div>
    }
}

#[component]
pub fn ErrorBox(message: String) -> impl IntoView {
    view! {
        <div class="error-box">
            <p>{message}</p>
        </div>
    }
}

/// Container the SDK renders the payment form into
#[component]
pub fn CrossmintCheckout(
    config: EmbeddedCheckoutProps,
    on_order_update: WriteSignal<Option<ObservedOrder>>,
) -> impl IntoView {
    let container_id = format!("crossmint-checkout-{}", config.order_id);
    let node_ref = NodeRef::<Div>::new();
    // dropped with this component's owner
    let listener = StoredValue::new_local(None::<OrderListener>);

    let mount_id = container_id.clone();
    Effect::new(move |mounted: Option<bool>| {
        if mounted == Some(true) || node_ref.get().is_none() {
            return mounted.unwrap_or(false);
        }

        let on_update = move |json: String| match ObservedOrder::from_json(&json) {
            Ok(order) => on_order_update.set(Some(order)),
            Err(e) => leptos::logging::warn!("Ignoring order update: {}", e),
        };

        match sdk::mount(&mount_id, &config, on_update) {
            Ok(mounted) => listener.set_value(Some(mounted)),
            Err(e) => leptos::logging::error!("Failed to mount checkout: {:?}", e),
        }
        true
    });

    let unmount_id = container_id.clone();
    on_cleanup(move || sdk::unmount(&unmount_id));

    view! { <div id=container_id class="checkout-widget" node_ref=node_ref></div> }
}
