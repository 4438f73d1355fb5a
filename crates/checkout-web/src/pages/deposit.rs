//! Deposit Page

use checkout_flow::{CheckoutAppearance, CheckoutStep};
use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::components::Checkout;

fn is_positive_amount(amount: &str) -> bool {
    amount
        .trim()
        .parse::<Decimal>()
        .is_ok_and(|amount| amount > Decimal::ZERO)
}

#[component]
pub fn DepositPage() -> impl IntoView {
    let (amount, set_amount) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (wallet, set_wallet) = signal(String::new());
    let (step, set_step) = signal(CheckoutStep::Options);

    let is_amount_valid = Signal::derive(move || amount.with(|a| is_positive_amount(a)));
    let appearance = use_context::<CheckoutAppearance>().unwrap_or_default();

    view! {
        <div class="deposit">
            <header>
                <h1>"Deposit USDC"</h1>
                <p class="tagline">"Pay by card, receive USDC in your wallet"</p>
            </header>

            <Show when=move || step.get() == CheckoutStep::Options>
                <section class="deposit-form">
                    <div class="field">
                        <label>"Amount (USD)"</label>
                        <input
                            type="text"
                            inputmode="decimal"
                            placeholder="25.00"
                            prop:value=move || amount.get()
                            on:input=move |ev| set_amount.set(event_target_value(&ev))
                        />
                        <Show when=move || !amount.with(String::is_empty) && !is_amount_valid.get()>
                            <p class="field-error">"Enter an amount greater than zero"</p>
                        </Show>
                    </div>
                    <div class="field">
                        <label>"Receipt email"</label>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Wallet address"</label>
                        <input
                            type="text"
                            placeholder="Solana address"
                            prop:value=move || wallet.get()
                            on:input=move |ev| set_wallet.set(event_target_value(&ev))
                        />
                    </div>
                </section>
            </Show>

            <Show when=move || step.get() == CheckoutStep::Processing>
                <p class="status">"Processing your payment..."</p>
            </Show>
            <Show when=move || step.get() == CheckoutStep::Completed>
                <p class="status success">"Payment complete. USDC is on its way to your wallet."</p>
            </Show>

            <Checkout
                amount=amount
                wallet_address=wallet
                receipt_email=email
                is_amount_valid=is_amount_valid
                step=step
                on_processing_payment=move || set_step.set(CheckoutStep::Processing)
                on_payment_completed=move || set_step.set(CheckoutStep::Completed)
                appearance=appearance
            />
        </div>
    }
}
