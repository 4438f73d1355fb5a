//! Embedded checkout bridge
//!
//! The payment form is rendered by the processor's JS SDK. The page loads a
//! small shim exposing `window.DepositCheckout`:
//!
//! ```text
//! DepositCheckout.mount(containerId, configJson, onOrderUpdate)
//! DepositCheckout.unmount(containerId)
//! ```
//!
//! `onOrderUpdate` is called with the SDK order serialized as JSON.

use checkout_flow::EmbeddedCheckoutProps;
use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

const BRIDGE: &str = "DepositCheckout";

fn bridge_method(name: &str) -> Result<(JsValue, Function), JsValue> {
    let bridge = Reflect::get(&js_sys::global(), &JsValue::from_str(BRIDGE))?;
    if bridge.is_undefined() || bridge.is_null() {
        return Err(JsValue::from_str("DepositCheckout bridge is not loaded"));
    }

    let method = Reflect::get(&bridge, &JsValue::from_str(name))?.dyn_into::<Function>()?;
    Ok((bridge, method))
}

/// Order update listener handed to the bridge
pub type OrderListener = Closure<dyn FnMut(String)>;

/// Mount the payment form into the element with `container_id`.
///
/// The returned listener must outlive the mounted form; dropping it
/// invalidates the callback held by the bridge.
pub fn mount(
    container_id: &str,
    config: &EmbeddedCheckoutProps,
    on_order_update: impl FnMut(String) + 'static,
) -> Result<OrderListener, JsValue> {
    let json = config
        .to_json()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let (bridge, method) = bridge_method("mount")?;

    let listener = OrderListener::new(on_order_update);
    method.call3(
        &bridge,
        &JsValue::from_str(container_id),
        &JsValue::from_str(&json),
        listener.as_ref(),
    )?;

    Ok(listener)
}

/// Tear down the payment form
pub fn unmount(container_id: &str) {
    let result = bridge_method("unmount")
        .and_then(|(bridge, method)| method.call1(&bridge, &JsValue::from_str(container_id)));

    if let Err(e) = result {
        leptos::logging::warn!("Failed to unmount checkout {}: {:?}", container_id, e);
    }
}
