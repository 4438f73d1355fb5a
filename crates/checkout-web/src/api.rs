//! API Client

use async_trait::async_trait;
use checkout_flow::{CreateOrderResponse, OrderCreationError, OrderGateway, PaymentRequest};

/// `OrderGateway` backed by the server's `/api/create-order`
#[derive(Clone)]
pub struct HttpOrderGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpOrderGateway {
    /// Target the origin the page was served from
    pub fn from_window() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://localhost:3000".into());

        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{origin}/api/create-order"),
        }
    }
}

#[async_trait(?Send)]
impl OrderGateway for HttpOrderGateway {
    async fn create_order(&self, request: &PaymentRequest) -> checkout_flow::Result<CreateOrderResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| OrderCreationError::new(e.to_string()))?;

        let ok = response.status().is_success();
        let body = response
            .bytes()
            .await
            .map_err(|e| OrderCreationError::new(e.to_string()))?;

        if !ok {
            return Err(OrderCreationError::from_gateway_body(&body));
        }

        CreateOrderResponse::from_slice(&body)
    }
}
