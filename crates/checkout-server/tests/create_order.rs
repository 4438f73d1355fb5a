use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use checkout_gateway::{CrossmintClient, GatewayConfig};
use checkout_server::{api_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_with(config: GatewayConfig) -> Router {
    api_router(AppState::new(CrossmintClient::new(config)))
}

fn configured(server: &MockServer) -> GatewayConfig {
    GatewayConfig {
        api_key: Some("sk_staging_test".into()),
        base_url: Some(server.uri()),
        chain_id: Some("solana".into()),
        asset_mint: Some("EPjFWdd5".into()),
        ..Default::default()
    }
}

async fn post_order(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/create-order")
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn order_body() -> String {
    json!({
        "amount": "25.00",
        "receiptEmail": "buyer@example.com",
        "walletAddress": "9xQeWvG8",
    })
    .to_string()
}

#[tokio::test]
async fn missing_secret_returns_500_for_any_body() {
    for body in [order_body(), "{}".to_string(), "garbage".to_string()] {
        let (status, json) = post_order(app_with(GatewayConfig::default()), body).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            json["error"]
                .as_str()
                .unwrap()
                .contains("CROSSMINT_SERVER_SIDE_API_KEY"),
            "error should name the missing secret: {json}"
        );
    }
}

#[tokio::test]
async fn successful_order_is_passed_through() {
    let server = MockServer::start().await;
    let upstream = json!({ "order": { "orderId": "o1" }, "clientSecret": "cs1" });

    Mock::given(method("POST"))
        .and(path("/api/2022-06-09/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let (status, json) = post_order(app_with(configured(&server)), order_body()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, upstream);
}

#[tokio::test]
async fn upstream_402_is_relayed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(402).set_body_json(json!({ "error": "insufficient_funds" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (status, json) = post_order(app_with(configured(&server)), order_body()).await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    assert_eq!(json["error"], "insufficient_funds");
    assert_eq!(json["details"], json!({ "error": "insufficient_funds" }));
}

#[tokio::test]
async fn malformed_upstream_body_returns_500() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let (status, json) = post_order(app_with(configured(&server)), order_body()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Unexpected error creating order");
    assert!(json["details"].is_string());
}

#[tokio::test]
async fn malformed_request_body_returns_500_without_upstream_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, json) = post_order(app_with(configured(&server)), "{\"amount\": ").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Unexpected error creating order");
}

#[tokio::test]
async fn health_reports_configuration() {
    let response = app_with(GatewayConfig::default())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["crossmintConfigured"], false);
    assert_eq!(json["environment"], "staging");
}
