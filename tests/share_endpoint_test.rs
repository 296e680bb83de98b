use axum::http::StatusCode;
use serde_json::{json, Value};
use tower::util::ServiceExt;
use unit_economics::api::{self, AppState};
use unit_economics::report::NumberLocale;
use unit_economics::Config;

async fn share(config: Config, form: &Value) -> (StatusCode, Value) {
    let app = api::create_router(AppState::new(config));
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/v1/share")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(form.to_string()))
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn example_form() -> Value {
    json!({
        "unitsSold": 100,
        "logistics": 25.50,
        "fulfillment": 15.00,
        "wbCommission": 15.5,
        "storageCost": 5.00,
        "advertising": 50.00,
        "purchasePrice": 200.00,
        "sellingPrice": 450.00,
        "redemptionRate": 85
    })
}

#[tokio::test]
async fn test_share_payload_shape() {
    let (status, body) = share(Config::default(), &example_form()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "unit_economics_results");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["unit"]["profitByTier"]["low"].is_number());

    let message = body["message"].as_str().unwrap();
    assert!(message.contains("• Margin: 4,75%"));
    assert!(message.contains("• Profit (2%): 10,50 руб."));
}

#[tokio::test]
async fn test_share_with_signature_and_locale() {
    let config = Config {
        number_format: NumberLocale::En.format(),
        share_signature: Some("@seller_tools".to_string()),
        ..Config::default()
    };
    let (status, body) = share(config, &example_form()).await;

    assert_eq!(status, StatusCode::OK);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("• Revenue: 38,250.00 RUB"));
    assert!(message.ends_with("@seller_tools"));
}

#[tokio::test]
async fn test_share_rejects_invalid_form() {
    let mut form = example_form();
    form["purchasePrice"] = json!(0);
    let (status, body) = share(Config::default(), &form).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"], json!(["purchasePrice"]));
}
