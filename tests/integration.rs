use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use settlement_engine::api::rest::router;
use settlement_engine::state::AppState;
use tokio::sync::mpsc;
use tower::ServiceExt;

use settlement_engine::models::dispute::DriverNotification;

fn setup() -> (axum::Router, mpsc::Receiver<DriverNotification>) {
    let (state, rx) = AppState::new(1024, 1024);
    (router(Arc::new(state)), rx)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn create_company(app: &axum::Router, trust_level: &str) -> String {
    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/companies",
            json!({ "name": "Atlas Van Lines", "trust_level": trust_level }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    body["id"].as_str().unwrap().to_string()
}

async fn create_load(app: &axum::Router, company_id: &str, balance: f64) -> String {
    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/loads",
            json!({
                "company_id": company_id,
                "actual_cuft_loaded": 1000,
                "rate_per_cuft": 2.50,
                "balance_due_on_delivery": balance
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_returns_ok() {
    let (app, _rx) = setup();
    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["companies"], 0);
    assert_eq!(body["loads"], 0);
    assert_eq!(body["disputes"], 0);
}

#[tokio::test]
async fn metrics_returns_prometheus_format() {
    let (app, _rx) = setup();
    let response = app.oneshot(get_request("/metrics")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.contains("text/plain"));

    let body = body_string(response).await;
    assert!(body.contains("notifications_in_queue"));
}

#[tokio::test]
async fn create_company_empty_name_returns_400() {
    let (app, _rx) = setup();
    let response = app
        .oneshot(json_request(
            "POST",
            "/companies",
            json!({ "name": "  ", "trust_level": "trusted" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_load_requires_a_known_company() {
    let (app, _rx) = setup();
    let response = app
        .oneshot(json_request(
            "POST",
            "/loads",
            json!({
                "company_id": "00000000-0000-0000-0000-000000000000",
                "actual_cuft_loaded": 1000,
                "rate_per_cuft": 2.50,
                "balance_due_on_delivery": 1800.00
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_load_requires_a_cuft_rate() {
    let (app, _rx) = setup();
    let company_id = create_company(&app, "trusted").await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/loads",
            json!({
                "company_id": company_id,
                "actual_cuft_loaded": 1000,
                "balance_due_on_delivery": 1800.00
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn trusted_partner_with_shortfall_may_unload() {
    let (app, _rx) = setup();
    let company_id = create_company(&app, "trusted").await;
    let load_id = create_load(&app, &company_id, 1800.00).await;

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/loads/{load_id}/pre-delivery-check"),
            json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let check = body_json(response).await;
    assert_eq!(check["carrier_rate"], 2500.0);
    assert_eq!(check["shortfall"], 700.0);
    assert_eq!(check["requires_cod"], false);
    assert_eq!(check["cod_amount_required"], 0.0);
    assert_eq!(check["alert_level"], "success");
}

#[tokio::test]
async fn untrusted_partner_with_shortfall_is_blocked() {
    let (app, _rx) = setup();
    let company_id = create_company(&app, "cod_required").await;
    let load_id = create_load(&app, &company_id, 1800.00).await;

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/loads/{load_id}/pre-delivery-check"),
            json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let check = body_json(response).await;
    assert_eq!(check["requires_cod"], true);
    assert_eq!(check["cod_amount_required"], 700.0);
    assert_eq!(check["alert_level"], "danger");
    assert!(check["action_required"]
        .as_str()
        .unwrap()
        .starts_with("Do not unload"));
}

#[tokio::test]
async fn cod_received_override_unblocks_delivery() {
    let (app, _rx) = setup();
    let company_id = create_company(&app, "cod_required").await;
    let load_id = create_load(&app, &company_id, 1800.00).await;

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/loads/{load_id}/pre-delivery-check"),
            json!({ "cod_received": true }),
        ))
        .await
        .unwrap();

    let check = body_json(response).await;
    assert_eq!(check["requires_cod"], false);
    assert_eq!(check["alert_level"], "success");
}

#[tokio::test]
async fn percent_of_revenue_gross_pay() {
    let (app, _rx) = setup();
    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/contracts",
            json!({
                "driver_id": "8f0c9a9e-3a7b-4a57-9f37-0d6f4f5b2a10",
                "pay_mode": "percent_of_revenue",
                "percent_of_revenue": 65
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let contract = body_json(res).await;
    let contract_id = contract["id"].as_str().unwrap();

    let res = app
        .oneshot(json_request(
            "POST",
            "/pay/gross",
            json!({
                "contract_id": contract_id,
                "metrics": {
                    "actual_miles": 0,
                    "total_cuft": 0,
                    "total_revenue": 10000.00,
                    "days_worked": 0
                }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let gross = body_json(res).await;
    assert_eq!(gross["gross_pay"], 6500.0);
    assert_eq!(gross["breakdown"][0]["component"], "revenue_share");
}

#[tokio::test]
async fn flat_daily_rate_gross_pay() {
    let (app, _rx) = setup();
    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/contracts",
            json!({
                "driver_id": "8f0c9a9e-3a7b-4a57-9f37-0d6f4f5b2a10",
                "pay_mode": "flat_daily_rate",
                "flat_daily_rate": 250.00
            }),
        ))
        .await
        .unwrap();
    let contract = body_json(res).await;
    let contract_id = contract["id"].as_str().unwrap();

    let res = app
        .oneshot(json_request(
            "POST",
            "/pay/gross",
            json!({
                "contract_id": contract_id,
                "metrics": {
                    "actual_miles": 0,
                    "total_cuft": 0,
                    "total_revenue": 0,
                    "days_worked": 5
                }
            }),
        ))
        .await
        .unwrap();

    let gross = body_json(res).await;
    assert_eq!(gross["gross_pay"], 1250.0);
}

#[tokio::test]
async fn negative_contract_rate_returns_422() {
    let (app, _rx) = setup();
    let res = app
        .oneshot(json_request(
            "POST",
            "/contracts",
            json!({
                "driver_id": "8f0c9a9e-3a7b-4a57-9f37-0d6f4f5b2a10",
                "pay_mode": "per_mile",
                "rate_per_mile": -0.50
            }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn final_settlement_persists_once() {
    let (app, _rx) = setup();
    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/contracts",
            json!({
                "driver_id": "8f0c9a9e-3a7b-4a57-9f37-0d6f4f5b2a10",
                "pay_mode": "percent_of_revenue",
                "percent_of_revenue": 65
            }),
        ))
        .await
        .unwrap();
    let contract = body_json(res).await;
    let contract_id = contract["id"].as_str().unwrap().to_string();

    let trip_id = "33333333-3333-3333-3333-333333333333";
    let settlement_body = json!({
        "trip_id": trip_id,
        "contract_id": contract_id,
        "metrics": {
            "actual_miles": 0,
            "total_cuft": 0,
            "total_revenue": 10000.00,
            "days_worked": 0
        },
        "expenses": [{
            "id": "11111111-1111-1111-1111-111111111111",
            "amount": 120.50,
            "expense_type": "fuel",
            "paid_by": "driver_cash",
            "incurred_at": "2025-06-01T12:00:00Z",
            "receipt_key": "receipts/fuel-0601.jpg"
        }],
        "collections": [{
            "load_id": "22222222-2222-2222-2222-222222222222",
            "amount": 300.00,
            "method": "cash",
            "collected_at": "2025-06-02T16:30:00Z"
        }],
        "mode": "final"
    });

    let res = app
        .clone()
        .oneshot(json_request("POST", "/settlements", settlement_body.clone()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let settlement = body_json(res).await;
    assert_eq!(settlement["gross_pay"], 6500.0);
    assert_eq!(settlement["reimbursements"], 120.5);
    assert_eq!(settlement["collections"], 300.0);
    assert_eq!(settlement["net_pay"], 6320.5);

    let res = app
        .clone()
        .oneshot(get_request(&format!("/settlements/{trip_id}")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let stored = body_json(res).await;
    assert_eq!(stored["net_pay"], 6320.5);

    // A trip settles exactly once.
    let res = app
        .oneshot(json_request("POST", "/settlements", settlement_body))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn preview_settlement_matches_final_and_is_not_stored() {
    let (app, _rx) = setup();
    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/contracts",
            json!({
                "driver_id": "8f0c9a9e-3a7b-4a57-9f37-0d6f4f5b2a10",
                "pay_mode": "per_mile",
                "rate_per_mile": 0.62
            }),
        ))
        .await
        .unwrap();
    let contract = body_json(res).await;
    let contract_id = contract["id"].as_str().unwrap().to_string();

    let trip_id = "44444444-4444-4444-4444-444444444444";
    let request = |mode: &str| {
        json!({
            "trip_id": trip_id,
            "contract_id": contract_id,
            "metrics": {
                "actual_miles": 1200,
                "total_cuft": 0,
                "total_revenue": 0,
                "days_worked": 0
            },
            "mode": mode
        })
    };

    let res = app
        .clone()
        .oneshot(json_request("POST", "/settlements", request("preview")))
        .await
        .unwrap();
    let preview = body_json(res).await;

    // Previews are estimates only; nothing was persisted.
    let res = app
        .clone()
        .oneshot(get_request(&format!("/settlements/{trip_id}")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app
        .oneshot(json_request("POST", "/settlements", request("final")))
        .await
        .unwrap();
    let fin = body_json(res).await;

    assert_eq!(preview["gross_pay"], fin["gross_pay"]);
    assert_eq!(preview["net_pay"], fin["net_pay"]);
}

#[tokio::test]
async fn dispute_correction_flows_into_the_next_check() {
    let (app, mut rx) = setup();
    let company_id = create_company(&app, "trusted").await;
    let load_id = create_load(&app, &company_id, 500.00).await;

    // Cache a check against the original balance.
    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/loads/{load_id}/pre-delivery-check"),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/loads/{load_id}/disputes"),
            json!({
                "driver_id": "8f0c9a9e-3a7b-4a57-9f37-0d6f4f5b2a10",
                "note": "customer shows a smaller balance on the order"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let dispute = body_json(res).await;
    assert_eq!(dispute["status"], "open");
    assert_eq!(dispute["original_balance"], 500.0);
    let dispute_id = dispute["id"].as_str().unwrap().to_string();

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/disputes/{dispute_id}/resolve"),
            json!({ "resolution": "balance_updated", "new_balance": 350.00 }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let resolved = body_json(res).await;
    assert_eq!(resolved["dispute"]["status"], "balance_updated");
    assert_eq!(resolved["updated_balance"], 350.0);

    let notification = rx.try_recv().unwrap();
    assert!(notification.body.contains("350"));

    // The cached check is stale now and must be recomputed.
    let res = app
        .clone()
        .oneshot(get_request(&format!("/loads/{load_id}/pre-delivery-check")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app
        .clone()
        .oneshot(get_request(&format!("/loads/{load_id}")))
        .await
        .unwrap();
    let load = body_json(res).await;
    assert_eq!(load["balance_due_on_delivery"], 350.0);

    let res = app
        .oneshot(json_request(
            "POST",
            &format!("/loads/{load_id}/pre-delivery-check"),
            json!({}),
        ))
        .await
        .unwrap();
    let check = body_json(res).await;
    assert_eq!(check["customer_balance"], 350.0);
    assert_eq!(check["shortfall"], 2150.0);
}

#[tokio::test]
async fn resolving_twice_returns_conflict() {
    let (app, mut rx) = setup();
    let company_id = create_company(&app, "trusted").await;
    let load_id = create_load(&app, &company_id, 500.00).await;

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/loads/{load_id}/disputes"),
            json!({ "driver_id": "8f0c9a9e-3a7b-4a57-9f37-0d6f4f5b2a10" }),
        ))
        .await
        .unwrap();
    let dispute = body_json(res).await;
    let dispute_id = dispute["id"].as_str().unwrap().to_string();

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/disputes/{dispute_id}/resolve"),
            json!({ "resolution": "confirmed_zero" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let _ = rx.try_recv().unwrap();

    let res = app
        .oneshot(json_request(
            "POST",
            &format!("/disputes/{dispute_id}/resolve"),
            json!({ "resolution": "cancelled" }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CONFLICT);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn invalid_new_balance_leaves_dispute_open() {
    let (app, _rx) = setup();
    let company_id = create_company(&app, "trusted").await;
    let load_id = create_load(&app, &company_id, 500.00).await;

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/loads/{load_id}/disputes"),
            json!({ "driver_id": "8f0c9a9e-3a7b-4a57-9f37-0d6f4f5b2a10" }),
        ))
        .await
        .unwrap();
    let dispute = body_json(res).await;
    let dispute_id = dispute["id"].as_str().unwrap().to_string();

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/disputes/{dispute_id}/resolve"),
            json!({ "resolution": "balance_updated", "new_balance": -10.00 }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app
        .oneshot(get_request(&format!("/disputes/{dispute_id}")))
        .await
        .unwrap();
    let dispute = body_json(res).await;
    assert_eq!(dispute["status"], "open");
}

#[tokio::test]
async fn second_open_dispute_is_rejected() {
    let (app, _rx) = setup();
    let company_id = create_company(&app, "trusted").await;
    let load_id = create_load(&app, &company_id, 500.00).await;

    let open = |driver: &str| {
        json_request(
            "POST",
            &format!("/loads/{load_id}/disputes"),
            json!({ "driver_id": driver }),
        )
    };

    let res = app
        .clone()
        .oneshot(open("8f0c9a9e-3a7b-4a57-9f37-0d6f4f5b2a10"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app
        .oneshot(open("1b8e2c3d-4f5a-6789-abcd-ef0123456789"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn trust_level_change_flips_the_next_check() {
    let (app, _rx) = setup();
    let company_id = create_company(&app, "trusted").await;
    let load_id = create_load(&app, &company_id, 1800.00).await;

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/loads/{load_id}/pre-delivery-check"),
            json!({}),
        ))
        .await
        .unwrap();
    let check = body_json(res).await;
    assert_eq!(check["requires_cod"], false);

    let res = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/companies/{company_id}/trust"),
            json!({ "trust_level": "cod_required" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app
        .oneshot(json_request(
            "POST",
            &format!("/loads/{load_id}/pre-delivery-check"),
            json!({}),
        ))
        .await
        .unwrap();
    let check = body_json(res).await;
    assert_eq!(check["requires_cod"], true);
    assert_eq!(check["cod_amount_required"], 700.0);
}
