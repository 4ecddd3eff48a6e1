use std::sync::Arc;

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::State,
    http::{header, Method, Request, StatusCode},
    Json,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::economics::router::{baseline_handler, economics_router, evaluate_handler};
use crate::economics::service::EvaluationService;
use crate::economics::snapshot::BusinessInputsSnapshot;
use crate::error::AppError;

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

fn evaluate_request(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/v1/unit-economics/evaluate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn evaluate_route_grades_the_baseline() {
    let service = Arc::new(EvaluationService::new());
    let router = economics_router(Arc::clone(&service));
    let body = serde_json::to_value(BusinessInputsSnapshot::from(&baseline()))
        .expect("snapshot serializes");

    let response = router
        .oneshot(evaluate_request(body))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json(response).await;
    assert_eq!(payload["metrics"]["currentLTV"], json!(1212.5));
    assert_eq!(payload["summary"]["headline"]["status"], json!("red"));
    assert_eq!(
        payload["summary"]["headline"]["message"],
        json!("Critical Issues - Do Not Scale")
    );
    assert_eq!(payload["suggestions"], json!([]));
    assert_eq!(payload["summary"]["allClear"]["title"], json!("Excellent Work!"));
    assert_eq!(payload["summary"]["cards"].as_array().map(Vec::len), Some(6));
    assert_eq!(service.recomputations(), 1);
}

#[tokio::test]
async fn evaluate_route_coerces_form_strings() {
    let router = economics_router(Arc::new(EvaluationService::new()));
    let body = json!({
        "currentCAC": "300",
        "day1GrossProfitPerCustomer": "250",
        "coreOfferPrice": "97",
        "grossMarginPercent": "40",
        "monthlyChurnPercent": "12",
        "refundRatePercent": "5",
        "coldTrafficConversion": "0.3",
        "hasSLO": false,
        "sloPrice": "47"
    });

    let response = router
        .oneshot(evaluate_request(body))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json(response).await;
    assert_eq!(payload["inputs"]["currentCAC"], json!(300.0));
    assert!(payload["inputs"].get("sloPrice").is_none());
    assert_eq!(payload["suggestions"][0]["priority"], json!("high"));
    assert!(payload["summary"].get("allClear").is_none());
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let router = economics_router(Arc::new(EvaluationService::new()));
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/unit-economics/evaluate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .expect("request builds");

    let response = router.oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let payload = read_json(response).await;
    let message = payload["error"].as_str().expect("error message");
    assert!(message.starts_with("input error: input snapshot is not valid JSON"));
}

#[tokio::test]
async fn baseline_route_returns_default_snapshot() {
    let router = economics_router(Arc::new(EvaluationService::new()));
    let request = Request::builder()
        .uri("/api/v1/unit-economics/baseline")
        .body(Body::empty())
        .expect("request builds");

    let response = router.oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json(response).await;
    assert_eq!(payload["currentCAC"], json!(200.0));
    assert_eq!(payload["hasSLO"], json!(false));
}

#[tokio::test]
async fn handlers_share_the_memoized_service() {
    let service = Arc::new(EvaluationService::new());
    let Json(snapshot) = baseline_handler().await;

    let body = Bytes::from(serde_json::to_vec(&snapshot).expect("snapshot serializes"));

    let Json(first) = evaluate_handler(State(Arc::clone(&service)), body.clone())
        .await
        .expect("baseline evaluates");
    let Json(second) = evaluate_handler(State(Arc::clone(&service)), body)
        .await
        .expect("baseline evaluates");

    assert_eq!(first.metrics, second.metrics);
    assert_eq!(first.inputs.into_inputs(), baseline());
    assert_eq!(service.recomputations(), 1);
}

#[tokio::test]
async fn empty_body_is_an_input_error() {
    let service = Arc::new(EvaluationService::new());

    let err = evaluate_handler(State(service), Bytes::new())
        .await
        .expect_err("empty body rejected");

    assert!(matches!(err, AppError::Snapshot(_)));
}
