// folio-mock/tests/api.rs
// Router-level checks: status codes and error bodies

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use folio_mock::{AppState, FolioStore, build_router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> axum::Router {
    let store = FolioStore::seeded([1]);
    store.pin_year(Some(2026));
    build_router(AppState::new(store))
}

async fn call(app: &axum::Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(v) => Body::from(v.to_string()),
            None => Body::empty(),
        })
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = call(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn patch_returns_full_record() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::PATCH,
        "/api/folio-sequences/quote",
        Some(json!({ "include_year": true, "year_format": "YY", "padding": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["document_type"], "quote");
    assert_eq!(body["current_sequence"], 0);
    assert_eq!(body["next_folio"], "COT-260001");
}

#[tokio::test]
async fn invalid_padding_is_a_structured_400() {
    let (status, body) = call(
        &app(),
        Method::PATCH,
        "/api/folio-sequences/invoice",
        Some(json!({ "padding": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4004);
    assert_eq!(body["details"]["field"], "padding");
}

#[tokio::test]
async fn unknown_series_is_404() {
    let (status, body) = call(&app(), Method::GET, "/api/invoice-series/12345", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4101);
}

#[tokio::test]
async fn initialize_then_filter_by_cfdi_type() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/invoice-series/initialize-defaults",
        Some(json!({ "company_setting_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);

    let (_, body) = call(
        &app,
        Method::GET,
        "/api/invoice-series?company_setting_id=1&cfdi_type=P",
        None,
    )
    .await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["code"], "PAG");

    let (status, body) = call(
        &app,
        Method::GET,
        "/api/invoice-series/default?company_setting_id=1&cfdi_type=E",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "NC");

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/invoice-series/initialize-defaults",
        Some(json!({ "company_setting_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 4106);
}
