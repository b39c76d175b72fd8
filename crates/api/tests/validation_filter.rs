//! Integration tests for the request-validation filter.
//!
//! The filter consumes only the rule registry, never the database, so
//! these tests drive it through a real `Router` with a stub handler that
//! echoes the body bytes it received -- which also proves the filter
//! reinstalled the captured stream for downstream consumers.

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use axum::middleware::from_fn_with_state;
use axum::response::Response;
use axum::routing::post;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use sigei_api::middleware::validate::{validate_body, ValidationBinding};
use sigei_core::validation::registry::RuleRegistry;

/// Echoes the raw body bytes the handler received after the filter ran.
async fn echo(body: Bytes) -> Bytes {
    body
}

/// A router with a single POST operation bound to `entity`'s rule set.
fn app_bound_to(entity: &'static str) -> Router {
    let registry = Arc::new(RuleRegistry::new());
    let binding = ValidationBinding::new(registry, entity);
    Router::new().route(
        "/validado",
        post(echo).route_layer(from_fn_with_state(binding, validate_body)),
    )
}

async fn send_json(app: Router, body: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri("/validado")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn body_bytes(response: Response) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("response body must be JSON")
}

// ---------------------------------------------------------------------------
// Pass path: valid payloads reach the handler with the original bytes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn valid_payload_passes_through() {
    let response = send_json(app_bound_to("estado"), r#"{"nombre":"Activo"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn handler_sees_the_exact_original_bytes() {
    // Whitespace and an extra field survive untouched: the filter must
    // replay the captured bytes, not a re-serialization of the payload.
    let original = r#"{ "nombre" : "Activo", "extra": [1, 2, 3] }"#;
    let response = send_json(app_bound_to("estado"), original).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, Bytes::from(original));
}

#[tokio::test]
async fn unbound_route_is_untouched() {
    // No binding: the filter is not in the path and even garbage passes.
    let app = Router::new().route("/libre", post(echo));
    let request = Request::builder()
        .method("POST")
        .uri("/libre")
        .body(Body::from("esto no es JSON"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, Bytes::from("esto no es JSON"));
}

// ---------------------------------------------------------------------------
// Abort path: field violations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_required_field_aborts_with_one_violation() {
    let response = send_json(app_bound_to("estado"), "{}").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Error de validación en los campos");
    assert_eq!(
        json["data"],
        serde_json::json!(["El campo 'nombre' es obligatorio."])
    );
}

#[tokio::test]
async fn short_text_aborts_with_minimum_length_violation() {
    let response = send_json(app_bound_to("estado"), r#"{"nombre":"Ok"}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json["data"],
        serde_json::json!(["El campo 'nombre' debe tener al menos 3 caracteres."])
    );
}

#[tokio::test]
async fn wrong_type_aborts_with_type_violation() {
    let response = send_json(app_bound_to("estado"), r#"{"nombre":5}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json["data"],
        serde_json::json!(["El campo 'nombre' debe ser una cadena de texto."])
    );
}

#[tokio::test]
async fn all_violations_are_aggregated_in_rule_order() {
    let body = r#"{"nombre":"Jo","apellido":123,"correo":"a@b.cl"}"#;
    let response = send_json(app_bound_to("usuario"), body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json["data"],
        serde_json::json!([
            "El campo 'nombre' debe tener al menos 3 caracteres.",
            "El campo 'apellido' debe ser una cadena de texto.",
            "El campo 'contrasena' es obligatorio.",
        ])
    );
}

// ---------------------------------------------------------------------------
// Abort path: malformed payloads and configuration defects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_json_aborts_with_message_only() {
    let response = send_json(app_bound_to("estado"), r#"{"nombre":"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "JSON mal formado");
    assert_eq!(json["data"], serde_json::Value::Null);
}

#[tokio::test]
async fn non_object_json_aborts_as_malformed() {
    let response = send_json(app_bound_to("estado"), "[1, 2, 3]").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "JSON mal formado");
}

#[tokio::test]
async fn empty_body_aborts_as_malformed() {
    let response = send_json(app_bound_to("estado"), "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "JSON mal formado");
}

#[tokio::test]
async fn unregistered_entity_key_aborts_even_with_a_valid_body() {
    // A binding to an unknown key is a deployment defect: the request
    // never reaches the engine, no matter how well-formed the body is.
    let response = send_json(app_bound_to("inexistente"), r#"{"nombre":"Activo"}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "entidad no reconocida");
    assert_eq!(json["data"], serde_json::Value::Null);
}

#[tokio::test]
async fn entity_key_lookup_is_case_insensitive() {
    let response = send_json(app_bound_to("Estado"), r#"{"nombre":"Activo"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
}
