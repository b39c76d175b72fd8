//! Route definitions for elementos.

use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum::Router;
use sigei_core::validation::registry::RuleRegistry;
use sigei_core::validation::tables;

use crate::handlers::elemento;
use crate::middleware::validate::{validate_body, ValidationBinding};
use crate::state::AppState;

/// Routes mounted at `/elementos`, with POST/PUT bound to the `elemento`
/// rule set.
pub fn router(rules: &Arc<RuleRegistry>) -> Router<AppState> {
    let binding = ValidationBinding::new(Arc::clone(rules), tables::ELEMENTO);
    Router::new()
        .route("/", get(elemento::list))
        .route(
            "/",
            post(elemento::create).route_layer(from_fn_with_state(binding.clone(), validate_body)),
        )
        .route("/{id}", get(elemento::get_by_id).delete(elemento::delete))
        .route(
            "/{id}",
            put(elemento::update).route_layer(from_fn_with_state(binding, validate_body)),
        )
}
