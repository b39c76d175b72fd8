//! Route definitions for the estados catalog.

use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum::Router;
use sigei_core::validation::registry::RuleRegistry;
use sigei_core::validation::tables;

use crate::handlers::estado;
use crate::middleware::validate::{validate_body, ValidationBinding};
use crate::state::AppState;

/// Routes mounted at `/estados`, with POST/PUT bound to the `estado`
/// rule set.
pub fn router(rules: &Arc<RuleRegistry>) -> Router<AppState> {
    let binding = ValidationBinding::new(Arc::clone(rules), tables::ESTADO);
    Router::new()
        .route("/", get(estado::list))
        .route(
            "/",
            post(estado::create).route_layer(from_fn_with_state(binding.clone(), validate_body)),
        )
        .route("/{id}", get(estado::get_by_id).delete(estado::delete))
        .route(
            "/{id}",
            put(estado::update).route_layer(from_fn_with_state(binding, validate_body)),
        )
}
