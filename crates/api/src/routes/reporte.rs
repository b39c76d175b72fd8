//! Route definitions for reportes.

use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum::Router;
use sigei_core::validation::registry::RuleRegistry;
use sigei_core::validation::tables;

use crate::handlers::reporte;
use crate::middleware::validate::{validate_body, ValidationBinding};
use crate::state::AppState;

/// Routes mounted at `/reportes`, with POST/PUT bound to the `reporte`
/// rule set.
pub fn router(rules: &Arc<RuleRegistry>) -> Router<AppState> {
    let binding = ValidationBinding::new(Arc::clone(rules), tables::REPORTE);
    Router::new()
        .route("/", get(reporte::list))
        .route(
            "/",
            post(reporte::create).route_layer(from_fn_with_state(binding.clone(), validate_body)),
        )
        .route("/{id}", get(reporte::get_by_id).delete(reporte::delete))
        .route(
            "/{id}",
            put(reporte::update).route_layer(from_fn_with_state(binding, validate_body)),
        )
}
