//! Route definitions for ubicaciones.

use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum::Router;
use sigei_core::validation::registry::RuleRegistry;
use sigei_core::validation::tables;

use crate::handlers::ubicacion;
use crate::middleware::validate::{validate_body, ValidationBinding};
use crate::state::AppState;

/// Routes mounted at `/ubicaciones`, with POST/PUT bound to the
/// `ubicacion` rule set.
pub fn router(rules: &Arc<RuleRegistry>) -> Router<AppState> {
    let binding = ValidationBinding::new(Arc::clone(rules), tables::UBICACION);
    Router::new()
        .route("/", get(ubicacion::list))
        .route(
            "/",
            post(ubicacion::create).route_layer(from_fn_with_state(binding.clone(), validate_body)),
        )
        .route("/{id}", get(ubicacion::get_by_id).delete(ubicacion::delete))
        .route(
            "/{id}",
            put(ubicacion::update).route_layer(from_fn_with_state(binding, validate_body)),
        )
}
