//! Route definitions for usuarios.

use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum::Router;
use sigei_core::validation::registry::RuleRegistry;
use sigei_core::validation::tables;

use crate::handlers::usuario;
use crate::middleware::validate::{validate_body, ValidationBinding};
use crate::state::AppState;

/// Routes mounted at `/usuarios`.
///
/// POST and PUT are bound to the `usuario` rule set: the validation
/// filter rejects invalid payloads before the handlers run.
pub fn router(rules: &Arc<RuleRegistry>) -> Router<AppState> {
    let binding = ValidationBinding::new(Arc::clone(rules), tables::USUARIO);
    Router::new()
        .route("/", get(usuario::list))
        .route(
            "/",
            post(usuario::create).route_layer(from_fn_with_state(binding.clone(), validate_body)),
        )
        .route("/{id}", get(usuario::get_by_id).delete(usuario::delete))
        .route(
            "/{id}",
            put(usuario::update).route_layer(from_fn_with_state(binding, validate_body)),
        )
}
