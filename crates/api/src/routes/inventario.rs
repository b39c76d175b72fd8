//! Route definitions for inventarios.

use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum::Router;
use sigei_core::validation::registry::RuleRegistry;
use sigei_core::validation::tables;

use crate::handlers::inventario;
use crate::middleware::validate::{validate_body, ValidationBinding};
use crate::state::AppState;

/// Routes mounted at `/inventarios`, with POST/PUT bound to the
/// `inventario` rule set.
pub fn router(rules: &Arc<RuleRegistry>) -> Router<AppState> {
    let binding = ValidationBinding::new(Arc::clone(rules), tables::INVENTARIO);
    Router::new()
        .route("/", get(inventario::list))
        .route(
            "/",
            post(inventario::create)
                .route_layer(from_fn_with_state(binding.clone(), validate_body)),
        )
        .route(
            "/{id}",
            get(inventario::get_by_id).delete(inventario::delete),
        )
        .route(
            "/{id}",
            put(inventario::update).route_layer(from_fn_with_state(binding, validate_body)),
        )
}
