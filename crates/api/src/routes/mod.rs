//! Route tables.
//!
//! Besides wiring paths to handlers, these modules are the explicit
//! binding table of the validation pipeline: every POST/PUT route is
//! layered with the validation filter naming its entity key, so the
//! binding is visible in one place per resource and resolved before the
//! handler is ever invoked. GET/DELETE routes carry no binding and pass
//! through untouched.

pub mod elemento;
pub mod estado;
pub mod health;
pub mod inventario;
pub mod reporte;
pub mod ubicacion;
pub mod usuario;

use std::sync::Arc;

use axum::Router;
use sigei_core::validation::registry::RuleRegistry;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /usuarios                  list, create
/// /usuarios/{id}             get, update, delete
/// /estados                   list, create
/// /estados/{id}              get, update, delete
/// /ubicaciones               list, create
/// /ubicaciones/{id}          get, update, delete
/// /inventarios               list (filter: usuario_id), create
/// /inventarios/{id}          get, update, delete
/// /elementos                 list (filters: inventario_id, ubicacion_id), create
/// /elementos/{id}            get, update, delete
/// /reportes                  list (filter: usuario_id), create
/// /reportes/{id}             get, update, delete
/// ```
pub fn api_routes(rules: &Arc<RuleRegistry>) -> Router<AppState> {
    Router::new()
        .nest("/usuarios", usuario::router(rules))
        .nest("/estados", estado::router(rules))
        .nest("/ubicaciones", ubicacion::router(rules))
        .nest("/inventarios", inventario::router(rules))
        .nest("/elementos", elemento::router(rules))
        .nest("/reportes", reporte::router(rules))
}
