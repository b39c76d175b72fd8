//! Declarative payload-validation filter.
//!
//! Each body-carrying operation (POST/PUT) in the route tables is bound
//! to an entity key by layering it with
//! `from_fn_with_state(ValidationBinding::new(...), validate_body)`. The
//! filter intercepts the request before the handler runs: it buffers the
//! body exactly once, decodes it as a JSON object, evaluates the bound
//! entity's rule list, and either aborts with an aggregated 400 or
//! reinstalls the buffered bytes so the handler can decode the payload
//! itself.
//!
//! Operations without a binding are untouched; the filter is never in
//! their path.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use serde_json::{Map, Value};
use sigei_core::validation::engine;
use sigei_core::validation::registry::RuleRegistry;

use crate::error::{AppError, AppResult};

/// Upper bound for the in-memory body copy. Transport-level size limits
/// are owned by the surrounding stack; this only caps the buffer.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Binds one operation to the rule set of one entity key.
///
/// The registry is shared (`Arc`), so cloning a binding per route is
/// cheap.
#[derive(Clone)]
pub struct ValidationBinding {
    registry: Arc<RuleRegistry>,
    entity: &'static str,
}

impl ValidationBinding {
    pub fn new(registry: Arc<RuleRegistry>, entity: &'static str) -> Self {
        Self { registry, entity }
    }
}

/// Middleware entry point for bound operations.
///
/// Failure paths are terminal for the request: the bound handler is
/// never invoked and nothing is retried.
pub async fn validate_body(
    State(binding): State<ValidationBinding>,
    request: Request,
    next: Next,
) -> AppResult<Response> {
    // An unregistered entity key is a configuration defect, but the
    // request cannot proceed, so it surfaces as a client-visible 400.
    let rules = binding
        .registry
        .resolve(binding.entity)
        .ok_or(AppError::UnknownEntity)?;

    // The transport stream is not re-readable: capture it to completion
    // exactly once, before any parse attempt.
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| AppError::BadRequest(format!("no se pudo leer el cuerpo: {e}")))?;

    // Anything that is not a JSON object (syntax errors included) aborts
    // independently of field-level violations.
    let payload: Map<String, Value> =
        serde_json::from_slice(&bytes).map_err(|_| AppError::MalformedJson)?;

    let violations = engine::validate(&payload, rules);
    if !violations.is_empty() {
        return Err(AppError::Validation(violations));
    }

    // Reinstall the captured bytes as a fresh, unread body. The handler
    // decodes the payload itself and must see the original bytes;
    // forwarding the consumed stream would hand it an empty body.
    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}
