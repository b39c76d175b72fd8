use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sigei_core::error::CoreError;

use crate::response::ApiResponse;

/// Application-level error type for HTTP handlers and middleware.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] so every failure renders the shared
/// `{ success, message, data }` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `sigei-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Error de base de datos: {0}")]
    Database(#[from] sqlx::Error),

    /// The validation filter was bound to an entity key that is not in
    /// the rule registry: a deployment defect, surfaced as a 400 because
    /// the request cannot proceed.
    #[error("entidad no reconocida")]
    UnknownEntity,

    /// The request body is not a syntactically valid JSON object.
    #[error("JSON mal formado")]
    MalformedJson,

    /// Aggregated field violations from the validation engine. Every
    /// violation is reported, not just the first.
    #[error("validación fallida con {} error(es)", .0.len())]
    Validation(Vec<String>),

    /// A bad request with a human-readable message.
    #[error("Solicitud inválida: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Error interno: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, data) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string(), None),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg, None),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Ocurrió un error interno".to_string(),
                        None,
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(&err),

            // --- Validation pipeline errors ---
            AppError::UnknownEntity => (
                StatusCode::BAD_REQUEST,
                "entidad no reconocida".to_string(),
                None,
            ),
            AppError::MalformedJson => (
                StatusCode::BAD_REQUEST,
                "JSON mal formado".to_string(),
                None,
            ),
            AppError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                "Error de validación en los campos".to_string(),
                Some(violations),
            ),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocurrió un error interno".to_string(),
                    None,
                )
            }
        };

        let body = ApiResponse::<Vec<String>> {
            success: false,
            message,
            data,
        };

        (status, Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, message, and envelope data.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`)
///   map to 409.
/// - Foreign key violations (constraint name starting with `fk_`) map to
///   409: either the referenced row does not exist or the row being
///   deleted is still in use.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String, Option<Vec<String>>) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "Recurso no encontrado".to_string(),
            None,
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("desconocida");
            // PostgreSQL: 23505 unique_violation, 23503 foreign_key_violation.
            match db_err.code().as_deref() {
                Some("23505") if constraint.starts_with("uq_") => {
                    return (
                        StatusCode::CONFLICT,
                        format!("Valor duplicado: viola la restricción de unicidad {constraint}"),
                        None,
                    );
                }
                Some("23503") if constraint.starts_with("fk_") => {
                    return (
                        StatusCode::CONFLICT,
                        format!(
                            "La referencia no existe o el registro está en uso ({constraint})"
                        ),
                        None,
                    );
                }
                _ => {}
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Ocurrió un error interno".to_string(),
                None,
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Ocurrió un error interno".to_string(),
                None,
            )
        }
    }
}
