use crate::types::DbId;

/// Domain-level failures surfaced by handlers and repositories.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("No existe {entity} con id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Conflicto: {0}")]
    Conflict(String),

    #[error("Error interno: {0}")]
    Internal(String),
}
