//! Estado (status catalog) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sigei_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `estados` catalog table (e.g. "Activo", "En reparación").
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Estado {
    pub id: DbId,
    pub nombre: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an estado.
#[derive(Debug, Deserialize)]
pub struct CreateEstado {
    pub nombre: String,
}

/// DTO for replacing an estado on PUT.
#[derive(Debug, Deserialize)]
pub struct UpdateEstado {
    pub nombre: String,
}
