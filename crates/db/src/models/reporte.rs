//! Reporte entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sigei_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `reportes` table: a written report filed by a usuario,
/// optionally tied to an inventario.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reporte {
    pub id: DbId,
    pub titulo: String,
    pub contenido: String,
    pub fecha: NaiveDate,
    pub usuario_id: DbId,
    pub inventario_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a reporte.
#[derive(Debug, Deserialize)]
pub struct CreateReporte {
    pub titulo: String,
    pub contenido: String,
    pub fecha: NaiveDate,
    pub usuario_id: DbId,
    pub inventario_id: Option<DbId>,
}

/// DTO for replacing a reporte on PUT.
#[derive(Debug, Deserialize)]
pub struct UpdateReporte {
    pub titulo: String,
    pub contenido: String,
    pub fecha: NaiveDate,
    pub usuario_id: DbId,
    pub inventario_id: Option<DbId>,
}
