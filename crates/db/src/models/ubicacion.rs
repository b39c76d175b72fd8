//! Ubicación entity model and DTOs.

use serde::{Deserialize, Serialize};
use sigei_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `ubicaciones` table (a physical storage location).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Ubicacion {
    pub id: DbId,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub capacidad: Option<i32>,
    pub activo: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a ubicación.
#[derive(Debug, Deserialize)]
pub struct CreateUbicacion {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub capacidad: Option<i32>,
    pub activo: Option<bool>,
}

/// DTO for replacing a ubicación on PUT.
#[derive(Debug, Deserialize)]
pub struct UpdateUbicacion {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub capacidad: Option<i32>,
    pub activo: Option<bool>,
}
