//! Inventario entity model and DTOs.

use serde::{Deserialize, Serialize};
use sigei_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `inventarios` table. Every inventario belongs to the
/// usuario responsible for it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Inventario {
    pub id: DbId,
    pub nombre: String,
    pub codigo: String,
    pub descripcion: Option<String>,
    pub usuario_id: DbId,
    pub activo: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an inventario.
#[derive(Debug, Deserialize)]
pub struct CreateInventario {
    pub nombre: String,
    pub codigo: String,
    pub descripcion: Option<String>,
    pub usuario_id: DbId,
    pub activo: Option<bool>,
}

/// DTO for replacing an inventario on PUT.
#[derive(Debug, Deserialize)]
pub struct UpdateInventario {
    pub nombre: String,
    pub codigo: String,
    pub descripcion: Option<String>,
    pub usuario_id: DbId,
    pub activo: Option<bool>,
}
