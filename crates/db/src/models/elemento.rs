//! Elemento (tracked asset) entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sigei_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `elementos` table: one physical asset inside an
/// inventario, stored at a ubicación.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Elemento {
    pub id: DbId,
    pub nombre: String,
    pub serial: String,
    pub descripcion: Option<String>,
    pub cantidad: i32,
    pub precio: Option<f64>,
    pub fecha_adquisicion: Option<NaiveDate>,
    pub estado_id: Option<DbId>,
    pub inventario_id: DbId,
    pub ubicacion_id: DbId,
    pub disponible: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an elemento.
#[derive(Debug, Deserialize)]
pub struct CreateElemento {
    pub nombre: String,
    pub serial: String,
    pub descripcion: Option<String>,
    pub cantidad: i32,
    pub precio: Option<f64>,
    pub fecha_adquisicion: Option<NaiveDate>,
    pub estado_id: Option<DbId>,
    pub inventario_id: DbId,
    pub ubicacion_id: DbId,
    pub disponible: Option<bool>,
}

/// DTO for replacing an elemento on PUT.
#[derive(Debug, Deserialize)]
pub struct UpdateElemento {
    pub nombre: String,
    pub serial: String,
    pub descripcion: Option<String>,
    pub cantidad: i32,
    pub precio: Option<f64>,
    pub fecha_adquisicion: Option<NaiveDate>,
    pub estado_id: Option<DbId>,
    pub inventario_id: DbId,
    pub ubicacion_id: DbId,
    pub disponible: Option<bool>,
}
