//! Usuario entity model and DTOs.

use serde::{Deserialize, Serialize};
use sigei_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full row from the `usuarios` table.
///
/// Contains the password hash -- never serialize this to API responses.
/// Use [`UsuarioResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: DbId,
    pub nombre: String,
    pub apellido: String,
    pub correo: String,
    pub contrasena_hash: String,
    pub telefono: Option<String>,
    pub activo: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe usuario representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UsuarioResponse {
    pub id: DbId,
    pub nombre: String,
    pub apellido: String,
    pub correo: String,
    pub telefono: Option<String>,
    pub activo: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Usuario> for UsuarioResponse {
    fn from(u: Usuario) -> Self {
        Self {
            id: u.id,
            nombre: u.nombre,
            apellido: u.apellido,
            correo: u.correo,
            telefono: u.telefono,
            activo: u.activo,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// DTO for creating a usuario. `contrasena` arrives in plaintext and is
/// hashed by the handler before it reaches the repository.
#[derive(Debug, Deserialize)]
pub struct CreateUsuario {
    pub nombre: String,
    pub apellido: String,
    pub correo: String,
    pub contrasena: String,
    pub telefono: Option<String>,
    pub activo: Option<bool>,
}

/// DTO for replacing a usuario on PUT. Same shape as the create DTO;
/// the bound rule set requires the full document on updates too.
#[derive(Debug, Deserialize)]
pub struct UpdateUsuario {
    pub nombre: String,
    pub apellido: String,
    pub correo: String,
    pub contrasena: String,
    pub telefono: Option<String>,
    pub activo: Option<bool>,
}
