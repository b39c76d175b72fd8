//! Repository for the `usuarios` table.

use sigei_core::types::DbId;
use sqlx::PgPool;

use crate::models::usuario::Usuario;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nombre, apellido, correo, contrasena_hash, telefono, activo, \
                       created_at, updated_at";

/// Insert payload with the password already hashed by the caller.
#[derive(Debug)]
pub struct NewUsuario<'a> {
    pub nombre: &'a str,
    pub apellido: &'a str,
    pub correo: &'a str,
    pub contrasena_hash: &'a str,
    pub telefono: Option<&'a str>,
    pub activo: bool,
}

/// Provides CRUD operations for usuarios.
pub struct UsuarioRepo;

impl UsuarioRepo {
    /// Insert a new usuario, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewUsuario<'_>) -> Result<Usuario, sqlx::Error> {
        let query = format!(
            "INSERT INTO usuarios (nombre, apellido, correo, contrasena_hash, telefono, activo)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Usuario>(&query)
            .bind(input.nombre)
            .bind(input.apellido)
            .bind(input.correo)
            .bind(input.contrasena_hash)
            .bind(input.telefono)
            .bind(input.activo)
            .fetch_one(pool)
            .await
    }

    /// Find a usuario by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Usuario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM usuarios WHERE id = $1");
        sqlx::query_as::<_, Usuario>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all usuarios, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Usuario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM usuarios ORDER BY created_at DESC");
        sqlx::query_as::<_, Usuario>(&query).fetch_all(pool).await
    }

    /// Replace a usuario. Returns `None` if no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewUsuario<'_>,
    ) -> Result<Option<Usuario>, sqlx::Error> {
        let query = format!(
            "UPDATE usuarios SET
                nombre = $2,
                apellido = $3,
                correo = $4,
                contrasena_hash = $5,
                telefono = $6,
                activo = $7,
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Usuario>(&query)
            .bind(id)
            .bind(input.nombre)
            .bind(input.apellido)
            .bind(input.correo)
            .bind(input.contrasena_hash)
            .bind(input.telefono)
            .bind(input.activo)
            .fetch_optional(pool)
            .await
    }

    /// Delete a usuario. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM usuarios WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
