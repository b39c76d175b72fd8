//! Repository for the `estados` catalog table.

use sigei_core::types::DbId;
use sqlx::PgPool;

use crate::models::estado::{CreateEstado, Estado, UpdateEstado};

const COLUMNS: &str = "id, nombre, created_at, updated_at";

/// Provides CRUD operations for estados.
pub struct EstadoRepo;

impl EstadoRepo {
    /// Insert a new estado, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEstado) -> Result<Estado, sqlx::Error> {
        let query = format!(
            "INSERT INTO estados (nombre)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Estado>(&query)
            .bind(&input.nombre)
            .fetch_one(pool)
            .await
    }

    /// Find an estado by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Estado>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM estados WHERE id = $1");
        sqlx::query_as::<_, Estado>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all estados, alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Estado>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM estados ORDER BY nombre");
        sqlx::query_as::<_, Estado>(&query).fetch_all(pool).await
    }

    /// Replace an estado. Returns `None` if no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEstado,
    ) -> Result<Option<Estado>, sqlx::Error> {
        let query = format!(
            "UPDATE estados SET nombre = $2, updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Estado>(&query)
            .bind(id)
            .bind(&input.nombre)
            .fetch_optional(pool)
            .await
    }

    /// Delete an estado. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM estados WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
