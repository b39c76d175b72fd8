//! Repository for the `ubicaciones` table.

use sigei_core::types::DbId;
use sqlx::PgPool;

use crate::models::ubicacion::{CreateUbicacion, Ubicacion, UpdateUbicacion};

const COLUMNS: &str = "id, nombre, descripcion, capacidad, activo, created_at, updated_at";

/// Provides CRUD operations for ubicaciones.
pub struct UbicacionRepo;

impl UbicacionRepo {
    /// Insert a new ubicación, returning the created row.
    ///
    /// If `activo` is `None`, defaults to `true`.
    pub async fn create(pool: &PgPool, input: &CreateUbicacion) -> Result<Ubicacion, sqlx::Error> {
        let query = format!(
            "INSERT INTO ubicaciones (nombre, descripcion, capacidad, activo)
             VALUES ($1, $2, $3, COALESCE($4, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ubicacion>(&query)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(input.capacidad)
            .bind(input.activo)
            .fetch_one(pool)
            .await
    }

    /// Find a ubicación by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Ubicacion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ubicaciones WHERE id = $1");
        sqlx::query_as::<_, Ubicacion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all ubicaciones, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Ubicacion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ubicaciones ORDER BY created_at DESC");
        sqlx::query_as::<_, Ubicacion>(&query).fetch_all(pool).await
    }

    /// Replace a ubicación. Returns `None` if no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUbicacion,
    ) -> Result<Option<Ubicacion>, sqlx::Error> {
        let query = format!(
            "UPDATE ubicaciones SET
                nombre = $2,
                descripcion = $3,
                capacidad = $4,
                activo = COALESCE($5, activo),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ubicacion>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(input.capacidad)
            .bind(input.activo)
            .fetch_optional(pool)
            .await
    }

    /// Delete a ubicación. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ubicaciones WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
