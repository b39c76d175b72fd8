//! Repository for the `reportes` table.

use sigei_core::types::DbId;
use sqlx::PgPool;

use crate::models::reporte::{CreateReporte, Reporte, UpdateReporte};

const COLUMNS: &str =
    "id, titulo, contenido, fecha, usuario_id, inventario_id, created_at, updated_at";

/// Provides CRUD operations for reportes.
pub struct ReporteRepo;

impl ReporteRepo {
    /// Insert a new reporte, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateReporte) -> Result<Reporte, sqlx::Error> {
        let query = format!(
            "INSERT INTO reportes (titulo, contenido, fecha, usuario_id, inventario_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reporte>(&query)
            .bind(&input.titulo)
            .bind(&input.contenido)
            .bind(input.fecha)
            .bind(input.usuario_id)
            .bind(input.inventario_id)
            .fetch_one(pool)
            .await
    }

    /// Find a reporte by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reporte>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reportes WHERE id = $1");
        sqlx::query_as::<_, Reporte>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all reportes, most recent report date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Reporte>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reportes ORDER BY fecha DESC, id DESC");
        sqlx::query_as::<_, Reporte>(&query).fetch_all(pool).await
    }

    /// List the reportes filed by a usuario, most recent first.
    pub async fn list_by_usuario(
        pool: &PgPool,
        usuario_id: DbId,
    ) -> Result<Vec<Reporte>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reportes
             WHERE usuario_id = $1
             ORDER BY fecha DESC, id DESC"
        );
        sqlx::query_as::<_, Reporte>(&query)
            .bind(usuario_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a reporte. Returns `None` if no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReporte,
    ) -> Result<Option<Reporte>, sqlx::Error> {
        let query = format!(
            "UPDATE reportes SET
                titulo = $2,
                contenido = $3,
                fecha = $4,
                usuario_id = $5,
                inventario_id = $6,
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reporte>(&query)
            .bind(id)
            .bind(&input.titulo)
            .bind(&input.contenido)
            .bind(input.fecha)
            .bind(input.usuario_id)
            .bind(input.inventario_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a reporte. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reportes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
