//! Repository for the `inventarios` table.

use sigei_core::types::DbId;
use sqlx::PgPool;

use crate::models::inventario::{CreateInventario, Inventario, UpdateInventario};

const COLUMNS: &str = "id, nombre, codigo, descripcion, usuario_id, activo, created_at, updated_at";

/// Provides CRUD operations for inventarios.
pub struct InventarioRepo;

impl InventarioRepo {
    /// Insert a new inventario, returning the created row.
    ///
    /// If `activo` is `None`, defaults to `true`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInventario,
    ) -> Result<Inventario, sqlx::Error> {
        let query = format!(
            "INSERT INTO inventarios (nombre, codigo, descripcion, usuario_id, activo)
             VALUES ($1, $2, $3, $4, COALESCE($5, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inventario>(&query)
            .bind(&input.nombre)
            .bind(&input.codigo)
            .bind(&input.descripcion)
            .bind(input.usuario_id)
            .bind(input.activo)
            .fetch_one(pool)
            .await
    }

    /// Find an inventario by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Inventario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventarios WHERE id = $1");
        sqlx::query_as::<_, Inventario>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all inventarios, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Inventario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventarios ORDER BY created_at DESC");
        sqlx::query_as::<_, Inventario>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the inventarios owned by a usuario, newest first.
    pub async fn list_by_usuario(
        pool: &PgPool,
        usuario_id: DbId,
    ) -> Result<Vec<Inventario>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inventarios
             WHERE usuario_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Inventario>(&query)
            .bind(usuario_id)
            .fetch_all(pool)
            .await
    }

    /// Replace an inventario. Returns `None` if no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInventario,
    ) -> Result<Option<Inventario>, sqlx::Error> {
        let query = format!(
            "UPDATE inventarios SET
                nombre = $2,
                codigo = $3,
                descripcion = $4,
                usuario_id = $5,
                activo = COALESCE($6, activo),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inventario>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.codigo)
            .bind(&input.descripcion)
            .bind(input.usuario_id)
            .bind(input.activo)
            .fetch_optional(pool)
            .await
    }

    /// Delete an inventario. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inventarios WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
