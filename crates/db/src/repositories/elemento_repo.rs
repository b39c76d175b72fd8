//! Repository for the `elementos` table.

use sigei_core::types::DbId;
use sqlx::PgPool;

use crate::models::elemento::{CreateElemento, Elemento, UpdateElemento};

const COLUMNS: &str = "id, nombre, serial, descripcion, cantidad, precio, fecha_adquisicion, \
                       estado_id, inventario_id, ubicacion_id, disponible, created_at, updated_at";

/// Provides CRUD operations for elementos.
pub struct ElementoRepo;

impl ElementoRepo {
    /// Insert a new elemento, returning the created row.
    ///
    /// If `disponible` is `None`, defaults to `true`.
    pub async fn create(pool: &PgPool, input: &CreateElemento) -> Result<Elemento, sqlx::Error> {
        let query = format!(
            "INSERT INTO elementos
                (nombre, serial, descripcion, cantidad, precio, fecha_adquisicion,
                 estado_id, inventario_id, ubicacion_id, disponible)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, COALESCE($10, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Elemento>(&query)
            .bind(&input.nombre)
            .bind(&input.serial)
            .bind(&input.descripcion)
            .bind(input.cantidad)
            .bind(input.precio)
            .bind(input.fecha_adquisicion)
            .bind(input.estado_id)
            .bind(input.inventario_id)
            .bind(input.ubicacion_id)
            .bind(input.disponible)
            .fetch_one(pool)
            .await
    }

    /// Find an elemento by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Elemento>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM elementos WHERE id = $1");
        sqlx::query_as::<_, Elemento>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all elementos, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Elemento>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM elementos ORDER BY created_at DESC");
        sqlx::query_as::<_, Elemento>(&query).fetch_all(pool).await
    }

    /// List the elementos of an inventario, newest first.
    pub async fn list_by_inventario(
        pool: &PgPool,
        inventario_id: DbId,
    ) -> Result<Vec<Elemento>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM elementos
             WHERE inventario_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Elemento>(&query)
            .bind(inventario_id)
            .fetch_all(pool)
            .await
    }

    /// List the elementos stored at a ubicación, newest first.
    pub async fn list_by_ubicacion(
        pool: &PgPool,
        ubicacion_id: DbId,
    ) -> Result<Vec<Elemento>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM elementos
             WHERE ubicacion_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Elemento>(&query)
            .bind(ubicacion_id)
            .fetch_all(pool)
            .await
    }

    /// Replace an elemento. Returns `None` if no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateElemento,
    ) -> Result<Option<Elemento>, sqlx::Error> {
        let query = format!(
            "UPDATE elementos SET
                nombre = $2,
                serial = $3,
                descripcion = $4,
                cantidad = $5,
                precio = $6,
                fecha_adquisicion = $7,
                estado_id = $8,
                inventario_id = $9,
                ubicacion_id = $10,
                disponible = COALESCE($11, disponible),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Elemento>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.serial)
            .bind(&input.descripcion)
            .bind(input.cantidad)
            .bind(input.precio)
            .bind(input.fecha_adquisicion)
            .bind(input.estado_id)
            .bind(input.inventario_id)
            .bind(input.ubicacion_id)
            .bind(input.disponible)
            .fetch_optional(pool)
            .await
    }

    /// Delete an elemento. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM elementos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
