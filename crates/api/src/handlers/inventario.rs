//! Handlers for the `/inventarios` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use sigei_core::error::CoreError;
use sigei_core::types::DbId;
use sigei_db::models::inventario::{CreateInventario, Inventario, UpdateInventario};
use sigei_db::repositories::InventarioRepo;

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query filters accepted by the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub usuario_id: Option<DbId>,
}

/// POST /api/v1/inventarios
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInventario>,
) -> AppResult<(StatusCode, Json<ApiResponse<Inventario>>)> {
    let inventario = InventarioRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "Inventario creado exitosamente",
            inventario,
        )),
    ))
}

/// GET /api/v1/inventarios?usuario_id=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<ApiResponse<Vec<Inventario>>>> {
    let inventarios = match params.usuario_id {
        Some(usuario_id) => InventarioRepo::list_by_usuario(&state.pool, usuario_id).await?,
        None => InventarioRepo::list(&state.pool).await?,
    };
    Ok(Json(ApiResponse::ok("Listado de inventarios", inventarios)))
}

/// GET /api/v1/inventarios/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Inventario>>> {
    let inventario = InventarioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "inventario",
            id,
        }))?;
    Ok(Json(ApiResponse::ok("Inventario encontrado", inventario)))
}

/// PUT /api/v1/inventarios/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInventario>,
) -> AppResult<Json<ApiResponse<Inventario>>> {
    let inventario = InventarioRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "inventario",
            id,
        }))?;
    Ok(Json(ApiResponse::ok(
        "Inventario actualizado exitosamente",
        inventario,
    )))
}

/// DELETE /api/v1/inventarios/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = InventarioRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::ok(
            "Inventario eliminado exitosamente",
            (),
        )))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "inventario",
            id,
        }))
    }
}
