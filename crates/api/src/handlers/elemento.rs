//! Handlers for the `/elementos` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use sigei_core::error::CoreError;
use sigei_core::types::DbId;
use sigei_db::models::elemento::{CreateElemento, Elemento, UpdateElemento};
use sigei_db::repositories::ElementoRepo;

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query filters accepted by the list endpoint. `inventario_id` wins
/// when both are given.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub inventario_id: Option<DbId>,
    pub ubicacion_id: Option<DbId>,
}

/// POST /api/v1/elementos
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateElemento>,
) -> AppResult<(StatusCode, Json<ApiResponse<Elemento>>)> {
    let elemento = ElementoRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Elemento creado exitosamente", elemento)),
    ))
}

/// GET /api/v1/elementos?inventario_id=&ubicacion_id=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<ApiResponse<Vec<Elemento>>>> {
    let elementos = match (params.inventario_id, params.ubicacion_id) {
        (Some(inventario_id), _) => {
            ElementoRepo::list_by_inventario(&state.pool, inventario_id).await?
        }
        (None, Some(ubicacion_id)) => {
            ElementoRepo::list_by_ubicacion(&state.pool, ubicacion_id).await?
        }
        (None, None) => ElementoRepo::list(&state.pool).await?,
    };
    Ok(Json(ApiResponse::ok("Listado de elementos", elementos)))
}

/// GET /api/v1/elementos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Elemento>>> {
    let elemento = ElementoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "elemento",
            id,
        }))?;
    Ok(Json(ApiResponse::ok("Elemento encontrado", elemento)))
}

/// PUT /api/v1/elementos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateElemento>,
) -> AppResult<Json<ApiResponse<Elemento>>> {
    let elemento = ElementoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "elemento",
            id,
        }))?;
    Ok(Json(ApiResponse::ok(
        "Elemento actualizado exitosamente",
        elemento,
    )))
}

/// DELETE /api/v1/elementos/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = ElementoRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::ok("Elemento eliminado exitosamente", ())))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "elemento",
            id,
        }))
    }
}
