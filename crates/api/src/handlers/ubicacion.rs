//! Handlers for the `/ubicaciones` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sigei_core::error::CoreError;
use sigei_core::types::DbId;
use sigei_db::models::ubicacion::{CreateUbicacion, Ubicacion, UpdateUbicacion};
use sigei_db::repositories::UbicacionRepo;

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/ubicaciones
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUbicacion>,
) -> AppResult<(StatusCode, Json<ApiResponse<Ubicacion>>)> {
    let ubicacion = UbicacionRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Ubicación creada exitosamente", ubicacion)),
    ))
}

/// GET /api/v1/ubicaciones
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Ubicacion>>>> {
    let ubicaciones = UbicacionRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok("Listado de ubicaciones", ubicaciones)))
}

/// GET /api/v1/ubicaciones/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Ubicacion>>> {
    let ubicacion = UbicacionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ubicacion",
            id,
        }))?;
    Ok(Json(ApiResponse::ok("Ubicación encontrada", ubicacion)))
}

/// PUT /api/v1/ubicaciones/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUbicacion>,
) -> AppResult<Json<ApiResponse<Ubicacion>>> {
    let ubicacion = UbicacionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ubicacion",
            id,
        }))?;
    Ok(Json(ApiResponse::ok(
        "Ubicación actualizada exitosamente",
        ubicacion,
    )))
}

/// DELETE /api/v1/ubicaciones/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = UbicacionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::ok("Ubicación eliminada exitosamente", ())))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ubicacion",
            id,
        }))
    }
}
