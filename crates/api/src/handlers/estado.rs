//! Handlers for the `/estados` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sigei_core::error::CoreError;
use sigei_core::types::DbId;
use sigei_db::models::estado::{CreateEstado, Estado, UpdateEstado};
use sigei_db::repositories::EstadoRepo;

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/estados
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEstado>,
) -> AppResult<(StatusCode, Json<ApiResponse<Estado>>)> {
    let estado = EstadoRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Estado creado exitosamente", estado)),
    ))
}

/// GET /api/v1/estados
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Estado>>>> {
    let estados = EstadoRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok("Listado de estados", estados)))
}

/// GET /api/v1/estados/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Estado>>> {
    let estado = EstadoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "estado",
            id,
        }))?;
    Ok(Json(ApiResponse::ok("Estado encontrado", estado)))
}

/// PUT /api/v1/estados/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEstado>,
) -> AppResult<Json<ApiResponse<Estado>>> {
    let estado = EstadoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "estado",
            id,
        }))?;
    Ok(Json(ApiResponse::ok("Estado actualizado exitosamente", estado)))
}

/// DELETE /api/v1/estados/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = EstadoRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::ok("Estado eliminado exitosamente", ())))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "estado",
            id,
        }))
    }
}
