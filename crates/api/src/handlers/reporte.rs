//! Handlers for the `/reportes` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use sigei_core::error::CoreError;
use sigei_core::types::DbId;
use sigei_db::models::reporte::{CreateReporte, Reporte, UpdateReporte};
use sigei_db::repositories::ReporteRepo;

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query filters accepted by the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub usuario_id: Option<DbId>,
}

/// POST /api/v1/reportes
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateReporte>,
) -> AppResult<(StatusCode, Json<ApiResponse<Reporte>>)> {
    let reporte = ReporteRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Reporte creado exitosamente", reporte)),
    ))
}

/// GET /api/v1/reportes?usuario_id=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<ApiResponse<Vec<Reporte>>>> {
    let reportes = match params.usuario_id {
        Some(usuario_id) => ReporteRepo::list_by_usuario(&state.pool, usuario_id).await?,
        None => ReporteRepo::list(&state.pool).await?,
    };
    Ok(Json(ApiResponse::ok("Listado de reportes", reportes)))
}

/// GET /api/v1/reportes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Reporte>>> {
    let reporte = ReporteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "reporte",
            id,
        }))?;
    Ok(Json(ApiResponse::ok("Reporte encontrado", reporte)))
}

/// PUT /api/v1/reportes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReporte>,
) -> AppResult<Json<ApiResponse<Reporte>>> {
    let reporte = ReporteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "reporte",
            id,
        }))?;
    Ok(Json(ApiResponse::ok(
        "Reporte actualizado exitosamente",
        reporte,
    )))
}

/// DELETE /api/v1/reportes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = ReporteRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::ok("Reporte eliminado exitosamente", ())))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "reporte",
            id,
        }))
    }
}
