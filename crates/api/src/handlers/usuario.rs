//! Handlers for the `/usuarios` resource.
//!
//! The plaintext `contrasena` from the wire is hashed here before it
//! reaches the repository; responses never include the stored hash.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sigei_core::error::CoreError;
use sigei_core::types::DbId;
use sigei_db::models::usuario::{CreateUsuario, UpdateUsuario, UsuarioResponse};
use sigei_db::repositories::usuario_repo::NewUsuario;
use sigei_db::repositories::UsuarioRepo;

use crate::auth;
use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/usuarios
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUsuario>,
) -> AppResult<(StatusCode, Json<ApiResponse<UsuarioResponse>>)> {
    let contrasena_hash = auth::hash_contrasena(&input.contrasena)?;
    let nuevo = NewUsuario {
        nombre: &input.nombre,
        apellido: &input.apellido,
        correo: &input.correo,
        contrasena_hash: &contrasena_hash,
        telefono: input.telefono.as_deref(),
        activo: input.activo.unwrap_or(true),
    };
    let usuario = UsuarioRepo::create(&state.pool, &nuevo).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "Usuario creado exitosamente",
            usuario.into(),
        )),
    ))
}

/// GET /api/v1/usuarios
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<UsuarioResponse>>>> {
    let usuarios = UsuarioRepo::list(&state.pool).await?;
    let usuarios: Vec<UsuarioResponse> = usuarios.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::ok("Listado de usuarios", usuarios)))
}

/// GET /api/v1/usuarios/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<UsuarioResponse>>> {
    let usuario = UsuarioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "usuario",
            id,
        }))?;
    Ok(Json(ApiResponse::ok("Usuario encontrado", usuario.into())))
}

/// PUT /api/v1/usuarios/{id}
///
/// Full replacement: the bound rule set requires the complete document,
/// `contrasena` included, which is re-hashed on every update.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUsuario>,
) -> AppResult<Json<ApiResponse<UsuarioResponse>>> {
    let contrasena_hash = auth::hash_contrasena(&input.contrasena)?;
    let nuevo = NewUsuario {
        nombre: &input.nombre,
        apellido: &input.apellido,
        correo: &input.correo,
        contrasena_hash: &contrasena_hash,
        telefono: input.telefono.as_deref(),
        activo: input.activo.unwrap_or(true),
    };
    let usuario = UsuarioRepo::update(&state.pool, id, &nuevo)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "usuario",
            id,
        }))?;
    Ok(Json(ApiResponse::ok(
        "Usuario actualizado exitosamente",
        usuario.into(),
    )))
}

/// DELETE /api/v1/usuarios/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = UsuarioRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::ok("Usuario eliminado exitosamente", ())))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "usuario",
            id,
        }))
    }
}
