//! Request handlers, one submodule per entity.
//!
//! Each submodule provides async handler functions (create, list,
//! get_by_id, update, delete) for a single resource. Handlers delegate
//! to the corresponding repository in `sigei-db` and map errors via
//! [`crate::error::AppError`]. Payload validation happens before any of
//! these run: the route tables bind POST/PUT to the validation filter.

pub mod elemento;
pub mod estado;
pub mod inventario;
pub mod reporte;
pub mod ubicacion;
pub mod usuario;
