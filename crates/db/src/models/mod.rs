//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for full replacement on PUT
//!
//! DTO field names are the wire names checked by the rule tables in
//! `sigei_core::validation::tables`; keep the two in sync.

pub mod elemento;
pub mod estado;
pub mod inventario;
pub mod reporte;
pub mod ubicacion;
pub mod usuario;
