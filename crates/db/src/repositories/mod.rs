//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod elemento_repo;
pub mod estado_repo;
pub mod inventario_repo;
pub mod reporte_repo;
pub mod ubicacion_repo;
pub mod usuario_repo;

pub use elemento_repo::ElementoRepo;
pub use estado_repo::EstadoRepo;
pub use inventario_repo::InventarioRepo;
pub use reporte_repo::ReporteRepo;
pub use ubicacion_repo::UbicacionRepo;
pub use usuario_repo::UsuarioRepo;
