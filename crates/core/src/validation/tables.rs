//! Hand-authored rule tables, one per registered entity.
//!
//! Field names here are the wire names of the create/update DTOs in
//! `sigei-db`; the two must stay in sync. Adding an entity means adding
//! a table here and registering it in [`all`].

use super::rules::FieldRule;

pub const USUARIO: &str = "usuario";
pub const ESTADO: &str = "estado";
pub const UBICACION: &str = "ubicacion";
pub const INVENTARIO: &str = "inventario";
pub const ELEMENTO: &str = "elemento";
pub const REPORTE: &str = "reporte";

/// Every registered entity key with its ordered rule list.
pub fn all() -> Vec<(&'static str, Vec<FieldRule>)> {
    vec![
        (USUARIO, usuario()),
        (ESTADO, estado()),
        (UBICACION, ubicacion()),
        (INVENTARIO, inventario()),
        (ELEMENTO, elemento()),
        (REPORTE, reporte()),
    ]
}

fn usuario() -> Vec<FieldRule> {
    vec![
        FieldRule::text("nombre", true, 3, 50),
        FieldRule::text("apellido", true, 3, 50),
        FieldRule::text("correo", true, 5, 100),
        FieldRule::text("contrasena", true, 8, 72),
        FieldRule::text("telefono", false, 7, 15),
        FieldRule::boolean("activo", false),
    ]
}

fn estado() -> Vec<FieldRule> {
    vec![FieldRule::text("nombre", true, 3, 20)]
}

fn ubicacion() -> Vec<FieldRule> {
    vec![
        FieldRule::text("nombre", true, 3, 50),
        FieldRule::text("descripcion", false, 5, 255),
        FieldRule::number("capacidad", false, 1, 10_000),
        FieldRule::boolean("activo", false),
    ]
}

fn inventario() -> Vec<FieldRule> {
    vec![
        FieldRule::text("nombre", true, 3, 50),
        FieldRule::text("codigo", true, 4, 20),
        FieldRule::text("descripcion", false, 5, 255),
        FieldRule::number("usuario_id", true, 1, i64::MAX),
        FieldRule::boolean("activo", false),
    ]
}

fn elemento() -> Vec<FieldRule> {
    vec![
        FieldRule::text("nombre", true, 3, 50),
        FieldRule::text("serial", true, 5, 30),
        FieldRule::text("descripcion", false, 5, 255),
        FieldRule::number("cantidad", true, 1, 9_999),
        FieldRule::number("precio", false, 0, i64::MAX),
        FieldRule::date("fecha_adquisicion", false, 10),
        FieldRule::number("estado_id", false, 1, i64::MAX),
        FieldRule::number("inventario_id", true, 1, i64::MAX),
        FieldRule::number("ubicacion_id", true, 1, i64::MAX),
        FieldRule::boolean("disponible", false),
    ]
}

fn reporte() -> Vec<FieldRule> {
    vec![
        FieldRule::text("titulo", true, 5, 100),
        FieldRule::text("contenido", true, 10, 2_000),
        FieldRule::date("fecha", true, 10),
        FieldRule::number("usuario_id", true, 1, i64::MAX),
        FieldRule::number("inventario_id", false, 1, i64::MAX),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn entity_keys_are_lowercase_and_unique() {
        let tables = all();
        let keys: HashSet<_> = tables.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), tables.len());
        for key in keys {
            assert_eq!(key, key.to_lowercase());
        }
    }

    #[test]
    fn field_names_are_unique_within_each_table() {
        for (entity, rules) in all() {
            let names: HashSet<_> = rules.iter().map(|r| r.name).collect();
            assert_eq!(names.len(), rules.len(), "duplicate field in '{entity}'");
        }
    }

    #[test]
    fn text_and_date_bounds_are_coherent() {
        for (entity, rules) in all() {
            for rule in rules {
                assert!(
                    rule.minimum <= rule.maximum,
                    "'{}' in '{entity}' has minimum > maximum",
                    rule.name
                );
            }
        }
    }
}
