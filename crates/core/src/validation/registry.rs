//! Entity key → rule list lookup.

use std::collections::HashMap;

use super::rules::FieldRule;
use super::tables;

/// Immutable mapping from entity key to its rule list.
///
/// Built once at startup from the tables in [`tables`] and shared across
/// request tasks behind an `Arc`; reads need no synchronization because
/// the registry is never mutated after construction.
#[derive(Debug)]
pub struct RuleRegistry {
    tables: HashMap<&'static str, Vec<FieldRule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self {
            tables: tables::all().into_iter().collect(),
        }
    }

    /// Look up the rules for an entity key, case-insensitively.
    ///
    /// Returns `None` for unregistered keys; the caller decides how to
    /// surface that (the HTTP filter treats it as a configuration
    /// defect).
    pub fn resolve(&self, entity: &str) -> Option<&[FieldRule]> {
        self.tables
            .get(entity.to_ascii_lowercase().as_str())
            .map(Vec::as_slice)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_entity_resolves() {
        let registry = RuleRegistry::new();
        for (entity, rules) in tables::all() {
            let resolved = registry.resolve(entity).expect("entity must resolve");
            assert_eq!(resolved.len(), rules.len());
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = RuleRegistry::new();
        assert!(registry.resolve("Estado").is_some());
        assert!(registry.resolve("USUARIO").is_some());
    }

    #[test]
    fn unknown_entity_resolves_to_none() {
        let registry = RuleRegistry::new();
        assert!(registry.resolve("inexistente").is_none());
    }

    #[test]
    fn resolved_rules_keep_table_order() {
        let registry = RuleRegistry::new();
        let rules = registry.resolve(tables::USUARIO).unwrap();
        assert_eq!(rules[0].name, "nombre");
        assert_eq!(rules[1].name, "apellido");
    }
}
