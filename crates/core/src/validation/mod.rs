//! Declarative payload validation.
//!
//! A request payload is checked against a fixed, per-entity list of field
//! rules before it ever reaches a handler. Rule tables are hand-authored
//! in [`tables`], resolved through the [`registry::RuleRegistry`], and
//! evaluated by the pure-logic [`engine`] — no database, no HTTP types.

pub mod engine;
pub mod registry;
pub mod rules;
pub mod tables;
