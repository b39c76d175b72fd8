//! Request-pipeline middleware.

pub mod validate;
