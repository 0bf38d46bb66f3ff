//! Infrastructure layer: database and external integrations.

pub mod persistence;
pub mod resolver;
