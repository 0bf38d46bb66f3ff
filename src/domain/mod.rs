//! Domain layer: core entities and the traits that bound them.

pub mod entities;
pub mod repositories;
pub mod resolver;
