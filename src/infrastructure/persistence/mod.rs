//! PostgreSQL repository implementations.

pub mod pg_link_repository;
pub mod pg_sequence_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_sequence_repository::PgSequenceRepository;
