//! Repository traits defining the persistence boundary.

pub mod link_repository;
pub mod sequence_repository;

pub use link_repository::LinkRepository;
pub use sequence_repository::SequenceRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use sequence_repository::MockSequenceRepository;
