//! Database repository implementations

pub mod contact_repository;

pub use contact_repository::SeaOrmContactRepository;
