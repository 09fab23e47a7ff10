//! Infrastructure layer - external concerns

pub mod database;
pub mod storage;

pub use database::{init_database, redact_url, DatabaseConfig, SeaOrmContactRepository};
pub use storage::InMemoryContactRepository;
