//! # Contact List Service
//!
//! REST service for managing a list of contacts (name, phone, email) with
//! paginated listing.
//!
//! ## Architecture
//!
//! - **domain**: The contact entity, its validation rules and the repository contract
//! - **application**: Use cases exposed to the transport layer
//! - **infrastructure**: SeaORM and in-memory repositories, migrations
//! - **interfaces**: HTTP API with Swagger documentation
//! - **shared**: Pagination, validation helpers, shutdown coordination
//! - **server**: Process lifecycle shared by the binary and tests

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig, ConfigError};

pub use application::ContactService;
pub use domain::{Contact, ContactInput, ContactRepository};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

pub use interfaces::http::{create_api_router, ApiDoc};

pub use shared::{paginate, PageSource, PaginatedResult};
