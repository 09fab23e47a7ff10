//! Contact aggregate
//!
//! The Contact entity, its writable fields with their validation rules, and
//! the repository contract the storage layer fulfils.

pub mod model;
pub mod repository;

pub use model::{Contact, ContactInput, NAME_MAX_LENGTH};
pub use repository::ContactRepository;
