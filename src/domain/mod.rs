pub mod contact;

// Re-export commonly used types
pub use contact::{Contact, ContactInput, ContactRepository};

// Re-export errors from shared for convenience
pub use crate::shared::types::errors::{DomainError, DomainResult};
