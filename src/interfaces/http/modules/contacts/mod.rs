//! Contacts module: CRUD over the contact list

pub mod dto;
pub mod handlers;


pub use dto::*;
pub use handlers::*;
