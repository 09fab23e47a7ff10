//! Application layer: use-case services between the HTTP interface and the
//! repositories.

pub mod contacts;

pub use contacts::ContactService;
