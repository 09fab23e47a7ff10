//! Contact use cases

pub mod service;

pub use service::ContactService;
