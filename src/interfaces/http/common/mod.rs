//! Shared HTTP plumbing: error responses and extractors

pub mod errors;
pub mod id_path;
pub mod validated_json;

pub use errors::*;
pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
