//! Contact repository interface

use async_trait::async_trait;

use super::model::{Contact, ContactInput};
use crate::domain::DomainResult;
use crate::shared::PaginatedResult;

/// Persistence contract for contacts.
///
/// Listings are ordered by last name, then first name. Absence is reported
/// as `None` (get, update) or `false` (delete), never as an error.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn list(&self, page_number: i64, page_size: i64)
        -> DomainResult<PaginatedResult<Contact>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Contact>>;

    /// Stamps `created_at` and returns the stored contact with its new id.
    async fn create(&self, input: ContactInput) -> DomainResult<Contact>;

    /// Overwrites the writable fields and stamps `updated_at`.
    async fn update(&self, id: i32, input: ContactInput) -> DomainResult<Option<Contact>>;

    async fn delete(&self, id: i32) -> DomainResult<bool>;
}
