//! Contact application service
//!
//! Forwards every call to the configured [`ContactRepository`] unchanged, so
//! the HTTP layer never depends on a concrete storage technology.

use std::sync::Arc;

use crate::domain::{Contact, ContactInput, ContactRepository, DomainResult};
use crate::shared::PaginatedResult;

/// Service for contact operations
pub struct ContactService {
    repository: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_contacts(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> DomainResult<PaginatedResult<Contact>> {
        self.repository.list(page_number, page_size).await
    }

    pub async fn get_contact(&self, id: i32) -> DomainResult<Option<Contact>> {
        self.repository.find_by_id(id).await
    }

    pub async fn create_contact(&self, input: ContactInput) -> DomainResult<Contact> {
        self.repository.create(input).await
    }

    pub async fn update_contact(
        &self,
        id: i32,
        input: ContactInput,
    ) -> DomainResult<Option<Contact>> {
        self.repository.update(id, input).await
    }

    pub async fn delete_contact(&self, id: i32) -> DomainResult<bool> {
        self.repository.delete(id).await
    }
}
