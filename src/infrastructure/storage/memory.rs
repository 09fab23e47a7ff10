//! In-memory contact repository

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::{Contact, ContactInput, ContactRepository, DomainResult};
use crate::shared::{paginate, PaginatedResult};

/// In-memory storage for development and testing.
///
/// Mirrors the database repository: same ordering, same timestamp rules.
pub struct InMemoryContactRepository {
    contacts: DashMap<i32, Contact>,
    id_counter: AtomicI32,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self {
            contacts: DashMap::new(),
            id_counter: AtomicI32::new(1),
        }
    }

    /// Snapshot of every contact in listing order. Each list call clones and
    /// sorts the whole map, so this store suits tests and small data sets only.
    fn ordered(&self) -> Vec<Contact> {
        let mut contacts: Vec<Contact> = self.contacts.iter().map(|e| e.value().clone()).collect();
        contacts.sort_by(|a, b| Contact::listing_order(a, b).then(a.id.cmp(&b.id)));
        contacts
    }
}

impl Default for InMemoryContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn list(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> DomainResult<PaginatedResult<Contact>> {
        let contacts = self.ordered();
        let page = match paginate(&contacts, page_number, page_size).await {
            Ok(page) => page,
            Err(never) => match never {},
        };
        Ok(page)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Contact>> {
        Ok(self.contacts.get(&id).map(|c| c.clone()))
    }

    async fn create(&self, input: ContactInput) -> DomainResult<Contact> {
        let id = self.id_counter.fetch_add(1, Ordering::SeqCst);
        let contact = Contact::new(id, input, Utc::now());
        self.contacts.insert(id, contact.clone());
        Ok(contact)
    }

    async fn update(&self, id: i32, input: ContactInput) -> DomainResult<Option<Contact>> {
        Ok(self.contacts.get_mut(&id).map(|mut contact| {
            contact.apply(input, Utc::now());
            contact.clone()
        }))
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        Ok(self.contacts.remove(&id).is_some())
    }
}
