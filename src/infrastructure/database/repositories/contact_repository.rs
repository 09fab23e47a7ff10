//! SeaORM implementation of ContactRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryOrder, Set,
};
use tracing::debug;

use crate::domain::{Contact, ContactInput, ContactRepository, DomainResult};
use crate::infrastructure::database::entities::contact;
use crate::infrastructure::database::pagination::SelectSource;
use crate::shared::{paginate, PaginatedResult};

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(c: contact::Model) -> Contact {
    Contact {
        id: c.id,
        first_name: c.first_name,
        last_name: c.last_name,
        phone_number: c.phone_number,
        email: c.email,
        created_at: c.created_at,
        updated_at: c.updated_at,
    }
}

// ── SeaOrmContactRepository ─────────────────────────────────────

pub struct SeaOrmContactRepository {
    db: DatabaseConnection,
}

impl SeaOrmContactRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for SeaOrmContactRepository {
    async fn list(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> DomainResult<PaginatedResult<Contact>> {
        let query = contact::Entity::find()
            .order_by_asc(contact::Column::LastName)
            .order_by_asc(contact::Column::FirstName);

        let page = paginate(&SelectSource::new(query, &self.db), page_number, page_size).await?;
        Ok(page.map(entity_to_domain))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Contact>> {
        let model = contact::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(entity_to_domain))
    }

    async fn create(&self, input: ContactInput) -> DomainResult<Contact> {
        let model = contact::ActiveModel {
            id: NotSet,
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            phone_number: Set(input.phone_number),
            email: Set(input.email),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };
        let created = model.insert(&self.db).await?;
        debug!(id = created.id, "Contact inserted");
        Ok(entity_to_domain(created))
    }

    async fn update(&self, id: i32, input: ContactInput) -> DomainResult<Option<Contact>> {
        let Some(existing) = contact::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: contact::ActiveModel = existing.into();
        active.first_name = Set(input.first_name);
        active.last_name = Set(input.last_name);
        active.phone_number = Set(input.phone_number);
        active.email = Set(input.email);
        active.updated_at = Set(Some(Utc::now()));

        // Zero rows matched: the row was deleted after the lookup.
        let updated = match active.update(&self.db).await {
            Ok(updated) => updated,
            Err(DbErr::RecordNotUpdated) => {
                debug!(id, "Contact removed before update, nothing written");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        debug!(id, "Contact updated");
        Ok(Some(entity_to_domain(updated)))
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        let result = contact::Entity::delete_by_id(id).exec(&self.db).await?;
        let deleted = result.rows_affected > 0;
        if deleted {
            debug!(id, "Contact deleted");
        }
        Ok(deleted)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ConnectionTrait;
    use sea_orm_migration::MigratorTrait;

    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::{init_database, DatabaseConfig};

    async fn repository() -> SeaOrmContactRepository {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            ..DatabaseConfig::default()
        };
        let db = init_database(&config).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmContactRepository::new(db)
    }

    fn input(first: &str, last: &str) -> ContactInput {
        ContactInput {
            first_name: first.into(),
            last_name: last.into(),
            phone_number: "555-0100".into(),
            email: format!("{}.{}@example.com", first, last).to_lowercase(),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let repo = repository().await;
        let created = repo.create(input("Ada", "Lovelace")).await.unwrap();
        assert!(created.id > 0);
        assert!(created.updated_at.is_none());

        let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.first_name, "Ada");
        assert_eq!(fetched.last_name, "Lovelace");
        assert_eq!(fetched.phone_number, "555-0100");
        assert_eq!(fetched.email, "ada.lovelace@example.com");
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn missing_id_is_none() {
        let repo = repository().await;
        assert!(repo.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_stamps_time() {
        let repo = repository().await;
        let created = repo.create(input("Ada", "Lovelace")).await.unwrap();

        let updated = repo
            .update(created.id, input("Augusta", "King"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.first_name, "Augusta");
        assert_eq!(updated.last_name, "King");
        assert!(updated.updated_at.is_some());

        let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.created_at, updated.created_at);
        assert_eq!(fetched.first_name, "Augusta");
    }

    #[tokio::test]
    async fn update_of_missing_id_creates_nothing() {
        let repo = repository().await;
        assert!(repo.update(9, input("Ghost", "Writer")).await.unwrap().is_none());
        assert_eq!(repo.list(1, 10).await.unwrap().total_count, 0);
    }

    #[tokio::test]
    async fn update_matching_no_rows_is_a_no_op() {
        let repo = repository().await;
        let created = repo.create(input("Ada", "Lovelace")).await.unwrap();

        // Make the UPDATE statement touch nothing, as when a delete commits
        // between the lookup and the write.
        repo.db
            .execute_unprepared(
                "CREATE TRIGGER skip_contact_updates BEFORE UPDATE ON contacts \
                 BEGIN SELECT RAISE(IGNORE); END;",
            )
            .await
            .unwrap();

        let result = repo.update(created.id, input("Augusta", "King")).await.unwrap();
        assert!(result.is_none());

        let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.first_name, "Ada");
        assert!(stored.updated_at.is_none());
    }

    #[tokio::test]
    async fn delete_twice_returns_true_then_false() {
        let repo = repository().await;
        let created = repo.create(input("Ada", "Lovelace")).await.unwrap();
        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_orders_by_last_then_first_name() {
        let repo = repository().await;
        for (first, last) in [("Grace", "Hopper"), ("Alan", "Turing"), ("Ada", "Hopper")] {
            repo.create(input(first, last)).await.unwrap();
        }

        let page = repo.list(1, 10).await.unwrap();
        let names: Vec<(String, String)> = page
            .items
            .into_iter()
            .map(|c| (c.last_name, c.first_name))
            .collect();
        assert_eq!(
            names,
            vec![
                ("Hopper".to_string(), "Ada".to_string()),
                ("Hopper".to_string(), "Grace".to_string()),
                ("Turing".to_string(), "Alan".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn list_pages_twenty_five_contacts() {
        let repo = repository().await;
        for i in 0..25 {
            repo.create(input("First", &format!("Last{i:02}"))).await.unwrap();
        }

        let first = repo.list(1, 10).await.unwrap();
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_count, 25);
        assert_eq!(first.items.len(), 10);
        assert!(!first.has_previous_page);

        let last = repo.list(3, 10).await.unwrap();
        assert_eq!(last.items.len(), 5);
        assert_eq!(last.items[0].last_name, "Last20");
        assert!(!last.has_next_page);

        let clamped = repo.list(0, 0).await.unwrap();
        assert_eq!(clamped.page_number, 1);
        assert_eq!(clamped.items.len(), 10);
    }
}
