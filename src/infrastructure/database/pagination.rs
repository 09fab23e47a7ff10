//! [`PageSource`] adapter for SeaORM queries.

use async_trait::async_trait;
use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, FromQueryResult, PaginatorTrait, QuerySelect, Select,
};

use crate::shared::PageSource;

/// An ordered `SELECT` bound to a connection.
///
/// `count` runs a `COUNT(*)` over the query, `fetch` adds `OFFSET`/`LIMIT`.
pub struct SelectSource<'db, E: EntityTrait> {
    select: Select<E>,
    db: &'db DatabaseConnection,
}

impl<'db, E: EntityTrait> SelectSource<'db, E> {
    pub fn new(select: Select<E>, db: &'db DatabaseConnection) -> Self {
        Self { select, db }
    }
}

#[async_trait]
impl<'db, E> PageSource for SelectSource<'db, E>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Send + Sync + 'static,
{
    type Item = E::Model;
    type Error = DbErr;

    async fn count(&self) -> Result<u64, DbErr> {
        self.select.clone().count(self.db).await
    }

    async fn fetch(&self, offset: u64, limit: u64) -> Result<Vec<E::Model>, DbErr> {
        self.select
            .clone()
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
    }
}
