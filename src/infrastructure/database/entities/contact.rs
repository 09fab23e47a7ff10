//! Contact entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// Contact row
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contacts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub first_name: String,

    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub last_name: String,

    pub phone_number: String,

    pub email: String,

    /// Set on insert, never rewritten
    pub created_at: DateTime<Utc>,

    /// Set on every update
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
