//! Contact DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationErrors};

use crate::domain::{Contact, ContactInput};
use crate::shared::DEFAULT_PAGE_SIZE;

/// A stored contact as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Contact> for ContactResponse {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            first_name: c.first_name,
            last_name: c.last_name,
            phone_number: c.phone_number,
            email: c.email,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Create/update payload.
///
/// Missing or `null` fields deserialize as empty and are reported by
/// validation. Server-owned fields (`id`, timestamps) are ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    #[schema(example = "Ada", max_length = 50)]
    pub first_name: Option<String>,
    #[schema(example = "Lovelace", max_length = 50)]
    pub last_name: Option<String>,
    #[schema(example = "+44 20 7946 0958")]
    pub phone_number: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
}

impl From<ContactRequest> for ContactInput {
    fn from(r: ContactRequest) -> Self {
        Self {
            first_name: r.first_name.unwrap_or_default(),
            last_name: r.last_name.unwrap_or_default(),
            phone_number: r.phone_number.unwrap_or_default(),
            email: r.email.unwrap_or_default(),
        }
    }
}

impl Validate for ContactRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        ContactInput::from(self.clone()).validate()
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(rename_all = "camelCase", parameter_in = Query)]
pub struct ListContactsParams {
    /// Page number, 1-based. Values below 1 select the first page.
    #[serde(default = "default_page_number")]
    pub page_number: i64,
    /// Items per page. Values below 1 fall back to 10.
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page_number() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE as i64
}
