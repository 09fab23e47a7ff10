//! Contact REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info, warn};

use super::dto::{ContactRequest, ContactResponse, ListContactsParams};
use crate::application::ContactService;
use crate::interfaces::http::common::{
    ApiError, ErrorResponse, IdPath, ValidatedJson, ValidationProblem,
};
use crate::shared::PaginatedResult;

/// Contacts handler state
#[derive(Clone)]
pub struct ContactsState {
    pub service: Arc<ContactService>,
}

/// Path of the get-by-id operation for a contact.
pub fn contact_location(id: i32) -> String {
    format!("/api/contacts/{}", id)
}

#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "Contacts",
    params(ListContactsParams),
    responses(
        (status = 200, description = "One page of contacts ordered by last name, then first name",
            body = PaginatedResult<ContactResponse>),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn list_contacts(
    State(state): State<ContactsState>,
    Query(params): Query<ListContactsParams>,
) -> Result<Json<PaginatedResult<ContactResponse>>, ApiError> {
    info!(
        page_number = params.page_number,
        page_size = params.page_size,
        "Getting contacts"
    );

    let page = state
        .service
        .list_contacts(params.page_number, params.page_size)
        .await
        .map_err(|e| {
            error!(error = %e, "Error occurred while getting contacts");
            ApiError::Internal
        })?;

    Ok(Json(page.map(ContactResponse::from)))
}

#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    tag = "Contacts",
    params(("id" = i32, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "Contact details", body = ContactResponse),
        (status = 404, description = "Not found"),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn get_contact(
    State(state): State<ContactsState>,
    IdPath(id): IdPath,
) -> Result<Json<ContactResponse>, ApiError> {
    info!(id, "Getting contact by id");

    match state.service.get_contact(id).await {
        Ok(Some(contact)) => Ok(Json(contact.into())),
        Ok(None) => {
            warn!(id, "Contact not found");
            Err(ApiError::NotFound)
        }
        Err(e) => {
            error!(id, error = %e, "Error occurred while getting contact");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "Contacts",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Created", body = ContactResponse,
            headers(("Location" = String, description = "URL of the new contact"))),
        (status = 400, description = "Validation error", body = ValidationProblem),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn create_contact(
    State(state): State<ContactsState>,
    ValidatedJson(request): ValidatedJson<ContactRequest>,
) -> Result<Response, ApiError> {
    info!(contact = ?request, "Creating new contact");

    let created = state
        .service
        .create_contact(request.clone().into())
        .await
        .map_err(|e| {
            error!(contact = ?request, error = %e, "Error occurred while creating contact");
            ApiError::Internal
        })?;

    let location = contact_location(created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ContactResponse::from(created)),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    tag = "Contacts",
    params(("id" = i32, Path, description = "Contact ID")),
    request_body = ContactRequest,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation error", body = ValidationProblem),
        (status = 404, description = "Not found"),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn update_contact(
    State(state): State<ContactsState>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<ContactRequest>,
) -> Result<StatusCode, ApiError> {
    info!(id, contact = ?request, "Updating contact");

    match state.service.update_contact(id, request.clone().into()).await {
        Ok(Some(_)) => Ok(StatusCode::NO_CONTENT),
        Ok(None) => {
            warn!(id, "Contact not found for update");
            Err(ApiError::NotFound)
        }
        Err(e) => {
            error!(id, contact = ?request, error = %e, "Error occurred while updating contact");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    tag = "Contacts",
    params(("id" = i32, Path, description = "Contact ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn delete_contact(
    State(state): State<ContactsState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    info!(id, "Deleting contact");

    match state.service.delete_contact(id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => {
            warn!(id, "Contact not found for deletion");
            Err(ApiError::NotFound)
        }
        Err(e) => {
            error!(id, error = %e, "Error occurred while deleting contact");
            Err(ApiError::Internal)
        }
    }
}
