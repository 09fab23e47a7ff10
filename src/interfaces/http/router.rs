//! API Router with Swagger UI

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::{ErrorResponse, ValidationProblem};
use super::modules::contacts::{self, ContactRequest, ContactResponse, ContactsState};
use super::modules::health;
use crate::application::ContactService;
use crate::shared::PaginatedResult;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        contacts::list_contacts,
        contacts::get_contact,
        contacts::create_contact,
        contacts::update_contact,
        contacts::delete_contact,
    ),
    components(
        schemas(
            health::HealthResponse,
            ContactResponse,
            ContactRequest,
            PaginatedResult<ContactResponse>,
            ValidationProblem,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Contacts", description = "Contact list CRUD with pagination"),
    ),
    info(
        title = "Contact List Service API",
        version = "1.0.0",
        description = "REST API for managing contacts (name, phone, email)",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(service: Arc<ContactService>) -> Router {
    let state = ContactsState { service };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/contacts",
            get(contacts::list_contacts).post(contacts::create_contact),
        )
        .route(
            "/api/contacts/{id}",
            get(contacts::get_contact)
                .put(contacts::update_contact)
                .delete(contacts::delete_contact),
        )
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
