//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is served at `/api/docs` with the raw document at
//! `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// # Registered Endpoints
/// - `POST /api/users` - Create a user
/// - `GET /api/users/{user_id}` - Get a user
/// - `DELETE /api/users/{user_id}` - Delete a user and their records
/// - `POST /api/users/{user_id}/entries` - Create a wellness entry
/// - `GET /api/users/{user_id}/entries` - List wellness entries
/// - `PATCH /api/users/{user_id}/entries/{entry_id}` - Update a wellness entry
/// - `DELETE /api/users/{user_id}/entries/{entry_id}` - Delete a wellness entry
/// - `POST /api/users/{user_id}/cards` - Create a flashcard
/// - `GET /api/users/{user_id}/cards` - List flashcards
/// - `GET /api/users/{user_id}/cards/due` - List due flashcards
/// - `PATCH /api/users/{user_id}/cards/{card_id}` - Update a flashcard
/// - `POST /api/users/{user_id}/cards/{card_id}/review` - Record a review
/// - `DELETE /api/users/{user_id}/cards/{card_id}` - Delete a flashcard
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be served.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Wellspring", description = "Wellspring API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::wellness::WELLNESS_TAG, description = "Wellness entry API routes"),
        (name = controller::flashcard::FLASHCARD_TAG, description = "Flashcard API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::create_user))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::user::delete_user))
        .routes(routes!(controller::wellness::create_entry))
        .routes(routes!(controller::wellness::list_entries))
        .routes(routes!(controller::wellness::update_entry))
        .routes(routes!(controller::wellness::delete_entry))
        .routes(routes!(controller::flashcard::create_card))
        .routes(routes!(controller::flashcard::list_cards))
        .routes(routes!(controller::flashcard::due_cards))
        .routes(routes!(controller::flashcard::update_card))
        .routes(routes!(controller::flashcard::review_card))
        .routes(routes!(controller::flashcard::delete_card))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
