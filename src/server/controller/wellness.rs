use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        wellness::{CreateWellnessEntryDto, UpdateWellnessEntryDto, WellnessEntryDto},
    },
    server::{error::Error, model::app::AppState, service::wellness::WellnessService},
};

pub static WELLNESS_TAG: &str = "wellness";

/// Create a wellness entry for a user
///
/// The wellness score is computed from the four lifestyle inputs and stored
/// with the entry.
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/entries",
    tag = WELLNESS_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the owning user")
    ),
    request_body = CreateWellnessEntryDto,
    responses(
        (status = 201, description = "Entry created", body = WellnessEntryDto),
        (status = 400, description = "Input out of range", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Entry already exists for this date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_entry(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(entry): Json<CreateWellnessEntryDto>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let wellness_service = WellnessService::new(&state.db);

    let entry = wellness_service.create_entry(user_id, entry).await?;

    Ok((StatusCode::CREATED, Json(entry)).into_response())
}

/// List a user's wellness entries, most recent date first
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/entries",
    tag = WELLNESS_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the owning user")
    ),
    responses(
        (status = 200, description = "Success when retrieving entries", body = Vec<WellnessEntryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_entries(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let wellness_service = WellnessService::new(&state.db);

    let entries = wellness_service.list_entries(user_id).await?;

    Ok((StatusCode::OK, Json(entries)).into_response())
}

/// Update a wellness entry's lifestyle inputs
///
/// Omitted fields keep their stored values; the score is recomputed from the
/// merged inputs.
#[utoipa::path(
    patch,
    path = "/api/users/{user_id}/entries/{entry_id}",
    tag = WELLNESS_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the owning user"),
        ("entry_id" = i32, Path, description = "ID of the entry")
    ),
    request_body = UpdateWellnessEntryDto,
    responses(
        (status = 200, description = "Entry updated", body = WellnessEntryDto),
        (status = 400, description = "Input out of range", body = ErrorDto),
        (status = 404, description = "Entry not found for this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_entry(
    State(state): State<AppState>,
    Path((user_id, entry_id)): Path<(i32, i32)>,
    Json(update): Json<UpdateWellnessEntryDto>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let wellness_service = WellnessService::new(&state.db);

    let entry = wellness_service
        .update_entry(user_id, entry_id, update)
        .await?;

    Ok((StatusCode::OK, Json(entry)).into_response())
}

/// Delete a wellness entry
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/entries/{entry_id}",
    tag = WELLNESS_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the owning user"),
        ("entry_id" = i32, Path, description = "ID of the entry")
    ),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 404, description = "Entry not found for this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_entry(
    State(state): State<AppState>,
    Path((user_id, entry_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let wellness_service = WellnessService::new(&state.db);

    wellness_service.delete_entry(user_id, entry_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
