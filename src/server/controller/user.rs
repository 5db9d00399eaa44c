use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserDto},
    },
    server::{error::Error, model::app::AppState, service::user::UserService},
};

pub static USER_TAG: &str = "user";

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Empty display name", body = ErrorDto),
        (status = 409, description = "Display name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<CreateUserDto>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let user_service = UserService::new(&state.db);

    let user = user_service.create_user(user).await?;

    Ok((StatusCode::CREATED, Json(user)).into_response())
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user")
    ),
    responses(
        (status = 200, description = "Success when retrieving the user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let user_service = UserService::new(&state.db);

    let user = if let Some(user) = user_service.get_user(user_id).await? {
        user
    } else {
        tracing::debug!("User ID {} not found", user_id);

        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "User not found".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, Json(user)).into_response())
}

/// Delete a user and all of their entries and flashcards
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let user_service = UserService::new(&state.db);

    user_service.delete_user(user_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
