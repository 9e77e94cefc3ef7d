use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};

use super::exercises::{add_exercise, get_log};
use super::extract::JsonOrForm;
use super::state::AppState;
use crate::error::ApiError;
use crate::models::{CreateUser, DeleteResponse, User, UserResponse};

pub fn users_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/delete", get(delete_all_users))
        .route("/:id/exercises", post(add_exercise))
        .route("/:id/logs", get(get_log))
        .with_state(state)
}

/// List every user. An empty collection is reported as 404.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state
        .user_service
        .list_users()
        .await
        .map_err(|e| ApiError::internal("Getting all users failed!", e))?;

    if users.is_empty() {
        return Err(ApiError::NotFound("No users found in the database!"));
    }

    Ok(Json(users))
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    JsonOrForm(request): JsonOrForm<CreateUser>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state
        .user_service
        .create_user(request)
        .await
        .map_err(|e| ApiError::internal("User creation failed!", e))?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Delete all users
pub async fn delete_all_users(
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let result = state
        .user_service
        .delete_all_users()
        .await
        .map_err(|e| ApiError::internal("Deleting all users failed!", e))?;

    Ok(Json(DeleteResponse {
        message: "All users have been deleted!".to_string(),
        result,
    }))
}
