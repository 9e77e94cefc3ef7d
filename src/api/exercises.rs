use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use super::extract::JsonOrForm;
use super::state::AppState;
use crate::error::ApiError;
use crate::models::{CreateExerciseRequest, DeleteResponse, ExerciseLog, ExerciseResponse, LogQuery};

const USER_NOT_FOUND: &str = "User not found!";
const CREATE_FAILED: &str = "Exercise creation failed!";
const LOG_FAILED: &str = "Failed to retrieve exercise logs";

pub fn exercises_routes(state: AppState) -> Router {
    Router::new()
        .route("/delete", get(delete_all_exercises))
        .with_state(state)
}

// A malformed id fails the lookup itself, so it reports the endpoint's failure.
fn parse_user_id(raw: &str, failure: &'static str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|e| ApiError::internal(failure, e))
}

/// Add an exercise to a user's log
pub async fn add_exercise(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    JsonOrForm(request): JsonOrForm<CreateExerciseRequest>,
) -> Result<(StatusCode, Json<ExerciseResponse>), ApiError> {
    let user_id = parse_user_id(&user_id, CREATE_FAILED)?;

    let exercise = state
        .exercise_service
        .add_exercise(user_id, request)
        .await
        .map_err(|e| ApiError::internal(CREATE_FAILED, e))?
        .ok_or(ApiError::NotFound(USER_NOT_FOUND))?;

    Ok((StatusCode::CREATED, Json(exercise)))
}

/// Get a user's exercise log, optionally bounded by `from`, `to` and `limit`
pub async fn get_log(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<LogQuery>,
) -> Result<Json<ExerciseLog>, ApiError> {
    let user_id = parse_user_id(&user_id, LOG_FAILED)?;

    let log = state
        .exercise_service
        .get_log(user_id, query)
        .await
        .map_err(|e| ApiError::internal(LOG_FAILED, e))?
        .ok_or(ApiError::NotFound(USER_NOT_FOUND))?;

    Ok(Json(log))
}

/// Delete all exercises
pub async fn delete_all_exercises(
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let result = state
        .exercise_service
        .delete_all_exercises()
        .await
        .map_err(|e| ApiError::internal("Deleting all exercises failed!", e))?;

    Ok(Json(DeleteResponse {
        message: "All exercises have been deleted!".to_string(),
        result,
    }))
}
