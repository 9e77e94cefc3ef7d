use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use super::date::to_date_string;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Exercise {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub username: String, // copied from the user at creation time
    pub description: String,
    pub duration: i64,
    pub date: String, // YYYY-MM-DD as submitted
}

/// Raw body of `POST /api/users/:id/exercises`.
///
/// Every field is optional here so that the service decides what is missing.
/// Fields stay untyped because clients send both numbers and strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateExerciseRequest {
    pub description: Option<Value>,
    pub duration: Option<Value>,
    pub date: Option<Value>,
}

/// Exercise input after boundary validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
    #[serde(rename = "_id")]
    pub user_id: Uuid,
}

impl From<Exercise> for ExerciseResponse {
    fn from(exercise: Exercise) -> Self {
        Self {
            username: exercise.username,
            description: exercise.description,
            duration: exercise.duration,
            date: to_date_string(&exercise.date),
            user_id: exercise.user_id,
        }
    }
}

/// Query string of `GET /api/users/:id/logs`. Values are kept as text and
/// interpreted leniently by the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: to_date_string(&exercise.date),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseLog {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}
