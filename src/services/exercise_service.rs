use anyhow::Result;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::{
    parse_limit, today, validate_exercise, CreateExerciseRequest, DeleteResult, Exercise,
    ExerciseLog, ExerciseResponse, LogEntry, LogQuery, EPOCH_DATE,
};
use crate::store::{ExerciseFilter, Store};

#[derive(Clone)]
pub struct ExerciseService {
    store: Arc<dyn Store>,
}

impl ExerciseService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Record an exercise for `user_id`. Returns `Ok(None)` when the user does
    /// not exist, in which case nothing is written.
    ///
    /// The user lookup and the insert are separate store calls; a user
    /// deleted in between still receives the exercise.
    pub async fn add_exercise(
        &self,
        user_id: Uuid,
        request: CreateExerciseRequest,
    ) -> Result<Option<ExerciseResponse>> {
        let user = match self.store.find_user(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let input = validate_exercise(request)?;
        let exercise = Exercise {
            id: Uuid::new_v4(),
            user_id: user.id,
            username: user.username,
            description: input.description,
            duration: input.duration,
            date: input.date,
        };

        self.store.insert_exercise(&exercise).await?;
        tracing::debug!(exercise_id = %exercise.id, user_id = %exercise.user_id, "Recorded exercise");

        Ok(Some(ExerciseResponse::from(exercise)))
    }

    /// Exercise log of `user_id` within `[from, to]`, or `Ok(None)` when the
    /// user does not exist.
    pub async fn get_log(&self, user_id: Uuid, query: LogQuery) -> Result<Option<ExerciseLog>> {
        let user = match self.store.find_user(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let filter = ExerciseFilter {
            user_id: user.id,
            from: query
                .from
                .filter(|f| !f.is_empty())
                .unwrap_or_else(|| EPOCH_DATE.to_string()),
            to: query.to.filter(|t| !t.is_empty()).unwrap_or_else(today),
            limit: parse_limit(query.limit.as_deref()),
        };

        let log: Vec<LogEntry> = self
            .store
            .find_exercises(&filter)
            .await?
            .into_iter()
            .map(LogEntry::from)
            .collect();

        Ok(Some(ExerciseLog {
            id: user.id,
            username: user.username,
            count: log.len(),
            log,
        }))
    }

    pub async fn delete_all_exercises(&self) -> Result<DeleteResult> {
        let deleted = self.store.delete_exercises().await?;

        tracing::info!(deleted, "Deleted all exercises");
        Ok(DeleteResult::new(deleted))
    }
}
