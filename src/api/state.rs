use std::sync::Arc;

use crate::services::{ExerciseService, UserService};
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub exercise_service: ExerciseService,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            user_service: UserService::new(store.clone()),
            exercise_service: ExerciseService::new(store),
        }
    }
}
