use anyhow::Result;
use std::sync::Arc;

use crate::models::{coerce_text, CreateUser, DeleteResult, User};
use crate::store::Store;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn Store>,
}

impl UserService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Usernames are neither validated nor deduplicated; a missing one is
    /// stored as empty and scalars are stored as their text.
    pub async fn create_user(&self, user_data: CreateUser) -> Result<User> {
        let username = match user_data.username {
            Some(value) => coerce_text(&value)?.unwrap_or_default(),
            None => String::new(),
        };
        let user = User::new(username);
        self.store.insert_user(&user).await?;

        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.store.list_users().await?)
    }

    /// Exercises referencing the removed users are left in place.
    pub async fn delete_all_users(&self) -> Result<DeleteResult> {
        let deleted = self.store.delete_users().await?;

        tracing::info!(deleted, "Deleted all users");
        Ok(DeleteResult::new(deleted))
    }
}
