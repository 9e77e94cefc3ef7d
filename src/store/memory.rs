use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ExerciseFilter, Store, StoreError};
use crate::models::{Exercise, User};

/// In-process store for local runs and tests. Vectors keep insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    exercises: RwLock<Vec<Exercise>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        self.users.write().await.push(user.clone());
        Ok(())
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.read().await.clone())
    }

    async fn delete_users(&self) -> Result<u64, StoreError> {
        let mut users = self.users.write().await;
        let deleted = users.len() as u64;
        users.clear();
        Ok(deleted)
    }

    async fn insert_exercise(&self, exercise: &Exercise) -> Result<(), StoreError> {
        self.exercises.write().await.push(exercise.clone());
        Ok(())
    }

    async fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, StoreError> {
        let exercises = self.exercises.read().await;
        let matching = exercises.iter().filter(|e| filter.matches(e)).cloned();

        Ok(match filter.limit {
            Some(limit) => matching.take(usize::try_from(limit).unwrap_or(usize::MAX)).collect(),
            None => matching.collect(),
        })
    }

    async fn delete_exercises(&self) -> Result<u64, StoreError> {
        let mut exercises = self.exercises.write().await;
        let deleted = exercises.len() as u64;
        exercises.clear();
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn exercise(user: &User, description: &str, date: &str) -> Exercise {
        Exercise {
            id: Uuid::new_v4(),
            user_id: user.id,
            username: user.username.clone(),
            description: description.to_string(),
            duration: 30,
            date: date.to_string(),
        }
    }

    fn filter(user: &User, limit: Option<u64>) -> ExerciseFilter {
        ExerciseFilter {
            user_id: user.id,
            from: "1970-01-01".to_string(),
            to: "2100-01-01".to_string(),
            limit,
        }
    }

    #[tokio::test]
    async fn test_users_keep_insertion_order() {
        let store = MemoryStore::new();
        let alice = User::new("alice");
        let bob = User::new("bob");
        store.insert_user(&alice).await.unwrap();
        store.insert_user(&bob).await.unwrap();

        assert_eq!(store.list_users().await.unwrap(), vec![alice.clone(), bob]);
        assert_eq!(store.find_user(alice.id).await.unwrap(), Some(alice));
        assert_eq!(store.find_user(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_exercises_filters_by_user_and_range() {
        let store = MemoryStore::new();
        let alice = User::new("alice");
        let bob = User::new("bob");

        store.insert_exercise(&exercise(&alice, "early", "2024-01-01")).await.unwrap();
        store.insert_exercise(&exercise(&alice, "inside", "2024-01-05")).await.unwrap();
        store.insert_exercise(&exercise(&alice, "late", "2024-02-01")).await.unwrap();
        store.insert_exercise(&exercise(&bob, "other", "2024-01-05")).await.unwrap();

        let found = store
            .find_exercises(&ExerciseFilter {
                user_id: alice.id,
                from: "2024-01-02".to_string(),
                to: "2024-01-31".to_string(),
                limit: None,
            })
            .await
            .unwrap();

        let descriptions: Vec<_> = found.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["inside"]);
    }

    #[tokio::test]
    async fn test_find_exercises_respects_limit() {
        let store = MemoryStore::new();
        let alice = User::new("alice");
        for day in 1..=3 {
            store
                .insert_exercise(&exercise(&alice, &format!("day {day}"), &format!("2024-01-0{day}")))
                .await
                .unwrap();
        }

        assert_eq!(store.find_exercises(&filter(&alice, Some(2))).await.unwrap().len(), 2);
        assert_eq!(store.find_exercises(&filter(&alice, None)).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_bulk_deletes_report_counts() {
        let store = MemoryStore::new();
        let alice = User::new("alice");
        store.insert_user(&alice).await.unwrap();
        store.insert_exercise(&exercise(&alice, "run", "2024-01-01")).await.unwrap();

        assert_eq!(store.delete_users().await.unwrap(), 1);
        assert_eq!(store.delete_users().await.unwrap(), 0);

        // exercises survive the user delete
        assert_eq!(store.find_exercises(&filter(&alice, None)).await.unwrap().len(), 1);
        assert_eq!(store.delete_exercises().await.unwrap(), 1);
        assert_eq!(store.delete_exercises().await.unwrap(), 0);
    }
}
