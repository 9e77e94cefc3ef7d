use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{ExerciseFilter, Store, StoreError};
use crate::models::{Exercise, User};

pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Apply the embedded migrations. Safe to run on every start.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.db).await?;
        Ok(())
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO users (id, username) VALUES ($1, $2)")
            .bind(user.id)
            .bind(&user.username)
            .execute(&self.db)
            .await?;

        Ok(())
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT id, username FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>("SELECT id, username FROM users ORDER BY seq")
            .fetch_all(&self.db)
            .await?;

        Ok(users)
    }

    async fn delete_users(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM users").execute(&self.db).await?;
        Ok(result.rows_affected())
    }

    async fn insert_exercise(&self, exercise: &Exercise) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO exercises (id, user_id, username, description, duration, date)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(exercise.id)
        .bind(exercise.user_id)
        .bind(&exercise.username)
        .bind(&exercise.description)
        .bind(exercise.duration)
        .bind(&exercise.date)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    async fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, StoreError> {
        // LIMIT NULL is LIMIT ALL in Postgres
        let limit = filter.limit.map(|l| i64::try_from(l).unwrap_or(i64::MAX));

        let exercises = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, user_id, username, description, duration, date
            FROM exercises
            WHERE user_id = $1 AND date >= $2 AND date <= $3
            ORDER BY seq
            LIMIT $4
            "#,
        )
        .bind(filter.user_id)
        .bind(&filter.from)
        .bind(&filter.to)
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(exercises)
    }

    async fn delete_exercises(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM exercises").execute(&self.db).await?;
        Ok(result.rows_affected())
    }
}
