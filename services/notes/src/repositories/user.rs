//! User repository backed by PostgreSQL

use async_trait::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::info;

use super::UserRepository;
use crate::models::{NewUser, User};

/// User repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: &NewUser) -> DatabaseResult<User> {
        info!("Creating new user: {}", new_user.username);

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, name, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, name, password_hash, ARRAY[]::uuid[] AS notes
            "#,
        )
        .bind(&new_user.username)
        .bind(new_user.name.as_deref())
        .bind(&new_user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::from_write(e, "username", &new_user.username))?;

        Ok(user)
    }

    async fn find_all(&self) -> DatabaseResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.username, u.name, u.password_hash,
                   COALESCE(
                       array_agg(un.note_id ORDER BY un.position)
                           FILTER (WHERE un.note_id IS NOT NULL),
                       ARRAY[]::uuid[]
                   ) AS notes
            FROM users u
            LEFT JOIN user_notes un ON un.user_id = u.id
            GROUP BY u.id
            ORDER BY u.created_at, u.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn count(&self) -> DatabaseResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
