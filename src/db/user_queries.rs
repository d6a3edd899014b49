use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::{UserCredentials, UserRole, UserStatus};

/// Key of the advisory lock held while a user is inserted.
const REGISTRATION_LOCK: i64 = 0x636c_7562;

#[derive(Debug, Clone)]
pub struct UserQueries {
    pool: PgPool,
}

impl UserQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert an active user. The first account of the club becomes admin,
    /// every later one a member.
    ///
    /// Registrations are serialized on an advisory lock so two concurrent
    /// first sign-ups cannot both see an empty table.
    pub async fn insert(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<(Uuid, UserRole), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(REGISTRATION_LOCK)
            .execute(&mut *tx)
            .await?;

        let created = sqlx::query_as::<_, (Uuid, UserRole)>(
            r#"
            INSERT INTO users (id, username, password_hash, email, role, status, created_at, updated_at)
            SELECT $1, $2, $3, $4,
                   CASE WHEN EXISTS (SELECT 1 FROM users) THEN $5 ELSE $6 END,
                   $7, $8, $8
            RETURNING id, role
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(password_hash)
        .bind(email)
        .bind(UserRole::Member)
        .bind(UserRole::Admin)
        .bind(UserStatus::Active)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    pub async fn find_credentials(&self, username: &str) -> Result<Option<UserCredentials>, sqlx::Error> {
        sqlx::query_as::<_, UserCredentials>(
            "SELECT id, username, password_hash, role, status FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
    }
}
