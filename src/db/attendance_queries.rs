use sqlx::PgPool;
use uuid::Uuid;

use crate::models::attendance::{Attendance, AttendanceStatus};

#[derive(Debug, Clone)]
pub struct AttendanceQueries {
    pool: PgPool,
}

impl AttendanceQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// One row per (match, user); the latest answer replaces the previous one.
    pub async fn upsert(
        &self,
        match_id: Uuid,
        user_id: Uuid,
        status: AttendanceStatus,
        excuse: Option<&str>,
    ) -> Result<Attendance, sqlx::Error> {
        sqlx::query_as::<_, Attendance>(
            r#"
            INSERT INTO attendance (match_id, user_id, status, excuse, updated_at)
            VALUES ($1, $2, $3, $4, NOW())
            ON CONFLICT (match_id, user_id) DO UPDATE SET
                status = EXCLUDED.status,
                excuse = EXCLUDED.excuse,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(match_id)
        .bind(user_id)
        .bind(status)
        .bind(excuse)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn list(&self, match_id: Uuid) -> Result<Vec<Attendance>, sqlx::Error> {
        sqlx::query_as::<_, Attendance>(
            r#"
            SELECT a.*, u.username
            FROM attendance a
            JOIN users u ON u.id = a.user_id
            WHERE a.match_id = $1
            ORDER BY a.status DESC, u.username ASC
            "#,
        )
        .bind(match_id)
        .fetch_all(&self.pool)
        .await
    }
}
