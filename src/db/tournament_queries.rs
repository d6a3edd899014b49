use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::tournament::Tournament;

#[derive(Debug, Clone)]
pub struct TournamentQueries {
    pool: PgPool,
}

impl TournamentQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, name: &str, starts_on: NaiveDate, ends_on: NaiveDate) -> Result<Tournament, sqlx::Error> {
        sqlx::query_as::<_, Tournament>(
            r#"
            INSERT INTO tournaments (id, name, starts_on, ends_on)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(starts_on)
        .bind(ends_on)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn find(&self, tournament_id: Uuid) -> Result<Option<Tournament>, sqlx::Error> {
        sqlx::query_as::<_, Tournament>("SELECT * FROM tournaments WHERE id = $1")
            .bind(tournament_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Most recent start first.
    pub async fn list(&self) -> Result<Vec<Tournament>, sqlx::Error> {
        sqlx::query_as::<_, Tournament>("SELECT * FROM tournaments ORDER BY starts_on DESC, created_at DESC")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn delete(&self, tournament_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tournaments WHERE id = $1")
            .bind(tournament_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
