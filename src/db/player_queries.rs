use sqlx::{PgConnection, PgPool};
use uuid::Uuid;
use tracing::info;

use crate::models::player::{Player, PlayerRecord, UpdatePlayerRequest};

#[derive(Debug, Clone)]
pub struct PlayerQueries {
    pool: PgPool,
}

impl PlayerQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, record: &PlayerRecord, user_id: Option<Uuid>) -> Result<Player, sqlx::Error> {
        let player = sqlx::query_as::<_, Player>(
            r#"
            INSERT INTO players (id, first_name, last_name, shirt_number, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&record.first_name)
        .bind(&record.last_name)
        .bind(record.shirt_number)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        info!("Created player {} ({})", player.id, player.display_name());
        Ok(player)
    }

    /// Create, or refresh the shirt number of, the player with this full name.
    pub async fn upsert_by_name(&self, record: &PlayerRecord) -> Result<Player, sqlx::Error> {
        sqlx::query_as::<_, Player>(
            r#"
            INSERT INTO players (id, first_name, last_name, shirt_number)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (first_name, last_name) DO UPDATE SET
                shirt_number = EXCLUDED.shirt_number,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&record.first_name)
        .bind(&record.last_name)
        .bind(record.shirt_number)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn find(&self, player_id: Uuid) -> Result<Option<Player>, sqlx::Error> {
        sqlx::query_as::<_, Player>("SELECT * FROM players WHERE id = $1")
            .bind(player_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Load the player and hold its row lock until the transaction ends.
    pub async fn lock(conn: &mut PgConnection, player_id: Uuid) -> Result<Option<Player>, sqlx::Error> {
        sqlx::query_as::<_, Player>("SELECT * FROM players WHERE id = $1 FOR UPDATE")
            .bind(player_id)
            .fetch_optional(conn)
            .await
    }

    /// The player a user account is linked to, if any.
    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Player>, sqlx::Error> {
        sqlx::query_as::<_, Player>("SELECT * FROM players WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn list(&self) -> Result<Vec<Player>, sqlx::Error> {
        sqlx::query_as::<_, Player>("SELECT * FROM players ORDER BY last_name ASC, first_name ASC")
            .fetch_all(&self.pool)
            .await
    }

    /// Partial update; `None` keeps the stored value, `Some(None)` clears it.
    pub async fn update(&self, player_id: Uuid, changes: &UpdatePlayerRequest) -> Result<Option<Player>, sqlx::Error> {
        sqlx::query_as::<_, Player>(
            r#"
            UPDATE players
            SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                shirt_number = CASE WHEN $4 THEN $5 ELSE shirt_number END,
                user_id = CASE WHEN $6 THEN $7 ELSE user_id END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(player_id)
        .bind(&changes.first_name)
        .bind(&changes.last_name)
        .bind(changes.shirt_number.is_some())
        .bind(changes.shirt_number.flatten())
        .bind(changes.user_id.is_some())
        .bind(changes.user_id.flatten())
        .fetch_optional(&self.pool)
        .await
    }

    /// Votes for the player go with it; matches naming it MVP lose the MVP.
    pub async fn delete(conn: &mut PgConnection, player_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(player_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
