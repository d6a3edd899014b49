use sqlx::PgPool;
use uuid::Uuid;
use tracing::info;

use crate::models::match_event::{Card, CardType, Goal};

/// Goals and cards recorded against matches.
#[derive(Debug, Clone)]
pub struct EventQueries {
    pool: PgPool,
}

impl EventQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert_goal(
        &self,
        match_id: Uuid,
        player_id: Uuid,
        minute: Option<i32>,
        side: Option<&str>,
    ) -> Result<Goal, sqlx::Error> {
        let goal = sqlx::query_as::<_, Goal>(
            r#"
            INSERT INTO goals (id, match_id, player_id, minute, side)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(match_id)
        .bind(player_id)
        .bind(minute)
        .bind(side)
        .fetch_one(&self.pool)
        .await?;

        info!("Goal {} recorded for player {} in match {}", goal.id, player_id, match_id);
        Ok(goal)
    }

    pub async fn list_goals(&self, match_id: Uuid) -> Result<Vec<Goal>, sqlx::Error> {
        sqlx::query_as::<_, Goal>(
            r#"
            SELECT g.*, p.first_name || ' ' || p.last_name AS player_name
            FROM goals g
            JOIN players p ON p.id = g.player_id
            WHERE g.match_id = $1
            ORDER BY g.minute ASC NULLS LAST, g.created_at ASC
            "#,
        )
        .bind(match_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Every goal, optionally only those of one tournament's matches.
    pub async fn all_goals(&self, tournament_id: Option<Uuid>) -> Result<Vec<Goal>, sqlx::Error> {
        sqlx::query_as::<_, Goal>(
            r#"
            SELECT g.*
            FROM goals g
            JOIN matches m ON m.id = g.match_id
            WHERE ($1::uuid IS NULL OR m.tournament_id = $1)
            "#,
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn delete_goal(&self, match_id: Uuid, goal_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1 AND match_id = $2")
            .bind(goal_id)
            .bind(match_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn insert_card(
        &self,
        match_id: Uuid,
        player_id: Uuid,
        card_type: CardType,
        minute: Option<i32>,
    ) -> Result<Card, sqlx::Error> {
        let card = sqlx::query_as::<_, Card>(
            r#"
            INSERT INTO cards (id, match_id, player_id, card_type, minute)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(match_id)
        .bind(player_id)
        .bind(card_type)
        .bind(minute)
        .fetch_one(&self.pool)
        .await?;

        info!("{:?} card {} recorded for player {} in match {}", card_type, card.id, player_id, match_id);
        Ok(card)
    }

    pub async fn list_cards(&self, match_id: Uuid) -> Result<Vec<Card>, sqlx::Error> {
        sqlx::query_as::<_, Card>(
            r#"
            SELECT c.*, p.first_name || ' ' || p.last_name AS player_name
            FROM cards c
            JOIN players p ON p.id = c.player_id
            WHERE c.match_id = $1
            ORDER BY c.minute ASC NULLS LAST, c.created_at ASC
            "#,
        )
        .bind(match_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn all_cards(&self, tournament_id: Option<Uuid>) -> Result<Vec<Card>, sqlx::Error> {
        sqlx::query_as::<_, Card>(
            r#"
            SELECT c.*
            FROM cards c
            JOIN matches m ON m.id = c.match_id
            WHERE ($1::uuid IS NULL OR m.tournament_id = $1)
            "#,
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn delete_card(&self, match_id: Uuid, card_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cards WHERE id = $1 AND match_id = $2")
            .bind(card_id)
            .bind(match_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
