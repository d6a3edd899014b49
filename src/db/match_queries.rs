use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;
use tracing::{debug, info};

use crate::models::matches::{Match, UpdateMatchRequest};

#[derive(Debug, Clone)]
pub struct MatchQueries {
    pool: PgPool,
}

/// Columns of a new fixture.
#[derive(Debug, Clone)]
pub struct NewMatch {
    pub tournament_id: Option<Uuid>,
    pub match_date: Option<DateTime<Utc>>,
    pub team1: String,
    pub team2: String,
    pub venue: Option<String>,
}

impl MatchQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, new_match: &NewMatch) -> Result<Match, sqlx::Error> {
        let created = sqlx::query_as::<_, Match>(
            r#"
            INSERT INTO matches (id, tournament_id, match_date, team1, team2, venue)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new_match.tournament_id)
        .bind(new_match.match_date)
        .bind(&new_match.team1)
        .bind(&new_match.team2)
        .bind(&new_match.venue)
        .fetch_one(&self.pool)
        .await?;

        info!("Created match {}: {} vs {}", created.id, created.team1, created.team2);
        Ok(created)
    }

    pub async fn find(&self, match_id: Uuid) -> Result<Option<Match>, sqlx::Error> {
        sqlx::query_as::<_, Match>("SELECT * FROM matches WHERE id = $1")
            .bind(match_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// All matches, optionally restricted to one tournament, oldest first.
    pub async fn list(&self, tournament_id: Option<Uuid>) -> Result<Vec<Match>, sqlx::Error> {
        sqlx::query_as::<_, Match>(
            r#"
            SELECT * FROM matches
            WHERE ($1::uuid IS NULL OR tournament_id = $1)
            ORDER BY match_date ASC NULLS LAST, created_at ASC
            "#,
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Matches with both goal fields set.
    pub async fn list_with_result(&self, tournament_id: Option<Uuid>) -> Result<Vec<Match>, sqlx::Error> {
        sqlx::query_as::<_, Match>(
            r#"
            SELECT * FROM matches
            WHERE goals_team1 IS NOT NULL
              AND goals_team2 IS NOT NULL
              AND ($1::uuid IS NULL OR tournament_id = $1)
            ORDER BY match_date ASC NULLS LAST, created_at ASC
            "#,
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Matches with a result between `team` and `rival`, newest first.
    pub async fn list_head_to_head(&self, team: &str, rival: &str) -> Result<Vec<Match>, sqlx::Error> {
        sqlx::query_as::<_, Match>(
            r#"
            SELECT * FROM matches
            WHERE goals_team1 IS NOT NULL
              AND goals_team2 IS NOT NULL
              AND ((team1 = $1 AND team2 = $2) OR (team1 = $2 AND team2 = $1))
            ORDER BY match_date DESC NULLS LAST
            "#,
        )
        .bind(team)
        .bind(rival)
        .fetch_all(&self.pool)
        .await
    }

    /// Partial update; `None` keeps the stored value, `Some(None)` clears it.
    pub async fn update_details(
        &self,
        match_id: Uuid,
        changes: &UpdateMatchRequest,
    ) -> Result<Option<Match>, sqlx::Error> {
        debug!("Updating details of match {}", match_id);

        sqlx::query_as::<_, Match>(
            r#"
            UPDATE matches
            SET
                team1 = COALESCE($2, team1),
                team2 = COALESCE($3, team2),
                match_date = CASE WHEN $4 THEN $5 ELSE match_date END,
                venue = CASE WHEN $6 THEN $7 ELSE venue END,
                tournament_id = CASE WHEN $8 THEN $9 ELSE tournament_id END,
                mvp_player_id = CASE WHEN $10 THEN $11 ELSE mvp_player_id END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(match_id)
        .bind(&changes.team1)
        .bind(&changes.team2)
        .bind(changes.match_date.is_some())
        .bind(changes.match_date.flatten())
        .bind(changes.venue.is_some())
        .bind(changes.venue.clone().flatten())
        .bind(changes.tournament_id.is_some())
        .bind(changes.tournament_id.flatten())
        .bind(changes.mvp_player_id.is_some())
        .bind(changes.mvp_player_id.flatten())
        .fetch_optional(&self.pool)
        .await
    }

    /// Load the match and hold its row lock until the transaction ends.
    ///
    /// Everything that recomputes the stored MVP takes this lock first.
    pub async fn lock(conn: &mut PgConnection, match_id: Uuid) -> Result<Option<Match>, sqlx::Error> {
        sqlx::query_as::<_, Match>("SELECT * FROM matches WHERE id = $1 FOR UPDATE")
            .bind(match_id)
            .fetch_optional(conn)
            .await
    }

    /// Matches whose MVP depends on `player_id`, locked in id order.
    pub async fn lock_voted_for(conn: &mut PgConnection, player_id: Uuid) -> Result<Vec<Uuid>, sqlx::Error> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT id FROM matches
            WHERE mvp_player_id = $1
               OR id IN (SELECT match_id FROM mvp_votes WHERE voted_player_id = $1)
            ORDER BY id
            FOR UPDATE
            "#,
        )
        .bind(player_id)
        .fetch_all(conn)
        .await
    }

    /// Store both goal counts and the MVP derived from the current votes.
    ///
    /// A `None` MVP keeps whatever MVP was stored before.
    pub async fn record_result(
        conn: &mut PgConnection,
        match_id: Uuid,
        goals_team1: i32,
        goals_team2: i32,
        mvp_player_id: Option<Uuid>,
    ) -> Result<Match, sqlx::Error> {
        info!("Recording result for match {}: {} - {}", match_id, goals_team1, goals_team2);

        sqlx::query_as::<_, Match>(
            r#"
            UPDATE matches
            SET
                goals_team1 = $2,
                goals_team2 = $3,
                played = TRUE,
                mvp_player_id = COALESCE($4, mvp_player_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(match_id)
        .bind(goals_team1)
        .bind(goals_team2)
        .bind(mvp_player_id)
        .fetch_one(conn)
        .await
    }

    pub async fn set_mvp(conn: &mut PgConnection, match_id: Uuid, mvp_player_id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE matches SET mvp_player_id = $2, updated_at = NOW() WHERE id = $1")
            .bind(match_id)
            .bind(mvp_player_id)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Returns false when no such match existed.
    pub async fn delete(&self, match_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM matches WHERE id = $1")
            .bind(match_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
