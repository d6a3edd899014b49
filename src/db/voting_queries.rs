use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::voting::{MvpVote, Rating};

/// MVP votes and peer ratings.
#[derive(Debug, Clone)]
pub struct VotingQueries {
    pool: PgPool,
}

impl VotingQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Changing a vote moves its cast time to now.
    pub async fn upsert_vote(
        conn: &mut PgConnection,
        match_id: Uuid,
        voter_id: Uuid,
        voted_player_id: Uuid,
    ) -> Result<MvpVote, sqlx::Error> {
        sqlx::query_as::<_, MvpVote>(
            r#"
            INSERT INTO mvp_votes (match_id, voter_id, voted_player_id, cast_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (match_id, voter_id) DO UPDATE SET
                voted_player_id = EXCLUDED.voted_player_id,
                cast_at = NOW()
            RETURNING *
            "#,
        )
        .bind(match_id)
        .bind(voter_id)
        .bind(voted_player_id)
        .fetch_one(conn)
        .await
    }

    pub async fn list_votes(&self, match_id: Uuid) -> Result<Vec<MvpVote>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        Self::votes_for_match(&mut conn, match_id).await
    }

    /// Votes of one match in cast order, read on `conn`.
    pub async fn votes_for_match(conn: &mut PgConnection, match_id: Uuid) -> Result<Vec<MvpVote>, sqlx::Error> {
        sqlx::query_as::<_, MvpVote>(
            "SELECT * FROM mvp_votes WHERE match_id = $1 ORDER BY cast_at ASC, voter_id ASC",
        )
        .bind(match_id)
        .fetch_all(conn)
        .await
    }

    /// Upsert a batch of ratings from one rater atomically.
    pub async fn upsert_ratings(
        &self,
        match_id: Uuid,
        rater_id: Uuid,
        entries: &[(Uuid, i32)],
    ) -> Result<Vec<Rating>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let mut stored = Vec::with_capacity(entries.len());

        for (rated_player_id, score) in entries {
            let rating = sqlx::query_as::<_, Rating>(
                r#"
                INSERT INTO ratings (match_id, rater_id, rated_player_id, score, updated_at)
                VALUES ($1, $2, $3, $4, NOW())
                ON CONFLICT (match_id, rater_id, rated_player_id) DO UPDATE SET
                    score = EXCLUDED.score,
                    updated_at = NOW()
                RETURNING *
                "#,
            )
            .bind(match_id)
            .bind(rater_id)
            .bind(rated_player_id)
            .bind(score)
            .fetch_one(&mut *tx)
            .await?;
            stored.push(rating);
        }

        tx.commit().await?;
        Ok(stored)
    }

    pub async fn list_ratings(&self, match_id: Uuid) -> Result<Vec<Rating>, sqlx::Error> {
        sqlx::query_as::<_, Rating>("SELECT * FROM ratings WHERE match_id = $1")
            .bind(match_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn all_ratings(&self, tournament_id: Option<Uuid>) -> Result<Vec<Rating>, sqlx::Error> {
        sqlx::query_as::<_, Rating>(
            r#"
            SELECT r.*
            FROM ratings r
            JOIN matches m ON m.id = r.match_id
            WHERE ($1::uuid IS NULL OR m.tournament_id = $1)
            "#,
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await
    }
}
