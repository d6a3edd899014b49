use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::helpers::{map_foreign_key_violation, require_record};
use crate::db::match_queries::MatchQueries;
use crate::db::player_queries::PlayerQueries;
use crate::db::voting_queries::VotingQueries;
use crate::error::AppError;
use crate::league::mvp::{ensure_not_self_vote, select_mvp};
use crate::league::player_stats::rating_averages;
use crate::league::validation::ClubValidator;
use crate::league::window::MatchWindow;
use crate::models::voting::{CastVoteRequest, MatchRatingsResponse, MvpVote, Rating, SubmitRatingsRequest, VoteResponse};

/// MVP voting and peer ratings for played matches.
pub struct VotingService {
    pool: PgPool,
    matches: MatchQueries,
    players: PlayerQueries,
    voting: VotingQueries,
    validator: ClubValidator,
}

impl VotingService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            matches: MatchQueries::new(pool.clone()),
            players: PlayerQueries::new(pool.clone()),
            voting: VotingQueries::new(pool.clone()),
            pool,
            validator: ClubValidator::new(),
        }
    }

    /// The player the user plays as, if the account is linked to one.
    async fn linked_player_id(&self, user_id: Uuid) -> Result<Option<Uuid>, AppError> {
        Ok(self.players.find_by_user(user_id).await?.map(|p| p.id))
    }

    pub async fn list_votes(&self, match_id: Uuid) -> Result<Vec<MvpVote>, AppError> {
        require_record(self.matches.find(match_id).await, "Match")?;
        Ok(self.voting.list_votes(match_id).await?)
    }

    /// Cast or change the caller's MVP vote and store the new tally leader.
    ///
    /// The vote, the recount and the stored MVP share one transaction that
    /// holds the match row lock, so concurrent voters apply in turn.
    pub async fn cast_vote(
        &self,
        match_id: Uuid,
        voter_id: Uuid,
        request: &CastVoteRequest,
        now: DateTime<Utc>,
    ) -> Result<VoteResponse, AppError> {
        let voter_player_id = self.linked_player_id(voter_id).await?;

        let mut tx = self.pool.begin().await?;
        let current = require_record(MatchQueries::lock(&mut tx, match_id).await, "Match")?;

        ensure_not_self_vote(voter_player_id, request.voted_player_id)?;
        MatchWindow::for_match(&current).ensure_voting_open(now)?;

        let vote = VotingQueries::upsert_vote(&mut tx, match_id, voter_id, request.voted_player_id)
            .await
            .map_err(|e| map_foreign_key_violation(e, "Player"))?;

        let votes = VotingQueries::votes_for_match(&mut tx, match_id).await?;
        let mvp_player_id = select_mvp(&votes);
        if let Some(mvp) = mvp_player_id {
            MatchQueries::set_mvp(&mut tx, match_id, mvp).await?;
        }
        tx.commit().await?;

        tracing::info!("User {} voted in match {}; MVP is now {:?}", voter_id, match_id, mvp_player_id);
        Ok(VoteResponse { vote, mvp_player_id })
    }

    pub async fn submit_ratings(
        &self,
        match_id: Uuid,
        rater_id: Uuid,
        request: &SubmitRatingsRequest,
        now: DateTime<Utc>,
    ) -> Result<Vec<Rating>, AppError> {
        let current = require_record(self.matches.find(match_id).await, "Match")?;

        let rater_player_id = self.linked_player_id(rater_id).await?;
        self.validator.validate_ratings(rater_player_id, &request.ratings)?;

        MatchWindow::for_match(&current).ensure_voting_open(now)?;

        let entries: Vec<(Uuid, i32)> = request.ratings
            .iter()
            .map(|r| (r.rated_player_id, r.score))
            .collect();

        self.voting
            .upsert_ratings(match_id, rater_id, &entries)
            .await
            .map_err(|e| map_foreign_key_violation(e, "Player"))
    }

    pub async fn list_ratings(&self, match_id: Uuid) -> Result<MatchRatingsResponse, AppError> {
        require_record(self.matches.find(match_id).await, "Match")?;
        let ratings = self.voting.list_ratings(match_id).await?;
        let averages = rating_averages(&ratings);
        Ok(MatchRatingsResponse { ratings, averages })
    }
}
