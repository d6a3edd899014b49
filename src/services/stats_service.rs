use sqlx::PgPool;
use uuid::Uuid;

use crate::db::event_queries::EventQueries;
use crate::db::match_queries::MatchQueries;
use crate::db::player_queries::PlayerQueries;
use crate::db::voting_queries::VotingQueries;
use crate::error::AppError;
use crate::league::perspective::{rival_records, team_record};
use crate::league::player_stats::{aggregate_player_stats, discipline_ranking, scorer_ranking};
use crate::models::stats::{RivalDetailResponse, RivalRecord, StatsResponse};

/// Read-only aggregates over results, events and ratings.
pub struct StatsService {
    matches: MatchQueries,
    players: PlayerQueries,
    events: EventQueries,
    voting: VotingQueries,
}

impl StatsService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            matches: MatchQueries::new(pool.clone()),
            players: PlayerQueries::new(pool.clone()),
            events: EventQueries::new(pool.clone()),
            voting: VotingQueries::new(pool),
        }
    }

    pub async fn club_stats(&self, home_team: &str, tournament_id: Option<Uuid>) -> Result<StatsResponse, AppError> {
        let matches = self.matches.list_with_result(tournament_id).await?;
        let players = self.players.list().await?;
        let goals = self.events.all_goals(tournament_id).await?;
        let cards = self.events.all_cards(tournament_id).await?;
        let ratings = self.voting.all_ratings(tournament_id).await?;

        let lines = aggregate_player_stats(&players, &goals, &cards, &matches, &ratings);
        let scorers = scorer_ranking(&lines);
        let discipline = discipline_ranking(&lines);

        Ok(StatsResponse {
            club: team_record(&matches, home_team),
            players: lines,
            scorers,
            discipline,
        })
    }

    pub async fn rivals(&self, home_team: &str) -> Result<Vec<RivalRecord>, AppError> {
        let matches = self.matches.list_with_result(None).await?;
        Ok(rival_records(&matches, home_team))
    }

    /// Head-to-head totals and results against one opponent.
    pub async fn rival_detail(&self, home_team: &str, rival: &str) -> Result<RivalDetailResponse, AppError> {
        let matches = self.matches.list_head_to_head(home_team, rival).await?;
        if matches.is_empty() {
            return Err(AppError::not_found(format!("Rival {}", rival)));
        }

        let record = team_record(&matches, home_team);
        Ok(RivalDetailResponse {
            rival: RivalRecord {
                rival: rival.to_string(),
                record,
            },
            matches,
        })
    }
}
