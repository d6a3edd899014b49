use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::helpers::require_record;
use crate::db::match_queries::MatchQueries;
use crate::db::tournament_queries::TournamentQueries;
use crate::error::AppError;
use crate::league::standings::compute_standings;
use crate::league::tournaments::active_tournament;
use crate::league::validation::ClubValidator;
use crate::models::matches::Match;
use crate::models::tournament::{CreateTournamentRequest, Tournament, TournamentStandingsResponse};

pub struct TournamentService {
    tournaments: TournamentQueries,
    matches: MatchQueries,
    validator: ClubValidator,
}

impl TournamentService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            tournaments: TournamentQueries::new(pool.clone()),
            matches: MatchQueries::new(pool),
            validator: ClubValidator::new(),
        }
    }

    pub async fn list(&self) -> Result<Vec<Tournament>, AppError> {
        Ok(self.tournaments.list().await?)
    }

    pub async fn get(&self, tournament_id: Uuid) -> Result<Tournament, AppError> {
        require_record(self.tournaments.find(tournament_id).await, "Tournament")
    }

    /// The tournament running on the club-local `today`.
    pub async fn active(&self, today: NaiveDate) -> Result<Tournament, AppError> {
        let tournaments = self.tournaments.list().await?;
        active_tournament(&tournaments, today)
            .cloned()
            .ok_or_else(|| AppError::not_found("Active tournament"))
    }

    pub async fn create(&self, request: &CreateTournamentRequest) -> Result<Tournament, AppError> {
        let name = self.validator.validate_tournament(&request.name, request.starts_on, request.ends_on)?;
        let tournament = self.tournaments.insert(&name, request.starts_on, request.ends_on).await?;
        tracing::info!("Created tournament {} ({})", tournament.id, tournament.name);
        Ok(tournament)
    }

    /// Fixtures of the tournament stay, detached from it.
    pub async fn delete(&self, tournament_id: Uuid) -> Result<(), AppError> {
        if !self.tournaments.delete(tournament_id).await? {
            return Err(AppError::not_found("Tournament"));
        }
        Ok(())
    }

    pub async fn standings(&self, tournament_id: Uuid) -> Result<TournamentStandingsResponse, AppError> {
        let tournament = self.get(tournament_id).await?;
        let matches = self.matches.list_with_result(Some(tournament_id)).await?;
        let standings = compute_standings(matches.iter().map(Match::score_line));
        Ok(TournamentStandingsResponse { tournament, standings })
    }
}
