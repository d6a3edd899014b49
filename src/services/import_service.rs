use chrono::FixedOffset;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::helpers::require_record;
use crate::db::match_queries::{MatchQueries, NewMatch};
use crate::db::player_queries::PlayerQueries;
use crate::db::tournament_queries::TournamentQueries;
use crate::error::AppError;
use crate::import::fixtures::fixture_records;
use crate::import::players::player_records;
use crate::import::table::CsvTable;
use crate::league::validation::ClubValidator;

/// Bulk loading of players and fixtures from CSV text.
///
/// Rows that fail to store are logged and skipped; the returned count only
/// includes rows that made it into the database.
pub struct ImportService {
    players: PlayerQueries,
    matches: MatchQueries,
    tournaments: TournamentQueries,
    validator: ClubValidator,
}

fn require_csv(csv: Option<&str>) -> Result<&str, AppError> {
    csv.filter(|text| !text.trim().is_empty())
        .ok_or_else(|| AppError::validation("CSV content is required"))
}

impl ImportService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            players: PlayerQueries::new(pool.clone()),
            matches: MatchQueries::new(pool.clone()),
            tournaments: TournamentQueries::new(pool),
            validator: ClubValidator::new(),
        }
    }

    /// Upsert players by full name. Re-importing the same file creates nothing new.
    pub async fn import_players(&self, csv: Option<&str>) -> Result<usize, AppError> {
        let table = CsvTable::parse(require_csv(csv)?);

        let mut stored = 0;
        for record in player_records(&table) {
            match self.players.upsert_by_name(&record).await {
                Ok(_) => stored += 1,
                Err(e) => tracing::warn!(
                    "Skipping player {} {}: {:?}",
                    record.first_name, record.last_name, e
                ),
            }
        }

        tracing::info!("Imported {} players from {} rows", stored, table.len());
        Ok(stored)
    }

    pub async fn import_fixtures(
        &self,
        csv: Option<&str>,
        tournament_id: Option<Uuid>,
        offset: FixedOffset,
    ) -> Result<usize, AppError> {
        let table = CsvTable::parse(require_csv(csv)?);
        if let Some(id) = tournament_id {
            require_record(self.tournaments.find(id).await, "Tournament")?;
        }

        let mut created = 0;
        for record in fixture_records(&table, offset) {
            let (team1, team2) = match self.validator.validate_fixture_teams(&record.team1, &record.team2) {
                Ok(teams) => teams,
                Err(e) => {
                    tracing::warn!("Skipping fixture {} vs {}: {}", record.team1, record.team2, e);
                    continue;
                }
            };

            let new_match = NewMatch {
                tournament_id,
                match_date: record.match_date,
                team1,
                team2,
                venue: record.venue,
            };

            match self.matches.insert(&new_match).await {
                Ok(_) => created += 1,
                Err(e) => tracing::warn!("Skipping fixture {} vs {}: {:?}", new_match.team1, new_match.team2, e),
            }
        }

        tracing::info!("Imported {} fixtures from {} rows", created, table.len());
        Ok(created)
    }
}
