use sqlx::PgPool;
use uuid::Uuid;

use crate::db::helpers::{map_foreign_key_violation, map_unique_violation, require_record};
use crate::db::match_queries::MatchQueries;
use crate::db::player_queries::PlayerQueries;
use crate::db::voting_queries::VotingQueries;
use crate::error::AppError;
use crate::league::mvp::select_mvp;
use crate::league::validation::ClubValidator;
use crate::models::player::{CreatePlayerRequest, Player, PlayerRecord, UpdatePlayerRequest};

const DUPLICATE_PLAYER: &str = "A player with that name or linked user already exists";

/// A dangling user link reads as a missing user; any unique clash as a duplicate.
fn map_write_error(error: sqlx::Error) -> AppError {
    if matches!(&error, sqlx::Error::Database(db) if db.is_foreign_key_violation()) {
        map_foreign_key_violation(error, "User")
    } else {
        map_unique_violation(error, DUPLICATE_PLAYER)
    }
}

pub struct PlayerService {
    pool: PgPool,
    players: PlayerQueries,
    validator: ClubValidator,
}

impl PlayerService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            players: PlayerQueries::new(pool.clone()),
            pool,
            validator: ClubValidator::new(),
        }
    }

    pub async fn list(&self) -> Result<Vec<Player>, AppError> {
        Ok(self.players.list().await?)
    }

    pub async fn get(&self, player_id: Uuid) -> Result<Player, AppError> {
        require_record(self.players.find(player_id).await, "Player")
    }

    pub async fn create(&self, request: &CreatePlayerRequest) -> Result<Player, AppError> {
        let (first_name, last_name) = self.validator.validate_player_name(&request.first_name, &request.last_name)?;
        self.validator.validate_shirt_number(request.shirt_number)?;

        let record = PlayerRecord {
            first_name,
            last_name,
            shirt_number: request.shirt_number,
        };

        self.players
            .insert(&record, request.user_id)
            .await
            .map_err(map_write_error)
    }

    pub async fn update(&self, player_id: Uuid, request: &UpdatePlayerRequest) -> Result<Player, AppError> {
        let current = self.get(player_id).await?;

        let first_name = request.first_name.as_deref().unwrap_or(&current.first_name);
        let last_name = request.last_name.as_deref().unwrap_or(&current.last_name);
        let (first_name, last_name) = self.validator.validate_player_name(first_name, last_name)?;
        self.validator.validate_shirt_number(request.shirt_number.flatten())?;

        let changes = UpdatePlayerRequest {
            first_name: Some(first_name),
            last_name: Some(last_name),
            ..request.clone()
        };

        let updated = self.players
            .update(player_id, &changes)
            .await
            .map_err(map_write_error)?;
        require_record(Ok(updated), "Player")
    }

    /// Remove the player and re-elect the MVP of every match they were
    /// voted in or named MVP of, from the votes that remain.
    ///
    /// A match left without votes keeps no MVP for the deleted player and
    /// keeps any other stored MVP.
    pub async fn delete(&self, player_id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        // Blocks new votes for the player until the delete commits
        require_record(PlayerQueries::lock(&mut tx, player_id).await, "Player")?;
        let affected = MatchQueries::lock_voted_for(&mut tx, player_id).await?;

        if !PlayerQueries::delete(&mut tx, player_id).await? {
            return Err(AppError::not_found("Player"));
        }

        for match_id in &affected {
            let votes = VotingQueries::votes_for_match(&mut tx, *match_id).await?;
            if let Some(mvp) = select_mvp(&votes) {
                MatchQueries::set_mvp(&mut tx, *match_id, mvp).await?;
            }
        }
        tx.commit().await?;

        tracing::info!("Deleted player {}; re-elected MVP of {} matches", player_id, affected.len());
        Ok(())
    }
}
