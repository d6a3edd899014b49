use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::attendance_queries::AttendanceQueries;
use crate::db::event_queries::EventQueries;
use crate::db::helpers::{map_foreign_key_violation, require_record};
use crate::db::match_queries::{MatchQueries, NewMatch};
use crate::db::voting_queries::VotingQueries;
use crate::error::AppError;
use crate::league::mvp::select_mvp;
use crate::league::validation::ClubValidator;
use crate::league::window::MatchWindow;
use crate::models::attendance::{Attendance, AttendanceRequest};
use crate::models::match_event::{AddCardRequest, AddGoalRequest, Card, Goal};
use crate::models::matches::{CreateMatchRequest, Match, MatchDetailResponse, RecordResultRequest, UpdateMatchRequest};

/// Fixtures, their results and everything recorded against them.
pub struct MatchService {
    pool: PgPool,
    matches: MatchQueries,
    events: EventQueries,
    attendance: AttendanceQueries,
    voting: VotingQueries,
    validator: ClubValidator,
}

impl MatchService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            matches: MatchQueries::new(pool.clone()),
            events: EventQueries::new(pool.clone()),
            attendance: AttendanceQueries::new(pool.clone()),
            voting: VotingQueries::new(pool.clone()),
            pool,
            validator: ClubValidator::new(),
        }
    }

    pub async fn get(&self, match_id: Uuid) -> Result<Match, AppError> {
        require_record(self.matches.find(match_id).await, "Match")
    }

    pub async fn list(&self, tournament_id: Option<Uuid>) -> Result<Vec<Match>, AppError> {
        Ok(self.matches.list(tournament_id).await?)
    }

    pub async fn detail(&self, match_id: Uuid, now: DateTime<Utc>) -> Result<MatchDetailResponse, AppError> {
        let match_info = self.get(match_id).await?;

        let goals = self.events.list_goals(match_id).await?;
        let cards = self.events.list_cards(match_id).await?;
        let attendance = self.attendance.list(match_id).await?;
        let votes = self.voting.list_votes(match_id).await?;
        let ratings = self.voting.list_ratings(match_id).await?;
        let window = MatchWindow::for_match(&match_info).status(now);

        Ok(MatchDetailResponse {
            match_info,
            goals,
            cards,
            attendance,
            votes,
            ratings,
            window,
        })
    }

    pub async fn create(&self, request: &CreateMatchRequest) -> Result<Match, AppError> {
        let (team1, team2) = self.validator.validate_fixture_teams(&request.team1, &request.team2)?;
        let venue = self.clean_venue(request.venue.as_deref());

        let new_match = NewMatch {
            tournament_id: request.tournament_id,
            match_date: request.match_date,
            team1,
            team2,
            venue,
        };

        self.matches
            .insert(&new_match)
            .await
            .map_err(|e| map_foreign_key_violation(e, "Tournament"))
    }

    pub async fn update(&self, match_id: Uuid, request: &UpdateMatchRequest) -> Result<Match, AppError> {
        let current = self.get(match_id).await?;

        let team1 = request.team1.as_deref().unwrap_or(&current.team1);
        let team2 = request.team2.as_deref().unwrap_or(&current.team2);
        let (team1, team2) = self.validator.validate_fixture_teams(team1, team2)?;

        let changes = UpdateMatchRequest {
            team1: Some(team1),
            team2: Some(team2),
            venue: request.venue.as_ref().map(|v| self.clean_venue(v.as_deref())),
            ..request.clone()
        };

        let updated = self.matches
            .update_details(match_id, &changes)
            .await
            .map_err(|e| map_foreign_key_violation(e, "Tournament or player"))?;
        require_record(Ok(updated), "Match")
    }

    pub async fn delete(&self, match_id: Uuid) -> Result<(), AppError> {
        if !self.matches.delete(match_id).await? {
            return Err(AppError::not_found("Match"));
        }
        Ok(())
    }

    /// Store the final score once the match has kicked off.
    ///
    /// The MVP is re-derived from the votes already cast; with no votes the
    /// stored MVP is left as it was.
    pub async fn record_result(
        &self,
        match_id: Uuid,
        request: &RecordResultRequest,
        now: DateTime<Utc>,
    ) -> Result<Match, AppError> {
        let mut tx = self.pool.begin().await?;
        let current = require_record(MatchQueries::lock(&mut tx, match_id).await, "Match")?;
        MatchWindow::for_match(&current).ensure_entry_open(now)?;
        self.validator.validate_game_scores(request.goals_team1, request.goals_team2)?;

        let votes = VotingQueries::votes_for_match(&mut tx, match_id).await?;
        let mvp = select_mvp(&votes);

        let updated = MatchQueries::record_result(&mut tx, match_id, request.goals_team1, request.goals_team2, mvp).await?;
        tx.commit().await?;
        Ok(updated)
    }

    pub async fn list_goals(&self, match_id: Uuid) -> Result<Vec<Goal>, AppError> {
        self.get(match_id).await?;
        Ok(self.events.list_goals(match_id).await?)
    }

    pub async fn add_goal(&self, match_id: Uuid, request: &AddGoalRequest, now: DateTime<Utc>) -> Result<Goal, AppError> {
        let current = self.get(match_id).await?;
        MatchWindow::for_match(&current).ensure_entry_open(now)?;
        self.validator.validate_minute(request.minute)?;
        let side = self.validator.validate_goal_side(request.side.as_deref(), &current.team1, &current.team2)?;

        self.events
            .insert_goal(match_id, request.player_id, request.minute, side.as_deref())
            .await
            .map_err(|e| map_foreign_key_violation(e, "Player"))
    }

    pub async fn delete_goal(&self, match_id: Uuid, goal_id: Uuid) -> Result<(), AppError> {
        if !self.events.delete_goal(match_id, goal_id).await? {
            return Err(AppError::not_found("Goal"));
        }
        Ok(())
    }

    pub async fn list_cards(&self, match_id: Uuid) -> Result<Vec<Card>, AppError> {
        self.get(match_id).await?;
        Ok(self.events.list_cards(match_id).await?)
    }

    pub async fn add_card(&self, match_id: Uuid, request: &AddCardRequest, now: DateTime<Utc>) -> Result<Card, AppError> {
        let current = self.get(match_id).await?;
        MatchWindow::for_match(&current).ensure_entry_open(now)?;
        self.validator.validate_minute(request.minute)?;

        self.events
            .insert_card(match_id, request.player_id, request.card_type, request.minute)
            .await
            .map_err(|e| map_foreign_key_violation(e, "Player"))
    }

    pub async fn delete_card(&self, match_id: Uuid, card_id: Uuid) -> Result<(), AppError> {
        if !self.events.delete_card(match_id, card_id).await? {
            return Err(AppError::not_found("Card"));
        }
        Ok(())
    }

    pub async fn list_attendance(&self, match_id: Uuid) -> Result<Vec<Attendance>, AppError> {
        self.get(match_id).await?;
        Ok(self.attendance.list(match_id).await?)
    }

    /// Confirm or decline attendance for an upcoming match.
    pub async fn set_attendance(
        &self,
        match_id: Uuid,
        user_id: Uuid,
        request: &AttendanceRequest,
        now: DateTime<Utc>,
    ) -> Result<Attendance, AppError> {
        let current = self.get(match_id).await?;
        MatchWindow::for_match(&current).ensure_attendance_open(now)?;
        let excuse = self.validator.validate_attendance(request.status, request.excuse.as_deref())?;

        Ok(self.attendance
            .upsert(match_id, user_id, request.status, excuse.as_deref())
            .await?)
    }

    fn clean_venue(&self, venue: Option<&str>) -> Option<String> {
        venue
            .map(|v| self.validator.sanitize_string_input(v))
            .filter(|v| !v.is_empty())
    }
}
