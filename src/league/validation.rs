use std::collections::HashSet;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::attendance::AttendanceStatus;
use crate::models::voting::RatingEntry;

pub const MAX_SCORE: i32 = 99;
pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 10;
pub const MIN_SHIRT_NUMBER: i32 = 1;
pub const MAX_SHIRT_NUMBER: i32 = 99;
pub const MAX_MINUTE: i32 = 130;

/// Centralized validation for club operations
pub struct ClubValidator;

impl ClubValidator {
    pub fn new() -> Self {
        Self
    }

    /// Comprehensive input sanitization
    pub fn sanitize_string_input(&self, input: &str) -> String {
        input
            .chars()
            .filter(|&c| c != '\0')
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// Validate and sanitize team name
    pub fn validate_and_sanitize_team_name(&self, name: &str) -> Result<String, AppError> {
        let sanitized = self.sanitize_string_input(name);

        if sanitized.is_empty() {
            return Err(AppError::validation("Team name cannot be empty"));
        }

        if sanitized.chars().count() > 100 {
            return Err(AppError::validation("Team name too long (max 100 characters)"));
        }

        Ok(sanitized)
    }

    /// Both sides of a fixture, sanitized and distinct.
    pub fn validate_fixture_teams(&self, team1: &str, team2: &str) -> Result<(String, String), AppError> {
        let team1 = self.validate_and_sanitize_team_name(team1)?;
        let team2 = self.validate_and_sanitize_team_name(team2)?;

        if team1.eq_ignore_ascii_case(&team2) {
            return Err(AppError::validation(format!("A team cannot play itself: {}", team1)));
        }

        Ok((team1, team2))
    }

    /// Validate game scores
    pub fn validate_game_scores(&self, goals_team1: i32, goals_team2: i32) -> Result<(), AppError> {
        for goals in [goals_team1, goals_team2] {
            if goals < 0 {
                return Err(AppError::validation(format!("Goals cannot be negative: {}", goals)));
            }
            if goals > MAX_SCORE {
                return Err(AppError::validation(format!(
                    "Goals too high: {} (max {})",
                    goals, MAX_SCORE
                )));
            }
        }
        Ok(())
    }

    pub fn validate_player_name(&self, first_name: &str, last_name: &str) -> Result<(String, String), AppError> {
        let first_name = self.sanitize_string_input(first_name);
        let last_name = self.sanitize_string_input(last_name);

        if first_name.is_empty() || last_name.is_empty() {
            return Err(AppError::validation("First name and last name are required"));
        }

        if first_name.chars().count() > 100 || last_name.chars().count() > 100 {
            return Err(AppError::validation("Player name too long (max 100 characters)"));
        }

        Ok((first_name, last_name))
    }

    pub fn validate_shirt_number(&self, shirt_number: Option<i32>) -> Result<(), AppError> {
        match shirt_number {
            Some(n) if !(MIN_SHIRT_NUMBER..=MAX_SHIRT_NUMBER).contains(&n) => Err(AppError::validation(
                format!("Shirt number must be between {} and {}", MIN_SHIRT_NUMBER, MAX_SHIRT_NUMBER),
            )),
            _ => Ok(()),
        }
    }

    pub fn validate_minute(&self, minute: Option<i32>) -> Result<(), AppError> {
        match minute {
            Some(m) if !(0..=MAX_MINUTE).contains(&m) => Err(AppError::validation(
                format!("Minute must be between 0 and {}", MAX_MINUTE),
            )),
            _ => Ok(()),
        }
    }

    /// A goal's side, when given, must name one of the two teams.
    pub fn validate_goal_side(&self, side: Option<&str>, team1: &str, team2: &str) -> Result<Option<String>, AppError> {
        let Some(side) = side.map(|s| self.sanitize_string_input(s)).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };

        if side != team1 && side != team2 {
            return Err(AppError::validation(format!(
                "Goal side must be {} or {}",
                team1, team2
            )));
        }

        Ok(Some(side))
    }

    /// Returns the excuse to store: required for absences, dropped otherwise.
    pub fn validate_attendance(&self, status: AttendanceStatus, excuse: Option<&str>) -> Result<Option<String>, AppError> {
        match status {
            AttendanceStatus::Yes => Ok(None),
            AttendanceStatus::No => {
                let excuse = excuse.map(|e| self.sanitize_string_input(e)).unwrap_or_default();
                if excuse.is_empty() {
                    return Err(AppError::validation("An absence must be justified"));
                }
                if excuse.chars().count() > 500 {
                    return Err(AppError::validation("Excuse too long (max 500 characters)"));
                }
                Ok(Some(excuse))
            }
        }
    }

    pub fn validate_rating_score(&self, score: i32) -> Result<(), AppError> {
        if !(MIN_RATING..=MAX_RATING).contains(&score) {
            return Err(AppError::validation(format!(
                "Rating score must be between {} and {}, got {}",
                MIN_RATING, MAX_RATING, score
            )));
        }
        Ok(())
    }

    /// Validate a batch of peer ratings from one rater
    pub fn validate_ratings(&self, rater_player_id: Option<Uuid>, ratings: &[RatingEntry]) -> Result<(), AppError> {
        if ratings.is_empty() {
            return Err(AppError::validation("At least one rating is required"));
        }

        let mut rated = HashSet::new();
        for entry in ratings {
            if rater_player_id == Some(entry.rated_player_id) {
                return Err(AppError::validation("You cannot rate yourself"));
            }
            self.validate_rating_score(entry.score)?;
            if !rated.insert(entry.rated_player_id) {
                return Err(AppError::validation(format!(
                    "Player {} rated more than once",
                    entry.rated_player_id
                )));
            }
        }

        Ok(())
    }

    pub fn validate_tournament(&self, name: &str, starts_on: NaiveDate, ends_on: NaiveDate) -> Result<String, AppError> {
        let name = self.sanitize_string_input(name);

        if name.is_empty() {
            return Err(AppError::validation("Tournament name cannot be empty"));
        }

        if name.chars().count() > 255 {
            return Err(AppError::validation("Tournament name too long (maximum 255 characters)"));
        }

        if ends_on < starts_on {
            return Err(AppError::validation("Tournament cannot end before it starts"));
        }

        Ok(name)
    }
}

impl Default for ClubValidator {
    fn default() -> Self {
        Self::new()
    }
}
