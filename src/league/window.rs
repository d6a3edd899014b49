use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::matches::Match;

/// Hours after kick-off during which MVP votes and ratings are accepted.
pub const VOTING_WINDOW_HOURS: i64 = 24;

/// Snapshot of which actions a match allows at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowStatus {
    pub is_future: bool,
    pub is_played: bool,
    pub voting_open: bool,
    pub voting_closes_at: Option<DateTime<Utc>>,
}

/// Time gate for a single match.
///
/// Nothing is stored: every check compares the match date with the `now`
/// it is given. A match without a date is neither future nor played.
#[derive(Debug, Clone, Copy)]
pub struct MatchWindow {
    match_date: Option<DateTime<Utc>>,
    has_result: bool,
}

impl MatchWindow {
    pub fn new(match_date: Option<DateTime<Utc>>, has_result: bool) -> Self {
        Self { match_date, has_result }
    }

    pub fn for_match(m: &Match) -> Self {
        Self::new(m.match_date, m.has_result())
    }

    pub fn is_future(&self, now: DateTime<Utc>) -> bool {
        self.match_date.is_some_and(|date| now < date)
    }

    pub fn is_played(&self, now: DateTime<Utc>) -> bool {
        self.match_date.is_some_and(|date| now >= date)
    }

    pub fn voting_deadline(&self) -> Option<DateTime<Utc>> {
        self.match_date
            .map(|date| date + Duration::hours(VOTING_WINDOW_HOURS))
    }

    pub fn is_voting_open(&self, now: DateTime<Utc>) -> bool {
        self.is_played(now)
            && self.has_result
            && self.voting_deadline().is_some_and(|deadline| now <= deadline)
    }

    pub fn status(&self, now: DateTime<Utc>) -> WindowStatus {
        WindowStatus {
            is_future: self.is_future(now),
            is_played: self.is_played(now),
            voting_open: self.is_voting_open(now),
            voting_closes_at: self.voting_deadline(),
        }
    }

    fn ensure_scheduled(&self) -> Result<(), AppError> {
        if self.match_date.is_none() {
            return Err(AppError::window_closed("Match has no scheduled date"));
        }
        Ok(())
    }

    pub fn ensure_attendance_open(&self, now: DateTime<Utc>) -> Result<(), AppError> {
        self.ensure_scheduled()?;
        if !self.is_future(now) {
            return Err(AppError::window_closed(
                "Attendance can only be confirmed for upcoming matches",
            ));
        }
        Ok(())
    }

    /// Gate for results, goals and cards.
    pub fn ensure_entry_open(&self, now: DateTime<Utc>) -> Result<(), AppError> {
        self.ensure_scheduled()?;
        if !self.is_played(now) {
            return Err(AppError::window_closed("The match has not been played yet"));
        }
        Ok(())
    }

    /// Gate for MVP votes and peer ratings.
    pub fn ensure_voting_open(&self, now: DateTime<Utc>) -> Result<(), AppError> {
        self.ensure_entry_open(now)?;
        if self.voting_deadline().is_some_and(|deadline| now > deadline) {
            return Err(AppError::window_closed(format!(
                "Voting closed {} hours after the match",
                VOTING_WINDOW_HOURS
            )));
        }
        if !self.has_result {
            return Err(AppError::window_closed("The match has no recorded result yet"));
        }
        Ok(())
    }
}
