// src/models/matches.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::league::window::WindowStatus;
use crate::models::attendance::Attendance;
use crate::models::common::deserialize_nullable;
use crate::models::match_event::{Card, Goal};
use crate::models::voting::{MvpVote, Rating};

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Match {
    pub id: Uuid,
    pub tournament_id: Option<Uuid>,
    pub match_date: Option<DateTime<Utc>>,
    pub team1: String,
    pub team2: String,
    pub goals_team1: Option<i32>,
    pub goals_team2: Option<i32>,
    pub played: bool,
    pub mvp_player_id: Option<Uuid>,
    pub venue: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Match {
    /// Both goal fields, or `None` while the result is unknown.
    pub fn score(&self) -> Option<(i32, i32)> {
        self.score_line().score()
    }

    pub fn has_result(&self) -> bool {
        self.score().is_some()
    }

    pub fn score_line(&self) -> ScoreLine<'_> {
        ScoreLine {
            team1: &self.team1,
            team2: &self.team2,
            goals_team1: self.goals_team1,
            goals_team2: self.goals_team2,
        }
    }
}

/// The part of a match row that standings and result perspective read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreLine<'a> {
    pub team1: &'a str,
    pub team2: &'a str,
    pub goals_team1: Option<i32>,
    pub goals_team2: Option<i32>,
}

impl<'a> ScoreLine<'a> {
    pub fn new(team1: &'a str, team2: &'a str, goals_team1: Option<i32>, goals_team2: Option<i32>) -> Self {
        Self { team1, team2, goals_team1, goals_team2 }
    }

    pub fn score(&self) -> Option<(i32, i32)> {
        match (self.goals_team1, self.goals_team2) {
            (Some(g1), Some(g2)) => Some((g1, g2)),
            _ => None,
        }
    }
}

// Request/Response DTOs
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateMatchRequest {
    pub team1: String,
    pub team2: String,
    pub match_date: Option<DateTime<Utc>>,
    pub venue: Option<String>,
    pub tournament_id: Option<Uuid>,
}

/// Partial update. Nullable columns take `null` to clear them.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UpdateMatchRequest {
    pub team1: Option<String>,
    pub team2: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub match_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub venue: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub tournament_id: Option<Option<Uuid>>,
    /// Asserts the MVP directly instead of waiting for the vote tally.
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub mvp_player_id: Option<Option<Uuid>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RecordResultRequest {
    pub goals_team1: i32,
    pub goals_team2: i32,
}

#[derive(Debug, Deserialize)]
pub struct MatchListQuery {
    pub tournament_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchDetailResponse {
    #[serde(rename = "match")]
    pub match_info: Match,
    pub goals: Vec<Goal>,
    pub cards: Vec<Card>,
    pub attendance: Vec<Attendance>,
    pub votes: Vec<MvpVote>,
    pub ratings: Vec<Rating>,
    pub window: WindowStatus,
}
