use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::matches::Match;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerStatLine {
    pub player_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub shirt_number: Option<i32>,
    pub goals: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub mvp_matches: u32,
    pub avg_rating: Option<f64>,
    pub ratings_count: u32,
}

/// Win/draw/loss totals from one team's point of view.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct TeamRecord {
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: i32,
    pub goals_against: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ScorerEntry {
    pub player_id: Uuid,
    pub name: String,
    pub goals: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DisciplineEntry {
    pub player_id: Uuid,
    pub name: String,
    pub yellow_cards: u32,
    pub red_cards: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RivalRecord {
    pub rival: String,
    #[serde(flatten)]
    pub record: TeamRecord,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub club: TeamRecord,
    pub players: Vec<PlayerStatLine>,
    pub scorers: Vec<ScorerEntry>,
    pub discipline: Vec<DisciplineEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RivalDetailResponse {
    pub rival: RivalRecord,
    pub matches: Vec<Match>,
}
