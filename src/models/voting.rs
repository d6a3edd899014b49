use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MvpVote {
    pub match_id: Uuid,
    pub voter_id: Uuid,
    pub voted_player_id: Uuid,
    pub cast_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Rating {
    pub match_id: Uuid,
    pub rater_id: Uuid,
    pub rated_player_id: Uuid,
    pub score: i32,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CastVoteRequest {
    pub voted_player_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RatingEntry {
    pub rated_player_id: Uuid,
    pub score: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SubmitRatingsRequest {
    pub ratings: Vec<RatingEntry>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RatingAverage {
    pub player_id: Uuid,
    pub average: f64,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchRatingsResponse {
    pub ratings: Vec<Rating>,
    pub averages: Vec<RatingAverage>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VoteResponse {
    pub vote: MvpVote,
    pub mvp_player_id: Option<Uuid>,
}
