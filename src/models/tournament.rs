use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::league::standings::Standing;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Tournament {
    pub id: Uuid,
    pub name: String,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.starts_on <= day && day <= self.ends_on
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateTournamentRequest {
    pub name: String,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TournamentStandingsResponse {
    pub tournament: Tournament,
    pub standings: Vec<Standing>,
}
