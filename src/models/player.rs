use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::common::deserialize_nullable;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Player {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub shirt_number: Option<i32>,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Player {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreatePlayerRequest {
    pub first_name: String,
    pub last_name: String,
    pub shirt_number: Option<i32>,
    pub user_id: Option<Uuid>,
}

/// `null` clears the shirt number or unlinks the user account.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UpdatePlayerRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub shirt_number: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub user_id: Option<Option<Uuid>>,
}

/// A player row as produced by the CSV importer, ready to upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub first_name: String,
    pub last_name: String,
    pub shirt_number: Option<i32>,
}
