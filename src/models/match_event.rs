use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum CardType {
    Yellow,
    Red,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Goal {
    pub id: Uuid,
    pub match_id: Uuid,
    pub player_id: Uuid,
    pub minute: Option<i32>,
    pub side: Option<String>,
    pub created_at: DateTime<Utc>,
    #[sqlx(default)]
    pub player_name: Option<String>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Card {
    pub id: Uuid,
    pub match_id: Uuid,
    pub player_id: Uuid,
    pub card_type: CardType,
    pub minute: Option<i32>,
    pub created_at: DateTime<Utc>,
    #[sqlx(default)]
    pub player_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AddGoalRequest {
    pub player_id: Uuid,
    pub minute: Option<i32>,
    pub side: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AddCardRequest {
    pub player_id: Uuid,
    pub card_type: CardType,
    pub minute: Option<i32>,
}
