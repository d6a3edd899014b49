use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ImportPlayersRequest {
    pub csv: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ImportFixturesRequest {
    pub csv: Option<String>,
    pub tournament_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ImportResponse {
    pub created: usize,
}
