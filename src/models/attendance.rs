use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum AttendanceStatus {
    Yes,
    No,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Attendance {
    pub match_id: Uuid,
    pub user_id: Uuid,
    pub status: AttendanceStatus,
    pub excuse: Option<String>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(default)]
    pub username: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AttendanceRequest {
    pub status: AttendanceStatus,
    pub excuse: Option<String>,
}
