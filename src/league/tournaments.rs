use chrono::NaiveDate;

use crate::models::tournament::Tournament;

/// The tournament running on `today`, otherwise the one that started last.
pub fn active_tournament(tournaments: &[Tournament], today: NaiveDate) -> Option<&Tournament> {
    tournaments
        .iter()
        .find(|t| t.covers(today))
        .or_else(|| tournaments.iter().max_by_key(|t| (t.starts_on, t.created_at)))
}
