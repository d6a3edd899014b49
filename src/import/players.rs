use crate::import::table::CsvTable;
use crate::league::validation::{MAX_SHIRT_NUMBER, MIN_SHIRT_NUMBER};
use crate::models::player::PlayerRecord;

pub const FIRST_NAME_HEADERS: &[&str] = &["Nombre", "first_name"];
pub const LAST_NAME_HEADERS: &[&str] = &["Apellido", "last_name"];
pub const SHIRT_NUMBER_HEADERS: &[&str] = &["Numero_de_camiseta", "shirt_number"];

/// Rows with both names; rows missing either are dropped.
pub fn player_records(table: &CsvTable) -> Vec<PlayerRecord> {
    let first_name = table.column(FIRST_NAME_HEADERS);
    let last_name = table.column(LAST_NAME_HEADERS);
    let shirt_number = table.column(SHIRT_NUMBER_HEADERS);

    table
        .rows()
        .filter_map(|row| {
            let first = row.cell(first_name);
            let last = row.cell(last_name);
            if first.is_empty() || last.is_empty() {
                tracing::debug!("Skipping player row without a full name");
                return None;
            }
            Some(PlayerRecord {
                first_name: first.to_string(),
                last_name: last.to_string(),
                shirt_number: parse_shirt_number(row.cell(shirt_number)),
            })
        })
        .collect()
}

/// Integer in 1..=99, anything else reads as no number.
pub fn parse_shirt_number(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<i32>() {
        Ok(n) if (MIN_SHIRT_NUMBER..=MAX_SHIRT_NUMBER).contains(&n) => Some(n),
        _ => {
            tracing::warn!("Ignoring invalid shirt number '{}'", raw);
            None
        }
    }
}
