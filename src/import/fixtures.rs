use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::import::table::CsvTable;
use crate::import::ImportError;

pub const DATE_HEADERS: &[&str] = &["Fecha", "date"];
pub const TEAM1_HEADERS: &[&str] = &["Equipo_1", "equipo1", "team1"];
pub const TEAM2_HEADERS: &[&str] = &["Equipo_2", "equipo2", "team2"];
pub const TIME_HEADERS: &[&str] = &["Horario", "time"];
pub const VENUE_HEADERS: &[&str] = &["Lugar", "venue"];

/// A fixture row as produced by the importer, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureRecord {
    pub team1: String,
    pub team2: String,
    pub match_date: Option<DateTime<Utc>>,
    pub venue: Option<String>,
}

/// Rows with both teams and a readable (or empty) date.
///
/// Dates and times are wall-clock values at `offset`.
pub fn fixture_records(table: &CsvTable, offset: FixedOffset) -> Vec<FixtureRecord> {
    let date = table.column(DATE_HEADERS);
    let team1 = table.column(TEAM1_HEADERS);
    let team2 = table.column(TEAM2_HEADERS);
    let time = table.column(TIME_HEADERS);
    let venue = table.column(VENUE_HEADERS);

    table
        .rows()
        .filter_map(|row| {
            let (t1, t2) = (row.cell(team1), row.cell(team2));
            if t1.is_empty() || t2.is_empty() {
                tracing::debug!("Skipping fixture row without both teams");
                return None;
            }

            let match_date = match parse_fixture_date(row.cell(date), row.cell(time), offset) {
                Ok(d) => d,
                Err(e) => {
                    tracing::warn!("Skipping fixture {} vs {}: {}", t1, t2, e);
                    return None;
                }
            };

            let venue = Some(row.cell(venue)).filter(|v| !v.is_empty()).map(str::to_string);

            Some(FixtureRecord {
                team1: t1.to_string(),
                team2: t2.to_string(),
                match_date,
                venue,
            })
        })
        .collect()
}

/// Accepts DD/MM/YYYY, DD.MM.YYYY or YYYY-MM-DD plus an optional HH, HH:MM
/// or HH:MM:SS.
///
/// An empty date is a fixture without a date; the time then is ignored.
pub fn parse_fixture_date(
    date: &str,
    time: &str,
    offset: FixedOffset,
) -> Result<Option<DateTime<Utc>>, ImportError> {
    let date = date.trim();
    if date.is_empty() {
        return Ok(None);
    }

    let day = parse_calendar_date(date).ok_or_else(|| ImportError::InvalidDate(date.to_string()))?;
    let time_of_day = parse_time_of_day(time.trim())?;

    let local = NaiveDateTime::new(day, time_of_day);
    offset
        .from_local_datetime(&local)
        .single()
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .ok_or_else(|| ImportError::InvalidDate(date.to_string()))
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = raw.split(['/', '.']).collect();
    if parts.len() == 3 {
        let day = parts[0].trim().parse::<u32>().ok()?;
        let month = parts[1].trim().parse::<u32>().ok()?;
        let year = parts[2].trim().parse::<i32>().ok()?;
        if parts[2].trim().len() != 4 {
            return None;
        }
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn parse_time_of_day(raw: &str) -> Result<NaiveTime, ImportError> {
    if raw.is_empty() {
        return NaiveTime::from_hms_opt(0, 0, 0).ok_or_else(|| ImportError::InvalidTime(raw.to_string()));
    }
    // A bare hour such as "18" means 18:00
    if raw.chars().all(|c| c.is_ascii_digit()) {
        return raw
            .parse::<u32>()
            .ok()
            .and_then(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
            .ok_or_else(|| ImportError::InvalidTime(raw.to_string()));
    }
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| ImportError::InvalidTime(raw.to_string()))
}
