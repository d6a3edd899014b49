//! Bulk loading of players and fixtures from comma-separated text.

pub mod fixtures;
pub mod players;
pub mod table;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ImportError {
    #[error("Unrecognized date: {0}")]
    InvalidDate(String),

    #[error("Unrecognized time of day: {0}")]
    InvalidTime(String),
}
