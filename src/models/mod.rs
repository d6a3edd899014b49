pub mod attendance;
pub mod auth;
pub mod common;
pub mod import;
pub mod match_event;
pub mod matches;
pub mod player;
pub mod stats;
pub mod tournament;
pub mod user;
pub mod voting;
