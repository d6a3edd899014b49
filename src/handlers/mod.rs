pub mod attendance_handler;
pub mod auth_handler;
pub mod backend_health_handler;
pub mod event_handler;
pub mod import_handler;
pub mod match_handler;
pub mod player_handler;
pub mod registration_handler;
pub mod stats_handler;
pub mod tournament_handler;
pub mod voting_handler;
