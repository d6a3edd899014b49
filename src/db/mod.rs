pub mod attendance_queries;
pub mod event_queries;
pub mod helpers;
pub mod match_queries;
pub mod player_queries;
pub mod tournament_queries;
pub mod user_queries;
pub mod voting_queries;
