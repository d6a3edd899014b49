pub mod import_service;
pub mod match_service;
pub mod player_service;
pub mod stats_service;
pub mod tournament_service;
pub mod voting_service;

pub use import_service::ImportService;
pub use match_service::MatchService;
pub use player_service::PlayerService;
pub use stats_service::StatsService;
pub use tournament_service::TournamentService;
pub use voting_service::VotingService;
