pub mod mvp;
pub mod perspective;
pub mod player_stats;
pub mod standings;
pub mod tournaments;
pub mod validation;
pub mod window;
