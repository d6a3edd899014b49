use actix_web::web;

pub mod admin;
pub mod auth;
pub mod backend_health;
pub mod club;
pub mod registration;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(registration::register)
        .service(backend_health::backend_health)
        .service(auth::login);

    // Member routes (require authentication)
    cfg.service(
        web::scope("/club")
            .wrap(AuthMiddleware)
            .service(club::list_matches)
            .service(club::get_match)
            .service(club::record_result)
            .service(club::list_goals)
            .service(club::add_goal)
            .service(club::delete_goal)
            .service(club::list_cards)
            .service(club::add_card)
            .service(club::delete_card)
            .service(club::list_attendance)
            .service(club::set_attendance)
            .service(club::list_votes)
            .service(club::cast_vote)
            .service(club::list_ratings)
            .service(club::submit_ratings)
            .service(club::list_players)
            .service(club::get_player)
            .service(club::list_tournaments)
            // Must be registered before /tournaments/{tournament_id}
            .service(club::get_active_tournament)
            .service(club::get_tournament)
            .service(club::get_tournament_standings)
            .service(club::get_stats)
            .service(club::get_rivals)
            .service(club::get_rival_detail)
    );

    admin::init_admin_routes(cfg);
}
