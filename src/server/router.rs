use axum::{http::Method, middleware, Router};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        clan::{self, CLAN_TAG},
        contest::{self, CONTEST_TAG},
        dashboard::{self, DASHBOARD_TAG},
        game_match::{self, MATCH_TAG},
        grade::{self, GRADE_TAG},
        health::{self, HEALTH_TAG},
        notice::{self, NOTICE_TAG},
        player::{self, PLAYER_TAG},
    },
    middleware::logging::log_failed_requests,
    state::AppState,
};

const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

#[derive(OpenApi)]
#[openapi(
    info(title = "suclan", description = "Clan, player and match records"),
    tags(
        (name = CLAN_TAG, description = "Clans and their members"),
        (name = GRADE_TAG, description = "Player grades"),
        (name = PLAYER_TAG, description = "Players, their matches and head-to-head records"),
        (name = MATCH_TAG, description = "Match records"),
        (name = CONTEST_TAG, description = "Contests and participants"),
        (name = NOTICE_TAG, description = "Notice board"),
        (name = DASHBOARD_TAG, description = "Landing page aggregate"),
        (name = HEALTH_TAG, description = "Liveness check")
    )
)]
struct ApiDoc;

/// Builds the API router together with its OpenAPI document.
///
/// Routes sharing a path are registered together so `utoipa-axum` can attach every method
/// to the same path item. Swagger UI is served at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(middleware::from_fn(log_failed_requests))
        .layer(cors_layer())
}

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(clan::create_clan, clan::get_clans))
        .routes(routes!(clan::get_clan, clan::update_clan, clan::delete_clan))
        .routes(routes!(clan::get_clan_members))
        .routes(routes!(grade::create_grade, grade::get_grades))
        .routes(routes!(grade::get_grade, grade::update_grade, grade::delete_grade))
        .routes(routes!(player::create_player, player::get_players))
        .routes(routes!(
            player::get_player,
            player::update_player,
            player::delete_player
        ))
        .routes(routes!(player::get_player_matches))
        .routes(routes!(player::get_player_opponents))
        .routes(routes!(player::get_player_clans))
        .routes(routes!(game_match::create_match, game_match::search_matches))
        .routes(routes!(
            game_match::get_match,
            game_match::update_match,
            game_match::delete_match
        ))
        .routes(routes!(contest::create_contest, contest::get_contests))
        .routes(routes!(
            contest::get_contest,
            contest::update_contest,
            contest::delete_contest
        ))
        .routes(routes!(contest::add_participant))
        .routes(routes!(contest::remove_participant))
        .routes(routes!(notice::get_notices, notice::create_notice))
        .routes(routes!(
            notice::get_notice,
            notice::update_notice,
            notice::delete_notice
        ))
        .routes(routes!(dashboard::get_dashboard))
        .routes(routes!(health::health))
}

/// Permissive CORS for the separately hosted frontend.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(CORS_MAX_AGE)
}
