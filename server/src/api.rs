use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};

use sapper_protocol::{GameStateBody, NewGameParams, NewTurnParams};

use crate::error::AppResult;
use crate::service::GameService;

pub fn router(service: GameService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/new", post(new_game))
        .route("/turn", post(new_turn))
        .layer(cors)
        .with_state(service)
}

async fn new_game(
    State(service): State<GameService>,
    Json(params): Json<NewGameParams>,
) -> AppResult<Json<GameStateBody>> {
    Ok(Json(service.create_game(params).await?))
}

async fn new_turn(
    State(service): State<GameService>,
    Json(params): Json<NewTurnParams>,
) -> AppResult<Json<GameStateBody>> {
    Ok(Json(service.make_turn(params).await?))
}
