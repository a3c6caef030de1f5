use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all Agora endpoints.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/health", get(handler::health_handler))
        .route("/setting/:setting_id/post", post(handler::create_post))
        .route("/setting/:setting_id/post/:post_id", get(handler::get_post))
        .route(
            "/setting/:setting_id/post/:post_id/vote/up",
            post(handler::up_vote_post),
        )
        .route(
            "/setting/:setting_id/post/:post_id/vote/down",
            post(handler::down_vote_post),
        )
        .route(
            "/setting/:setting_id/post/:post_id/vote/remove",
            delete(handler::remove_post_vote),
        )
        .route(
            "/setting/:setting_id/post/:post_id/comment",
            post(handler::create_comment).get(handler::list_comments),
        )
        .route(
            "/setting/:setting_id/post/:post_id/comment/:comment_id/vote/up",
            post(handler::up_vote_comment),
        )
        .route(
            "/setting/:setting_id/post/:post_id/comment/:comment_id/vote/down",
            post(handler::down_vote_comment),
        )
        .route(
            "/setting/:setting_id/post/:post_id/comment/:comment_id/vote/:vote_id/remove",
            delete(handler::remove_comment_vote),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
