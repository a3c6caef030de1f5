//! Request handlers: thin shims from HTTP to the voting core and board.
//!
//! Each handler resolves the current user, parses typed ids off the path,
//! and delegates; all policy lives in `agora-vote`. The `setting_id` path
//! segment is accepted for route compatibility but not consulted — vote
//! semantics depend only on the post or comment id.

use std::sync::Arc;

use agora_store::TargetDirectory;
use agora_types::{Comment, CommentId, Post, PostId, VoteDirection, VoteId, VoteState, VoteTarget};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use serde_json::json;

use crate::error::{ServerError, ServerResult};
use crate::model::{CommentResponse, CreateCommentRequest, CreatePostRequest, PostResponse};
use crate::state::AppState;

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "agora-server",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "ok",
    }))
}

// ---------------------------------------------------------------------------
// Post votes: keyed by (user, target)
// ---------------------------------------------------------------------------

pub async fn up_vote_post(
    State(state): State<Arc<AppState>>,
    Path((_setting_id, post_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> ServerResult<StatusCode> {
    cast_post_vote(&state, &post_id, &headers, VoteDirection::Up).await
}

pub async fn down_vote_post(
    State(state): State<Arc<AppState>>,
    Path((_setting_id, post_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> ServerResult<StatusCode> {
    cast_post_vote(&state, &post_id, &headers, VoteDirection::Down).await
}

async fn cast_post_vote(
    state: &AppState,
    post_id: &str,
    headers: &HeaderMap,
    direction: VoteDirection,
) -> ServerResult<StatusCode> {
    let user = state.require_user(headers).await?;
    let post = PostId::parse(post_id)?;
    state.engine.cast_vote(post.into(), user.user, direction)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove_post_vote(
    State(state): State<Arc<AppState>>,
    Path((_setting_id, post_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> ServerResult<StatusCode> {
    let user = state.require_user(&headers).await?;
    let post = PostId::parse(&post_id)?;
    state.engine.remove_post_vote(post, user.user)?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Comment votes: cast by comment id, removed by vote-record id
// ---------------------------------------------------------------------------

pub async fn up_vote_comment(
    State(state): State<Arc<AppState>>,
    Path((_setting_id, _post_id, comment_id)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> ServerResult<StatusCode> {
    cast_comment_vote(&state, &comment_id, &headers, VoteDirection::Up).await
}

pub async fn down_vote_comment(
    State(state): State<Arc<AppState>>,
    Path((_setting_id, _post_id, comment_id)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> ServerResult<StatusCode> {
    cast_comment_vote(&state, &comment_id, &headers, VoteDirection::Down).await
}

async fn cast_comment_vote(
    state: &AppState,
    comment_id: &str,
    headers: &HeaderMap,
    direction: VoteDirection,
) -> ServerResult<StatusCode> {
    let user = state.require_user(headers).await?;
    let comment = CommentId::parse(comment_id)?;
    state.engine.cast_vote(comment.into(), user.user, direction)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove_comment_vote(
    State(state): State<Arc<AppState>>,
    Path((_setting_id, _post_id, _comment_id, vote_id)): Path<(String, String, String, String)>,
    headers: HeaderMap,
) -> ServerResult<StatusCode> {
    let user = state.require_user(&headers).await?;
    let vote = VoteId::parse(&vote_id)?;
    state.engine.remove_comment_vote(vote, user.user)?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Thin post/comment CRUD
// ---------------------------------------------------------------------------

pub async fn create_post(
    State(state): State<Arc<AppState>>,
    Path(_setting_id): Path<String>,
    headers: HeaderMap,
    Json(request): Json<CreatePostRequest>,
) -> ServerResult<(StatusCode, Json<PostResponse>)> {
    let user = state.require_user(&headers).await?;
    let post = Post::new(request.title, request.body, user.user);
    state.board.insert_post(&post)?;

    let response = PostResponse::new(post, 0, 0, VoteState::None);
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path((_setting_id, post_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> ServerResult<Json<PostResponse>> {
    let reader = state.reader(&headers).await?;
    let id = PostId::parse(&post_id)?;
    let post = state
        .board
        .find_post(&id)?
        .ok_or(ServerError::PostNotFound(id))?;

    let target: VoteTarget = id.into();
    let vote_count = state.scores.score(&target)?;
    let comment_count = state.board.comment_count(&id)?;
    let your_vote = match &reader {
        Some(identity) => state.engine.resolver().resolve(&identity.user, &target)?,
        None => VoteState::None,
    };

    Ok(Json(PostResponse::new(
        post,
        vote_count,
        comment_count,
        your_vote,
    )))
}

pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    Path((_setting_id, post_id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(request): Json<CreateCommentRequest>,
) -> ServerResult<(StatusCode, Json<CommentResponse>)> {
    let user = state.require_user(&headers).await?;
    let post = PostId::parse(&post_id)?;
    if state.board.find_post(&post)?.is_none() {
        return Err(ServerError::PostNotFound(post));
    }

    let comment = Comment::new(post, request.body, user.user);
    state.board.insert_comment(&comment)?;

    let response = CommentResponse::new(comment, 0, VoteState::None, None);
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    Path((_setting_id, post_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> ServerResult<Json<Vec<CommentResponse>>> {
    let reader = state.reader(&headers).await?;
    let post = PostId::parse(&post_id)?;
    if state.board.find_post(&post)?.is_none() {
        return Err(ServerError::PostNotFound(post));
    }

    let mut responses = Vec::new();
    for comment in state.board.comments_for_post(&post)? {
        let target: VoteTarget = comment.id.into();
        let vote_count = state.scores.score(&target)?;
        let (your_vote, your_vote_id) = match &reader {
            Some(identity) => {
                let record = state
                    .engine
                    .resolver()
                    .current_record(&identity.user, &target)?;
                (
                    VoteState::from(record.as_ref().map(|r| r.direction)),
                    record.map(|r| r.id),
                )
            }
            None => (VoteState::None, None),
        };
        responses.push(CommentResponse::new(
            comment,
            vote_count,
            your_vote,
            your_vote_id,
        ));
    }
    Ok(Json(responses))
}
