use agora_store::StoreError;
use agora_types::{PostId, TypeError};
use agora_vote::VoteError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("invalid id: {0}")]
    InvalidId(#[from] TypeError),

    #[error("post not found: {0}")]
    PostNotFound(PostId),

    #[error(transparent)]
    Vote(#[from] VoteError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// The HTTP status this error renders as.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::PostNotFound(_) => StatusCode::NOT_FOUND,
            Self::Vote(VoteError::TargetNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Vote(VoteError::AlreadyVoted(_)) => StatusCode::CONFLICT,
            Self::Vote(VoteError::NothingToRemove(_)) => StatusCode::CONFLICT,
            Self::Vote(VoteError::NotOwner(_)) => StatusCode::FORBIDDEN,
            Self::Vote(VoteError::Internal(_))
            | Self::Store(_)
            | Self::Config(_)
            | Self::Io(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(json!({
            "status": status.as_u16(),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
