use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use uuid::Uuid;

use sapper_core::GameError;
use sapper_protocol::ErrorBody;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("game session {0} does not exist")]
    NotFound(Uuid),
    #[error("game session {0} has been completed already")]
    GameAlreadyCompleted(Uuid),
    #[error(transparent)]
    Engine(#[from] GameError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::GameAlreadyCompleted(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // invalid turns are caller mistakes against current game state;
            // any other engine error leaking this far is an internal bug
            AppError::Engine(GameError::InvalidTurn(_)) => StatusCode::BAD_REQUEST,
            AppError::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
