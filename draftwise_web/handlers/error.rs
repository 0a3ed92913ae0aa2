use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use draftwise_types::errors::{AppError, ApplicationError, DraftError};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Turns application errors and extractor rejections into JSON responses
/// with a stable error kind.
#[derive(Debug)]
pub enum ApiError {
    App(ApplicationError),
    /// Malformed path, query string or body.
    BadRequest(String),
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        ApiError::App(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        let err = match self {
            ApiError::App(err) => err,
            ApiError::BadRequest(_) => return StatusCode::BAD_REQUEST,
        };
        match err {
            ApplicationError::Draft(DraftError::UnknownHero { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApplicationError::Draft(_) => StatusCode::CONFLICT,
            ApplicationError::App(AppError::SessionNotFound(_)) => StatusCode::NOT_FOUND,
            ApplicationError::App(AppError::HeroNotFound(_)) => StatusCode::NOT_FOUND,
            ApplicationError::App(AppError::SessionExists(_)) => StatusCode::CONFLICT,
            ApplicationError::App(AppError::UnknownDraftMode(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        let err = match self {
            ApiError::App(err) => err,
            ApiError::BadRequest(_) => return "bad_request",
        };
        match err {
            ApplicationError::Draft(DraftError::UnknownHero { .. }) => "unknown_hero",
            ApplicationError::Draft(DraftError::IllegalAction { .. }) => "illegal_action",
            ApplicationError::Draft(DraftError::TerminalDraft { .. }) => "terminal_draft",
            ApplicationError::Draft(DraftError::EmptyHistory) => "empty_history",
            ApplicationError::App(AppError::SessionNotFound(_)) => "session_not_found",
            ApplicationError::App(AppError::HeroNotFound(_)) => "hero_not_found",
            ApplicationError::App(AppError::SessionExists(_)) => "session_exists",
            ApplicationError::App(AppError::UnknownDraftMode(_)) => "unknown_draft_mode",
            _ => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.kind().to_string();
        let message = match self {
            ApiError::App(err) if status.is_server_error() => {
                tracing::error!(error = %err, "Request failed");
                "Internal server error.".to_string()
            }
            ApiError::App(err) => err.to_string(),
            ApiError::BadRequest(message) => message,
        };

        let body = ErrorResponse { error, message };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use draftwise_types::common::HeroId;
    use uuid::Uuid;

    use super::*;

    fn api(err: impl Into<ApplicationError>) -> ApiError {
        ApiError::App(err.into())
    }

    #[test]
    fn draft_errors_map_to_client_statuses() {
        let unknown = api(DraftError::UnknownHero {
            hero_id: HeroId(999),
            slot: 0,
        });
        assert_eq!(unknown.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(unknown.kind(), "unknown_hero");

        let illegal = api(DraftError::IllegalAction {
            hero_id: HeroId(1),
            slot: 3,
        });
        assert_eq!(illegal.status(), StatusCode::CONFLICT);
        assert_eq!(illegal.kind(), "illegal_action");

        let terminal = api(DraftError::TerminalDraft {
            slot: 10,
            hero_id: Some(HeroId(4)),
        });
        assert_eq!(terminal.status(), StatusCode::CONFLICT);
        assert_eq!(terminal.kind(), "terminal_draft");

        let empty = api(DraftError::EmptyHistory);
        assert_eq!(empty.status(), StatusCode::CONFLICT);
        assert_eq!(empty.kind(), "empty_history");
    }

    #[test]
    fn app_errors_map_to_statuses() {
        let missing = api(AppError::SessionNotFound(Uuid::new_v4()));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.kind(), "session_not_found");

        let mode = api(AppError::UnknownDraftMode("turbo".to_string()));
        assert_eq!(mode.status(), StatusCode::BAD_REQUEST);
        assert_eq!(mode.kind(), "unknown_draft_mode");

        let hero = api(AppError::HeroNotFound(HeroId(404)));
        assert_eq!(hero.status(), StatusCode::NOT_FOUND);
        assert_eq!(hero.kind(), "hero_not_found");

        let taken = api(AppError::SessionExists(Uuid::new_v4()));
        assert_eq!(taken.status(), StatusCode::CONFLICT);
        assert_eq!(taken.kind(), "session_exists");
    }

    #[test]
    fn malformed_requests_are_bad_requests() {
        let err = ApiError::BadRequest("Invalid URL".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), "bad_request");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn everything_else_is_internal() {
        let err = ApiError::App(ApplicationError::Infrastructure("boom".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind(), "internal");
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
