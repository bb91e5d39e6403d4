use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::db::StoreError;
use crate::engine::EngineError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl AppError {
    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Engine(e) => match e {
                EngineError::QuotaExceeded { .. } => (StatusCode::CONFLICT, "quota_exceeded"),
                EngineError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
                EngineError::AlreadyCompleted(_) => (StatusCode::CONFLICT, "already_completed"),
                EngineError::EmptyQuestText => (StatusCode::UNPROCESSABLE_ENTITY, "validation"),
                EngineError::ConfirmationRequired => {
                    (StatusCode::PRECONDITION_REQUIRED, "confirmation_required")
                }
                EngineError::LoginBonusNotDue => (StatusCode::CONFLICT, "login_bonus_not_due"),
                EngineError::LoginBonusChanged { .. } => {
                    (StatusCode::CONFLICT, "login_bonus_changed")
                }
            },
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation"),
            AppError::Store(_) => (StatusCode::SERVICE_UNAVAILABLE, "persistence_failure"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();
        let message = match &self {
            AppError::Engine(e) => e.to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Store(e) => {
                tracing::error!(error = %e, "Storage error");
                "Storage unavailable".into()
            }
        };

        let body = json!({
            "error": {
                "message": message,
                "code": status.as_u16(),
                "kind": kind,
            }
        });

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
