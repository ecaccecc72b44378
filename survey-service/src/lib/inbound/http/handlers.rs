use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::account::errors::AccountError;
use crate::survey::errors::SurveyError;

pub mod add_survey;
pub mod health;
pub mod login;
pub mod signup;

/// Generic message sent to clients for every internal failure.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Carries the internal detail; clients only ever see the generic message.
    InternalServerError(String),
    BadRequest(String),
    Unauthorized,
    Forbidden(String),
}

impl ApiError {
    pub fn access_denied() -> Self {
        ApiError::Forbidden("Access denied".to_string())
    }
}

/// Internal detail of a 500 response, attached as a response extension for
/// the error logging middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerErrorDetail(pub String);

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(detail) => {
                let mut response = error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR_MESSAGE,
                );
                response.extensions_mut().insert(ServerErrorDetail(detail));
                response
            }
            ApiError::BadRequest(message) => error_response(StatusCode::BAD_REQUEST, &message),
            ApiError::Unauthorized => error_response(StatusCode::UNAUTHORIZED, "Unauthorized"),
            ApiError::Forbidden(message) => error_response(StatusCode::FORBIDDEN, &message),
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::EmailAlreadyExists(_) => ApiError::Forbidden(err.to_string()),
            AccountError::InvalidEmail(_) => ParamError::Invalid("email").into(),
            AccountError::InvalidName(_) => ParamError::Invalid("name").into(),
            AccountError::InvalidAccountId(_)
            | AccountError::NotFound(_)
            | AccountError::Credential(_)
            | AccountError::Token(_)
            | AccountError::DatabaseError(_)
            | AccountError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<SurveyError> for ApiError {
    fn from(err: SurveyError) -> Self {
        match err {
            SurveyError::InvalidQuestion(_) => ParamError::Invalid("question").into(),
            SurveyError::InvalidAnswers(_) => ParamError::Invalid("answers").into(),
            SurveyError::DatabaseError(_) | SurveyError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// Request body validation failure, named after the offending field.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("Missing param: {0}")]
    Missing(&'static str),

    #[error("Invalid param: {0}")]
    Invalid(&'static str),
}

impl From<ParamError> for ApiError {
    fn from(err: ParamError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Returns the value of a present, non-blank field.
pub(crate) fn required(value: Option<String>, field: &'static str) -> Result<String, ParamError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(ParamError::Missing(field))
}
