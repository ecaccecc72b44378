use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::required;
use super::ApiError;
use super::ApiSuccess;
use super::ParamError;
use crate::account::models::AuthenticationCommand;
use crate::account::models::AuthenticationOutcome;
use crate::account::models::EmailAddress;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<AccessTokenResponseData>, ApiError> {
    let Json(body) = body?;
    let command = body.try_into_command()?;

    match state.authenticator.authenticate(command).await? {
        AuthenticationOutcome::Granted(token) => Ok(ApiSuccess::new(
            StatusCode::OK,
            AccessTokenResponseData::new(token.as_str()),
        )),
        AuthenticationOutcome::Denied => Err(ApiError::Unauthorized),
    }
}

/// HTTP request body for logging in (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

impl LoginRequest {
    fn try_into_command(self) -> Result<AuthenticationCommand, ParamError> {
        let email = required(self.email, "email")?;
        let password = required(self.password, "password")?;
        let email = EmailAddress::new(email).map_err(|_| ParamError::Invalid("email"))?;

        Ok(AuthenticationCommand::new(email, password))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponseData {
    pub access_token: String,
}

impl AccessTokenResponseData {
    pub fn new(access_token: &str) -> Self {
        Self {
            access_token: access_token.to_string(),
        }
    }
}
