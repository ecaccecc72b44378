use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::login::AccessTokenResponseData;
use super::required;
use super::ApiError;
use super::ApiSuccess;
use super::ParamError;
use crate::account::models::AccountName;
use crate::account::models::AddAccountCommand;
use crate::account::models::AuthenticationCommand;
use crate::account::models::AuthenticationOutcome;
use crate::account::models::EmailAddress;
use crate::inbound::http::router::AppState;

/// Registers an account and logs it straight in.
pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<SignUpRequest>, JsonRejection>,
) -> Result<ApiSuccess<AccessTokenResponseData>, ApiError> {
    let Json(body) = body?;
    let command = body.try_into_command()?;
    let credentials = AuthenticationCommand::new(command.email.clone(), command.password.clone());

    let account = state.account_service.add_account(command).await?;

    match state.authenticator.authenticate(credentials).await? {
        AuthenticationOutcome::Granted(token) => Ok(ApiSuccess::new(
            StatusCode::OK,
            AccessTokenResponseData::new(token.as_str()),
        )),
        AuthenticationOutcome::Denied => Err(ApiError::InternalServerError(format!(
            "Account {} was created but could not authenticate",
            account.id
        ))),
    }
}

/// HTTP request body for signing up (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    password_confirmation: Option<String>,
}

impl SignUpRequest {
    fn try_into_command(self) -> Result<AddAccountCommand, ParamError> {
        let name = required(self.name, "name")?;
        let email = required(self.email, "email")?;
        let password = required(self.password, "password")?;
        let password_confirmation = required(self.password_confirmation, "passwordConfirmation")?;

        if password != password_confirmation {
            return Err(ParamError::Invalid("passwordConfirmation"));
        }

        let email = EmailAddress::new(email).map_err(|_| ParamError::Invalid("email"))?;
        let name = AccountName::new(name).map_err(|_| ParamError::Invalid("name"))?;

        Ok(AddAccountCommand::new(name, email, password))
    }
}
