use std::sync::Arc;

use axum::extract::Request;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::account::errors::AccountError;
use crate::account::models::AccessDecision;
use crate::account::models::AccessToken;
use crate::account::models::AccountId;
use crate::account::models::Role;
use crate::account::ports::AccountServicePort;
use crate::error_log::ErrorLogRepository;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ServerErrorDetail;

/// Header carrying the bearer access token.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Extension type to store the authorized account in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub account_id: AccountId,
}

/// Decides whether a request may reach a protected route.
///
/// The required role is fixed at construction; `None` lets through any
/// account holding a valid token and no role, as well as admins.
#[derive(Clone)]
pub struct AccessGuard {
    accounts: Arc<dyn AccountServicePort>,
    role: Option<Role>,
}

impl AccessGuard {
    pub fn new(accounts: Arc<dyn AccountServicePort>, role: Option<Role>) -> Self {
        Self { accounts, role }
    }

    pub fn role(&self) -> Option<&Role> {
        self.role.as_ref()
    }

    /// # Errors
    /// Lookup failures, which must surface as internal errors rather than a denial
    pub async fn check(&self, headers: &HeaderMap) -> Result<AccessDecision, AccountError> {
        let Some(token) = access_token(headers) else {
            return Ok(AccessDecision::Denied);
        };

        let decision = match self.accounts.load_by_token(&token, self.role.clone()).await? {
            Some(account) => AccessDecision::Authorized(account.id),
            None => AccessDecision::Denied,
        };

        Ok(decision)
    }
}

fn access_token(headers: &HeaderMap) -> Option<AccessToken> {
    headers
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(AccessToken::new)
}

/// Middleware that runs the [`AccessGuard`] and adds the account to request extensions
pub async fn require_access(
    State(guard): State<AccessGuard>,
    mut req: Request,
    next: Next,
) -> Response {
    match guard.check(req.headers()).await {
        Ok(AccessDecision::Authorized(account_id)) => {
            req.extensions_mut().insert(AuthenticatedAccount { account_id });
            next.run(req).await
        }
        Ok(AccessDecision::Denied) => {
            tracing::warn!(
                uri = %req.uri(),
                required_role = ?guard.role().map(Role::as_str),
                "Access denied"
            );
            ApiError::access_denied().into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Middleware that records the detail of every internal failure.
///
/// The response itself is passed through untouched, also when recording fails.
pub async fn log_server_errors(
    State(error_log): State<Arc<dyn ErrorLogRepository>>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let detail = response.extensions().get::<ServerErrorDetail>().cloned();

    if let Some(ServerErrorDetail(detail)) = detail {
        tracing::error!(method = %method, uri = %uri, error = %detail, "Request failed");

        if let Err(e) = error_log.log_error(&detail).await {
            tracing::error!(error = %e, "Failed to record error log entry");
        }
    }

    response
}
