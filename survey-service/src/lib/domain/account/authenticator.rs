use std::sync::Arc;

use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::AuthenticationCommand;
use crate::account::models::AuthenticationOutcome;
use crate::account::ports::AccountRepository;
use crate::account::ports::AuthenticationPort;
use crate::account::ports::HashComparer;
use crate::account::ports::TokenIssuer;

/// Login use case.
///
/// Looks the account up by email, checks the password, issues a token and
/// stores it on the account. Stops at the first denial or failure.
pub struct Authenticator<AR, HC, TI>
where
    AR: AccountRepository,
    HC: HashComparer,
    TI: TokenIssuer,
{
    repository: Arc<AR>,
    hash_comparer: Arc<HC>,
    token_issuer: Arc<TI>,
}

impl<AR, HC, TI> Authenticator<AR, HC, TI>
where
    AR: AccountRepository,
    HC: HashComparer,
    TI: TokenIssuer,
{
    pub fn new(repository: Arc<AR>, hash_comparer: Arc<HC>, token_issuer: Arc<TI>) -> Self {
        Self {
            repository,
            hash_comparer,
            token_issuer,
        }
    }
}

#[async_trait]
impl<AR, HC, TI> AuthenticationPort for Authenticator<AR, HC, TI>
where
    AR: AccountRepository,
    HC: HashComparer,
    TI: TokenIssuer,
{
    async fn authenticate(
        &self,
        command: AuthenticationCommand,
    ) -> Result<AuthenticationOutcome, AccountError> {
        let Some(account) = self.repository.load_by_email(&command.email).await? else {
            tracing::debug!(email = %command.email, "Authentication denied: unknown email");
            return Ok(AuthenticationOutcome::Denied);
        };

        let password_matches = self
            .hash_comparer
            .compare(&command.password, &account.password_hash)
            .await?;

        if !password_matches {
            tracing::debug!(account_id = %account.id, "Authentication denied: password mismatch");
            return Ok(AuthenticationOutcome::Denied);
        }

        let access_token = self.token_issuer.issue(&account.id).await?;

        self.repository
            .update_access_token(&account.id, &access_token)
            .await?;

        tracing::info!(account_id = %account.id, "Account authenticated");

        Ok(AuthenticationOutcome::Granted(access_token))
    }
}
