use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::account::errors::AccountError;
use crate::account::models::AccessToken;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::AddAccountCommand;
use crate::account::models::Role;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;
use crate::account::ports::PasswordHasher;
use crate::account::ports::TokenDecrypter;

/// Domain service implementation for account operations.
pub struct AccountService<AR, PH, TD>
where
    AR: AccountRepository,
    PH: PasswordHasher,
    TD: TokenDecrypter,
{
    repository: Arc<AR>,
    password_hasher: Arc<PH>,
    token_decrypter: Arc<TD>,
}

impl<AR, PH, TD> AccountService<AR, PH, TD>
where
    AR: AccountRepository,
    PH: PasswordHasher,
    TD: TokenDecrypter,
{
    /// Create a new account service with injected dependencies.
    pub fn new(repository: Arc<AR>, password_hasher: Arc<PH>, token_decrypter: Arc<TD>) -> Self {
        Self {
            repository,
            password_hasher,
            token_decrypter,
        }
    }
}

#[async_trait]
impl<AR, PH, TD> AccountServicePort for AccountService<AR, PH, TD>
where
    AR: AccountRepository,
    PH: PasswordHasher,
    TD: TokenDecrypter,
{
    async fn add_account(&self, command: AddAccountCommand) -> Result<Account, AccountError> {
        if self
            .repository
            .load_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(AccountError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self.password_hasher.hash(&command.password).await?;

        let account = Account {
            id: AccountId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            access_token: None,
            role: None,
            created_at: Utc::now(),
        };

        let created = self.repository.add(account).await?;
        tracing::info!(account_id = %created.id, "Account created");

        Ok(created)
    }

    async fn load_by_token(
        &self,
        token: &AccessToken,
        role: Option<Role>,
    ) -> Result<Option<Account>, AccountError> {
        if self.token_decrypter.decrypt(token).await?.is_none() {
            return Ok(None);
        }

        self.repository.load_by_token(token, role).await
    }
}
