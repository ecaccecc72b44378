use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::AccessToken;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::AddAccountCommand;
use crate::account::models::AuthenticationCommand;
use crate::account::models::AuthenticationOutcome;
use crate::account::models::EmailAddress;
use crate::account::models::Role;

/// Port for account lifecycle operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// # Arguments
    /// * `command` - Validated name, email and plaintext password
    ///
    /// # Returns
    /// Created account (password stored hashed, no token, no role)
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Credential` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn add_account(&self, command: AddAccountCommand) -> Result<Account, AccountError>;

    /// Resolve the account holding `token`, constrained to `role`.
    ///
    /// # Returns
    /// `None` when the token is not one we signed, has expired, belongs to
    /// no account, or the account does not satisfy `role`
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn load_by_token(
        &self,
        token: &AccessToken,
        role: Option<Role>,
    ) -> Result<Option<Account>, AccountError>;
}

/// Port for credential authentication.
#[async_trait]
pub trait AuthenticationPort: Send + Sync + 'static {
    /// Exchange an email and password for a fresh access token.
    ///
    /// # Returns
    /// `Granted` with the new token, or `Denied` for an unknown email or a
    /// wrong password
    ///
    /// # Errors
    /// Any collaborator failure, unchanged
    async fn authenticate(
        &self,
        command: AuthenticationCommand,
    ) -> Result<AuthenticationOutcome, AccountError>;
}

/// Persistence operations for the account aggregate.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email unique constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn add(&self, account: Account) -> Result<Account, AccountError>;

    /// Retrieve the account registered with `email`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn load_by_email(&self, email: &EmailAddress) -> Result<Option<Account>, AccountError>;

    /// Retrieve the account holding `token`, if it satisfies `role`.
    ///
    /// See [`Account::satisfies_role`] for the matching rule.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn load_by_token(
        &self,
        token: &AccessToken,
        role: Option<Role>,
    ) -> Result<Option<Account>, AccountError>;

    /// Store `token` as the current access token of account `id`.
    ///
    /// # Errors
    /// * `NotFound` - No account with this ID
    /// * `DatabaseError` - Database operation failed
    async fn update_access_token(
        &self,
        id: &AccountId,
        token: &AccessToken,
    ) -> Result<(), AccountError>;
}

/// Produces storable password hashes.
#[async_trait]
pub trait PasswordHasher: Send + Sync + 'static {
    async fn hash(&self, plaintext: &str) -> Result<String, AccountError>;
}

/// Verifies a plaintext secret against a stored hash.
#[async_trait]
pub trait HashComparer: Send + Sync + 'static {
    async fn compare(&self, plaintext: &str, hash: &str) -> Result<bool, AccountError>;
}

/// Issues access tokens bound to an account.
#[async_trait]
pub trait TokenIssuer: Send + Sync + 'static {
    async fn issue(&self, id: &AccountId) -> Result<AccessToken, AccountError>;
}

/// Recovers the account ID from a token we issued.
#[async_trait]
pub trait TokenDecrypter: Send + Sync + 'static {
    /// # Returns
    /// `None` for a forged, malformed or expired token
    async fn decrypt(&self, token: &AccessToken) -> Result<Option<AccountId>, AccountError>;
}
