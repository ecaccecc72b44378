use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::account::errors::AccountIdError;
use crate::account::errors::AccountNameError;
use crate::account::errors::EmailError;

/// Account aggregate entity.
///
/// The email is the lookup key for authentication, the access token the
/// lookup key for request authorization. Both are unique in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub name: AccountName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub access_token: Option<AccessToken>,
    pub role: Option<Role>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Whether this account may pass a guard that requires `required`.
    ///
    /// Admins pass every guard. Otherwise the account's role must equal the
    /// required one, where "no role required" matches an account with no role.
    pub fn satisfies_role(&self, required: Option<&Role>) -> bool {
        self.role.as_ref().is_some_and(Role::is_admin) || self.role.as_ref() == required
    }
}

/// Account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account ID (UUID v4).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an account ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AccountIdError> {
        Uuid::parse_str(s)
            .map(AccountId)
            .map_err(|e| AccountIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountName(String);

impl AccountName {
    const MAX_LENGTH: usize = 100;

    /// Create a validated display name.
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Errors
    /// * `Blank` - Name is empty after trimming
    /// * `TooLong` - Name longer than 100 characters
    pub fn new(name: String) -> Result<Self, AccountNameError> {
        let name = name.trim().to_string();
        let length = name.chars().count();

        if length == 0 {
            Err(AccountNameError::Blank)
        } else if length > Self::MAX_LENGTH {
            Err(AccountNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque bearer credential issued on successful authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Debug never prints the token value.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Privilege tag on an account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Role(String);

impl Role {
    pub const ADMIN: &'static str = "admin";

    pub fn new(role: impl Into<String>) -> Self {
        Self(role.into())
    }

    pub fn admin() -> Self {
        Self::new(Self::ADMIN)
    }

    pub fn is_admin(&self) -> bool {
        self.0 == Self::ADMIN
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new account with validated fields
#[derive(Debug, Clone)]
pub struct AddAccountCommand {
    pub name: AccountName,
    pub email: EmailAddress,
    /// Plain text password (hashed by the service)
    pub password: String,
}

impl AddAccountCommand {
    pub fn new(name: AccountName, email: EmailAddress, password: String) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}

/// Credentials presented at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationCommand {
    pub email: EmailAddress,
    pub password: String,
}

impl AuthenticationCommand {
    pub fn new(email: EmailAddress, password: String) -> Self {
        Self { email, password }
    }
}

/// Result of an authentication attempt.
///
/// `Denied` covers an unknown email and a wrong password alike; it is a
/// successful outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationOutcome {
    Granted(AccessToken),
    Denied,
}

/// Result of an access check on an inbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Authorized(AccountId),
    Denied,
}
