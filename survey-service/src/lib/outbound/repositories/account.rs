use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::account::errors::AccountError;
use crate::account::models::AccessToken;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::AccountName;
use crate::account::models::EmailAddress;
use crate::account::models::Role;
use crate::account::ports::AccountRepository;

const SELECT_ACCOUNT: &str = r#"
    SELECT id, name, email, password_hash, access_token, role, created_at
    FROM accounts
"#;

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    access_token: Option<String>,
    role: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = AccountError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Account {
            id: AccountId(row.id),
            name: AccountName::new(row.name)?,
            email: EmailAddress::new(row.email)?,
            password_hash: row.password_hash,
            access_token: row.access_token.map(AccessToken::new),
            role: row.role.map(Role::new),
            created_at: row.created_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> AccountError {
    AccountError::DatabaseError(e.to_string())
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn add(&self, account: Account) -> Result<Account, AccountError> {
        sqlx::query(
            r#"
            INSERT INTO accounts (id, name, email, password_hash, access_token, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(account.id.0)
        .bind(account.name.as_str())
        .bind(account.email.as_str())
        .bind(&account.password_hash)
        .bind(account.access_token.as_ref().map(AccessToken::as_str))
        .bind(account.role.as_ref().map(Role::as_str))
        .bind(account.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("accounts_email_key")
                {
                    return AccountError::EmailAlreadyExists(account.email.as_str().to_string());
                }
            }
            database_error(e)
        })?;

        Ok(account)
    }

    async fn load_by_email(&self, email: &EmailAddress) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!("{SELECT_ACCOUNT} WHERE email = $1"))
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        row.map(Account::try_from).transpose()
    }

    async fn load_by_token(
        &self,
        token: &AccessToken,
        role: Option<Role>,
    ) -> Result<Option<Account>, AccountError> {
        let row =
            sqlx::query_as::<_, AccountRow>(&format!("{SELECT_ACCOUNT} WHERE access_token = $1"))
                .bind(token.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(database_error)?;

        let account = row.map(Account::try_from).transpose()?;

        Ok(account.filter(|account| account.satisfies_role(role.as_ref())))
    }

    async fn update_access_token(
        &self,
        id: &AccountId,
        token: &AccessToken,
    ) -> Result<(), AccountError> {
        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET access_token = $2
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .bind(token.as_str())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(AccountError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
