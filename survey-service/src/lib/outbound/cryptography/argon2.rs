use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::ports::HashComparer;
use crate::account::ports::PasswordHasher;

/// Argon2id adapter for the credential ports.
///
/// Hashing is CPU-bound, so every call runs on the blocking pool.
#[derive(Clone, Default)]
pub struct Argon2Adapter {
    hasher: auth::PasswordHasher,
}

impl Argon2Adapter {
    pub fn new() -> Self {
        Self::default()
    }

    async fn run_blocking<T, F>(&self, task: F) -> Result<T, AccountError>
    where
        T: Send + 'static,
        F: FnOnce(auth::PasswordHasher) -> Result<T, auth::PasswordError> + Send + 'static,
    {
        let hasher = self.hasher.clone();

        tokio::task::spawn_blocking(move || task(hasher))
            .await
            .map_err(|e| AccountError::Unknown(format!("Hashing task aborted: {}", e)))?
            .map_err(|e| AccountError::Credential(e.to_string()))
    }
}

#[async_trait]
impl PasswordHasher for Argon2Adapter {
    async fn hash(&self, plaintext: &str) -> Result<String, AccountError> {
        let plaintext = plaintext.to_owned();
        self.run_blocking(move |hasher| hasher.hash(&plaintext))
            .await
    }
}

#[async_trait]
impl HashComparer for Argon2Adapter {
    async fn compare(&self, plaintext: &str, hash: &str) -> Result<bool, AccountError> {
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();
        self.run_blocking(move |hasher| hasher.verify(&plaintext, &hash))
            .await
    }
}
