use async_trait::async_trait;
use auth::AccessClaims;
use auth::TokenSigner;

use crate::account::errors::AccountError;
use crate::account::models::AccessToken;
use crate::account::models::AccountId;
use crate::account::ports::TokenDecrypter;
use crate::account::ports::TokenIssuer;

/// HS256 adapter for the token ports.
pub struct JwtAdapter {
    signer: TokenSigner,
    expiration_hours: i64,
}

impl JwtAdapter {
    pub fn new(secret: &[u8], expiration_hours: i64) -> Self {
        Self {
            signer: TokenSigner::new(secret),
            expiration_hours,
        }
    }
}

#[async_trait]
impl TokenIssuer for JwtAdapter {
    async fn issue(&self, id: &AccountId) -> Result<AccessToken, AccountError> {
        let claims = AccessClaims::for_subject(id, self.expiration_hours);

        self.signer
            .sign(&claims)
            .map(AccessToken::new)
            .map_err(|e| AccountError::Token(e.to_string()))
    }
}

#[async_trait]
impl TokenDecrypter for JwtAdapter {
    async fn decrypt(&self, token: &AccessToken) -> Result<Option<AccountId>, AccountError> {
        let claims = match self.signer.verify(token.as_str()) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!(error = %e, "Rejected access token");
                return Ok(None);
            }
        };

        match AccountId::from_string(&claims.sub) {
            Ok(id) => Ok(Some(id)),
            Err(e) => {
                tracing::warn!(error = %e, "Signed access token carries a malformed subject");
                Ok(None)
            }
        }
    }
}
