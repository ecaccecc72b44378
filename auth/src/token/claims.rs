use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Payload carried by an access token.
///
/// `sub` is the account identifier. `jti` makes every issued token unique,
/// even for two logins of the same account within the same second.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

impl AccessClaims {
    /// Claims for `subject`, valid for `lifetime_hours` from now.
    pub fn for_subject(subject: impl ToString, lifetime_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(lifetime_hours);

        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            jti: format!("{:x}", now.timestamp_nanos_opt().unwrap_or_default()),
        }
    }

    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
