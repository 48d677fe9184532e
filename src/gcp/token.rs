//! OAuth2 access-token provider for the service account.
//!
//! Uses the JWT-bearer grant: an RS256-signed assertion is exchanged at the
//! key's `token_uri` for a bearer token scoped to the Cloud APIs. Tokens are
//! cached process-wide and refreshed shortly before they expire, so the two
//! downstream clients (storage, model) share one token.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use super::GcpError;
use super::credentials::ServiceAccountKey;

const SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";
const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Tokens within this many seconds of expiry are treated as stale.
const EXPIRY_SKEW_SECS: i64 = 60;

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(EXPIRY_SKEW_SECS) < self.expires_at
    }
}

/// Mints and caches OAuth2 access tokens for one service account.
pub struct TokenProvider {
    http: reqwest::Client,
    key: ServiceAccountKey,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenProvider {
    pub fn new(http: reqwest::Client, key: ServiceAccountKey) -> Self {
        Self {
            http,
            key,
            cached: Mutex::new(None),
        }
    }

    /// Return a bearer token, minting a new one if the cache is empty or
    /// about to expire. The lock is held across the refresh so concurrent
    /// callers do not race duplicate token requests.
    pub async fn access_token(&self) -> Result<String, GcpError> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.is_fresh(Utc::now()) {
                return Ok(token.token.clone());
            }
        }

        let fresh = self.fetch().await?;
        let token = fresh.token.clone();
        *cached = Some(fresh);
        Ok(token)
    }

    async fn fetch(&self) -> Result<CachedToken, GcpError> {
        let now = Utc::now();
        let claims = Claims {
            iss: &self.key.client_email,
            scope: SCOPE,
            aud: &self.key.token_uri,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ASSERTION_LIFETIME_SECS)).timestamp(),
        };

        let signing_key =
            EncodingKey::from_rsa_pem(self.key.private_key.expose_secret().as_bytes())?;
        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &signing_key)?;

        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[("grant_type", GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GcpError::from_response("token endpoint", response).await);
        }

        let body: TokenResponse = response.json().await?;
        debug!(expires_in = body.expires_in, "minted access token");

        Ok(CachedToken {
            token: body.access_token,
            expires_at: now + Duration::seconds(body.expires_in),
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn claims_serialize_to_expected_fields() {
        let claims = Claims {
            iss: "svc@example.iam.gserviceaccount.com",
            scope: SCOPE,
            aud: "https://oauth2.googleapis.com/token",
            iat: 1_700_000_000,
            exp: 1_700_003_600,
        };
        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["iss"], "svc@example.iam.gserviceaccount.com");
        assert_eq!(value["scope"], SCOPE);
        assert_eq!(value["exp"].as_i64().unwrap() - value["iat"].as_i64().unwrap(), 3600);
    }

    #[test]
    fn token_near_expiry_is_stale() {
        let now = Utc::now();
        let token = CachedToken {
            token: "t".into(),
            expires_at: now + Duration::seconds(EXPIRY_SKEW_SECS / 2),
        };
        assert!(!token.is_fresh(now));

        let token = CachedToken {
            token: "t".into(),
            expires_at: now + Duration::seconds(3600),
        };
        assert!(token.is_fresh(now));
    }
}
