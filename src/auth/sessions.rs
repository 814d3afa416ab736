/**
 * Session Codec
 *
 * This module creates and verifies the signed session tokens that carry
 * user identity between requests. A session is a JWT (HMAC-SHA256)
 * embedding the claim set {sub, name, email} plus issued-at and an
 * expiration exactly seven days out. Nothing is persisted server-side:
 * the token is the whole session, which also means logout cannot revoke
 * a token that was copied before the cookie was cleared.
 *
 * # Signing Key
 *
 * The key pair is built once at startup from the configured secret and
 * lives in the application state. There is deliberately no fallback
 * secret and no per-call environment read: a process that cannot load
 * `JWT_SECRET` refuses to start (see `server::config`).
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sessions live this long from the moment of issuance.
pub const SESSION_TTL_DAYS: i64 = 7;

/// Claim set carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (UUID, stringified)
    pub sub: String,
    /// Display name at issuance time
    pub name: String,
    /// Email at issuance time
    pub email: String,
    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiration (Unix timestamp, seconds)
    pub exp: i64,
}

/// A freshly minted session: the signed token plus the material the
/// HTTP boundary needs to build the cookie and the response body.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub claims: Claims,
    pub expires_at: DateTime<Utc>,
}

/// Issues and verifies session tokens with a process-wide key.
#[derive(Clone)]
pub struct SessionCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl SessionCodec {
    /// Build a codec with the standard seven-day session lifetime.
    pub fn new(secret: &str) -> Self {
        Self::with_ttl(secret, Duration::days(SESSION_TTL_DAYS))
    }

    /// Build a codec with an explicit lifetime. Shorter (or negative)
    /// lifetimes are how the expiry tests mint already-dead tokens.
    pub fn with_ttl(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issue a signed session token for a user.
    ///
    /// The expiration lands exactly `ttl` after now; the caller reuses
    /// `expires_at` for the cookie so token and cookie die together.
    pub fn issue(
        &self,
        user_id: Uuid,
        name: &str,
        email: &str,
    ) -> Result<IssuedSession, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let expires_at = now + self.ttl;

        let claims = Claims {
            sub: user_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding)?;

        Ok(IssuedSession {
            token,
            claims,
            expires_at,
        })
    }

    /// Verify a session token and recover its claims.
    ///
    /// Returns `None` on any tamper, malformed token, or expiry. That is
    /// an expected, frequent outcome (every anonymous visit lands here),
    /// so this path is CPU-only, allocation-light, and does not log.
    /// Expiry is checked with zero leeway: a token is invalid from its
    /// expiration instant onward.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .ok()
    }
}
