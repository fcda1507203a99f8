//! HS256 bearer token verification.
//!
//! Tokens are compact JWTs signed with a shared secret by an external issuer. Only the
//! `id` and optional `exp` claims are read; `id` identifies the caller and may be a string
//! or a number.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Deserializer, Serialize};

use crate::server::error::auth::AuthError;

/// Claims read from a verified token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(deserialize_with = "caller_id")]
    pub id: String,
    /// Expiry as seconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// Verifies HS256 tokens against a shared secret.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
    #[cfg(test)]
    secret: Vec<u8>,
}

impl TokenVerifier {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` is optional; it is still checked whenever present.
        validation.required_spec_claims.clear();
        validation.leeway = 0;
        validation.validate_aud = false;

        Self {
            key: DecodingKey::from_secret(secret.as_ref()),
            validation,
            #[cfg(test)]
            secret: secret.as_ref().to_vec(),
        }
    }

    /// Verifies a compact token and returns its claims.
    ///
    /// # Arguments
    /// - `token` - Token text without the `Bearer` scheme
    ///
    /// # Returns
    /// - `Ok(Claims)` - Signature valid and token not expired
    /// - `Err(AuthError::InvalidToken)` - Malformed token, wrong algorithm, bad
    ///   signature or expired `exp`
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    /// Signs claims into a compact token.
    #[cfg(test)]
    pub fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        use jsonwebtoken::{encode, EncodingKey, Header};

        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(&self.secret),
        )
        .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

/// Accepts the `id` claim as either a JSON string or number.
fn caller_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(id) => Ok(id.to_string()),
        other => Err(D::Error::custom(format!("unsupported id claim: {}", other))),
    }
}
