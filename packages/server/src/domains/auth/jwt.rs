use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token lifetime in minutes. Clients re-authenticate when it lapses.
const TOKEN_TTL_MINUTES: i64 = 5;

/// Identity claim supplied by the caller at sign-in.
///
/// Only `email` is interpreted by the server; any extra fields ride along
/// into the token payload untouched.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IdentityClaim {
    pub email: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// JWT Claims - data stored in the token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub email: String, // Owner identity for authorization checks
    pub exp: i64,      // Expiration timestamp
    pub iat: i64,      // Issued at timestamp
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// JWT Service - creates and verifies JWT tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// Create new JWT service from the server-held secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Create a new token for a signed-in identity
    ///
    /// Token expires after five minutes
    pub fn create_token(&self, identity: IdentityClaim) -> Result<String> {
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::minutes(TOKEN_TTL_MINUTES);

        let claims = Claims {
            email: identity.email,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            extra: identity.extra,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify and decode a token
    ///
    /// Returns claims if the token is valid and not expired
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(Into::into)
    }
}
