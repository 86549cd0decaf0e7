use crate::authentication::claims::Claims;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use std::env;
use std::fmt;
use uuid::Uuid;

const DEFAULT_ISSUER: &str = "localhost";
const DEFAULT_EXPIRATION_SECONDS: i64 = 3600;

#[derive(Debug)]
pub struct AuthError {
    pub message: String,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        AuthError { message: format!("Invalid token: {}", e) }
    }
}

/// Signing settings for access tokens.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub secret: String,
    pub issuer: String,
    pub expiration_seconds: i64,
}

impl AuthConfig {
    /// Reads `TOKEN_SECRET`, `TOKEN_ISSUER` and `TOKEN_EXPIRATION_SECONDS`.
    pub fn from_env() -> Result<Self, AuthError> {
        let secret = env::var("TOKEN_SECRET").map_err(|_| AuthError {
            message: "TOKEN_SECRET is not set".to_string(),
        })?;

        Ok(Self {
            secret,
            issuer: env::var("TOKEN_ISSUER").unwrap_or_else(|_| DEFAULT_ISSUER.to_string()),
            expiration_seconds: env::var("TOKEN_EXPIRATION_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_EXPIRATION_SECONDS),
        })
    }
}

/// A bearer token as it arrived with the request, with or without the
/// `Bearer ` prefix.
#[derive(Clone, Debug)]
pub struct Token(pub String);

impl Token {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    fn raw(&self) -> &str {
        let value = self.0.trim();
        value.strip_prefix("Bearer ").map(str::trim).unwrap_or(value)
    }

    pub fn verify(&self, config: &AuthConfig) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[config.issuer.as_str()]);

        let data = decode::<Claims>(
            self.raw(),
            &DecodingKey::from_secret(config.secret.as_ref()),
            &validation,
        )?;
        Ok(data.claims)
    }

    pub fn get_user_id(&self, config: &AuthConfig) -> Result<Uuid, AuthError> {
        let claims = self.verify(config)?;
        Uuid::parse_str(&claims.sub).map_err(|_| AuthError {
            message: "Invalid token subject".to_string(),
        })
    }
}

pub fn generate_token(user_id: Uuid, config: &AuthConfig) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = Claims {
        iss: config.issuer.clone(),
        sub: user_id.to_string(),
        exp: (now + Duration::seconds(config.expiration_seconds)).timestamp(),
        iat: now.timestamp(),
        jti: Uuid::new_v4().to_string(),
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_ref()),
    )?)
}
