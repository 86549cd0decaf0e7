use crate::actor::Actor;
use crate::authentication::token::{AuthConfig, AuthError, Token};
use std::fmt;
use sea_orm::*;
use models::users::{Model, Entity as users};

pub struct BadCredentialsError {
    pub message: String,
}

pub struct DbError {
    pub message: String,
}

pub enum AuthenticationError {
    BadCredentials(BadCredentialsError),
    DbError(DbError),
}

impl From<AuthError> for AuthenticationError {
    fn from(e: AuthError) -> Self {
        AuthenticationError::BadCredentials(BadCredentialsError {
            message: e.to_string(),
        })
    }
}

impl From<sea_orm::DbErr> for AuthenticationError {
    fn from(e: sea_orm::DbErr) -> Self {
        AuthenticationError::DbError(DbError {
            message: e.to_string(),
        })
    }
}

impl fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthenticationError::BadCredentials(e) => f.write_str(e.message.as_str()),
            AuthenticationError::DbError(e) => f.write_str(e.message.as_str()),
        }
    }
}

impl fmt::Debug for AuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthenticationError({})", self)
    }
}

pub async fn get_user(
    db: &DatabaseConnection,
    token: &Token,
    config: &AuthConfig,
) -> Result<Model, AuthenticationError> {
    let user_id = token.get_user_id(config)?;

    users::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| {
            AuthenticationError::BadCredentials(BadCredentialsError {
                message: "User not found".to_string(),
            })
        })
}

/// No token means an anonymous visitor; a token that does not check out is
/// an error rather than a silent downgrade to anonymous.
pub async fn resolve_actor(
    db: &DatabaseConnection,
    token: Option<&Token>,
    config: &AuthConfig,
) -> Result<Actor, AuthenticationError> {
    match token {
        None => Ok(Actor::Anonymous),
        Some(token) => match get_user(db, token, config).await {
            Ok(user) => Ok(Actor::from_user(&user)),
            Err(e) => {
                tracing::warn!(error = %e, "rejected bearer token");
                Err(e)
            }
        },
    }
}
