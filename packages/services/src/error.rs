use sea_orm::entity::prelude::Uuid;
use thiserror::Error;

use crate::validation::ValidationError;

/// Outcome of a content operation that did not succeed.
///
/// `NotFound` also stands for "exists, but you may not see or change it";
/// callers must not be able to tell the two apart.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Not found")]
    NotFound,

    #[error("Authentication required")]
    Unauthorized,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A non-author tried to edit a post; answer with its read-only view.
    #[error("Only the author can edit post {post_id}")]
    SoftDenial { post_id: Uuid },

    #[error("Invalid cursor: {0}")]
    InvalidCursor(String),

    #[error("Database error: {0}")]
    Db(String),
}

impl From<sea_orm::DbErr> for ContentError {
    fn from(e: sea_orm::DbErr) -> Self {
        ContentError::Db(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_keeps_message() {
        let err: ContentError = ValidationError::new("text", "Text cannot be empty").into();
        assert!(matches!(err, ContentError::Validation(_)));
        assert_eq!(err.to_string(), "Text cannot be empty");
    }

    #[test]
    fn test_db_error_is_wrapped() {
        let err: ContentError = sea_orm::DbErr::Custom("boom".into()).into();
        assert!(err.to_string().contains("boom"));
    }
}
