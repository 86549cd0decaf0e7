use async_graphql::SimpleObject;
use std::fmt;
use sea_orm::entity::prelude::Uuid;
use services::validation::ValidationError;

#[derive(SimpleObject, Debug)]
pub struct DbError {
    pub message: String,
}

impl DbError {
    /// Storage failures are logged here, once, on their way to the client.
    pub fn logged(message: String) -> Self {
        tracing::error!(error = %message, "storage failure");
        DbError { message }
    }
}

impl From<sea_orm::error::DbErr> for DbError {
    fn from(e: sea_orm::error::DbErr) -> Self {
        DbError::logged(e.to_string())
    }
}

impl fmt::Display for DbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

#[derive(SimpleObject, Debug)]
pub struct AuthError {
    pub message: String,
}

impl From<crate::utilities::requires_auth::AuthenticationError> for AuthError {
    fn from(e: crate::utilities::requires_auth::AuthenticationError) -> Self {
        AuthError { message: e.to_string() }
    }
}

impl AuthError {
    pub fn unauthorized() -> Self {
        AuthError { message: "Authentication required".to_string() }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

/// Also returned for things that exist but are not the caller's to see.
#[derive(SimpleObject, Debug)]
pub struct NotFoundError {
    pub message: String,
}

impl Default for NotFoundError {
    fn default() -> Self {
        NotFoundError { message: "Not found".to_string() }
    }
}

#[derive(SimpleObject, Debug)]
pub struct FieldError {
    pub field: String,
    pub messages: Vec<String>,
}

#[derive(SimpleObject, Debug)]
pub struct ValidationErrorType {
    pub message: String,
    pub fields: Vec<FieldError>,
}

impl From<ValidationError> for ValidationErrorType {
    fn from(e: ValidationError) -> Self {
        let message = e.to_string_list();
        let mut fields: Vec<FieldError> = e
            .errors
            .into_iter()
            .map(|(field, messages)| FieldError { field, messages })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        ValidationErrorType { message, fields }
    }
}

impl ValidationErrorType {
    pub fn invalid_cursor(message: String) -> Self {
        ValidationErrorType::from(ValidationError::new("after", &message))
    }
}

/// Tells the client to go (back) to the post page instead of showing a form.
#[derive(SimpleObject, Debug)]
pub struct Redirect {
    pub post_id: Uuid,
}
