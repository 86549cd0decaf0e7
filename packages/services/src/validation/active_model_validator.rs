use std::collections::HashMap;
use std::fmt;

/// A mapping of field names to their validation error messages
pub type ValidationErrors = HashMap<String, Vec<String>>;

// Helper trait for accumulating validation errors
pub trait ValidationErrorsExt {
    fn add_error(&mut self, field: &str, message: String);
    fn merge(&mut self, other: ValidationErrors);
}

impl ValidationErrorsExt for ValidationErrors {
    fn add_error(&mut self, field: &str, message: String) {
        self.entry(field.to_string()).or_default().push(message);
    }

    fn merge(&mut self, other: ValidationErrors) {
        for (field, mut messages) in other {
            self.entry(field).or_default().append(&mut messages);
        }
    }
}

/// A field-level validation failure, displayable on a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: ValidationErrors,
}

impl ValidationError {
    /// Create a new validation error with a single field and message
    pub fn new(field: &str, message: &str) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add_error(field, message.to_string());
        Self { errors }
    }

    /// `Ok` when nothing was collected
    pub fn from_errors(errors: ValidationErrors) -> Result<(), ValidationError> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self { errors })
        }
    }

    /// Combine multiple validation errors into one
    pub fn combine(mut self, other: ValidationError) -> Self {
        self.errors.merge(other.errors);
        self
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get a comma-separated list of all error messages, ordered by field
    pub fn to_string_list(&self) -> String {
        let mut fields: Vec<&String> = self.errors.keys().collect();
        fields.sort();
        fields
            .into_iter()
            .flat_map(|f| self.errors[f].iter().cloned())
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_list())
    }
}

impl std::error::Error for ValidationError {}

/// Trait for validating ActiveModel instances
pub trait ActiveModelValidator {
    /// Validate the active model and return any validation errors
    fn validate(&self) -> Result<(), ValidationError>;

    /// Check if the model is valid
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
