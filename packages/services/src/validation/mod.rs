pub mod active_model_validator;
pub mod field_validators;
pub mod rules;

// Re-export common types and functions
pub use active_model_validator::{
    ActiveModelValidator, ValidationError, ValidationErrors, ValidationErrorsExt,
};
pub use field_validators::FieldValidator;
pub use self::rules::post_validator::validate_scheduled_post;
