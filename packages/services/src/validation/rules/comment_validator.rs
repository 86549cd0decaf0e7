use models::comments;
use sea_orm::ActiveValue;

use crate::validation::{
    active_model_validator::{ActiveModelValidator, ValidationError, ValidationErrors},
    field_validators::FieldValidator,
};

impl ActiveModelValidator for comments::ActiveModel {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationErrors::new();

        if let ActiveValue::Set(ref text) = self.text {
            FieldValidator::validate_required_string(text, "text", &mut errors);
        }

        ValidationError::from_errors(errors)
    }
}
