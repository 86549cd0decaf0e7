use models::users;
use sea_orm::ActiveValue;

use crate::validation::{
    active_model_validator::{ActiveModelValidator, ValidationError, ValidationErrors},
    field_validators::FieldValidator,
};

pub const USERNAME_MAX_LENGTH: usize = 150;
pub const NAME_MAX_LENGTH: usize = 150;

impl ActiveModelValidator for users::ActiveModel {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationErrors::new();

        if let ActiveValue::Set(ref username) = self.username {
            FieldValidator::validate_username(username, &mut errors);
            FieldValidator::validate_max_length(
                username,
                USERNAME_MAX_LENGTH,
                "username",
                &mut errors,
            );
        }

        if let ActiveValue::Set(ref email) = self.email {
            FieldValidator::validate_email(email, &mut errors);
        }

        if let ActiveValue::Set(ref first_name) = self.first_name {
            FieldValidator::validate_max_length(
                first_name,
                NAME_MAX_LENGTH,
                "first_name",
                &mut errors,
            );
        }

        if let ActiveValue::Set(ref last_name) = self.last_name {
            FieldValidator::validate_max_length(
                last_name,
                NAME_MAX_LENGTH,
                "last_name",
                &mut errors,
            );
        }

        ValidationError::from_errors(errors)
    }
}
