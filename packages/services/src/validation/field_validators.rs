use chrono::NaiveDateTime;

use super::active_model_validator::{ValidationErrors, ValidationErrorsExt};

pub struct FieldValidator;

impl FieldValidator {
    pub fn validate_required_string(value: &str, field_name: &str, errors: &mut ValidationErrors) {
        if value.trim().is_empty() {
            errors.add_error(field_name, format!("{} cannot be empty", capitalize(field_name)));
        }
    }

    pub fn validate_max_length(
        value: &str,
        max: usize,
        field_name: &str,
        errors: &mut ValidationErrors,
    ) {
        if value.chars().count() > max {
            errors.add_error(
                field_name,
                format!("{} must be at most {} characters", capitalize(field_name), max),
            );
        }
    }

    pub fn validate_email(email: &str, errors: &mut ValidationErrors) {
        if email.trim().is_empty() {
            // an empty address means "no email on file"
            return;
        }

        let valid = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
            }
            None => false,
        };
        if !valid {
            errors.add_error("email", "Email format is invalid".to_string());
        }
    }

    /// Letters, digits and `@ . + - _`, like most account systems accept.
    pub fn validate_username(username: &str, errors: &mut ValidationErrors) {
        if username.trim().is_empty() {
            errors.add_error("username", "Username cannot be empty".to_string());
            return;
        }

        if !username
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
        {
            errors.add_error(
                "username",
                "Username may contain only letters, digits and @/./+/-/_".to_string(),
            );
        }
    }

    /// The value must be strictly later than `now`.
    pub fn validate_in_future(
        value: NaiveDateTime,
        now: NaiveDateTime,
        field_name: &str,
        errors: &mut ValidationErrors,
    ) {
        if value <= now {
            errors.add_error(field_name, "Publication date must be in the future.".to_string());
        }
    }
}

fn capitalize(field_name: &str) -> String {
    let spaced = field_name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
