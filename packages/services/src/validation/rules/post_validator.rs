use chrono::NaiveDateTime;
use models::posts;
use sea_orm::ActiveValue;

use crate::validation::{
    active_model_validator::{ActiveModelValidator, ValidationError, ValidationErrors},
    field_validators::FieldValidator,
};

pub const TITLE_MAX_LENGTH: usize = 256;

impl ActiveModelValidator for posts::ActiveModel {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationErrors::new();

        if let ActiveValue::Set(ref title) = self.title {
            FieldValidator::validate_required_string(title, "title", &mut errors);
            FieldValidator::validate_max_length(title, TITLE_MAX_LENGTH, "title", &mut errors);
        }

        if let ActiveValue::Set(ref text) = self.text {
            FieldValidator::validate_required_string(text, "text", &mut errors);
        }

        ValidationError::from_errors(errors)
    }
}

/// Field checks plus the scheduling rule: a submitted `pub_date` must lie
/// strictly after `now`, on create and on every edit.
pub fn validate_scheduled_post(
    model: &posts::ActiveModel,
    now: NaiveDateTime,
) -> Result<(), ValidationError> {
    let mut errors = match model.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(e) => e.errors,
    };

    if let ActiveValue::Set(pub_date) = model.pub_date {
        FieldValidator::validate_in_future(pub_date, now, "pub_date", &mut errors);
    }

    ValidationError::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use sea_orm::Set;
    use uuid::Uuid;

    fn post(title: &str, text: &str, pub_date: NaiveDateTime) -> posts::ActiveModel {
        posts::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(title.to_string()),
            text: Set(text.to_string()),
            pub_date: Set(pub_date),
            is_published: Set(true),
            user_id: Set(Uuid::new_v4()),
            ..Default::default()
        }
    }

    #[test]
    fn test_post_validation() {
        let now = Utc::now().naive_utc();

        let upcoming = post("Title", "Text", now + Duration::hours(1));
        assert!(validate_scheduled_post(&upcoming, now).is_ok());

        let past = validate_scheduled_post(&post("Title", "Text", now - Duration::seconds(1)), now)
            .unwrap_err();
        assert!(past.has_field("pub_date"));

        let blank = validate_scheduled_post(&post(" ", "", now + Duration::hours(1)), now)
            .unwrap_err();
        assert!(blank.has_field("title"));
        assert!(blank.has_field("text"));

        let long = post(&"a".repeat(TITLE_MAX_LENGTH + 1), "Text", now + Duration::hours(1));
        assert!(!long.is_valid());
    }

    #[test]
    fn test_unset_fields_are_not_checked() {
        let untouched = posts::ActiveModel::default();
        assert!(untouched.validate().is_ok());
    }
}
