use chrono::NaiveDateTime;
use data_access_objects::LocationDao;
use models::locations::{ActiveModel, Model};
use sea_orm::*;
use services::ContentError;
use services::validation::{FieldValidator, ValidationError, ValidationErrors};
use uuid::Uuid;

pub const NAME_MAX_LENGTH: usize = 256;

pub struct LocationRepository;

impl LocationRepository {
    pub async fn create(
        db: &DatabaseConnection,
        name: String,
        is_published: bool,
        now: NaiveDateTime,
    ) -> Result<Model, ContentError> {
        let mut errors = ValidationErrors::new();
        FieldValidator::validate_required_string(&name, "name", &mut errors);
        FieldValidator::validate_max_length(&name, NAME_MAX_LENGTH, "name", &mut errors);
        ValidationError::from_errors(errors)?;

        let model = ActiveModel {
            id: ActiveValue::set(Uuid::new_v4()),
            name: ActiveValue::set(name),
            is_published: ActiveValue::set(is_published),
            created_at: ActiveValue::set(now),
        };

        let location = LocationDao::insert(db, model).await?;
        tracing::info!(location_id = %location.id, "location created");
        Ok(location)
    }

    /// Posts at the location keep existing with no location.
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<Uuid, ContentError> {
        let existing = LocationDao::find_by_id(db, id)
            .await?
            .ok_or(ContentError::NotFound)?;

        LocationDao::delete(db, existing.into_active_model()).await?;
        tracing::info!(location_id = %id, "location deleted");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use chrono::{Duration, Utc};
    use data_access_objects::PostDao;

    #[tokio::test]
    async fn test_create_location_requires_name() {
        let db = setup_test_db().await;
        let now = Utc::now().naive_utc();

        let location = LocationRepository::create(&db, "Kyoto".into(), true, now).await.unwrap();
        assert_eq!(location.name, "Kyoto");

        let result = LocationRepository::create(&db, "  ".into(), true, now).await;
        assert!(matches!(result, Err(ContentError::Validation(e)) if e.has_field("name")));
    }

    #[tokio::test]
    async fn test_delete_location_nulls_post_reference() {
        let db = setup_test_db().await;
        let now = Utc::now().naive_utc();
        let author = create_test_user(&db, "author").await;
        let location = create_test_location(&db, "Oslo").await;
        let post = create_test_post(
            &db,
            author.id,
            "Fjords",
            true,
            now - Duration::hours(1),
            None,
        )
        .await;
        let post = set_test_post_location(&db, post, location.id).await;
        assert_eq!(post.location_id, Some(location.id));

        LocationRepository::delete(&db, location.id).await.unwrap();

        let stored = PostDao::find_by_id(&db, post.id).await.unwrap().unwrap();
        assert_eq!(stored.location_id, None);
    }
}
