use chrono::NaiveDateTime;
use data_access_objects::PostDao;
use models::posts;
use sea_orm::*;
use services::validation::{
    validate_scheduled_post, ValidationError, ValidationErrors, ValidationErrorsExt,
};
use services::{Actor, ContentError};
use uuid::Uuid;

use super::{PostFields, PostRepository};

impl PostRepository {
    /// New posts belong to the actor and are published unless the fields say otherwise.
    pub async fn create_post(
        db: &DatabaseConnection,
        actor: &Actor,
        fields: PostFields,
        now: NaiveDateTime,
    ) -> Result<posts::Model, ContentError> {
        let user_id = actor.id().ok_or(ContentError::Unauthorized)?;
        let reference_errors = Self::reference_errors(db, &fields).await?;

        let model = posts::ActiveModel {
            id: ActiveValue::set(Uuid::new_v4()),
            title: ActiveValue::set(fields.title),
            text: ActiveValue::set(fields.text),
            pub_date: ActiveValue::set(fields.pub_date),
            is_published: ActiveValue::set(fields.is_published.unwrap_or(true)),
            image: ActiveValue::set(fields.image),
            user_id: ActiveValue::set(user_id),
            category_id: ActiveValue::set(fields.category_id),
            location_id: ActiveValue::set(fields.location_id),
            created_at: ActiveValue::set(now),
            updated_at: ActiveValue::set(now),
        };

        let mut errors = match validate_scheduled_post(&model, now) {
            Ok(()) => ValidationErrors::new(),
            Err(e) => e.errors,
        };
        errors.merge(reference_errors);
        ValidationError::from_errors(errors)?;

        let post = PostDao::insert(db, model).await?;
        tracing::info!(post_id = %post.id, user_id = %user_id, "post created");
        Ok(post)
    }
}
