use chrono::NaiveDateTime;
use data_access_objects::PostDao;
use models::posts::Model;
use sea_orm::*;
use services::validation::{
    validate_scheduled_post, ValidationError, ValidationErrors, ValidationErrorsExt,
};
use services::{visibility, Actor, ContentError};
use uuid::Uuid;

use super::{PostFields, PostRepository};

impl PostRepository {
    /// Anyone but the author is turned away with `SoftDenial`, which callers
    /// answer by showing the post read-only instead of an error page.
    pub async fn update_post(
        db: &DatabaseConnection,
        actor: &Actor,
        post_id: Uuid,
        fields: PostFields,
        now: NaiveDateTime,
    ) -> Result<Model, ContentError> {
        let existing = PostDao::find_by_id(db, post_id)
            .await?
            .ok_or(ContentError::NotFound)?;

        if !visibility::can_mutate(actor, existing.user_id) {
            tracing::warn!(post_id = %post_id, "edit attempted by non-author");
            return Err(ContentError::SoftDenial { post_id });
        }

        let reference_errors = Self::reference_errors(db, &fields).await?;
        let is_published = fields.is_published.unwrap_or(existing.is_published);

        let mut am = existing.into_active_model();
        am.title = ActiveValue::set(fields.title);
        am.text = ActiveValue::set(fields.text);
        am.pub_date = ActiveValue::set(fields.pub_date);
        am.is_published = ActiveValue::set(is_published);
        am.image = ActiveValue::set(fields.image);
        am.category_id = ActiveValue::set(fields.category_id);
        am.location_id = ActiveValue::set(fields.location_id);
        am.updated_at = ActiveValue::set(now);

        let mut errors = match validate_scheduled_post(&am, now) {
            Ok(()) => ValidationErrors::new(),
            Err(e) => e.errors,
        };
        errors.merge(reference_errors);
        ValidationError::from_errors(errors)?;

        let post = PostDao::update(db, am).await?;
        tracing::info!(post_id = %post.id, "post updated");
        Ok(post)
    }
}
