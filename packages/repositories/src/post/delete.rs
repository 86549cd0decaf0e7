use data_access_objects::PostDao;
use sea_orm::*;
use services::{Actor, ContentError};
use uuid::Uuid;

use super::PostRepository;

impl PostRepository {
    /// Only the author may delete; every other post id looks missing.
    /// Comments go with the post.
    pub async fn delete_post(
        db: &DatabaseConnection,
        actor: &Actor,
        post_id: Uuid,
    ) -> Result<Uuid, ContentError> {
        let user_id = actor.id().ok_or(ContentError::Unauthorized)?;

        let existing = PostDao::find_by_id_for_user(db, post_id, user_id)
            .await?
            .ok_or(ContentError::NotFound)?;

        PostDao::delete(db, existing.into_active_model()).await?;
        tracing::info!(post_id = %post_id, user_id = %user_id, "post deleted");

        Ok(post_id)
    }
}
