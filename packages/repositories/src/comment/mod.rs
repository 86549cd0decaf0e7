use std::collections::HashMap;

use chrono::NaiveDateTime;
use data_access_objects::{CommentDao, PostDao};
use models::comments::{ActiveModel, Model};
use models::users;
use sea_orm::*;
use services::validation::ActiveModelValidator;
use services::{visibility, Actor, ContentError};
use uuid::Uuid;

use crate::config::CommentValidationPolicy;

/// A comment together with the user who wrote it.
#[derive(Clone, Debug)]
pub struct CommentWithAuthor {
    pub comment: Model,
    pub author: users::Model,
}

pub struct CommentRepository;

impl CommentRepository {
    /// Oldest first.
    pub async fn list_for_post(
        db: &DatabaseConnection,
        post_id: Uuid,
    ) -> Result<Vec<CommentWithAuthor>, ContentError> {
        let rows = CommentDao::find_for_post_with_authors(db, post_id).await?;

        Ok(rows
            .into_iter()
            .filter_map(|(comment, author)| {
                author.map(|author| CommentWithAuthor { comment, author })
            })
            .collect())
    }

    /// Posts without comments are absent from the map.
    pub async fn count_by_posts(
        db: &DatabaseConnection,
        post_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, u64>, ContentError> {
        let rows = CommentDao::count_by_posts(db, post_ids).await?;
        Ok(rows
            .into_iter()
            .map(|(post_id, count)| (post_id, count.max(0) as u64))
            .collect())
    }

    /// Comments may be left on any post the actor can view.
    ///
    /// Blank text is either ignored (`Ok(None)`) or reported, depending on
    /// `policy`.
    pub async fn add_comment(
        db: &DatabaseConnection,
        actor: &Actor,
        post_id: Uuid,
        text: String,
        policy: CommentValidationPolicy,
        now: NaiveDateTime,
    ) -> Result<Option<Model>, ContentError> {
        let user_id = actor.id().ok_or(ContentError::Unauthorized)?;

        let (post, category) = PostDao::find_with_category(db, post_id)
            .await?
            .ok_or(ContentError::NotFound)?;
        if !visibility::can_view(actor, &post, category.as_ref(), now) {
            return Err(ContentError::NotFound);
        }

        let model = ActiveModel {
            id: ActiveValue::set(Uuid::new_v4()),
            text: ActiveValue::set(text),
            post_id: ActiveValue::set(post.id),
            user_id: ActiveValue::set(user_id),
            created_at: ActiveValue::set(now),
        };

        if let Err(e) = model.validate() {
            return match policy {
                CommentValidationPolicy::SilentRedirect => {
                    tracing::debug!(post_id = %post_id, "blank comment ignored");
                    Ok(None)
                }
                CommentValidationPolicy::Surface => Err(e.into()),
            };
        }

        let comment = CommentDao::insert(db, model).await?;
        tracing::info!(comment_id = %comment.id, post_id = %post_id, "comment added");
        Ok(Some(comment))
    }

    pub async fn update_comment(
        db: &DatabaseConnection,
        actor: &Actor,
        post_id: Uuid,
        comment_id: Uuid,
        text: String,
    ) -> Result<Model, ContentError> {
        let user_id = actor.id().ok_or(ContentError::Unauthorized)?;

        let existing = CommentDao::find_by_id_for_user(db, comment_id, post_id, user_id)
            .await?
            .ok_or(ContentError::NotFound)?;

        let mut am = existing.into_active_model();
        am.text = ActiveValue::set(text);
        am.validate()?;

        let comment = CommentDao::update(db, am).await?;
        tracing::info!(comment_id = %comment_id, "comment updated");
        Ok(comment)
    }

    pub async fn delete_comment(
        db: &DatabaseConnection,
        actor: &Actor,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Uuid, ContentError> {
        let user_id = actor.id().ok_or(ContentError::Unauthorized)?;

        let existing = CommentDao::find_by_id_for_user(db, comment_id, post_id, user_id)
            .await?
            .ok_or(ContentError::NotFound)?;

        CommentDao::delete(db, existing.into_active_model()).await?;
        tracing::info!(comment_id = %comment_id, "comment deleted");

        Ok(comment_id)
    }
}
