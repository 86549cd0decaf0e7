use crate::errors::{AuthError, DbError, NotFoundError, Redirect, ValidationErrorType};
use crate::types::comment::{Comment, DeletedComment};
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, InputObject, Object, Result, Union};
use sea_orm::entity::prelude::Uuid;
use services::ContentError;

mod add_comment;
mod delete_comment;
mod update_comment;

#[derive(Union)]
pub enum CommentMutationResult {
    ChangedComment(Comment),
    DeletedComment(DeletedComment),
    NotFoundError(NotFoundError),
    ValidationError(ValidationErrorType),
    Redirect(Redirect),
    DbError(DbError),
    AuthError(AuthError),
}

impl From<ContentError> for CommentMutationResult {
    fn from(e: ContentError) -> Self {
        match e {
            ContentError::NotFound | ContentError::InvalidCursor(_) => {
                CommentMutationResult::NotFoundError(NotFoundError::default())
            }
            ContentError::Unauthorized => {
                CommentMutationResult::AuthError(AuthError::unauthorized())
            }
            ContentError::Validation(v) => CommentMutationResult::ValidationError(v.into()),
            ContentError::SoftDenial { post_id } => {
                CommentMutationResult::Redirect(Redirect { post_id })
            }
            ContentError::Db(m) => CommentMutationResult::DbError(DbError::logged(m)),
        }
    }
}

#[derive(InputObject)]
struct AddCommentInput {
    post_id: Uuid,
    text: String,
}

#[derive(InputObject)]
struct UpdateCommentInput {
    post_id: Uuid,
    id: Uuid,
    text: String,
}

#[derive(InputObject)]
struct DeleteCommentInput {
    post_id: Uuid,
    id: Uuid,
}

#[derive(Default)]
pub struct CommentMutation;

impl RequiresAuth for CommentMutation {}

#[Object]
impl CommentMutation {
    /// A blank comment may come back as a `Redirect` to the post, depending on configuration.
    async fn add_comment(
        &self,
        ctx: &Context<'_>,
        comment: AddCommentInput,
    ) -> Result<CommentMutationResult> {
        add_comment::add_comment(self, ctx, comment).await
    }

    async fn update_comment(
        &self,
        ctx: &Context<'_>,
        comment: UpdateCommentInput,
    ) -> Result<CommentMutationResult> {
        update_comment::update_comment(self, ctx, comment).await
    }

    async fn delete_comment(
        &self,
        ctx: &Context<'_>,
        comment: DeleteCommentInput,
    ) -> Result<CommentMutationResult> {
        delete_comment::delete_comment(self, ctx, comment).await
    }
}
