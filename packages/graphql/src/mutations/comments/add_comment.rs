use super::{AddCommentInput, CommentMutation, CommentMutationResult};
use crate::errors::Redirect;
use crate::types::comment::Comment;
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, Result};
use chrono::Utc;
use repositories::{CommentRepository, ContentConfig};
use sea_orm::*;

pub(super) async fn add_comment(
    mutation: &CommentMutation,
    ctx: &Context<'_>,
    comment: AddCommentInput,
) -> Result<CommentMutationResult> {
    let actor = match mutation.current_actor(ctx).await {
        Ok(actor) => actor,
        Err(e) => return Ok(CommentMutationResult::AuthError(e.into())),
    };

    let db = ctx.data::<DatabaseConnection>()?;
    let policy = ctx
        .data_opt::<ContentConfig>()
        .map(|c| c.comment_validation)
        .unwrap_or_default();
    let now = Utc::now().naive_utc();

    match CommentRepository::add_comment(db, &actor, comment.post_id, comment.text, policy, now)
        .await
    {
        Ok(Some(c)) => Ok(CommentMutationResult::ChangedComment(Comment::from(c))),
        Ok(None) => Ok(CommentMutationResult::Redirect(Redirect { post_id: comment.post_id })),
        Err(e) => Ok(e.into()),
    }
}
