use super::{CommentMutation, CommentMutationResult, DeleteCommentInput};
use crate::types::comment::DeletedComment;
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, Result};
use repositories::CommentRepository;
use sea_orm::*;

pub(super) async fn delete_comment(
    mutation: &CommentMutation,
    ctx: &Context<'_>,
    comment: DeleteCommentInput,
) -> Result<CommentMutationResult> {
    let actor = match mutation.current_actor(ctx).await {
        Ok(actor) => actor,
        Err(e) => return Ok(CommentMutationResult::AuthError(e.into())),
    };

    let db = ctx.data::<DatabaseConnection>()?;

    match CommentRepository::delete_comment(db, &actor, comment.post_id, comment.id).await {
        Ok(id) => Ok(CommentMutationResult::DeletedComment(DeletedComment { id })),
        Err(e) => Ok(e.into()),
    }
}
