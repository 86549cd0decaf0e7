use super::{DeletePostInput, PostMutation, PostMutationResult};
use crate::types::post::DeletedPost;
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, Result};
use repositories::PostRepository;
use sea_orm::*;

pub(super) async fn delete_post(
    mutation: &PostMutation,
    ctx: &Context<'_>,
    post: DeletePostInput,
) -> Result<PostMutationResult> {
    let actor = match mutation.current_actor(ctx).await {
        Ok(actor) => actor,
        Err(e) => return Ok(PostMutationResult::AuthError(e.into())),
    };

    let db = ctx.data::<DatabaseConnection>()?;

    match PostRepository::delete_post(db, &actor, post.id).await {
        Ok(id) => Ok(PostMutationResult::DeletedPost(DeletedPost { id })),
        Err(e) => Ok(e.into()),
    }
}
