use super::{PostMutation, PostMutationResult, UpdatePostInput};
use crate::types::post::Post as PostType;
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, Result};
use chrono::Utc;
use repositories::{CommentRepository, PostRepository};
use sea_orm::*;

pub(super) async fn update_post(
    mutation: &PostMutation,
    ctx: &Context<'_>,
    post: UpdatePostInput,
) -> Result<PostMutationResult> {
    let actor = match mutation.current_actor(ctx).await {
        Ok(actor) => actor,
        Err(e) => return Ok(PostMutationResult::AuthError(e.into())),
    };

    let db = ctx.data::<DatabaseConnection>()?;
    let now = Utc::now().naive_utc();
    let (post_id, fields) = post.into_parts();

    let post = match PostRepository::update_post(db, &actor, post_id, fields, now).await {
        Ok(p) => p,
        Err(e) => return Ok(e.into()),
    };

    match CommentRepository::count_by_posts(db, vec![post.id]).await {
        Ok(counts) => {
            let count = counts.get(&post.id).copied().unwrap_or(0);
            Ok(PostMutationResult::ChangedPost(PostType::from_model(post, count, now)))
        }
        Err(e) => Ok(e.into()),
    }
}
