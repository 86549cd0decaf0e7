use super::{CommentMutation, CommentMutationResult, UpdateCommentInput};
use crate::types::comment::Comment;
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, Result};
use repositories::CommentRepository;
use sea_orm::*;

pub(super) async fn update_comment(
    mutation: &CommentMutation,
    ctx: &Context<'_>,
    comment: UpdateCommentInput,
) -> Result<CommentMutationResult> {
    let actor = match mutation.current_actor(ctx).await {
        Ok(actor) => actor,
        Err(e) => return Ok(CommentMutationResult::AuthError(e.into())),
    };

    let db = ctx.data::<DatabaseConnection>()?;

    match CommentRepository::update_comment(db, &actor, comment.post_id, comment.id, comment.text)
        .await
    {
        Ok(c) => Ok(CommentMutationResult::ChangedComment(Comment::from(c))),
        Err(e) => Ok(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use async_graphql::Request;
    use chrono::Utc;
    use services::authentication::Token;

    fn update_query(post_id: uuid::Uuid, id: uuid::Uuid, text: &str) -> String {
        format!(
            r#"mutation {{
                updateComment(comment: {{ postId: "{}", id: "{}", text: "{}" }}) {{
                    ... on NotFoundError {{ message }}
                    ... on ValidationErrorType {{ message }}
                    ... on Comment {{ text }}
                }}
            }}"#,
            post_id, id, text
        )
    }

    #[tokio::test]
    async fn test_update_own_comment() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let now = Utc::now().naive_utc();
        let user = create_test_user(&db, "author").await;
        let post = create_test_post(&db, user.id, "Live", true, now, None).await;
        let comment = create_test_comment(&db, post.id, user.id, "old", now).await;

        let res = schema
            .execute(
                Request::new(&update_query(post.id, comment.id, "new"))
                    .data(Token::new(create_access_token(&user))),
            )
            .await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["updateComment"]["text"], "new");
    }

    #[tokio::test]
    async fn test_update_comment_blank_text_is_surfaced() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let now = Utc::now().naive_utc();
        let user = create_test_user(&db, "author").await;
        let post = create_test_post(&db, user.id, "Live", true, now, None).await;
        let comment = create_test_comment(&db, post.id, user.id, "old", now).await;

        let res = schema
            .execute(
                Request::new(&update_query(post.id, comment.id, " "))
                    .data(Token::new(create_access_token(&user))),
            )
            .await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["updateComment"]["message"], "Text cannot be empty");
    }

    #[tokio::test]
    async fn test_update_someone_elses_comment_is_not_found() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let now = Utc::now().naive_utc();
        let user = create_test_user(&db, "author").await;
        let other = create_test_user(&db, "other").await;
        let post = create_test_post(&db, user.id, "Live", true, now, None).await;
        let comment = create_test_comment(&db, post.id, user.id, "old", now).await;

        let res = schema
            .execute(
                Request::new(&update_query(post.id, comment.id, "mine now"))
                    .data(Token::new(create_access_token(&other))),
            )
            .await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["updateComment"]["message"], "Not found");
    }
}
