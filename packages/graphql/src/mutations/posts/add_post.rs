use super::{AddPostInput, PostMutation, PostMutationResult};
use crate::types::post::Post as PostType;
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, Result};
use chrono::Utc;
use repositories::PostRepository;
use sea_orm::*;

pub(super) async fn add_post(
    mutation: &PostMutation,
    ctx: &Context<'_>,
    new_post: AddPostInput,
) -> Result<PostMutationResult> {
    let actor = match mutation.current_actor(ctx).await {
        Ok(actor) => actor,
        Err(e) => return Ok(PostMutationResult::AuthError(e.into())),
    };

    let db = ctx.data::<DatabaseConnection>()?;
    let now = Utc::now().naive_utc();

    match PostRepository::create_post(db, &actor, new_post.into(), now).await {
        Ok(p) => Ok(PostMutationResult::ChangedPost(PostType::from_model(p, 0, now))),
        Err(e) => Ok(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use async_graphql::Request;
    use chrono::{Duration, Utc};
    use services::authentication::Token;

    fn add_post_query(title: &str, pub_date: chrono::NaiveDateTime) -> String {
        format!(
            r#"mutation {{
                addPost(newPost: {{ title: "{}", text: "Body", pubDate: "{}" }}) {{
                    ... on AuthError {{ message }}
                    ... on ValidationErrorType {{ message fields {{ field messages }} }}
                    ... on Post {{ id title state isPublished authorId }}
                }}
            }}"#,
            title,
            gql_datetime(pub_date)
        )
    }

    #[tokio::test]
    async fn test_add_post_unauthenticated_returns_auth_error() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let query = add_post_query("Test", Utc::now().naive_utc() + Duration::days(1));

        let res = schema.execute(Request::new(&query)).await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["addPost"]["message"], "Authentication required");
    }

    #[tokio::test]
    async fn test_add_post_schedules_post_for_author() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let user = create_test_user(&db, "writer").await;
        let query = add_post_query("Tomorrow", Utc::now().naive_utc() + Duration::hours(1));

        let res = schema
            .execute(Request::new(&query).data(Token::new(create_access_token(&user))))
            .await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);
        let data = res.data.into_json().unwrap();

        assert_eq!(data["addPost"]["title"], "Tomorrow");
        assert_eq!(data["addPost"]["state"], "SCHEDULED");
        assert_eq!(data["addPost"]["isPublished"], true);
        assert_eq!(data["addPost"]["authorId"], user.id.to_string());
    }

    #[tokio::test]
    async fn test_add_post_in_the_past_is_validation_error() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let user = create_test_user(&db, "writer").await;
        let query = add_post_query("Yesterday", Utc::now().naive_utc() - Duration::seconds(1));

        let res = schema
            .execute(Request::new(&query).data(Token::new(create_access_token(&user))))
            .await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["addPost"]["fields"][0]["field"], "pub_date");
        assert_eq!(
            data["addPost"]["fields"][0]["messages"][0],
            "Publication date must be in the future."
        );
    }
}
