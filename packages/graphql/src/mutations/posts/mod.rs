use crate::errors::{AuthError, DbError, NotFoundError, Redirect, ValidationErrorType};
use crate::types::post::{DeletedPost, Post as PostType};
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, InputObject, Object, Result, Union};
use chrono::NaiveDateTime;
use repositories::PostFields;
use sea_orm::entity::prelude::Uuid;
use services::ContentError;

mod add_post;
mod delete_post;
mod update_post;

#[derive(Union)]
pub enum PostMutationResult {
    ChangedPost(PostType),
    DeletedPost(DeletedPost),
    NotFoundError(NotFoundError),
    ValidationError(ValidationErrorType),
    Redirect(Redirect),
    DbError(DbError),
    AuthError(AuthError),
}

impl From<ContentError> for PostMutationResult {
    fn from(e: ContentError) -> Self {
        match e {
            ContentError::NotFound | ContentError::InvalidCursor(_) => {
                PostMutationResult::NotFoundError(NotFoundError::default())
            }
            ContentError::Unauthorized => {
                PostMutationResult::AuthError(AuthError::unauthorized())
            }
            ContentError::Validation(v) => PostMutationResult::ValidationError(v.into()),
            ContentError::SoftDenial { post_id } => {
                PostMutationResult::Redirect(Redirect { post_id })
            }
            ContentError::Db(m) => PostMutationResult::DbError(DbError::logged(m)),
        }
    }
}

#[derive(InputObject)]
struct AddPostInput {
    title: String,
    text: String,
    pub_date: NaiveDateTime,
    is_published: Option<bool>,
    image: Option<String>,
    category_id: Option<Uuid>,
    location_id: Option<Uuid>,
}

#[derive(InputObject)]
struct UpdatePostInput {
    id: Uuid,
    title: String,
    text: String,
    pub_date: NaiveDateTime,
    is_published: Option<bool>,
    image: Option<String>,
    category_id: Option<Uuid>,
    location_id: Option<Uuid>,
}

#[derive(InputObject)]
struct DeletePostInput {
    id: Uuid,
}

impl From<AddPostInput> for PostFields {
    fn from(i: AddPostInput) -> Self {
        PostFields {
            title: i.title,
            text: i.text,
            pub_date: i.pub_date,
            is_published: i.is_published,
            image: i.image,
            category_id: i.category_id,
            location_id: i.location_id,
        }
    }
}

impl UpdatePostInput {
    fn into_parts(self) -> (Uuid, PostFields) {
        (
            self.id,
            PostFields {
                title: self.title,
                text: self.text,
                pub_date: self.pub_date,
                is_published: self.is_published,
                image: self.image,
                category_id: self.category_id,
                location_id: self.location_id,
            },
        )
    }
}

#[derive(Default)]
pub struct PostMutation;

impl RequiresAuth for PostMutation {}

#[Object]
impl PostMutation {
    async fn add_post(
        &self,
        ctx: &Context<'_>,
        new_post: AddPostInput,
    ) -> Result<PostMutationResult> {
        add_post::add_post(self, ctx, new_post).await
    }

    /// Non-authors get a `Redirect` to the post instead of an error.
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        post: UpdatePostInput,
    ) -> Result<PostMutationResult> {
        update_post::update_post(self, ctx, post).await
    }

    async fn delete_post(
        &self,
        ctx: &Context<'_>,
        post: DeletePostInput,
    ) -> Result<PostMutationResult> {
        delete_post::delete_post(self, ctx, post).await
    }
}
