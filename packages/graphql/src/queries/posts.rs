use async_graphql::{Context, Object, Result, Union};
use chrono::Utc;
use repositories::{ContentConfig, PageRequest, PostRepository};
use sea_orm::entity::prelude::Uuid;
use sea_orm::DatabaseConnection;
use services::ContentError;

use crate::errors::{AuthError, DbError, NotFoundError, ValidationErrorType};
use crate::types::category::Category;
use crate::types::connection::{CategoryPosts, PostConnection, ProfilePosts};
use crate::types::post::PostDetail;
use crate::types::sort::{PostSortBy, SortDirection};
use crate::types::user::User;
use crate::utilities::requires_auth::RequiresAuth;

#[derive(Union)]
pub enum PostListResult {
    PostConnection(PostConnection),
    CategoryPosts(CategoryPosts),
    ProfilePosts(ProfilePosts),
    NotFoundError(NotFoundError),
    ValidationError(ValidationErrorType),
    AuthError(AuthError),
    DbError(DbError),
}

#[derive(Union)]
pub enum PostResult {
    PostDetail(PostDetail),
    NotFoundError(NotFoundError),
    AuthError(AuthError),
    DbError(DbError),
}

impl From<ContentError> for PostListResult {
    fn from(e: ContentError) -> Self {
        match e {
            ContentError::NotFound | ContentError::SoftDenial { .. } => {
                PostListResult::NotFoundError(NotFoundError::default())
            }
            ContentError::Unauthorized => PostListResult::AuthError(AuthError::unauthorized()),
            ContentError::Validation(v) => PostListResult::ValidationError(v.into()),
            ContentError::InvalidCursor(m) => {
                PostListResult::ValidationError(ValidationErrorType::invalid_cursor(m))
            }
            ContentError::Db(m) => PostListResult::DbError(DbError::logged(m)),
        }
    }
}

impl From<ContentError> for PostResult {
    fn from(e: ContentError) -> Self {
        match e {
            ContentError::Unauthorized => PostResult::AuthError(AuthError::unauthorized()),
            ContentError::Db(m) => PostResult::DbError(DbError::logged(m)),
            _ => PostResult::NotFoundError(NotFoundError::default()),
        }
    }
}

fn page_request(
    ctx: &Context<'_>,
    after: Option<String>,
    first: Option<i32>,
    sort_by: Option<PostSortBy>,
    sort_direction: Option<SortDirection>,
) -> PageRequest {
    let page_size = ctx
        .data_opt::<ContentConfig>()
        .map(|c| c.page_size)
        .unwrap_or(repositories::post::DEFAULT_PAGE_SIZE);
    let first = first.map(|n| n.max(0) as usize).unwrap_or(page_size);

    let mut page = PageRequest::new(first).sorted(
        sort_by.unwrap_or_default().into(),
        sort_direction.unwrap_or_default().into(),
    );
    page.after = after;
    page
}

#[derive(Default)]
pub struct PostQueries;

impl RequiresAuth for PostQueries {}

#[Object]
impl PostQueries {
    /// Every publicly visible post
    async fn index(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        sort_by: Option<PostSortBy>,
        sort_direction: Option<SortDirection>,
    ) -> Result<PostListResult> {
        let db = ctx.data::<DatabaseConnection>()?;
        let page = page_request(ctx, after, first, sort_by, sort_direction);
        let now = Utc::now().naive_utc();

        match PostRepository::list_index(db, &page, now).await {
            Ok(posts) => Ok(PostListResult::PostConnection(PostConnection::from_page(posts, now))),
            Err(e) => Ok(e.into()),
        }
    }

    /// Publicly visible posts filed under a published category
    async fn category_posts(
        &self,
        ctx: &Context<'_>,
        slug: String,
        after: Option<String>,
        first: Option<i32>,
    ) -> Result<PostListResult> {
        let db = ctx.data::<DatabaseConnection>()?;
        let actor = match self.current_actor(ctx).await {
            Ok(actor) => actor,
            Err(e) => return Ok(PostListResult::AuthError(e.into())),
        };
        let page = page_request(ctx, after, first, None, None);
        let now = Utc::now().naive_utc();

        match PostRepository::list_by_category(db, &slug, &actor, &page, now).await {
            Ok((category, posts)) => Ok(PostListResult::CategoryPosts(CategoryPosts {
                category: Category::from(&category),
                posts: PostConnection::from_page(posts, now),
            })),
            Err(e) => Ok(e.into()),
        }
    }

    /// A user's posts; their own drafts and scheduled posts too when they ask
    async fn profile_posts(
        &self,
        ctx: &Context<'_>,
        username: String,
        after: Option<String>,
        first: Option<i32>,
    ) -> Result<PostListResult> {
        let db = ctx.data::<DatabaseConnection>()?;
        let actor = match self.current_actor(ctx).await {
            Ok(actor) => actor,
            Err(e) => return Ok(PostListResult::AuthError(e.into())),
        };
        let page = page_request(ctx, after, first, None, None);
        let now = Utc::now().naive_utc();

        match PostRepository::list_by_profile(db, &username, &actor, &page, now).await {
            Ok((user, posts)) => Ok(PostListResult::ProfilePosts(ProfilePosts {
                user: User::from(&user),
                posts: PostConnection::from_page(posts, now),
            })),
            Err(e) => Ok(e.into()),
        }
    }

    /// A single post with its comments
    async fn post(&self, ctx: &Context<'_>, id: Uuid) -> Result<PostResult> {
        let db = ctx.data::<DatabaseConnection>()?;
        let actor = match self.current_actor(ctx).await {
            Ok(actor) => actor,
            Err(e) => return Ok(PostResult::AuthError(e.into())),
        };
        let now = Utc::now().naive_utc();

        match PostRepository::get_detail(db, id, &actor, now).await {
            Ok(detail) => Ok(PostResult::PostDetail(PostDetail::from_detail(detail, now))),
            Err(e) => Ok(e.into()),
        }
    }
}
