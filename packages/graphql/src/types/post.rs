use async_graphql::{Enum, SimpleObject};
use chrono::NaiveDateTime;
use models::posts;
use repositories::PostDetail as PostDetailModel;
use services::visibility;
use uuid::Uuid;

use crate::types::category::{Category, Location};
use crate::types::comment::Comment;
use crate::types::user::User;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum PostState {
    #[graphql(name = "DRAFT")]
    Draft,
    #[graphql(name = "SCHEDULED")]
    Scheduled,
    #[graphql(name = "LIVE")]
    Live,
}

impl From<visibility::PostState> for PostState {
    fn from(s: visibility::PostState) -> Self {
        match s {
            visibility::PostState::Draft => PostState::Draft,
            visibility::PostState::Scheduled => PostState::Scheduled,
            visibility::PostState::Live => PostState::Live,
        }
    }
}

#[derive(SimpleObject)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub pub_date: NaiveDateTime,
    pub is_published: bool,
    pub state: PostState,
    pub image: Option<String>,
    pub author_id: Uuid,
    pub category_id: Option<Uuid>,
    pub location_id: Option<Uuid>,
    pub comment_count: u64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Post {
    pub fn from_model(p: posts::Model, comment_count: u64, now: NaiveDateTime) -> Self {
        Post {
            state: visibility::PostState::of(&p, now).into(),
            id: p.id,
            title: p.title,
            text: p.text,
            pub_date: p.pub_date,
            is_published: p.is_published,
            image: p.image,
            author_id: p.user_id,
            category_id: p.category_id,
            location_id: p.location_id,
            comment_count,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// A post page: the post, where it is filed, who wrote it and the discussion.
#[derive(SimpleObject)]
pub struct PostDetail {
    pub post: Post,
    pub category: Option<Category>,
    pub location: Option<Location>,
    pub author: User,
    pub comments: Vec<Comment>,
}

impl PostDetail {
    pub fn from_detail(d: PostDetailModel, now: NaiveDateTime) -> Self {
        let comment_count = d.comments.len() as u64;
        PostDetail {
            category: d.category.as_ref().map(Category::from),
            location: d.location.as_ref().map(Location::from),
            author: User::from(&d.author),
            comments: d.comments.into_iter().map(Comment::from).collect(),
            post: Post::from_model(d.post, comment_count, now),
        }
    }
}

#[derive(SimpleObject)]
pub struct DeletedPost {
    pub id: Uuid,
}
