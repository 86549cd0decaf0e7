use async_graphql::SimpleObject;
use chrono::NaiveDateTime;
use models::comments;
use repositories::CommentWithAuthor;
use uuid::Uuid;

use crate::types::user::User;

#[derive(SimpleObject)]
pub struct Comment {
    pub id: Uuid,
    pub text: String,
    pub post_id: Uuid,
    pub author_id: Uuid,
    /// Filled in on the post page, empty in mutation results.
    pub author: Option<User>,
    pub created_at: NaiveDateTime,
}

impl From<comments::Model> for Comment {
    fn from(c: comments::Model) -> Self {
        Comment {
            id: c.id,
            text: c.text,
            post_id: c.post_id,
            author_id: c.user_id,
            author: None,
            created_at: c.created_at,
        }
    }
}

impl From<CommentWithAuthor> for Comment {
    fn from(c: CommentWithAuthor) -> Self {
        let author = User::from(&c.author);
        Comment {
            author: Some(author),
            ..Comment::from(c.comment)
        }
    }
}

#[derive(SimpleObject)]
pub struct DeletedComment {
    pub id: Uuid,
}
