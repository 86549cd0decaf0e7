use async_graphql::SimpleObject;
use chrono::NaiveDateTime;
use repositories::PaginatedPosts;

use crate::types::category::Category;
use crate::types::post::Post;
use crate::types::user::User;

#[derive(SimpleObject)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(SimpleObject)]
pub struct PostEdge {
    pub cursor: String,
    pub node: Post,
}

#[derive(SimpleObject)]
pub struct PostConnection {
    pub edges: Vec<PostEdge>,
    pub page_info: PageInfo,
}

impl PostConnection {
    pub fn from_page(page: PaginatedPosts, now: NaiveDateTime) -> Self {
        let end_cursor = page.cursors.last().cloned();
        let counts = page.comment_counts;
        let edges = page
            .posts
            .into_iter()
            .zip(page.cursors)
            .map(|(post, cursor)| {
                let count = counts.get(&post.id).copied().unwrap_or(0);
                PostEdge {
                    cursor,
                    node: Post::from_model(post, count, now),
                }
            })
            .collect();

        PostConnection {
            edges,
            page_info: PageInfo {
                has_next_page: page.has_next_page,
                has_previous_page: page.has_previous_page,
                end_cursor,
            },
        }
    }
}

#[derive(SimpleObject)]
pub struct CategoryPosts {
    pub category: Category,
    pub posts: PostConnection,
}

#[derive(SimpleObject)]
pub struct ProfilePosts {
    pub user: User,
    pub posts: PostConnection,
}
