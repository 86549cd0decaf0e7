use chrono::NaiveDateTime;
use data_access_objects::{CategoryDao, LocationDao, PostDao, UserDao};
use models::posts::{self, Model};
use models::{categories, users};
use sea_orm::*;
use services::{visibility, Actor, ContentError};
use uuid::Uuid;

use super::{
    build_keyset_filter, decode_cursor, encode_cursor, sort_column, PageRequest, PaginatedPosts,
    PostDetail, PostRepository, SortDirection,
};
use crate::comment::CommentRepository;

impl PostRepository {
    /// Every publicly visible post, newest publication first by default.
    pub async fn list_index(
        db: &DatabaseConnection,
        page: &PageRequest,
        now: NaiveDateTime,
    ) -> Result<PaginatedPosts, ContentError> {
        Self::fetch_page(db, visibility::publicly_visible_condition(now), page).await
    }

    /// Unknown and unpublished categories are both NotFound, for every actor.
    pub async fn list_by_category(
        db: &DatabaseConnection,
        slug: &str,
        actor: &Actor,
        page: &PageRequest,
        now: NaiveDateTime,
    ) -> Result<(categories::Model, PaginatedPosts), ContentError> {
        let category = CategoryDao::find_published_by_slug(db, slug)
            .await?
            .ok_or(ContentError::NotFound)?;

        let condition = visibility::can_list(actor, None, now)
            .add(posts::Column::CategoryId.eq(category.id));
        let page = Self::fetch_page(db, condition, page).await?;

        Ok((category, page))
    }

    /// A user's posts. The owner sees drafts and scheduled posts too.
    pub async fn list_by_profile(
        db: &DatabaseConnection,
        username: &str,
        actor: &Actor,
        page: &PageRequest,
        now: NaiveDateTime,
    ) -> Result<(users::Model, PaginatedPosts), ContentError> {
        let profile = UserDao::find_by_username(db, username)
            .await?
            .ok_or(ContentError::NotFound)?;

        let condition = visibility::can_list(actor, Some(profile.id), now);
        let page = Self::fetch_page(db, condition, page).await?;

        Ok((profile, page))
    }

    /// A post the actor may not view is reported exactly like a missing one.
    pub async fn get_detail(
        db: &DatabaseConnection,
        post_id: Uuid,
        actor: &Actor,
        now: NaiveDateTime,
    ) -> Result<PostDetail, ContentError> {
        let (post, category) = PostDao::find_with_category(db, post_id)
            .await?
            .ok_or(ContentError::NotFound)?;

        if !visibility::can_view(actor, &post, category.as_ref(), now) {
            tracing::debug!(post_id = %post_id, "post hidden from actor");
            return Err(ContentError::NotFound);
        }

        let location = match post.location_id {
            Some(location_id) => LocationDao::find_by_id(db, location_id).await?,
            None => None,
        };
        let author = UserDao::find_by_id(db, post.user_id)
            .await?
            .ok_or(ContentError::NotFound)?;
        let comments = CommentRepository::list_for_post(db, post.id).await?;

        Ok(PostDetail {
            post,
            category,
            location,
            author,
            comments,
        })
    }

    async fn fetch_page(
        db: &DatabaseConnection,
        condition: Condition,
        page: &PageRequest,
    ) -> Result<PaginatedPosts, ContentError> {
        let limit = page.limit();
        let col = sort_column(&page.sort_by);

        let filter = if let Some(after_cursor) = page.after.as_deref() {
            let pc = decode_cursor(after_cursor, &page.sort_by)?;
            Some(build_keyset_filter(&page.sort_by, &page.sort_dir, &pc)?)
        } else {
            None
        };

        let order = match page.sort_dir {
            SortDirection::Desc => Order::Desc,
            SortDirection::Asc => Order::Asc,
        };

        let rows = PostDao::find_paginated(db, condition, col, order, filter, (limit + 1) as u64)
            .await?;

        let has_next_page = rows.len() > limit;
        let has_previous_page = page.after.is_some();
        let rows: Vec<Model> = rows.into_iter().take(limit).collect();
        let cursors: Vec<String> = rows.iter().map(|p| encode_cursor(&page.sort_by, p)).collect();
        let comment_counts =
            CommentRepository::count_by_posts(db, rows.iter().map(|p| p.id).collect()).await?;

        Ok(PaginatedPosts {
            posts: rows,
            cursors,
            comment_counts,
            has_previous_page,
            has_next_page,
        })
    }
}
