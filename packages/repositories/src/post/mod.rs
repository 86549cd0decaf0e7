mod create;
mod delete;
mod read;
mod update;

use std::collections::HashMap;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::NaiveDateTime;
use data_access_objects::{CategoryDao, LocationDao};
use models::posts::{self, Column, Model};
use models::{categories, locations, users};
use sea_orm::sea_query::Expr;
use sea_orm::*;
use serde::{Deserialize, Serialize};
use services::validation::{ValidationErrors, ValidationErrorsExt};
use services::ContentError;
use uuid::Uuid;

use crate::comment::CommentWithAuthor;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PostSortBy {
    #[default]
    PubDate,
    CreatedAt,
    Title,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// One page of a post listing. `first` is clamped to `1..=MAX_PAGE_SIZE`.
#[derive(Clone, Debug)]
pub struct PageRequest {
    pub after: Option<String>,
    pub first: usize,
    pub sort_by: PostSortBy,
    pub sort_dir: SortDirection,
}

impl PageRequest {
    pub fn new(first: usize) -> Self {
        Self {
            after: None,
            first,
            sort_by: PostSortBy::default(),
            sort_dir: SortDirection::default(),
        }
    }

    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    pub fn sorted(mut self, sort_by: PostSortBy, sort_dir: SortDirection) -> Self {
        self.sort_by = sort_by;
        self.sort_dir = sort_dir;
        self
    }

    fn limit(&self) -> usize {
        self.first.clamp(1, MAX_PAGE_SIZE)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Serialize, Deserialize)]
struct PostCursor {
    s: String,
    v: String,
    i: Uuid,
}

fn sort_tag(sort_by: &PostSortBy) -> &'static str {
    match sort_by {
        PostSortBy::PubDate => "p",
        PostSortBy::CreatedAt => "c",
        PostSortBy::Title => "t",
    }
}

fn sort_column(sort_by: &PostSortBy) -> Column {
    match sort_by {
        PostSortBy::PubDate => Column::PubDate,
        PostSortBy::CreatedAt => Column::CreatedAt,
        PostSortBy::Title => Column::Title,
    }
}

fn encode_cursor(sort_by: &PostSortBy, post: &Model) -> String {
    let v = match sort_by {
        PostSortBy::PubDate => post.pub_date.and_utc().to_rfc3339(),
        PostSortBy::CreatedAt => post.created_at.and_utc().to_rfc3339(),
        PostSortBy::Title => post.title.clone(),
    };
    let cursor = PostCursor {
        s: sort_tag(sort_by).to_string(),
        v,
        i: post.id,
    };
    let json = serde_json::to_vec(&cursor).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

fn invalid_cursor() -> ContentError {
    ContentError::InvalidCursor("cursor could not be decoded".to_string())
}

fn decode_cursor(cursor: &str, expected: &PostSortBy) -> Result<PostCursor, ContentError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(cursor)
        .map_err(|_| invalid_cursor())?;
    let pc: PostCursor = serde_json::from_slice(&bytes).map_err(|_| invalid_cursor())?;
    if pc.s != sort_tag(expected) {
        return Err(ContentError::InvalidCursor(
            "sort mismatch: cursor was created with a different sort order".to_string(),
        ));
    }
    Ok(pc)
}

fn build_keyset_filter(
    sort_by: &PostSortBy,
    sort_dir: &SortDirection,
    pc: &PostCursor,
) -> Result<Condition, ContentError> {
    let col = sort_column(sort_by);

    let cursor_val: sea_orm::Value = match sort_by {
        PostSortBy::PubDate | PostSortBy::CreatedAt => {
            let dt = chrono::DateTime::parse_from_rfc3339(&pc.v).map_err(|_| invalid_cursor())?;
            dt.naive_utc().into()
        }
        PostSortBy::Title => pc.v.clone().into(),
    };

    let (col_cmp, id_cmp): (
        fn(Column, sea_orm::Value) -> sea_orm::sea_query::SimpleExpr,
        fn(Column, Uuid) -> sea_orm::sea_query::SimpleExpr,
    ) = match sort_dir {
        SortDirection::Desc => (
            |c, v| Expr::col((posts::Entity, c)).lt(v),
            |c, id| Expr::col((posts::Entity, c)).lt(id),
        ),
        SortDirection::Asc => (
            |c, v| Expr::col((posts::Entity, c)).gt(v),
            |c, id| Expr::col((posts::Entity, c)).gt(id),
        ),
    };

    Ok(Condition::any()
        .add(col_cmp(col, cursor_val.clone()))
        .add(
            Condition::all()
                .add(Expr::col((posts::Entity, col)).eq(cursor_val))
                .add(id_cmp(Column::Id, pc.i)),
        ))
}

#[derive(Debug)]
pub struct PaginatedPosts {
    pub posts: Vec<Model>,
    pub cursors: Vec<String>,
    pub comment_counts: HashMap<Uuid, u64>,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl PaginatedPosts {
    pub fn comment_count(&self, post_id: &Uuid) -> u64 {
        self.comment_counts.get(post_id).copied().unwrap_or(0)
    }
}

/// What an author submits when writing or editing a post.
#[derive(Clone, Debug)]
pub struct PostFields {
    pub title: String,
    pub text: String,
    pub pub_date: NaiveDateTime,
    /// `None` keeps the current flag on edit and means "published" on create.
    pub is_published: Option<bool>,
    pub image: Option<String>,
    pub category_id: Option<Uuid>,
    pub location_id: Option<Uuid>,
}

/// A single post as shown on its own page.
#[derive(Debug)]
pub struct PostDetail {
    pub post: Model,
    pub category: Option<categories::Model>,
    pub location: Option<locations::Model>,
    pub author: users::Model,
    pub comments: Vec<CommentWithAuthor>,
}

pub struct PostRepository;

impl PostRepository {
    /// Field errors for category/location ids that point at nothing.
    async fn reference_errors(
        db: &DatabaseConnection,
        fields: &PostFields,
    ) -> Result<ValidationErrors, ContentError> {
        let mut errors = ValidationErrors::new();

        if let Some(category_id) = fields.category_id {
            if CategoryDao::find_by_id(db, category_id).await?.is_none() {
                errors.add_error("category_id", "Category does not exist".to_string());
            }
        }

        if let Some(location_id) = fields.location_id {
            if LocationDao::find_by_id(db, location_id).await?.is_none() {
                errors.add_error("location_id", "Location does not exist".to_string());
            }
        }

        Ok(errors)
    }
}
