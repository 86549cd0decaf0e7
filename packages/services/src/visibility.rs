//! Who may see, list and change posts.
//!
//! Every function here is a pure decision: nothing is read from or written to
//! the database. The `*_condition` builders return a fresh [`Condition`] per
//! call, meant for a `posts` query that LEFT JOINs `categories`.

use chrono::NaiveDateTime;
use models::{categories, posts};
use sea_orm::entity::prelude::Uuid;
use sea_orm::{ColumnTrait, Condition};

use crate::actor::Actor;

/// Where a post sits in its publication lifecycle, ignoring its category.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PostState {
    Draft,
    Scheduled,
    Live,
}

impl PostState {
    pub fn of(post: &posts::Model, now: NaiveDateTime) -> Self {
        if !post.is_published {
            PostState::Draft
        } else if post.pub_date > now {
            PostState::Scheduled
        } else {
            PostState::Live
        }
    }
}

/// `category` is the post's category row, `None` when the post has none
/// (including after its category was deleted).
pub fn is_publicly_visible(
    post: &posts::Model,
    category: Option<&categories::Model>,
    now: NaiveDateTime,
) -> bool {
    post.is_published && category.map_or(true, |c| c.is_published) && post.pub_date <= now
}

/// Authors always see their own posts, whatever their state.
pub fn can_view(
    actor: &Actor,
    post: &posts::Model,
    category: Option<&categories::Model>,
    now: NaiveDateTime,
) -> bool {
    is_publicly_visible(post, category, now) || actor.is(post.user_id)
}

/// Used for posts and comments alike: `author_id` is the owner of the row.
pub fn can_mutate(actor: &Actor, author_id: Uuid) -> bool {
    actor.is(author_id)
}

pub fn publicly_visible_condition(now: NaiveDateTime) -> Condition {
    Condition::all()
        .add(posts::Column::IsPublished.eq(true))
        .add(posts::Column::PubDate.lte(now))
        .add(
            Condition::any()
                .add(posts::Column::CategoryId.is_null())
                .add(categories::Column::IsPublished.eq(true)),
        )
}

/// Filter for a post listing.
///
/// `profile_owner` is the user whose profile is being listed, `None` for
/// site-wide listings. An authenticated actor listing their own profile gets
/// every one of their posts; everybody else gets public posts only.
pub fn can_list(actor: &Actor, profile_owner: Option<Uuid>, now: NaiveDateTime) -> Condition {
    match profile_owner {
        Some(owner) if actor.is(owner) => Condition::all().add(posts::Column::UserId.eq(owner)),
        Some(owner) => publicly_visible_condition(now).add(posts::Column::UserId.eq(owner)),
        None => publicly_visible_condition(now),
    }
}
