use async_graphql::SimpleObject;
use chrono::NaiveDateTime;
use models::users;
use uuid::Uuid;

/// What anyone may see of a user.
#[derive(SimpleObject)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: NaiveDateTime,
}

impl From<&users::Model> for User {
    fn from(u: &users::Model) -> Self {
        User {
            id: u.id,
            username: u.username.clone(),
            first_name: u.first_name.clone(),
            last_name: u.last_name.clone(),
            created_at: u.created_at,
        }
    }
}

/// A user's own view of their profile.
#[derive(SimpleObject)]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<users::Model> for Profile {
    fn from(u: users::Model) -> Self {
        Profile {
            id: u.id,
            username: u.username,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}
