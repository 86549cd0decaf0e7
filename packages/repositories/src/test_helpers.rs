use chrono::{NaiveDateTime, Utc};
use models::{categories, comments, locations, posts, users};
use sea_orm::*;
use services::Actor;
use uuid::Uuid;

pub async fn setup_test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to test database");
    models::schema::create_tables(&db)
        .await
        .expect("Failed to create tables");
    db
}

pub fn actor_for(user: &users::Model) -> Actor {
    Actor::from_user(user)
}

pub async fn create_test_user(db: &DatabaseConnection, username: &str) -> users::Model {
    let user = users::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        username: ActiveValue::Set(username.to_string()),
        email: ActiveValue::Set(format!("{}@example.com", username)),
        first_name: ActiveValue::Set(String::new()),
        last_name: ActiveValue::Set(String::new()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(None),
    };

    user.insert(db).await.expect("Failed to create test user")
}

pub async fn create_test_category(
    db: &DatabaseConnection,
    slug: &str,
    is_published: bool,
) -> categories::Model {
    let category = categories::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        title: ActiveValue::Set(slug.to_uppercase()),
        description: ActiveValue::Set(format!("About {}", slug)),
        slug: ActiveValue::Set(slug.to_string()),
        is_published: ActiveValue::Set(is_published),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
    };

    category.insert(db).await.expect("Failed to create test category")
}

pub async fn create_test_location(db: &DatabaseConnection, name: &str) -> locations::Model {
    let location = locations::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        name: ActiveValue::Set(name.to_string()),
        is_published: ActiveValue::Set(true),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
    };

    location.insert(db).await.expect("Failed to create test location")
}

/// Inserts directly, so past publication dates are allowed here.
pub async fn create_test_post(
    db: &DatabaseConnection,
    user_id: Uuid,
    title: &str,
    is_published: bool,
    pub_date: NaiveDateTime,
    category_id: Option<Uuid>,
) -> posts::Model {
    let now = Utc::now().naive_utc();
    let post = posts::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        title: ActiveValue::Set(title.to_string()),
        text: ActiveValue::Set(format!("{} body", title)),
        pub_date: ActiveValue::Set(pub_date),
        is_published: ActiveValue::Set(is_published),
        image: ActiveValue::Set(None),
        user_id: ActiveValue::Set(user_id),
        category_id: ActiveValue::Set(category_id),
        location_id: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    };

    post.insert(db).await.expect("Failed to create test post")
}

pub async fn set_test_post_location(
    db: &DatabaseConnection,
    post: posts::Model,
    location_id: Uuid,
) -> posts::Model {
    let mut model = post.into_active_model();
    model.location_id = ActiveValue::Set(Some(location_id));
    model.update(db).await.expect("Failed to set post location")
}

pub async fn create_test_comment(
    db: &DatabaseConnection,
    post_id: Uuid,
    user_id: Uuid,
    text: &str,
    created_at: NaiveDateTime,
) -> comments::Model {
    let comment = comments::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        text: ActiveValue::Set(text.to_string()),
        post_id: ActiveValue::Set(post_id),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(created_at),
    };

    comment.insert(db).await.expect("Failed to create test comment")
}
