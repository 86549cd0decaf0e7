use chrono::{NaiveDateTime, Utc};
use models::{categories, comments, posts, users};
use repositories::ContentConfig;
use sea_orm::*;
use services::authentication::{generate_token, AuthConfig};
use uuid::Uuid;

use crate::{build_schema, AppSchema};

pub type TestSchema = AppSchema;

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

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        secret: "test-secret".to_string(),
        issuer: "localhost".to_string(),
        expiration_seconds: 3600,
    }
}

pub fn create_test_schema(db: DatabaseConnection) -> TestSchema {
    create_test_schema_with_config(db, ContentConfig::default())
}

pub fn create_test_schema_with_config(
    db: DatabaseConnection,
    content: ContentConfig,
) -> TestSchema {
    build_schema(db, test_auth_config(), content)
}

pub fn create_access_token(user: &users::Model) -> String {
    generate_token(user.id, &test_auth_config()).expect("Failed to generate token")
}

/// The format the `NaiveDateTime` scalar reads.
pub fn gql_datetime(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
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
        description: ActiveValue::Set(String::new()),
        slug: ActiveValue::Set(slug.to_string()),
        is_published: ActiveValue::Set(is_published),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
    };

    category.insert(db).await.expect("Failed to create test category")
}

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
        text: ActiveValue::Set("content".to_string()),
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
