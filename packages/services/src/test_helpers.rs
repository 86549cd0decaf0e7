use chrono::Utc;
use models::users;
use sea_orm::*;
use uuid::Uuid;

use crate::authentication::token::AuthConfig;

pub async fn setup_test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to test database");
    models::schema::create_tables(&db)
        .await
        .expect("Failed to create tables");
    db
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

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        secret: "secret".to_string(),
        issuer: "localhost".to_string(),
        expiration_seconds: 3600,
    }
}
