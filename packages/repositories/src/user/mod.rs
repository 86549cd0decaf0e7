use chrono::NaiveDateTime;
use data_access_objects::UserDao;
use models::users::{ActiveModel, Model};
use sea_orm::*;
use services::validation::{
    ActiveModelValidator, ValidationError, ValidationErrors, ValidationErrorsExt,
};
use services::{Actor, ContentError};
use uuid::Uuid;

/// The editable part of a user's profile.
#[derive(Clone, Debug, Default)]
pub struct ProfileFields {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

pub struct UserRepository;

impl UserRepository {
    pub async fn create(
        db: &DatabaseConnection,
        fields: ProfileFields,
        now: NaiveDateTime,
    ) -> Result<Model, ContentError> {
        let model = ActiveModel {
            id: ActiveValue::set(Uuid::new_v4()),
            username: ActiveValue::set(fields.username),
            email: ActiveValue::set(fields.email),
            first_name: ActiveValue::set(fields.first_name),
            last_name: ActiveValue::set(fields.last_name),
            created_at: ActiveValue::set(now),
            updated_at: ActiveValue::set(None),
        };
        Self::check(db, &model, None).await?;

        let user = UserDao::insert(db, model).await?;
        tracing::info!(user_id = %user.id, "user created");
        Ok(user)
    }

    pub async fn find_by_username(
        db: &DatabaseConnection,
        username: &str,
    ) -> Result<Option<Model>, ContentError> {
        Ok(UserDao::find_by_username(db, username).await?)
    }

    /// The actor edits their own profile; there is no way to edit anyone else's.
    pub async fn update_profile(
        db: &DatabaseConnection,
        actor: &Actor,
        fields: ProfileFields,
        now: NaiveDateTime,
    ) -> Result<Model, ContentError> {
        let user_id = actor.id().ok_or(ContentError::Unauthorized)?;
        let existing = UserDao::find_by_id(db, user_id)
            .await?
            .ok_or(ContentError::NotFound)?;

        let mut am = existing.into_active_model();
        am.username = ActiveValue::set(fields.username);
        am.email = ActiveValue::set(fields.email);
        am.first_name = ActiveValue::set(fields.first_name);
        am.last_name = ActiveValue::set(fields.last_name);
        am.updated_at = ActiveValue::set(Some(now));
        Self::check(db, &am, Some(user_id)).await?;

        let user = UserDao::update(db, am).await?;
        tracing::info!(user_id = %user_id, "profile updated");
        Ok(user)
    }

    /// Removes the user with every post and comment they wrote.
    pub async fn delete(db: &DatabaseConnection, user_id: Uuid) -> Result<Uuid, ContentError> {
        let result = UserDao::delete_by_id(db, user_id).await?;
        if result.rows_affected == 0 {
            return Err(ContentError::NotFound);
        }
        tracing::info!(user_id = %user_id, "user deleted");
        Ok(user_id)
    }

    /// Field rules plus username uniqueness. `own_id` is the user being edited.
    async fn check(
        db: &DatabaseConnection,
        model: &ActiveModel,
        own_id: Option<Uuid>,
    ) -> Result<(), ContentError> {
        let mut errors = match model.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(e) => e.errors,
        };

        if let ActiveValue::Set(ref username) = model.username {
            if let Some(holder) = UserDao::find_by_username(db, username).await? {
                if Some(holder.id) != own_id {
                    errors.add_error(
                        "username",
                        "A user with that username already exists.".to_string(),
                    );
                }
            }
        }

        Ok(ValidationError::from_errors(errors)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use chrono::{Duration, Utc};
    use data_access_objects::{CommentDao, PostDao};

    fn profile(username: &str) -> ProfileFields {
        ProfileFields {
            username: username.to_string(),
            email: format!("{}@example.org", username),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let db = setup_test_db().await;
        let now = Utc::now().naive_utc();

        let user = UserRepository::create(&db, profile("ada"), now).await.unwrap();

        let found = UserRepository::find_by_username(&db, "ada").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert_eq!(found.email, "ada@example.org");
        assert_eq!(found.created_at, now);
    }

    #[tokio::test]
    async fn test_create_rejects_taken_username() {
        let db = setup_test_db().await;
        let now = Utc::now().naive_utc();
        create_test_user(&db, "ada").await;

        let result = UserRepository::create(&db, profile("ada"), now).await;

        assert!(matches!(result, Err(ContentError::Validation(e)) if e.has_field("username")));
    }

    #[tokio::test]
    async fn test_update_own_profile() {
        let db = setup_test_db().await;
        let now = Utc::now().naive_utc();
        let user = create_test_user(&db, "ada").await;

        let updated =
            UserRepository::update_profile(&db, &actor_for(&user), profile("countess"), now)
                .await
                .unwrap();

        assert_eq!(updated.id, user.id);
        assert_eq!(updated.username, "countess");
        assert_eq!(updated.first_name, "Ada");
        assert_eq!(updated.updated_at, Some(now));
    }

    #[tokio::test]
    async fn test_update_profile_keeping_own_username_is_allowed() {
        let db = setup_test_db().await;
        let now = Utc::now().naive_utc();
        let user = create_test_user(&db, "ada").await;

        let result =
            UserRepository::update_profile(&db, &actor_for(&user), profile("ada"), now).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_profile_validation() {
        let db = setup_test_db().await;
        let now = Utc::now().naive_utc();
        let user = create_test_user(&db, "ada").await;
        create_test_user(&db, "grace").await;

        let taken =
            UserRepository::update_profile(&db, &actor_for(&user), profile("grace"), now).await;
        assert!(matches!(taken, Err(ContentError::Validation(e)) if e.has_field("username")));

        let mut bad_email = profile("ada");
        bad_email.email = "nope".to_string();
        let result = UserRepository::update_profile(&db, &actor_for(&user), bad_email, now).await;
        assert!(matches!(result, Err(ContentError::Validation(e)) if e.has_field("email")));

        let anonymous =
            UserRepository::update_profile(&db, &Actor::Anonymous, profile("x"), now).await;
        assert!(matches!(anonymous, Err(ContentError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_delete_user_cascades_posts_and_comments() {
        let db = setup_test_db().await;
        let now = Utc::now().naive_utc();
        let author = create_test_user(&db, "author").await;
        let reader = create_test_user(&db, "reader").await;
        let own_post =
            create_test_post(&db, author.id, "Mine", true, now - Duration::hours(1), None).await;
        let other_post = create_test_post(
            &db,
            reader.id,
            "Theirs",
            true,
            now - Duration::hours(1),
            None,
        )
        .await;
        create_test_comment(&db, other_post.id, author.id, "left here", now).await;
        create_test_comment(&db, own_post.id, reader.id, "on author's post", now).await;

        UserRepository::delete(&db, author.id).await.unwrap();

        assert!(PostDao::find_by_id(&db, own_post.id).await.unwrap().is_none());
        assert!(PostDao::find_by_id(&db, other_post.id).await.unwrap().is_some());
        assert!(CommentDao::find_for_post_with_authors(&db, other_post.id)
            .await
            .unwrap()
            .is_empty());
        assert!(CommentDao::find_for_post_with_authors(&db, own_post.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_found() {
        let db = setup_test_db().await;

        let result = UserRepository::delete(&db, Uuid::new_v4()).await;

        assert!(matches!(result, Err(ContentError::NotFound)));
    }
}
