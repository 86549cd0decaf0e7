use chrono::NaiveDateTime;
use data_access_objects::CategoryDao;
use models::categories::{ActiveModel, Model};
use sea_orm::*;
use services::ContentError;
use services::validation::rules::post_validator::TITLE_MAX_LENGTH;
use services::validation::{FieldValidator, ValidationError, ValidationErrors, ValidationErrorsExt};
use uuid::Uuid;

pub struct CategoryRepository;

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl CategoryRepository {
    pub async fn create(
        db: &DatabaseConnection,
        title: String,
        description: String,
        slug: String,
        is_published: bool,
        now: NaiveDateTime,
    ) -> Result<Model, ContentError> {
        let mut errors = ValidationErrors::new();
        FieldValidator::validate_required_string(&title, "title", &mut errors);
        FieldValidator::validate_max_length(&title, TITLE_MAX_LENGTH, "title", &mut errors);
        if !is_valid_slug(&slug) {
            errors.add_error(
                "slug",
                "Slug may contain only latin letters, digits, hyphens and underscores".to_string(),
            );
        } else if CategoryDao::find_by_slug(db, &slug).await?.is_some() {
            errors.add_error("slug", "Slug is already taken".to_string());
        }
        ValidationError::from_errors(errors)?;

        let model = ActiveModel {
            id: ActiveValue::set(Uuid::new_v4()),
            title: ActiveValue::set(title),
            description: ActiveValue::set(description),
            slug: ActiveValue::set(slug),
            is_published: ActiveValue::set(is_published),
            created_at: ActiveValue::set(now),
        };

        let category = CategoryDao::insert(db, model).await?;
        tracing::info!(category_id = %category.id, slug = %category.slug, "category created");
        Ok(category)
    }

    pub async fn find_published_by_slug(
        db: &DatabaseConnection,
        slug: &str,
    ) -> Result<Option<Model>, ContentError> {
        Ok(CategoryDao::find_published_by_slug(db, slug).await?)
    }

    /// Published categories by title.
    pub async fn list_published(db: &DatabaseConnection) -> Result<Vec<Model>, ContentError> {
        Ok(CategoryDao::find_published(db).await?)
    }

    /// Posts in the category stay, with no category.
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<Uuid, ContentError> {
        let existing = CategoryDao::find_by_id(db, id)
            .await?
            .ok_or(ContentError::NotFound)?;

        CategoryDao::delete(db, existing.into_active_model()).await?;
        tracing::info!(category_id = %id, "category deleted");
        Ok(id)
    }
}
