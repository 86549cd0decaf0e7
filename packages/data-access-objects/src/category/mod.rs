use models::categories::{ActiveModel, Column, Entity, Model};
use models::prelude::Categories;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

pub struct CategoryDao;

impl CategoryDao {
    pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, DbErr> {
        Categories::find_by_id(id).one(db).await
    }

    pub async fn find_by_slug(db: &DatabaseConnection, slug: &str) -> Result<Option<Model>, DbErr> {
        Categories::find().filter(Column::Slug.eq(slug)).one(db).await
    }

    pub async fn find_published_by_slug(
        db: &DatabaseConnection,
        slug: &str,
    ) -> Result<Option<Model>, DbErr> {
        Categories::find()
            .filter(Column::Slug.eq(slug))
            .filter(Column::IsPublished.eq(true))
            .one(db)
            .await
    }

    pub async fn find_published(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Categories::find()
            .filter(Column::IsPublished.eq(true))
            .order_by_asc(Column::Title)
            .all(db)
            .await
    }

    pub async fn insert(db: &DatabaseConnection, model: ActiveModel) -> Result<Model, DbErr> {
        let res = Categories::insert(model).exec(db).await?;
        Categories::find_by_id(res.last_insert_id)
            .one(db)
            .await?
            .ok_or(DbErr::Custom("Inserted category not found".to_string()))
    }

    pub async fn delete(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<DeleteResult, DbErr> {
        Entity::delete(model).exec(db).await
    }
}
