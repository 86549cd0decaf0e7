use models::locations::{ActiveModel, Entity, Model};
use models::prelude::Locations;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

pub struct LocationDao;

impl LocationDao {
    pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, DbErr> {
        Locations::find_by_id(id).one(db).await
    }

    pub async fn insert(db: &DatabaseConnection, model: ActiveModel) -> Result<Model, DbErr> {
        let res = Locations::insert(model).exec(db).await?;
        Locations::find_by_id(res.last_insert_id)
            .one(db)
            .await?
            .ok_or(DbErr::Custom("Inserted location not found".to_string()))
    }

    pub async fn delete(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<DeleteResult, DbErr> {
        Entity::delete(model).exec(db).await
    }
}
