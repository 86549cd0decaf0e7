use models::comments::{ActiveModel, Column, Entity, Model};
use models::prelude::{Comments, Users};
use models::users;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

pub struct CommentDao;

impl CommentDao {
    /// Comments of one post, oldest first, each paired with its author.
    pub async fn find_for_post_with_authors(
        db: &DatabaseConnection,
        post_id: Uuid,
    ) -> Result<Vec<(Model, Option<users::Model>)>, DbErr> {
        Comments::find()
            .filter(Column::PostId.eq(post_id))
            .find_also_related(Users)
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn find_by_id_for_user(
        db: &DatabaseConnection,
        id: Uuid,
        post_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Model>, DbErr> {
        Comments::find_by_id(id)
            .filter(Column::PostId.eq(post_id))
            .filter(Column::UserId.eq(user_id))
            .one(db)
            .await
    }

    pub async fn count_by_posts(
        db: &DatabaseConnection,
        post_ids: Vec<Uuid>,
    ) -> Result<Vec<(Uuid, i64)>, DbErr> {
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }

        Comments::find()
            .select_only()
            .column(Column::PostId)
            .column_as(Column::Id.count(), "comment_count")
            .filter(Column::PostId.is_in(post_ids))
            .group_by(Column::PostId)
            .into_tuple()
            .all(db)
            .await
    }

    pub async fn insert(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<Model, DbErr> {
        let res = Comments::insert(model).exec(db).await?;
        Comments::find_by_id(res.last_insert_id)
            .one(db)
            .await?
            .ok_or(DbErr::Custom("Inserted comment not found".to_string()))
    }

    pub async fn update(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<Model, DbErr> {
        Entity::update(model).exec(db).await
    }

    pub async fn delete(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<DeleteResult, DbErr> {
        Entity::delete(model).exec(db).await
    }
}
