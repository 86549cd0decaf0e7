use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};

use crate::prelude::*;

/// Create every table from the entity definitions, referenced tables first.
/// Tables that already exist are left alone.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, &schema, Users).await?;
    create_table(db, &schema, Categories).await?;
    create_table(db, &schema, Locations).await?;
    create_table(db, &schema, Posts).await?;
    create_table(db, &schema, Comments).await?;
    Ok(())
}

async fn create_table<E: EntityTrait>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr> {
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(db.get_database_backend().build(&stmt)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::create_tables;
    use crate::{posts, users};
    use sea_orm::entity::prelude::{DateTime, Uuid};
    use sea_orm::{
        ActiveModelTrait, ActiveValue, ConnectOptions, Database, DatabaseConnection, EntityTrait,
        PaginatorTrait,
    };

    async fn connect() -> DatabaseConnection {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);
        Database::connect(opts).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() {
        let db = connect().await;

        create_tables(&db).await.unwrap();
        create_tables(&db).await.unwrap();

        let count = crate::prelude::Posts::find().count(&db).await.unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_post_is_published_defaults_to_true() {
        let db = connect().await;
        create_tables(&db).await.unwrap();
        let now = DateTime::default();

        let user_id = Uuid::from_u128(1);
        users::ActiveModel {
            id: ActiveValue::Set(user_id),
            username: ActiveValue::Set("writer".to_string()),
            email: ActiveValue::Set("writer@example.org".to_string()),
            first_name: ActiveValue::Set(String::new()),
            last_name: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(None),
        }
        .insert(&db)
        .await
        .unwrap();

        let post_id = Uuid::from_u128(2);
        posts::ActiveModel {
            id: ActiveValue::Set(post_id),
            title: ActiveValue::Set("Untouched flag".to_string()),
            text: ActiveValue::Set("Body".to_string()),
            pub_date: ActiveValue::Set(now),
            image: ActiveValue::Set(None),
            user_id: ActiveValue::Set(user_id),
            category_id: ActiveValue::Set(None),
            location_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let stored = posts::Entity::find_by_id(post_id).one(&db).await.unwrap().unwrap();
        assert!(stored.is_published);
    }
}
