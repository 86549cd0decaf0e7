// src/setup.rs

use sea_orm::*;

pub(super) async fn set_up_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(database_url);
    opts.sqlx_logging(true)
        .sqlx_logging_level(tracing::log::LevelFilter::Debug);

    let db = Database::connect(opts).await?;
    tracing::info!("DB connected");

    models::schema::create_tables(&db).await?;
    Ok(db)
}
