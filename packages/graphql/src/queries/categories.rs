use async_graphql::{Context, Object, Result};
use repositories::CategoryRepository;
use sea_orm::DatabaseConnection;

use crate::types::category::Category;

#[derive(Default)]
pub struct CategoryQueries;

#[Object]
impl CategoryQueries {
    /// Published categories, by title
    async fn categories(&self, ctx: &Context<'_>) -> Result<Vec<Category>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let categories = CategoryRepository::list_published(db).await?;
        Ok(categories.iter().map(Category::from).collect())
    }
}
