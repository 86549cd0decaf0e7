pub mod types;
pub mod queries;
pub mod mutations;
pub mod utilities;
pub mod errors;

#[cfg(test)]
pub mod test_helpers;

use async_graphql::{EmptySubscription, Schema};
use repositories::ContentConfig;
use sea_orm::DatabaseConnection;
use services::authentication::AuthConfig;

use crate::mutations::Mutations;
use crate::queries::Queries;

pub type AppSchema = Schema<Queries, Mutations, EmptySubscription>;

/// The request `Token`, when there is one, is added per request by the caller.
pub fn build_schema(db: DatabaseConnection, auth: AuthConfig, content: ContentConfig) -> AppSchema {
    Schema::build(Queries::default(), Mutations::default(), EmptySubscription)
        .data(db)
        .data(auth)
        .data(content)
        .finish()
}
