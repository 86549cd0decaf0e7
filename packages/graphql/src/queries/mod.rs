use async_graphql::MergedObject;
mod categories;
mod posts;

#[derive(MergedObject, Default)]
pub struct Queries(posts::PostQueries, categories::CategoryQueries);
