use async_graphql::SimpleObject;
use models::{categories, locations};
use uuid::Uuid;

#[derive(SimpleObject)]
pub struct Category {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub slug: String,
}

impl From<&categories::Model> for Category {
    fn from(c: &categories::Model) -> Self {
        Category {
            id: c.id,
            title: c.title.clone(),
            description: c.description.clone(),
            slug: c.slug.clone(),
        }
    }
}

#[derive(SimpleObject)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
}

impl From<&locations::Model> for Location {
    fn from(l: &locations::Model) -> Self {
        Location {
            id: l.id,
            name: l.name.clone(),
        }
    }
}
