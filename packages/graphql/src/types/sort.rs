use async_graphql::Enum;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum PostSortBy {
    #[default]
    #[graphql(name = "PUB_DATE")]
    PubDate,
    #[graphql(name = "CREATED_AT")]
    CreatedAt,
    #[graphql(name = "TITLE")]
    Title,
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum SortDirection {
    #[graphql(name = "ASC")]
    Asc,
    #[default]
    #[graphql(name = "DESC")]
    Desc,
}

impl From<PostSortBy> for repositories::PostSortBy {
    fn from(s: PostSortBy) -> Self {
        match s {
            PostSortBy::PubDate => repositories::PostSortBy::PubDate,
            PostSortBy::CreatedAt => repositories::PostSortBy::CreatedAt,
            PostSortBy::Title => repositories::PostSortBy::Title,
        }
    }
}

impl From<SortDirection> for repositories::SortDirection {
    fn from(d: SortDirection) -> Self {
        match d {
            SortDirection::Asc => repositories::SortDirection::Asc,
            SortDirection::Desc => repositories::SortDirection::Desc,
        }
    }
}
