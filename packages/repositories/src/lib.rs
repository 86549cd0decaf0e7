pub mod category;
pub mod comment;
pub mod config;
pub mod location;
pub mod post;
pub mod user;

pub use category::CategoryRepository;
pub use comment::{CommentRepository, CommentWithAuthor};
pub use config::{CommentValidationPolicy, ContentConfig};
pub use location::LocationRepository;
pub use post::{
    PageRequest, PaginatedPosts, PostDetail, PostFields, PostRepository, PostSortBy,
    SortDirection,
};
pub use user::{ProfileFields, UserRepository};

#[cfg(test)]
mod test_helpers;
