pub mod comment_validator;
pub mod post_validator;
pub mod user_validator;
