pub mod category;
pub mod comment;
pub mod connection;
pub mod post;
pub mod sort;
pub mod user;
