use async_graphql::MergedObject;
mod comments;
mod posts;
mod profile;

#[derive(MergedObject, Default)]
pub struct Mutations(
    posts::PostMutation,
    comments::CommentMutation,
    profile::ProfileMutation,
);
