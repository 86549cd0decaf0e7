use crate::errors::{AuthError, DbError, NotFoundError, ValidationErrorType};
use crate::types::user::Profile;
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, InputObject, Object, Result, Union};
use chrono::Utc;
use repositories::{ProfileFields, UserRepository};
use sea_orm::DatabaseConnection;
use services::ContentError;

#[derive(Union)]
pub enum ProfileMutationResult {
    Profile(Profile),
    NotFoundError(NotFoundError),
    ValidationError(ValidationErrorType),
    DbError(DbError),
    AuthError(AuthError),
}

impl From<ContentError> for ProfileMutationResult {
    fn from(e: ContentError) -> Self {
        match e {
            ContentError::Unauthorized => {
                ProfileMutationResult::AuthError(AuthError::unauthorized())
            }
            ContentError::Validation(v) => ProfileMutationResult::ValidationError(v.into()),
            ContentError::Db(m) => ProfileMutationResult::DbError(DbError::logged(m)),
            _ => ProfileMutationResult::NotFoundError(NotFoundError::default()),
        }
    }
}

#[derive(InputObject)]
struct UpdateProfileInput {
    username: String,
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl From<UpdateProfileInput> for ProfileFields {
    fn from(i: UpdateProfileInput) -> Self {
        ProfileFields {
            username: i.username,
            email: i.email,
            first_name: i.first_name.unwrap_or_default(),
            last_name: i.last_name.unwrap_or_default(),
        }
    }
}

#[derive(Default)]
pub struct ProfileMutation;

impl RequiresAuth for ProfileMutation {}

#[Object]
impl ProfileMutation {
    /// Edit the caller's own profile
    async fn update_profile(
        &self,
        ctx: &Context<'_>,
        input: UpdateProfileInput,
    ) -> Result<ProfileMutationResult> {
        let actor = match self.current_actor(ctx).await {
            Ok(actor) => actor,
            Err(e) => return Ok(ProfileMutationResult::AuthError(e.into())),
        };

        let db = ctx.data::<DatabaseConnection>()?;
        let now = Utc::now().naive_utc();

        match UserRepository::update_profile(db, &actor, input.into(), now).await {
            Ok(user) => Ok(ProfileMutationResult::Profile(user.into())),
            Err(e) => Ok(e.into()),
        }
    }
}
