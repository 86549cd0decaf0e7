use std::fmt;
use services::authentication::token::{AuthConfig, Token};
use services::Actor;
use async_graphql::Context;
use sea_orm::DatabaseConnection;

pub struct AuthenticationError {
    pub message: String,
}

impl From<services::authentication::authenticator::AuthenticationError> for AuthenticationError {
    fn from(e: services::authentication::authenticator::AuthenticationError) -> Self {
        AuthenticationError { message: e.to_string() }
    }
}

impl fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

pub trait RequiresAuth {
    /// Who is calling. A request without a token is anonymous; a request with
    /// a bad token is an error.
    async fn current_actor<'a>(&self, ctx: &Context<'a>) -> Result<Actor, AuthenticationError> {
        let (db, config) = match (ctx.data::<DatabaseConnection>(), ctx.data::<AuthConfig>()) {
            (Ok(db), Ok(config)) => (db, config),
            _ => {
                return Err(AuthenticationError {
                    message: "Authentication is not configured".to_string(),
                });
            }
        };

        let token = ctx.data_opt::<Token>();
        let actor =
            services::authentication::authenticator::resolve_actor(db, token, config).await?;
        Ok(actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use async_graphql::{EmptyMutation, EmptySubscription, Object, Request, Schema};

    #[derive(Default)]
    struct WhoAmI;

    impl RequiresAuth for WhoAmI {}

    #[Object]
    impl WhoAmI {
        async fn who(&self, ctx: &Context<'_>) -> String {
            match self.current_actor(ctx).await {
                Ok(Actor::Authenticated { username, .. }) => username,
                Ok(Actor::Anonymous) => "anonymous".to_string(),
                Err(e) => e.to_string(),
            }
        }
    }

    fn schema(db: DatabaseConnection) -> Schema<WhoAmI, EmptyMutation, EmptySubscription> {
        Schema::build(WhoAmI, EmptyMutation, EmptySubscription)
            .data(db)
            .data(test_auth_config())
            .finish()
    }

    #[tokio::test]
    async fn test_no_token_is_anonymous() {
        let db = setup_test_db().await;

        let res = schema(db).execute(Request::new("{ who }")).await;

        assert_eq!(res.data.into_json().unwrap()["who"], "anonymous");
    }

    #[tokio::test]
    async fn test_token_resolves_user() {
        let db = setup_test_db().await;
        let user = create_test_user(&db, "ada").await;
        let token = create_access_token(&user);

        let res = schema(db)
            .execute(Request::new("{ who }").data(Token::new(format!("Bearer {}", token))))
            .await;

        assert_eq!(res.data.into_json().unwrap()["who"], "ada");
    }

    #[tokio::test]
    async fn test_bad_token_is_an_error_not_anonymous() {
        let db = setup_test_db().await;

        let res = schema(db)
            .execute(Request::new("{ who }").data(Token::new("garbage".to_string())))
            .await;

        assert_ne!(res.data.into_json().unwrap()["who"], "anonymous");
    }
}
