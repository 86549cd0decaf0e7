use models::users;
use sea_orm::entity::prelude::Uuid;

/// Whoever is performing the current operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Actor {
    #[default]
    Anonymous,
    Authenticated { id: Uuid, username: String },
}

impl Actor {
    pub fn from_user(user: &users::Model) -> Self {
        Actor::Authenticated {
            id: user.id,
            username: user.username.clone(),
        }
    }

    pub fn id(&self) -> Option<Uuid> {
        match self {
            Actor::Anonymous => None,
            Actor::Authenticated { id, .. } => Some(*id),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Actor::Authenticated { .. })
    }

    /// True only for an authenticated actor whose id is `user_id`.
    pub fn is(&self, user_id: Uuid) -> bool {
        self.id() == Some(user_id)
    }
}
