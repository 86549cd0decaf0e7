use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct Claims {
    pub iss: String,
    /// id of the user the token was issued to
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}
