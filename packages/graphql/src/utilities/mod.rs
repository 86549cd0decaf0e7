pub mod requires_auth;
