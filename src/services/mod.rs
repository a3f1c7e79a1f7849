pub mod auth_api;

pub use auth_api::{AuthApi, AuthError};
