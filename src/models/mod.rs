pub mod auth;
pub mod outcome;

pub use auth::{ApiErrorBody, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, Role};
pub use outcome::SubmissionOutcome;
