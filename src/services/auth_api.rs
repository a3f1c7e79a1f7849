use gloo_net::http::Request;
use thiserror::Error;

use crate::config::CONFIG;
use crate::models::{ApiErrorBody, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

/// Identity service client. Stateless: only HTTP, never touches UI state or
/// the session store.
#[derive(Clone, Debug)]
pub struct AuthApi {
    base_url: String,
}

#[derive(Clone, PartialEq, Debug, Error)]
pub enum AuthError {
    /// The service rejected the request with a structured error body.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Network failure, malformed response, or a non-2xx without a
    /// structured body.
    #[error("{0}")]
    Transport(String),
}

impl AuthApi {
    /// The base URL is fixed for the lifetime of the client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub async fn register(&self, payload: &RegisterRequest) -> Result<RegisterResponse, AuthError> {
        let url = format!("{}/auth/register/", self.base_url);
        log::info!("📝 Registering account: {}", payload.email);

        let response = Request::post(&url)
            .json(payload)
            .map_err(|e| AuthError::Transport(format!("Request build error: {e}")))?
            .send()
            .await
            .map_err(|e| AuthError::Transport(format!("Request error: {e}")))?;

        if !response.ok() {
            return Err(rejection(response.status(), response.text().await.ok()));
        }

        // The success body is service-defined; an unparseable one is still a success
        Ok(response
            .json::<RegisterResponse>()
            .await
            .unwrap_or_default())
    }

    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, AuthError> {
        let url = format!("{}/auth/login/", self.base_url);
        log::info!("🔐 Logging in: {}", payload.email);

        let response = Request::post(&url)
            .json(payload)
            .map_err(|e| AuthError::Transport(format!("Request build error: {e}")))?
            .send()
            .await
            .map_err(|e| AuthError::Transport(format!("Request error: {e}")))?;

        if !response.ok() {
            return Err(rejection(response.status(), response.text().await.ok()));
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| AuthError::Transport(format!("Parse error: {e}")))
    }
}

impl Default for AuthApi {
    fn default() -> Self {
        Self::new(CONFIG.api_base_url.clone())
    }
}

/// Prefer the server-supplied error message, fall back to the transport text.
fn rejection(status: u16, body: Option<String>) -> AuthError {
    match body
        .as_deref()
        .and_then(|text| serde_json::from_str::<ApiErrorBody>(text).ok())
    {
        Some(body) => AuthError::Rejected {
            status,
            message: body.error,
        },
        None => AuthError::Transport(format!("HTTP error: {status}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_error_body_surfaces_the_server_message() {
        let err = rejection(400, Some(r#"{"error":"Invalid credentials"}"#.to_string()));
        assert_eq!(
            err,
            AuthError::Rejected {
                status: 400,
                message: "Invalid credentials".to_string()
            }
        );
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn unstructured_body_falls_back_to_the_transport_text() {
        let err = rejection(500, Some("<html>oops</html>".to_string()));
        assert_eq!(err, AuthError::Transport("HTTP error: 500".to_string()));

        let err = rejection(502, None);
        assert_eq!(err.to_string(), "HTTP error: 502");
    }

    #[test]
    fn failure_status_line_matches_the_rejection_message() {
        let err = rejection(400, Some(r#"{"error":"Invalid credentials"}"#.to_string()));
        assert_eq!(format!("Login failed: {err}"), "Login failed: Invalid credentials");
    }
}
