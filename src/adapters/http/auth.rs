//! Caller identity for HTTP requests.
//!
//! The upstream auth gateway authenticates the session and forwards the
//! caller as `x-user-id` and `x-user-role` headers.

use axum::extract::{FromRequestParts, Json};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::domain::foundation::{Role, UserId, Viewer};

use super::dto::ErrorResponse;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Authenticated caller extracted from request headers.
#[derive(Debug, Clone)]
pub struct AuthenticatedViewer(pub Viewer);

/// Rejection type for AuthenticatedViewer extraction.
#[derive(Debug)]
pub enum AuthenticationRequired {
    MissingUser,
    MissingRole,
    UnknownRole(String),
}

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> axum::response::Response {
        let message = match self {
            AuthenticationRequired::MissingUser => "Authentication is required".to_string(),
            AuthenticationRequired::MissingRole => "Caller role is required".to_string(),
            AuthenticationRequired::UnknownRole(role) => format!("Unknown caller role: {}", role),
        };
        let error = ErrorResponse::new("AUTHENTICATION_REQUIRED", message);
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthenticatedViewer
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .and_then(|s| UserId::new(s).ok())
            .ok_or(AuthenticationRequired::MissingUser)?;

        let raw_role = parts
            .headers
            .get(USER_ROLE_HEADER)
            .and_then(|h| h.to_str().ok())
            .ok_or(AuthenticationRequired::MissingRole)?;
        let role: Role = raw_role
            .parse()
            .map_err(|_| AuthenticationRequired::UnknownRole(raw_role.to_string()))?;

        Ok(AuthenticatedViewer(Viewer::new(user_id, role)))
    }
}
