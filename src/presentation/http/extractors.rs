// src/presentation/http/extractors.rs
use axum::{extract::FromRequestParts, http::StatusCode, http::request::Parts};

use super::{
    error::HttpError,
    redirect::{Found, LOGIN_PAGE},
    session::is_authenticated,
};

/// Gate for admin HTML pages; anonymous requests are sent to the login page.
#[derive(Debug, Clone, Copy)]
pub struct AdminPage;

/// Gate for admin actions; anonymous requests get a bare 401.
#[derive(Debug, Clone, Copy)]
pub struct AdminApi;

impl<S> FromRequestParts<S> for AdminPage
where
    S: Send + Sync,
{
    type Rejection = Found;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if is_authenticated(&parts.headers) {
            Ok(Self)
        } else {
            tracing::debug!(path = %parts.uri.path(), "anonymous admin page request");
            Err(Found(LOGIN_PAGE))
        }
    }
}

impl<S> FromRequestParts<S> for AdminApi
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if is_authenticated(&parts.headers) {
            Ok(Self)
        } else {
            tracing::debug!(path = %parts.uri.path(), "anonymous admin action rejected");
            Err(HttpError::new(StatusCode::UNAUTHORIZED, "Unauthorized"))
        }
    }
}
