use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

/// `302 Found` with a `Location` header and no body.
#[derive(Debug, Clone, Copy)]
pub struct Found(pub &'static str);

impl IntoResponse for Found {
    fn into_response(self) -> Response {
        (
            StatusCode::FOUND,
            [(header::LOCATION, HeaderValue::from_static(self.0))],
        )
            .into_response()
    }
}

pub const LOGIN_PAGE: &str = "/admin";
pub const DASHBOARD: &str = "/admin/dashboard";
