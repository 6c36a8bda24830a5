// src/presentation/http/session.rs
use axum::http::HeaderMap;
use headers::{Cookie, HeaderMapExt};
use std::time::Duration;

pub const SESSION_COOKIE: &str = "auth";
const SESSION_VALUE: &str = "true";

/// True iff a cookie named exactly `auth` carries the value `true`.
pub fn is_authenticated(headers: &HeaderMap) -> bool {
    headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(SESSION_COOKIE).map(|value| value == SESSION_VALUE))
        .unwrap_or(false)
}

pub fn session_cookie(max_age: Duration, secure: bool) -> String {
    build_cookie(SESSION_VALUE, max_age.as_secs(), secure)
}

pub fn cleared_session_cookie(secure: bool) -> String {
    build_cookie("", 0, secure)
}

fn build_cookie(value: &str, max_age_secs: u64, secure: bool) -> String {
    let secure = if secure { " Secure;" } else { "" };
    format!(
        "{SESSION_COOKIE}={value}; Path=/; HttpOnly;{secure} SameSite=Strict; Max-Age={max_age_secs}"
    )
}
