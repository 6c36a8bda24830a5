// src/presentation/http/controllers/session.rs
use crate::application::commands::session::LoginCommand;
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    redirect::{DASHBOARD, Found, LOGIN_PAGE},
    session::{cleared_session_cookie, session_cookie},
    state::HttpState,
    views,
};
use axum::{
    Extension, Form,
    extract::rejection::FormRejection,
    http::header::SET_COOKIE,
    response::{AppendHeaders, Html, IntoResponse},
};
use serde::Deserialize;

pub async fn login_page(Extension(state): Extension<HttpState>) -> Html<String> {
    Html(views::admin::login(&state.settings.site_name))
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// An unreadable body is treated as empty credentials and rejected like any
/// other mismatch.
pub async fn login(
    Extension(state): Extension<HttpState>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> HttpResult<impl IntoResponse> {
    let form = form.map(|Form(form)| form).unwrap_or_else(|rejection| {
        tracing::debug!(%rejection, "login body could not be read");
        LoginForm::default()
    });

    state
        .services
        .session_commands
        .login(LoginCommand {
            username: form.username,
            password: form.password,
        })
        .await
        .into_http()?;

    let cookie = session_cookie(state.settings.session_max_age, state.settings.cookie_secure);
    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Found(DASHBOARD)))
}

pub async fn logout(Extension(state): Extension<HttpState>) -> impl IntoResponse {
    let cookie = cleared_session_cookie(state.settings.cookie_secure);
    (AppendHeaders([(SET_COOKIE, cookie)]), Found(LOGIN_PAGE))
}
