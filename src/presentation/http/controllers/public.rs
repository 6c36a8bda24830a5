// src/presentation/http/controllers/public.rs
use crate::application::queries::articles::{GetArticleBySlugQuery, SearchArticlesQuery};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    state::HttpState,
    views,
};
use axum::{
    Extension,
    extract::{Path, Query},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};
use serde::Deserialize;

pub async fn home(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    let articles = state
        .services
        .article_queries
        .list_published()
        .await
        .into_http()?;
    Ok(Html(views::public::home(&state.settings.site_name, &articles)))
}

pub async fn show_post(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Html<String>> {
    let article = state
        .services
        .article_queries
        .get_published_article(GetArticleBySlugQuery { slug })
        .await
        .into_http()?;
    Ok(Html(views::public::article(&state.settings.site_name, &article)))
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

pub async fn search(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Html<String>> {
    let results = state
        .services
        .article_queries
        .search_articles(SearchArticlesQuery {
            query: params.q.clone(),
        })
        .await
        .into_http()?;
    Ok(Html(views::public::search(
        &state.settings.site_name,
        &params.q,
        &results,
    )))
}

pub async fn sitemap(Extension(state): Extension<HttpState>) -> HttpResult<impl IntoResponse> {
    let entries = state
        .services
        .article_queries
        .sitemap_entries()
        .await
        .into_http()?;
    Ok((
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        views::sitemap::sitemap(&state.settings.site_url, &entries),
    ))
}

pub async fn robots(Extension(state): Extension<HttpState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        views::sitemap::robots(&state.settings.site_url),
    )
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "404 Not Found",
    )
}
