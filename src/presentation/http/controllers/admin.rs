// src/presentation/http/controllers/admin.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    queries::articles::{GetArticleBySlugQuery, ListAllArticlesQuery},
};
use crate::presentation::http::{
    controllers::checkbox,
    error::{HttpResult, IntoHttpResult},
    extractors::{AdminApi, AdminPage},
    redirect::{DASHBOARD, Found},
    state::HttpState,
    views,
};
use axum::{
    Extension, Form,
    extract::{Path, Query},
    response::Html,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    #[serde(default)]
    pub page: Option<u32>,
}

pub async fn dashboard(
    _: AdminPage,
    Extension(state): Extension<HttpState>,
    Query(params): Query<DashboardParams>,
) -> HttpResult<Html<String>> {
    let page = state
        .services
        .article_queries
        .list_all(ListAllArticlesQuery {
            page: params.page.unwrap_or(1),
        })
        .await
        .into_http()?;
    Ok(Html(views::admin::dashboard(&state.settings.site_name, &page)))
}

pub async fn new_post(_: AdminPage, Extension(state): Extension<HttpState>) -> Html<String> {
    Html(views::admin::editor(&state.settings.site_name, None))
}

pub async fn edit_post(
    _: AdminPage,
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Html<String>> {
    let article = state
        .services
        .article_queries
        .get_article_for_edit(GetArticleBySlugQuery { slug })
        .await
        .into_http()?;
    Ok(Html(views::admin::editor(
        &state.settings.site_name,
        Some(&article),
    )))
}

/// Fields shared by the create and update forms. Every field is optional on
/// the wire; missing required ones fail validation downstream.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleForm {
    #[serde(default)]
    pub original_slug: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub published: Option<String>,
    #[serde(default)]
    pub cover_image_key: Option<String>,
}

pub async fn save_post(
    _: AdminApi,
    Extension(state): Extension<HttpState>,
    Form(form): Form<ArticleForm>,
) -> HttpResult<Found> {
    let command = CreateArticleCommand {
        published: checkbox(form.published.as_deref()),
        title: form.title,
        slug: form.slug,
        content: form.content,
        excerpt: form.excerpt,
        cover_image_key: form.cover_image_key,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;
    Ok(Found(DASHBOARD))
}

pub async fn update_post(
    _: AdminApi,
    Extension(state): Extension<HttpState>,
    Form(form): Form<ArticleForm>,
) -> HttpResult<Found> {
    let command = UpdateArticleCommand {
        published: checkbox(form.published.as_deref()),
        original_slug: form.original_slug.unwrap_or_default(),
        title: form.title,
        slug: form.slug,
        content: form.content,
        excerpt: form.excerpt,
        cover_image_key: form.cover_image_key,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()?;
    Ok(Found(DASHBOARD))
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub slug: String,
}

pub async fn delete_post(
    _: AdminApi,
    Extension(state): Extension<HttpState>,
    Form(form): Form<DeleteForm>,
) -> HttpResult<Found> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { slug: form.slug })
        .await
        .into_http()?;
    Ok(Found(DASHBOARD))
}
