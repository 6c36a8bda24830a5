// tests/support/helpers.rs
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, Response, StatusCode, header};
use blog_cms::application::commands::session::AdminCredentials;
use blog_cms::application::services::{ApplicationServices, ServiceDependencies};
use blog_cms::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use blog_cms::domain::image::ImageStore;
use blog_cms::infrastructure::util::{DefaultSlugGenerator, UuidImageKeyGenerator};
use blog_cms::presentation::http::{
    routes::build_router,
    state::{HttpSettings, HttpState},
};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::mocks::{DummyClock, InMemoryArticleRepo, InMemoryImageStore, PlainPasswordHasher};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "s3cret-pass";
pub const AUTH_COOKIE: &str = "auth=true";
pub const SITE_URL: &str = "https://blog.example.com";
pub const MAX_UPLOAD_BYTES: usize = 64 * 1024;
pub const DASHBOARD_PAGE_SIZE: u32 = 2;

pub fn test_settings() -> HttpSettings {
    HttpSettings {
        session_max_age: Duration::from_secs(86_400),
        cookie_secure: true,
        site_url: SITE_URL.into(),
        site_name: "Test Blog".into(),
        max_upload_bytes: MAX_UPLOAD_BYTES,
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public"),
    }
}

pub fn build_router_with(
    write_repo: Arc<dyn ArticleWriteRepository>,
    read_repo: Arc<dyn ArticleReadRepository>,
    image_store: Arc<dyn ImageStore>,
) -> Router {
    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        article_write_repo: write_repo,
        article_read_repo: read_repo,
        image_store,
        password_hasher: Arc::new(PlainPasswordHasher),
        clock: Arc::new(DummyClock),
        slugger: Arc::new(DefaultSlugGenerator),
        image_keys: Arc::new(UuidImageKeyGenerator),
        credentials: AdminCredentials::new(
            ADMIN_USERNAME,
            PlainPasswordHasher::hash_of(ADMIN_PASSWORD),
        ),
        dashboard_page_size: DASHBOARD_PAGE_SIZE,
    }));

    build_router(HttpState {
        services,
        settings: Arc::new(test_settings()),
    })
}

/// Router over in-memory stores, with handles to inspect them.
pub struct TestApp {
    pub router: Router,
    pub articles: Arc<InMemoryArticleRepo>,
    pub images: Arc<InMemoryImageStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let articles = Arc::new(InMemoryArticleRepo::default());
        let images = Arc::new(InMemoryImageStore::default());
        let router = build_router_with(articles.clone(), articles.clone(), images.clone());
        Self {
            router,
            articles,
            images,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> Response<Body> {
    router.clone().oneshot(request).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, fields: &[(&str, &str)], cookie: Option<&str>) -> Request<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body)).unwrap()
}

pub const BOUNDARY: &str = "----blog-cms-test-boundary";

pub struct FilePart<'a> {
    pub field: &'a str,
    pub file_name: Option<&'a str>,
    pub content_type: &'a str,
    pub data: &'a [u8],
}

pub fn multipart_body(parts: &[FilePart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        let disposition = match part.file_name {
            Some(name) => format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{name}\"\r\n",
                part.field
            ),
            None => format!("Content-Disposition: form-data; name=\"{}\"\r\n", part.field),
        };
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", part.content_type).as_bytes());
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn upload_request(parts: &[FilePart<'_>], cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/admin/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(multipart_body(parts))).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub async fn body_string(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).expect("utf-8 body")
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("json body")
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

pub fn set_cookie(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
}

pub fn assert_redirect(response: &Response<Body>, to: &str) {
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(response), Some(to));
}
