// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{admin, images, public, session};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    handler::HandlerWithoutStateExt,
    routing::{get, post},
};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

/// Dispatch table. Anything without a route falls through to the static
/// asset directory, then to a plain-text 404.
pub fn build_router(state: HttpState) -> Router {
    let static_files = ServeDir::new(&state.settings.static_dir)
        .not_found_service(public::not_found.into_service());
    let upload_limit = DefaultBodyLimit::max(state.settings.max_upload_bytes);

    Router::new()
        .route("/", get(public::home))
        .route("/posts/{slug}", get(public::show_post))
        .route("/search", get(public::search))
        .route("/sitemap.xml", get(public::sitemap))
        .route("/robots.txt", get(public::robots))
        .route("/admin", get(session::login_page))
        .route("/login", post(session::login))
        .route("/logout", post(session::logout))
        .route("/admin/dashboard", get(admin::dashboard))
        .route("/admin/new", get(admin::new_post))
        .route("/admin/save", post(admin::save_post))
        .route("/admin/edit/{slug}", get(admin::edit_post))
        .route("/admin/update", post(admin::update_post))
        .route("/admin/delete", post(admin::delete_post))
        .route(
            "/admin/upload",
            post(images::upload_image).layer(upload_limit),
        )
        .route("/images/{filename}", get(images::serve_image))
        .fallback_service(static_files)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}
