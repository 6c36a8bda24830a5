// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService,
            images::ImageCommandService,
            session::{AdminCredentials, SessionCommandService},
        },
        ports::{
            security::PasswordHasher,
            time::Clock,
            util::{ImageKeyGenerator, SlugGenerator},
        },
        queries::{articles::ArticleQueryService, images::ImageQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        image::ImageStore,
    },
};

/// Collaborators injected at process start.
pub struct ServiceDependencies {
    pub article_write_repo: Arc<dyn ArticleWriteRepository>,
    pub article_read_repo: Arc<dyn ArticleReadRepository>,
    pub image_store: Arc<dyn ImageStore>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub image_keys: Arc<dyn ImageKeyGenerator>,
    pub credentials: AdminCredentials,
    pub dashboard_page_size: u32,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub image_commands: Arc<ImageCommandService>,
    pub image_queries: Arc<ImageQueryService>,
    pub session_commands: Arc<SessionCommandService>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let ServiceDependencies {
            article_write_repo,
            article_read_repo,
            image_store,
            password_hasher,
            clock,
            slugger,
            image_keys,
            credentials,
            dashboard_page_size,
        } = deps;

        let article_commands = Arc::new(ArticleCommandService::new(
            article_write_repo,
            slugger,
            clock,
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            article_read_repo,
            dashboard_page_size,
        ));
        let image_commands = Arc::new(ImageCommandService::new(
            Arc::clone(&image_store),
            image_keys,
        ));
        let image_queries = Arc::new(ImageQueryService::new(image_store));
        let session_commands = Arc::new(SessionCommandService::new(credentials, password_hasher));

        Self {
            article_commands,
            article_queries,
            image_commands,
            image_queries,
            session_commands,
        }
    }
}
