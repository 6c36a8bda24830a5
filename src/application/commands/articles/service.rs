// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::ApplicationResult,
        ports::{time::Clock, util::SlugGenerator},
    },
    domain::{
        article::{ArticleSlug, ArticleTitle, ArticleWriteRepository},
        image::ImageKey,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            slugger,
            clock,
        }
    }

    /// Use the submitted slug, or derive one from the title when it is blank.
    pub(super) fn resolve_slug(
        &self,
        submitted: &str,
        title: &ArticleTitle,
    ) -> ApplicationResult<ArticleSlug> {
        if submitted.trim().is_empty() {
            Ok(ArticleSlug::new(self.slugger.slugify(title.as_str()))?)
        } else {
            Ok(ArticleSlug::new(submitted)?)
        }
    }
}

pub(super) fn parse_cover_key(raw: Option<String>) -> ApplicationResult<Option<ImageKey>> {
    match raw.map(|v| v.trim().to_string()) {
        Some(value) if !value.is_empty() => Ok(Some(ImageKey::parse(value)?)),
        _ => Ok(None),
    }
}
