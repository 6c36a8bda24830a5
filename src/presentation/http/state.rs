// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::config::AppConfig;
use std::{path::PathBuf, sync::Arc, time::Duration};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub settings: Arc<HttpSettings>,
}

/// Presentation-only settings: cookie attributes, site identity and limits.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub session_max_age: Duration,
    pub cookie_secure: bool,
    /// Absolute origin without a trailing slash.
    pub site_url: String,
    pub site_name: String,
    pub max_upload_bytes: usize,
    pub static_dir: PathBuf,
}

impl HttpSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            session_max_age: config.session_max_age(),
            cookie_secure: config.cookie_secure(),
            site_url: config.site_url().to_string(),
            site_name: config.site_name().to_string(),
            max_upload_bytes: config.max_upload_bytes(),
            static_dir: config.static_dir().to_path_buf(),
        }
    }
}
