// src/config.rs
use std::{env, path::PathBuf, time::Duration};
use thiserror::Error;

#[derive(Clone)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    admin_username: String,
    admin_password_hash: String,
    session_max_age: Duration,
    cookie_secure: bool,
    image_dir: PathBuf,
    static_dir: PathBuf,
    site_url: String,
    site_name: String,
    max_upload_bytes: usize,
    dashboard_page_size: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_DATABASE_URL: &str = "sqlite://blog.db";
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_SESSION_MAX_AGE_SECS: u64 = 86_400;
const DEFAULT_IMAGE_DIR: &str = "data/images";
const DEFAULT_STATIC_DIR: &str = "public";
const DEFAULT_SITE_URL: &str = "http://localhost:8080";
const DEFAULT_SITE_NAME: &str = "Blog CMS";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_DASHBOARD_PAGE_SIZE: u32 = 50;
const MAX_DASHBOARD_PAGE_SIZE: u32 = 500;

impl AppConfig {
    /// Build configuration from environment variables, after letting a
    /// `.env` file populate any that are unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same parsing as [`AppConfig::from_env`] against an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let listen_addr = get("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into());

        let admin_username = lookup("ADMIN_USERNAME")
            .unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.into())
            .trim()
            .to_string();
        if admin_username.is_empty() {
            return Err(ConfigError::Invalid("ADMIN_USERNAME must not be empty".into()));
        }
        let admin_password_hash = get("ADMIN_PASSWORD_HASH")
            .ok_or(ConfigError::Missing("ADMIN_PASSWORD_HASH"))?
            .trim()
            .to_string();

        let session_max_age_secs = parse_or(
            "SESSION_MAX_AGE_SECS",
            get("SESSION_MAX_AGE_SECS"),
            DEFAULT_SESSION_MAX_AGE_SECS,
        )?;
        let cookie_secure = match get("COOKIE_SECURE") {
            Some(raw) => parse_bool("COOKIE_SECURE", &raw)?,
            None => true,
        };

        let image_dir = PathBuf::from(get("IMAGE_DIR").unwrap_or_else(|| DEFAULT_IMAGE_DIR.into()));
        let static_dir =
            PathBuf::from(get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.into()));

        let site_url = get("SITE_URL")
            .unwrap_or_else(|| DEFAULT_SITE_URL.into())
            .trim()
            .trim_end_matches('/')
            .to_string();
        if !(site_url.starts_with("http://") || site_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(
                "SITE_URL must start with http:// or https://".into(),
            ));
        }
        let site_name = get("SITE_NAME").unwrap_or_else(|| DEFAULT_SITE_NAME.into());

        let max_upload_bytes = parse_or(
            "MAX_UPLOAD_BYTES",
            get("MAX_UPLOAD_BYTES"),
            DEFAULT_MAX_UPLOAD_BYTES,
        )?;
        let dashboard_page_size = parse_or(
            "DASHBOARD_PAGE_SIZE",
            get("DASHBOARD_PAGE_SIZE"),
            DEFAULT_DASHBOARD_PAGE_SIZE,
        )?;
        if !(1..=MAX_DASHBOARD_PAGE_SIZE).contains(&dashboard_page_size) {
            return Err(ConfigError::Invalid(format!(
                "DASHBOARD_PAGE_SIZE must be between 1 and {MAX_DASHBOARD_PAGE_SIZE}"
            )));
        }

        Ok(Self {
            database_url,
            listen_addr,
            admin_username,
            admin_password_hash,
            session_max_age: Duration::from_secs(session_max_age_secs),
            cookie_secure,
            image_dir,
            static_dir,
            site_url,
            site_name,
            max_upload_bytes,
            dashboard_page_size,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn admin_username(&self) -> &str {
        &self.admin_username
    }

    pub fn admin_password_hash(&self) -> &str {
        &self.admin_password_hash
    }

    pub const fn session_max_age(&self) -> Duration {
        self.session_max_age
    }

    pub const fn cookie_secure(&self) -> bool {
        self.cookie_secure
    }

    pub fn image_dir(&self) -> &std::path::Path {
        &self.image_dir
    }

    pub fn static_dir(&self) -> &std::path::Path {
        &self.static_dir
    }

    /// Absolute origin without a trailing slash.
    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    pub const fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    pub const fn dashboard_page_size(&self) -> u32 {
        self.dashboard_page_size
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &self.database_url)
            .field("listen_addr", &self.listen_addr)
            .field("admin_username", &self.admin_username)
            .field("admin_password_hash", &"<redacted>")
            .field("session_max_age", &self.session_max_age)
            .field("cookie_secure", &self.cookie_secure)
            .field("image_dir", &self.image_dir)
            .field("static_dir", &self.static_dir)
            .field("site_url", &self.site_url)
            .field("site_name", &self.site_name)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field("dashboard_page_size", &self.dashboard_page_size)
            .finish()
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    raw.map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{key} has an invalid value: {raw}")))
    })
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid(format!(
            "{key} must be a boolean, got {raw}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_the_hash_is_set() {
        let config = load(&[("ADMIN_PASSWORD_HASH", "$argon2id$stub")]).unwrap();
        assert_eq!(config.database_url(), "sqlite://blog.db");
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.admin_username(), "admin");
        assert_eq!(config.session_max_age(), Duration::from_secs(86_400));
        assert!(config.cookie_secure());
        assert_eq!(config.image_dir(), std::path::Path::new("data/images"));
        assert_eq!(config.static_dir(), std::path::Path::new("public"));
        assert_eq!(config.site_url(), "http://localhost:8080");
        assert_eq!(config.site_name(), "Blog CMS");
        assert_eq!(config.max_upload_bytes(), 10 * 1024 * 1024);
        assert_eq!(config.dashboard_page_size(), 50);
    }

    #[test]
    fn password_hash_is_required() {
        assert!(matches!(
            load(&[]),
            Err(ConfigError::Missing("ADMIN_PASSWORD_HASH"))
        ));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = load(&[
            ("ADMIN_PASSWORD_HASH", "h"),
            ("ADMIN_USERNAME", " editor "),
            ("COOKIE_SECURE", "false"),
            ("SESSION_MAX_AGE_SECS", "600"),
            ("SITE_URL", "https://blog.example.com/"),
            ("DASHBOARD_PAGE_SIZE", "25"),
        ])
        .unwrap();
        assert_eq!(config.admin_username(), "editor");
        assert!(!config.cookie_secure());
        assert_eq!(config.session_max_age(), Duration::from_secs(600));
        assert_eq!(config.site_url(), "https://blog.example.com");
        assert_eq!(config.dashboard_page_size(), 25);
    }

    #[test]
    fn invalid_values_are_rejected() {
        for pairs in [
            vec![("ADMIN_USERNAME", "  ")],
            vec![("COOKIE_SECURE", "maybe")],
            vec![("SESSION_MAX_AGE_SECS", "-1")],
            vec![("SITE_URL", "ftp://example.com")],
            vec![("DASHBOARD_PAGE_SIZE", "0")],
            vec![("DASHBOARD_PAGE_SIZE", "501")],
            vec![("MAX_UPLOAD_BYTES", "lots")],
        ] {
            let mut pairs = pairs;
            pairs.push(("ADMIN_PASSWORD_HASH", "h"));
            assert!(
                matches!(load(&pairs), Err(ConfigError::Invalid(_))),
                "expected invalid for {pairs:?}"
            );
        }
    }

    #[test]
    fn debug_output_hides_the_hash() {
        let config = load(&[("ADMIN_PASSWORD_HASH", "$argon2id$secret")]).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret"));
    }
}
