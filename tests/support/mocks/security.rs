// tests/support/mocks/security.rs
use blog_cms::application::{ApplicationResult, error::ApplicationError};

/// Stores passwords as `plain:<password>` so tests avoid Argon2's cost.
#[derive(Clone, Default)]
pub struct PlainPasswordHasher;

impl PlainPasswordHasher {
    pub fn hash_of(password: &str) -> String {
        format!("plain:{password}")
    }
}

#[async_trait::async_trait]
impl blog_cms::application::ports::security::PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(Self::hash_of(password))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        if expected_hash.starts_with("plain:") {
            Ok(Self::hash_of(password) == expected_hash)
        } else {
            Err(ApplicationError::infrastructure("unrecognised hash format"))
        }
    }
}
