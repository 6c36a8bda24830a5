use std::{fmt, sync::Arc};

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use subtle::ConstantTimeEq;

/// The single admin identity: a username and the hash of its shared secret.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password_hash: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

pub struct SessionCommandService {
    credentials: AdminCredentials,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl SessionCommandService {
    pub fn new(credentials: AdminCredentials, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            credentials,
            password_hasher,
        }
    }

    /// Succeeds only when both the username and the password match. The
    /// password is verified even for an unknown username.
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<()> {
        let username_ok: bool = command
            .username
            .as_bytes()
            .ct_eq(self.credentials.username.as_bytes())
            .into();

        let password_ok = self
            .password_hasher
            .verify(&command.password, &self.credentials.password_hash)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "password verification failed"))?;

        if username_ok && password_ok {
            tracing::info!(username = %self.credentials.username, "admin login succeeded");
            Ok(())
        } else {
            tracing::warn!("admin login rejected");
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
