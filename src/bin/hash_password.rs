// src/bin/hash_password.rs
//! Prints the Argon2 PHC hash of a password for `ADMIN_PASSWORD_HASH`.
//! The password is read from the first argument, or from stdin when absent.
use anyhow::{Context, Result, bail};
use blog_cms::application::ports::security::PasswordHasher;
use blog_cms::infrastructure::security::password::Argon2PasswordHasher;
use std::io::{self, BufRead};

#[tokio::main]
async fn main() -> Result<()> {
    let password = match std::env::args().nth(1) {
        Some(password) => password,
        None => {
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("failed to read password from stdin")?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if password.is_empty() {
        bail!("usage: hash_password <password>  (or pipe it on stdin)");
    }

    let hash = Argon2PasswordHasher::new().hash(&password).await?;
    println!("{hash}");
    Ok(())
}
