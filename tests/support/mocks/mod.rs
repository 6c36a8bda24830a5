// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod articles;
pub mod images;
pub mod security;
pub mod time;
pub mod util;

pub use articles::{FailingArticleRepo, InMemoryArticleRepo};
pub use images::{FailingImageStore, InMemoryImageStore};
pub use security::PlainPasswordHasher;
pub use time::fixed_now;
pub use util::DummyClock;
