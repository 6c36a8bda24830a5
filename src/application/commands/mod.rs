pub mod articles;
pub mod images;
pub mod session;
