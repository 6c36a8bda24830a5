pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::ImageObject;
pub use repository::ImageStore;
pub use value_objects::{ImageContentType, ImageKey};
