mod upload;

pub use upload::{ImageCommandService, UploadImageCommand};
