mod get;

pub use get::{GetImageQuery, ImageQueryService};
