mod login;

pub use login::{AdminCredentials, LoginCommand, SessionCommandService};
