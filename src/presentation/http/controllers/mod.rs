// src/presentation/http/controllers/mod.rs
pub mod admin;
pub mod images;
pub mod public;
pub mod session;

/// HTML checkbox semantics: present with any value but an explicit "off"
/// means checked.
pub(crate) fn checkbox(value: Option<&str>) -> bool {
    value.is_some_and(|raw| !matches!(raw.trim(), "" | "0" | "false" | "off"))
}
