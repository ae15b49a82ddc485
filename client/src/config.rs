//! Build-time configuration for the console.
//!
//! The backend base address is baked in at compile time from
//! `HOTEL_API_BASE_URL`. An empty value keeps API paths relative to the page
//! origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Role tag that unlocks the administrator area.
pub const ADMIN_ROLE: &str = "ADMINISTRATOR";

/// Backend base address configured for this build, without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("HOTEL_API_BASE_URL").unwrap_or_default())
}

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

/// Join a base address and an API path with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if base.is_empty() {
        format!("/{path}")
    } else {
        format!("{base}/{path}")
    }
}
