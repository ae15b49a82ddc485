//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the admin chrome and shared display pieces while reading
//! the session from Leptos context.

pub mod access_denied;
pub mod admin_layout;
pub mod error_banner;
pub mod star_rating;
