//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod client_form;
pub mod clients;
pub mod home;
pub mod hotel_form;
pub mod hotels;
pub mod login;
