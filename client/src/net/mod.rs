//! Networking modules for the hotel-management REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the raw HTTP seam, `gateway` layers the session-aware
//! interceptors over it, `api` binds the backend resources, `types` defines the
//! wire records and `claims` reads the role tag out of a login token.

pub mod api;
pub mod claims;
pub mod gateway;
pub mod transport;
pub mod types;
