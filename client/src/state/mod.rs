//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the process-wide login record shared through context; `fetch`
//! holds the per-page request bookkeeping that list and form pages keep in
//! their own signals.

pub mod fetch;
pub mod session;
