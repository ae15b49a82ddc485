//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure decision
//! logic from page and component code so they stay testable without a DOM.

pub mod auth;
pub mod browser;
pub mod persistence;
pub mod validation;
