//! Browser `localStorage` backend for the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the hydrate-only web-sys glue so the session store only sees
//! the `SessionStorage` trait. Off the browser (SSR, native tests) reads come
//! back empty and writes are accepted and dropped.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use crate::state::session::SessionStorage;

/// `SessionStorage` over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or_else(|| "localStorage unavailable".to_owned())?;
            storage.set_item(key, value).map_err(|e| format!("localStorage write failed: {e:?}"))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
