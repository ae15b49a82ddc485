//! Small browser dialogs used by list pages.
//!
//! Requires a browser environment; off the browser every prompt is declined.

/// Ask the user to confirm a destructive action via `window.confirm`.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
