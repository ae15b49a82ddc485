//! Request bookkeeping for pages that load or save backend records.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page keeps its own `RwSignal<FetchState<_>>` / `RwSignal<SubmitState>`
//! and exposes the error flag for its own banner; there is no shared cache.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use crate::net::gateway::ApiError;

/// Outcome of loading a record or list.
///
/// Starts in the loading state so the server render and the first browser
/// render agree before the request completes.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub value: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self { value: None, loading: true, error: None }
    }
}

impl<T> FetchState<T> {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a finished request. A failure keeps the previously loaded value.
    pub fn finish(&mut self, result: Result<T, ApiError>) {
        self.loading = false;
        match result {
            Ok(value) => {
                self.value = Some(value);
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}

/// Progress of a create/update/delete submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitState {
    pub busy: bool,
    pub error: Option<String>,
    /// Set once the backend accepted the submission.
    pub saved: bool,
}

impl SubmitState {
    pub fn begin(&mut self) {
        self.busy = true;
        self.error = None;
        self.saved = false;
    }

    pub fn finish<T>(&mut self, result: Result<T, ApiError>) {
        self.busy = false;
        match result {
            Ok(_) => self.saved = true,
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}
