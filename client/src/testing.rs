//! In-memory fakes for the storage and transport seams.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::net::transport::{HttpRequest, HttpResponse, Transport};
use crate::state::session::SessionStorage;

/// `SessionStorage` backed by a map, counting every write attempt.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    writes: AtomicUsize,
    reject_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.entries.lock().unwrap().insert(key.to_owned(), value.to_owned());
        storage
    }

    /// Storage whose writes always fail, as a full or disabled `localStorage` would.
    pub fn rejecting() -> Self {
        Self { reject_writes: true, ..Self::default() }
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.reject_writes {
            return Err("quota exceeded".to_owned());
        }
        self.entries.lock().unwrap().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `Transport` that replays queued responses and records every request.
///
/// Once the queue is drained it answers with the fallback response.
pub struct ScriptedTransport {
    queued: Mutex<VecDeque<Result<HttpResponse, String>>>,
    fallback: HttpResponse,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::always(200, r#"{"data":null}"#)
    }

    pub fn always(status: u16, body: &str) -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            fallback: HttpResponse { status, body: body.to_owned() },
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.queued
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.queued.lock().unwrap().push_back(Err(message.to_owned()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        self.requests.lock().unwrap().push(request);
        let next = self.queued.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(self.fallback.clone()))
    }
}
