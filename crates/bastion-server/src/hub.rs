//! Snapshot fan-out to connected listeners.
//!
//! The hub is the engine's `Broadcaster`. It serializes each snapshot once and
//! offers it to every client's bounded outbound buffer without waiting. A client
//! whose buffer is full or gone is dropped on the spot; the loop never feels
//! backpressure from a slow listener.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::extract::ws::Utf8Bytes;
use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, error, warn};

use bastion_core::state::GameStateSnapshot;
use bastion_sim::Broadcaster;

/// Outbound messages buffered per client before it is considered stalled.
pub const CLIENT_BUFFER_CAPACITY: usize = 256;

pub type ClientId = u64;

pub struct Hub {
    clients: Mutex<HashMap<ClientId, mpsc::Sender<Utf8Bytes>>>,
    /// Last serialized snapshot, replayed to newcomers and served over HTTP.
    latest: RwLock<Option<Utf8Bytes>>,
    next_id: AtomicU64,
    buffer: usize,
}

impl Hub {
    pub fn new(buffer: usize) -> Self {
        Self {
            clients: Mutex::new(HashMap::new()),
            latest: RwLock::new(None),
            next_id: AtomicU64::new(1),
            buffer,
        }
    }

    /// Add a listener. Its buffer is primed with the latest snapshot, if any.
    pub fn register(&self) -> (ClientId, mpsc::Receiver<Utf8Bytes>) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::channel(self.buffer);
        if let Some(latest) = self.latest.read().clone() {
            let _ = tx.try_send(latest);
        }
        self.clients.lock().insert(id, tx);
        debug!(client = id, "client registered");
        (id, rx)
    }

    /// Remove a listener. Dropping its sender ends the client's writer.
    pub fn unregister(&self, id: ClientId) {
        if self.clients.lock().remove(&id).is_some() {
            debug!(client = id, "client unregistered");
        }
    }

    pub fn client_count(&self) -> usize {
        self.clients.lock().len()
    }

    pub fn latest(&self) -> Option<Utf8Bytes> {
        self.latest.read().clone()
    }

    /// Store and fan out an already serialized snapshot.
    pub fn publish(&self, message: Utf8Bytes) {
        *self.latest.write() = Some(message.clone());

        self.clients.lock().retain(|id, tx| match tx.try_send(message.clone()) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                warn!(client = id, "client buffer full, dropping client");
                false
            }
            Err(TrySendError::Closed(_)) => {
                debug!(client = id, "client gone, dropping");
                false
            }
        });
    }
}

impl Default for Hub {
    fn default() -> Self {
        Self::new(CLIENT_BUFFER_CAPACITY)
    }
}

impl Broadcaster for Hub {
    fn broadcast(&self, snapshot: &GameStateSnapshot) {
        match serde_json::to_string(snapshot) {
            Ok(json) => self.publish(Utf8Bytes::from(json)),
            Err(e) => error!(error = %e, "failed to serialize snapshot"),
        }
    }
}
