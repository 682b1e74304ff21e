//! Process-wide key bus for slide navigation.
//!
//! Key presses are published to a broadcast channel. Every open canvas
//! holds a [`KeyListener`]; creating one registers it on the bus and
//! dropping it unregisters it, so a listener lives exactly as long as the
//! canvas that owns it. Shutting the bus down ends every listener's
//! stream.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::task::{Context, Poll};

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tokio_stream::Stream;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_util::sync::{CancellationToken, WaitForCancellationFutureOwned};
use tracing::debug;

use crate::observability::metrics;

/// Default number of buffered key presses per listener.
pub const DEFAULT_KEY_BUFFER: usize = 64;

/// A key press, named as in DOM `KeyboardEvent.key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other(String),
}

impl Key {
    /// Name of the key.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::ArrowLeft => "ArrowLeft",
            Self::ArrowRight => "ArrowRight",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        match name.as_str() {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other(name),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        match key {
            Key::Other(name) => name,
            named => named.name().to_string(),
        }
    }
}

/// Broadcasts key presses to every registered listener.
#[derive(Debug, Clone)]
pub struct KeyBus {
    tx: broadcast::Sender<Key>,
    next_listener_id: Arc<AtomicU64>,
    shutdown: CancellationToken,
}

impl KeyBus {
    /// Creates a bus buffering up to `capacity` presses per listener.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_shutdown(capacity, CancellationToken::new())
    }

    /// Creates a bus whose listeners end when `shutdown` is cancelled.
    #[must_use]
    pub fn with_shutdown(capacity: usize, shutdown: CancellationToken) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self {
            tx,
            next_listener_id: Arc::new(AtomicU64::new(1)),
            shutdown,
        }
    }

    /// Ends every listener's stream.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    /// Publishes a key press. Returns how many listeners received it.
    pub fn publish(&self, key: Key) -> usize {
        debug!(key = key.name(), "key published");
        self.tx.send(key).unwrap_or(0)
    }

    /// Registers a new listener.
    #[must_use]
    pub fn listen(&self) -> KeyListener {
        let id = self.next_listener_id.fetch_add(1, Ordering::Relaxed);
        debug!(listener = id, "key listener registered");
        metrics::record_listener_registered();
        KeyListener {
            id,
            inner: BroadcastStream::new(self.tx.subscribe()),
            shutdown: Box::pin(self.shutdown.clone().cancelled_owned()),
        }
    }

    /// Number of currently registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for KeyBus {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_BUFFER)
    }
}

/// A registration on the [`KeyBus`]. Unregisters on drop.
///
/// Yields key presses as a [`Stream`]. A listener that falls behind skips
/// the presses it missed instead of failing. The stream ends when the bus
/// shuts down.
pub struct KeyListener {
    id: u64,
    inner: BroadcastStream<Key>,
    shutdown: Pin<Box<WaitForCancellationFutureOwned>>,
}

impl fmt::Debug for KeyListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyListener")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl KeyListener {
    /// Identifier of this registration, for logs.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }
}

impl Stream for KeyListener {
    type Item = Key;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Key>> {
        if self.shutdown.as_mut().poll(cx).is_ready() {
            return Poll::Ready(None);
        }
        loop {
            match Pin::new(&mut self.inner).poll_next(cx) {
                Poll::Ready(Some(Ok(key))) => return Poll::Ready(Some(key)),
                Poll::Ready(Some(Err(BroadcastStreamRecvError::Lagged(skipped)))) => {
                    debug!(listener = self.id, skipped, "key listener lagged");
                }
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        debug!(listener = self.id, "key listener unregistered");
        metrics::record_listener_unregistered();
    }
}
