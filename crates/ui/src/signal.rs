//! Change notification signal.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Subscription identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

type Callback = Arc<dyn Fn() + Send + Sync>;

/// Multicast change signal with no payload.
///
/// Subscribers learn only that *something* changed and are expected to
/// re-read the state they care about.
pub struct ChangeSignal {
    /// Registered callbacks.
    subscribers: Mutex<Vec<(SubscriptionId, Callback)>>,
    /// Subscription ID counter.
    next_id: AtomicU64,
}

impl ChangeSignal {
    /// Create a new signal with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Register a callback, returning an id for later removal.
    pub fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        self.subscribers.lock().push((id, Arc::new(callback)));
        id
    }

    /// Remove a previously registered callback. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.lock().retain(|(sub_id, _)| *sub_id != id);
    }

    /// Invoke every subscriber once.
    ///
    /// The subscriber list is snapshotted first so callbacks may subscribe
    /// or unsubscribe without deadlocking.
    pub fn emit(&self) {
        let callbacks: Vec<Callback> = self
            .subscribers
            .lock()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in callbacks {
            callback();
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}

impl Default for ChangeSignal {
    fn default() -> Self {
        Self::new()
    }
}
