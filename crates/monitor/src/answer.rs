//! Observable answer cell
//!
//! A single-slot, last-value-wins cell backed by `tokio::sync::watch`.
//! `None` means nothing has been published yet.

use std::sync::Arc;
use tokio::sync::watch;

/// Receiving end handed to observers
pub type AnswerReceiver = watch::Receiver<Option<bool>>;

/// Latest "is it the holiday?" answer
///
/// Clones share the same cell. Every publication notifies observers, even
/// when the value is unchanged.
#[derive(Clone)]
pub struct AnswerCell {
    tx: Arc<watch::Sender<Option<bool>>>,
}

impl AnswerCell {
    /// Create an unset cell
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Overwrite the current answer
    pub fn publish(&self, is_holiday: bool) {
        // send_replace stores the value even with no observers attached
        self.tx.send_replace(Some(is_holiday));
    }

    /// Current answer, `None` if never published
    pub fn get(&self) -> Option<bool> {
        *self.tx.borrow()
    }

    /// Subscribe to future publications
    ///
    /// The current value counts as already seen by the new receiver.
    pub fn subscribe(&self) -> AnswerReceiver {
        self.tx.subscribe()
    }

    /// Number of live observers
    pub fn observer_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for AnswerCell {
    fn default() -> Self {
        Self::new()
    }
}
