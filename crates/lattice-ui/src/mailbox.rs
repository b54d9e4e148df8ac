use std::sync::{Arc, Mutex, PoisonError};

/// Single-slot, last-write-wins handoff from background work to the UI
/// thread.
///
/// The widget tree is single-owner and frame-synchronous; nothing outside
/// the frame walk may touch widget state. Work triggered by a callback
/// (e.g. a long-running task a button starts) publishes results through a
/// [`MailboxSender`], and the frame loop drains the mailbox once at the
/// start of each frame, applying the value through typed arena access.
///
/// Only the newest value is kept: progress-style producers overwrite stale
/// updates instead of queueing them.
///
/// # Example
/// ```rust,ignore
/// let mailbox: Mailbox<f32> = Mailbox::new();
/// let tx = mailbox.sender();
/// std::thread::spawn(move || tx.post(0.5));
///
/// // Frame loop, before rendering:
/// if let Some(fraction) = mailbox.take() {
///     scene.widget_mut::<ProgressBar>(bar).unwrap().set_progress(fraction);
/// }
/// ```
pub struct Mailbox<T> {
    slot: Arc<Mutex<Option<T>>>,
}

impl<T> Mailbox<T> {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// A cloneable producer handle for other threads.
    pub fn sender(&self) -> MailboxSender<T> {
        MailboxSender {
            slot: Arc::clone(&self.slot),
        }
    }

    /// Drain the pending value, if any. Call once per frame before
    /// rendering.
    pub fn take(&self) -> Option<T> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer side of a [`Mailbox`].
pub struct MailboxSender<T> {
    slot: Arc<Mutex<Option<T>>>,
}

impl<T> MailboxSender<T> {
    /// Publish a value, replacing any value not yet drained.
    pub fn post(&self, value: T) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(value);
    }
}

impl<T> Clone for MailboxSender<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}
