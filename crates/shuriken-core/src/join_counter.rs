//! Join counter: a wait-group style barrier for async tasks.
//!
//! A [`JoinCounter`] starts at the number of outstanding tasks. Each task
//! calls [`JoinCounter::done`] exactly once when it finishes, and the driver
//! awaits [`JoinCounter::wait`], which resolves once the count reaches zero.
//! Every `done` call happens-before the `wait` that observes zero returns.
//!
//! # Example
//!
//! ```rust
//! use shuriken_core::JoinCounter;
//!
//! # async fn example() {
//! let counter = JoinCounter::new(3);
//! for _ in 0..3 {
//!     let counter = counter.clone();
//!     tokio::spawn(async move {
//!         // ... work ...
//!         counter.done();
//!     });
//! }
//! counter.wait().await;
//! assert_eq!(counter.count(), 0);
//! # }
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

struct Inner {
    count: AtomicUsize,
    notify: Notify,
}

/// Cloneable handle to a shared completion counter.
#[derive(Clone)]
pub struct JoinCounter {
    inner: Arc<Inner>,
}

impl JoinCounter {
    /// Creates a counter expecting `outstanding` calls to [`done`](Self::done).
    pub fn new(outstanding: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                count: AtomicUsize::new(outstanding),
                notify: Notify::new(),
            }),
        }
    }

    /// Registers `n` more outstanding tasks.
    pub fn add(&self, n: usize) {
        self.inner.count.fetch_add(n, Ordering::SeqCst);
    }

    /// Marks one task as finished.
    ///
    /// # Panics
    ///
    /// Panics if called more times than tasks were registered. Over-decrement
    /// is a bug in the caller, not a recoverable condition.
    pub fn done(&self) {
        let previous = self
            .inner
            .count
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |c| c.checked_sub(1));

        match previous {
            Ok(1) => self.inner.notify.notify_waiters(),
            Ok(_) => {}
            Err(_) => panic!("JoinCounter::done called more times than tasks were registered"),
        }
    }

    /// Returns a guard that calls [`done`](Self::done) when dropped.
    ///
    /// Holding the guard for the lifetime of a task keeps the barrier honest
    /// even if the task panics part way through.
    pub fn guard(&self) -> DoneGuard {
        DoneGuard {
            counter: self.clone(),
        }
    }

    /// Returns the number of tasks that have not called `done` yet.
    pub fn count(&self) -> usize {
        self.inner.count.load(Ordering::SeqCst)
    }

    /// Waits until every registered task has called `done`.
    ///
    /// Returns immediately when nothing is outstanding.
    pub async fn wait(&self) {
        loop {
            let mut notified = std::pin::pin!(self.inner.notify.notified());
            // Register before checking so a concurrent final `done` cannot slip
            // between the check and the await.
            notified.as_mut().enable();

            if self.count() == 0 {
                return;
            }
            notified.await;
        }
    }
}

/// Calls [`JoinCounter::done`] on drop.
#[must_use = "dropping the guard immediately marks the task as done"]
pub struct DoneGuard {
    counter: JoinCounter,
}

impl Drop for DoneGuard {
    fn drop(&mut self) {
        self.counter.done();
    }
}

impl std::fmt::Debug for JoinCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JoinCounter")
            .field("count", &self.count())
            .finish()
    }
}
