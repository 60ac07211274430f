use std::sync::atomic::{AtomicBool, Ordering::SeqCst};

use tokio::sync::Semaphore;

/// Async mutual exclusion for the single host connection.
///
/// Lock and unlock happen on different call stacks (acquire in one driver
/// call, release in a later one), so this cannot hand out a guard. The one
/// permit is forgotten on lock and restored on unlock, with a flag tracking
/// the held state so unlocking an unlocked mutex stays a no-op instead of
/// minting extra permits.
///
/// Waiters are served in the order they started waiting.
#[derive(Debug)]
pub(crate) struct ConnectionMutex {
    permits: Semaphore,
    held: AtomicBool,
}

impl ConnectionMutex {
    pub(crate) fn new() -> Self {
        Self {
            permits: Semaphore::new(1),
            held: AtomicBool::new(false),
        }
    }

    /// Wait until the connection is free, then take it.
    pub(crate) async fn lock(&self) {
        let permit = self
            .permits
            .acquire()
            .await
            .expect("connection mutex semaphore is never closed");
        permit.forget();
        self.held.store(true, SeqCst);
    }

    /// Release the connection. No-op when it is not held.
    pub(crate) fn unlock(&self) {
        if self.held.swap(false, SeqCst) {
            self.permits.add_permits(1);
        }
    }

    #[cfg(test)]
    pub(crate) fn is_locked(&self) -> bool {
        self.held.load(SeqCst)
    }
}
