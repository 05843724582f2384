#![forbid(unsafe_code)]

//! Cooperative cancellation
//!
//! A [`CancellationToken`] is a cheap, cloneable handle to a shared flag.
//! Any clone may cancel it (the Ctrl-C handler does so from its own thread),
//! and [`CancellationToken::sleep`] wakes up as soon as that happens instead
//! of waiting out the full delay.

use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::time::Duration;
use thiserror::Error;

/// Returned by a suspension point that observed cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation canceled")]
pub struct Canceled;

#[derive(Debug, Default)]
struct Shared {
    canceled: Mutex<bool>,
    wake: Condvar,
}

/// Shared cancellation signal
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    shared: Arc<Shared>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation and wake every sleeper. Idempotent.
    pub fn cancel(&self) {
        let mut canceled = self.lock();
        if !*canceled {
            *canceled = true;
            log::debug!("cancellation requested");
        }
        self.shared.wake.notify_all();
    }

    pub fn is_canceled(&self) -> bool {
        *self.lock()
    }

    /// Suspend for `duration`, returning early with [`Canceled`] if the
    /// token is (or becomes) canceled
    ///
    /// A zero duration still checks the token, so a zero-delay loop observes
    /// cancellation at every suspension point.
    pub fn sleep(&self, duration: Duration) -> Result<(), Canceled> {
        let guard = self.lock();
        if *guard {
            return Err(Canceled);
        }
        if duration.is_zero() {
            return Ok(());
        }

        let (guard, _timeout) = match self
            .shared
            .wake
            .wait_timeout_while(guard, duration, |canceled| !*canceled)
        {
            Ok(result) => result,
            Err(poisoned) => poisoned.into_inner(),
        };

        if *guard { Err(Canceled) } else { Ok(()) }
    }

    // The flag is a plain bool, so a panic while holding the lock cannot leave
    // it in a broken state.
    fn lock(&self) -> MutexGuard<'_, bool> {
        self.shared
            .canceled
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
