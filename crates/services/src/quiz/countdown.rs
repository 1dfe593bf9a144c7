use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, interval_at};

/// Countdown granularity.
pub const TICK: Duration = Duration::from_secs(1);

/// Identifies the session a countdown was armed for.
///
/// Every started session gets a fresh token, so ticks from an earlier session
/// can be told apart from ticks of the live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionToken(u64);

impl SessionToken {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Cancels the timer it was created for when cancelled or dropped.
pub struct CountdownGuard {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl CountdownGuard {
    #[must_use]
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for CountdownGuard {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl fmt::Debug for CountdownGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountdownGuard")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

/// Source of one-second ticks for a timed session.
pub trait Countdown: Send + Sync {
    /// Start delivering ticks tagged with `token` until the guard is dropped.
    fn arm(&self, token: SessionToken) -> CountdownGuard;
}

//
// ─── TOKIO ─────────────────────────────────────────────────────────────────────
//

/// Countdown backed by a spawned tokio task per session.
///
/// Ticks arrive on the receiver returned by [`TokioCountdown::channel`]; the
/// owner feeds them into `QuizController::tick` on its own task.
#[derive(Clone)]
pub struct TokioCountdown {
    ticks: mpsc::UnboundedSender<SessionToken>,
}

impl TokioCountdown {
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SessionToken>) {
        let (ticks, rx) = mpsc::unbounded_channel();
        (Self { ticks }, rx)
    }
}

impl Countdown for TokioCountdown {
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    fn arm(&self, token: SessionToken) -> CountdownGuard {
        let ticks = self.ticks.clone();
        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + TICK, TICK);
            loop {
                interval.tick().await;
                if ticks.send(token).is_err() {
                    break;
                }
            }
        });
        CountdownGuard::new(move || task.abort())
    }
}

//
// ─── MANUAL ────────────────────────────────────────────────────────────────────
//

/// Countdown that never ticks on its own; records arm/cancel calls.
///
/// Useful for driving `QuizController::tick` by hand in tests.
#[derive(Clone, Default)]
pub struct ManualCountdown {
    log: Arc<Mutex<ManualLog>>,
}

#[derive(Default)]
struct ManualLog {
    armed: Vec<SessionToken>,
    cancelled: Vec<SessionToken>,
}

impl ManualCountdown {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens armed so far, in order.
    #[must_use]
    pub fn armed(&self) -> Vec<SessionToken> {
        self.log.lock().map(|log| log.armed.clone()).unwrap_or_default()
    }

    /// Tokens whose guard was cancelled or dropped, in order.
    #[must_use]
    pub fn cancelled(&self) -> Vec<SessionToken> {
        self.log
            .lock()
            .map(|log| log.cancelled.clone())
            .unwrap_or_default()
    }

    /// Tokens armed and not yet cancelled.
    #[must_use]
    pub fn live(&self) -> Vec<SessionToken> {
        self.log
            .lock()
            .map(|log| {
                log.armed
                    .iter()
                    .copied()
                    .filter(|token| !log.cancelled.contains(token))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Countdown for ManualCountdown {
    fn arm(&self, token: SessionToken) -> CountdownGuard {
        if let Ok(mut log) = self.log.lock() {
            log.armed.push(token);
        }
        let log = Arc::clone(&self.log);
        CountdownGuard::new(move || {
            if let Ok(mut log) = log.lock() {
                log.cancelled.push(token);
            }
        })
    }
}
