//! Cooperative cancellation and the wall-clock budget for function calls.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::{self, RecvTimeoutError},
    },
    thread,
    time::Duration,
};

use log::warn;

/// Shared flag telling a running function body to stop.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new cancellation token in the non-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the token. All checks will return true after this call.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check if the token has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Why a budgeted call produced no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetError {
    /// The budget ran out; the worker's token has been cancelled.
    Elapsed,
    /// The worker thread could not be started.
    Spawn(String),
    /// The worker thread ended without sending a result.
    Died,
}

/// Runs `work` on its own thread and waits at most `budget` for its result.
///
/// When the budget expires the caller gets `BudgetError::Elapsed` straight
/// away and the token handed to `work` is cancelled. Bodies that can run long
/// must poll the token and return once it is set; the thread is detached, so
/// a body that never checks keeps running until it finishes on its own.
///
/// # Errors
/// See [`BudgetError`].
///
/// # Example
/// ```
/// use std::time::Duration;
///
/// use ratcalc::interpreter::evaluator::function::budget::{BudgetError, run_with_budget};
///
/// let quick = run_with_budget("quick", Duration::from_secs(1), |_| 6 * 7);
/// assert_eq!(quick, Ok(42));
///
/// let slow = run_with_budget("slow", Duration::from_millis(20), |token| {
///     while !token.is_cancelled() {
///         std::thread::yield_now();
///     }
/// });
/// assert_eq!(slow, Err(BudgetError::Elapsed));
/// ```
pub fn run_with_budget<T, F>(label: &str, budget: Duration, work: F) -> Result<T, BudgetError>
    where T: Send + 'static,
          F: FnOnce(CancellationToken) -> T + Send + 'static
{
    let token = CancellationToken::new();
    let worker_token = token.clone();
    let (tx, rx) = mpsc::channel();

    thread::Builder::new().name(format!("ratcalc-{label}"))
                          .spawn(move || {
                              // The receiver is gone once the budget expired.
                              let _ = tx.send(work(worker_token));
                          })
                          .map_err(|e| BudgetError::Spawn(e.to_string()))?;

    match rx.recv_timeout(budget) {
        Ok(value) => Ok(value),
        Err(RecvTimeoutError::Timeout) => {
            warn!("{label} exceeded its {budget:?} budget, cancelling");
            token.cancel();
            Err(BudgetError::Elapsed)
        },
        Err(RecvTimeoutError::Disconnected) => Err(BudgetError::Died),
    }
}
