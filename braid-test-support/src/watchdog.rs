//! Deadline watchdog for concurrent test runs.
//!
//! Runs a job on a helper thread and reports whether it finished before a
//! deadline. A run that overruns is reported as [`DeadlineOutcome::TimedOut`]
//! and its thread is left detached: a deadlocked job can never be joined,
//! which is precisely the situation the watchdog exists to detect.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tracing::warn;

/// Result of running a job under a deadline.
#[derive(Debug)]
pub enum DeadlineOutcome<T> {
    /// The job finished in time and produced a value.
    Completed(T),
    /// The deadline elapsed first; the job thread was left detached.
    TimedOut,
}

impl<T> DeadlineOutcome<T> {
    /// Returns whether the deadline elapsed before the job finished.
    #[must_use]
    pub const fn is_timed_out(&self) -> bool {
        matches!(self, Self::TimedOut)
    }

    /// Returns the job's value when it completed in time.
    #[must_use]
    pub fn into_completed(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::TimedOut => None,
        }
    }
}

/// Runs `job` on a named helper thread and waits up to `deadline` for it.
///
/// # Panics
/// Panics when the helper thread cannot be spawned.
pub fn run_with_deadline<T, F>(label: &str, deadline: Duration, job: F) -> DeadlineOutcome<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (sender, receiver) = mpsc::channel();
    let handle = thread::Builder::new()
        .name(format!("watchdog-{label}"))
        .spawn(move || {
            // The receiver may be gone if the watchdog already gave up.
            let _ = sender.send(job());
        })
        .expect("watchdog job thread must spawn");

    match receiver.recv_timeout(deadline) {
        Ok(value) => {
            let _ = handle.join();
            DeadlineOutcome::Completed(value)
        }
        Err(_) => {
            warn!(label, ?deadline, "job exceeded deadline, leaving it detached");
            DeadlineOutcome::TimedOut
        }
    }
}
