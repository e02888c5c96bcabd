/// FIFO admission gate that spaces out request starts.
///
/// Callers queue on a fair mutex, so admission order is the order in which
/// [`Throttle::admit`] was first polled. The caller at the head of the queue
/// sleeps until `last_start + interval` while holding the gate, records the new
/// start and releases it. Work done after admission (signing, network I/O) runs
/// outside the gate, so completions are not ordered.
///
/// Dropping an `admit` future before it returns removes that caller from the
/// queue without affecting anyone else.
use std::time::Duration;

use log::debug;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};

#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last_start: Mutex<Option<Instant>>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_start: Mutex::new(None),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait for this caller's turn and return the instant it was admitted.
    pub async fn admit(&self) -> Instant {
        let mut last_start = self.last_start.lock().await;

        if let Some(previous) = *last_start {
            let next_allowed = previous + self.interval;
            let now = Instant::now();
            if now < next_allowed {
                debug!(
                    "throttle.wait delay_ms={}",
                    (next_allowed - now).as_millis()
                );
                sleep_until(next_allowed).await;
            }
        }

        let started_at = Instant::now();
        *last_start = Some(started_at);
        started_at
    }

    /// The most recent admission, if any.
    pub async fn last_start(&self) -> Option<Instant> {
        *self.last_start.lock().await
    }
}
