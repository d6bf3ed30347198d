//! Minute-aligned periodic ticker.
//!
//! # Responsibility
//! - Fire a callback at the top of every minute, starting at the next minute
//!   boundary plus a small buffer.
//! - Hand the caller a handle that stops the ticker cleanly.
//!
//! # Invariants
//! - First fire happens one buffer past the next minute boundary; later
//!   fires follow at a fixed one-minute period.
//! - Late ticks run late; missed intervals are not replayed or coalesced.
//! - Dropping or cancelling the handle stops the background thread.

use chrono::Utc;
use log::info;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

const MINUTE_MS: u64 = 60_000;
const BOUNDARY_BUFFER_MS: u64 = 500;

/// Milliseconds from `now_ms` (epoch milliseconds) to the next minute
/// boundary, then the buffer on top.
pub fn ms_until_first_tick(now_ms: i64) -> u64 {
    let into_minute = now_ms.rem_euclid(MINUTE_MS as i64) as u64;
    MINUTE_MS - into_minute + BOUNDARY_BUFFER_MS
}

/// Handle to a running minute ticker.
///
/// The ticker stops when the handle is cancelled or dropped; it is never
/// left running past its owner.
pub struct MinuteTicker {
    stop_tx: Sender<()>,
    worker: Option<JoinHandle<()>>,
}

impl MinuteTicker {
    /// Spawns the ticker thread.
    ///
    /// `tick` runs first at the next minute boundary plus the buffer, then
    /// once per minute until the handle is cancelled or dropped.
    pub fn spawn<F>(mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let first_wait = Duration::from_millis(ms_until_first_tick(Utc::now().timestamp_millis()));
        info!(
            "event=ticker_start module=sched status=ok first_wait_ms={}",
            first_wait.as_millis()
        );

        let worker = std::thread::spawn(move || {
            let mut wait = first_wait;
            loop {
                match stop_rx.recv_timeout(wait) {
                    Err(RecvTimeoutError::Timeout) => {
                        tick();
                        wait = Duration::from_millis(MINUTE_MS);
                    }
                    // Stop request or the handle went away entirely.
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Self {
            stop_tx,
            worker: Some(worker),
        }
    }

    /// Stops the ticker and waits for its thread to exit.
    pub fn cancel(mut self) {
        self.stop_and_join();
    }

    fn stop_and_join(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = self.stop_tx.send(());
            let _ = worker.join();
            info!("event=ticker_stop module=sched status=ok");
        }
    }
}

impl Drop for MinuteTicker {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}
