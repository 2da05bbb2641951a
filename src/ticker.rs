//! Once-per-second countdown recomputation, modeled as a cancellable
//! background task. The home page owns a handle and stops the tick when the
//! view goes away, so no timer leaks.

use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::models::countdown::{self, TimeLeft};

/// Handle to a running countdown tick. Dropping it without calling `stop`
/// leaves the task running; `stop` is the view-teardown path.
pub struct TickerHandle {
    stop: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl TickerHandle {
    /// Signal the tick loop to exit after the current iteration.
    pub fn stop(&self) {
        let _ = self.stop.send(true);
    }

    /// Wait for the loop to wind down. Call after `stop`.
    pub async fn join(self) {
        let _ = self.task.await;
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawn the 1-second countdown tick against a fixed target instant.
/// Every tick recomputes the breakdown from the current wall clock and hands
/// it to `on_tick`; recomputation is idempotent and side-effect-free beyond
/// that callback.
pub fn spawn_countdown<F>(target: NaiveDateTime, on_tick: F) -> TickerHandle
where
    F: FnMut(TimeLeft) + Send + 'static,
{
    spawn_with_clock(target, on_tick, || Local::now().naive_local())
}

/// Same loop with an injectable clock, for tests.
pub fn spawn_with_clock<F, C>(target: NaiveDateTime, mut on_tick: F, clock: C) -> TickerHandle
where
    F: FnMut(TimeLeft) + Send + 'static,
    C: Fn() -> NaiveDateTime + Send + 'static,
{
    let (stop, mut stopped) = watch::channel(false);
    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    on_tick(countdown::time_left(target, clock()));
                }
                changed = stopped.changed() => {
                    if changed.is_err() || *stopped.borrow() {
                        break;
                    }
                }
            }
        }
        log::debug!("Countdown ticker stopped");
    });
    TickerHandle { stop, task }
}
