#[cfg(test)]
#[path = "scheduler_test.rs"]
mod tests;

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;

use crate::domain::models::Event;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum TimerKey {
    ScrollToResult,
    StatusPoll,
    SuccessBanner,
}

/// Delayed and recurring events owned by a view. Dropping the scheduler
/// cancels every pending task, so a torn down view never receives callbacks.
pub struct Scheduler {
    tx: mpsc::UnboundedSender<Event>,
    tasks: HashMap<TimerKey, JoinHandle<()>>,
}

impl Scheduler {
    pub fn new(tx: mpsc::UnboundedSender<Event>) -> Scheduler {
        return Scheduler {
            tx,
            tasks: HashMap::new(),
        };
    }

    /// Sends `event` once after `delay`, replacing any pending task for `key`.
    pub fn after(&mut self, key: TimerKey, delay: Duration, event: Event) {
        self.cancel(key);

        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            time::sleep(delay).await;
            if tx.send(event).is_err() {
                tracing::debug!(key = ?key, "Timer fired after the event loop closed");
            }
        });

        self.tasks.insert(key, handle);
    }

    /// Sends a fresh event from `build` every `period`, starting one period
    /// from now.
    pub fn every<F>(&mut self, key: TimerKey, period: Duration, build: F)
    where
        F: Fn() -> Event + Send + 'static,
    {
        self.cancel(key);

        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(time::Instant::now() + period, period);
            loop {
                interval.tick().await;
                if tx.send(build()).is_err() {
                    break;
                }
            }
        });

        self.tasks.insert(key, handle);
    }

    pub fn cancel(&mut self, key: TimerKey) {
        if let Some(handle) = self.tasks.remove(&key) {
            handle.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    pub fn is_scheduled(&self, key: TimerKey) -> bool {
        return self
            .tasks
            .get(&key)
            .map(|handle| return !handle.is_finished())
            .unwrap_or(false);
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
