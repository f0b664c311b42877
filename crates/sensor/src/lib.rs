//! Simulated flame sensor.
//!
//! A [`SampleFeed`] is a background Tokio task that draws one reading from a
//! [`SampleProvider`] per tick and forwards it through a channel.  The feed is
//! a scoped resource: it starts ticking when spawned and stops for good when
//! dropped.

pub mod provider;

pub use provider::{RandomProvider, SampleProvider, ScriptedProvider};

use std::time::Duration;
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::trace;

/// Time between two readings.
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Handle to a running sample feed.  Dropping it cancels the timer task.
#[derive(Debug)]
pub struct SampleFeed {
    rx:   mpsc::Receiver<u8>,
    task: JoinHandle<()>,
}

impl SampleFeed {
    /// Wait for the next reading.  Readings arrive in generation order.
    pub async fn recv(&mut self) -> Option<u8> {
        self.rx.recv().await
    }
}

impl Drop for SampleFeed {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn a background Tokio task that draws a reading from `provider` every
/// `interval` and forwards it through the returned [`SampleFeed`].
///
/// The first reading arrives one full `interval` after spawning.  Ticks never
/// overlap: a slow consumer delays later ticks instead of bunching them up.
/// A zero `interval` is treated as one millisecond.
pub fn spawn_feed<P: SampleProvider>(interval: Duration, mut provider: P) -> SampleFeed {
    let (tx, rx) = mpsc::channel(4);
    let interval = interval.max(Duration::from_millis(1));

    let task = tokio::spawn(async move {
        let mut ticker = time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let value = provider.next_sample();
            trace!(value, "sample");

            if tx.send(value).await.is_err() {
                break; // feed handle dropped
            }
        }
    });

    SampleFeed { rx, task }
}
