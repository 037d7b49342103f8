//! Press/release waits without a background monitor.

use embassy_time::Duration;
use log::trace;

use crate::{
    clock::Clock,
    config::{PinConfig, DEFAULT_SIMPLE_POLL_INTERVAL_MS},
    source::{Edge, EdgeCounter, EdgeCounterSource},
};

/// Waits for a single press or release by counting edges.
///
/// Nothing runs between calls: a press that happens while nobody is inside
/// [`pressed`](SimpleButton::pressed) is not remembered.
pub struct SimpleButton<S, C> {
    source: S,
    clock: C,
    pin: PinConfig,
    interval: Duration,
}

impl<S, C> SimpleButton<S, C>
where
    S: EdgeCounterSource,
    C: Clock,
{
    pub fn new(source: S, clock: C, pin: PinConfig) -> Self {
        Self {
            source,
            clock,
            pin,
            interval: Duration::from_millis(DEFAULT_SIMPLE_POLL_INTERVAL_MS),
        }
    }

    /// How long to sleep between counter checks. Zero still yields to other
    /// tasks on every check.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn pin_config(&self) -> &PinConfig {
        &self.pin
    }

    pub async fn pressed(&mut self) -> Result<(), S::Error> {
        self.wait_for_edge(self.pin.press_edge()).await
    }

    pub async fn released(&mut self) -> Result<(), S::Error> {
        self.wait_for_edge(self.pin.release_edge()).await
    }

    pub fn into_inner(self) -> (S, C) {
        (self.source, self.clock)
    }

    async fn wait_for_edge(&mut self, edge: Edge) -> Result<(), S::Error> {
        let mut counter = self.source.open_counter(edge, self.pin.pull_request())?;
        loop {
            if counter.count()? > 0 {
                trace!("simple_button: edge seen edge={:?}", edge);
                return Ok(());
            }
            self.clock.sleep(self.interval).await;
        }
    }
}
