#![allow(dead_code)]

use std::{cell::Cell, collections::VecDeque, convert::Infallible, future::Future};

use button_gestures::{Clock, KeySource, KeyTransition, Ticks};
use embassy_futures::{
    select::{select, Either},
    yield_now,
};
use embassy_time::Duration;

/// Simulated time ends here; waits still pending are treated as timed out.
pub const TIMEOUT_MS: u32 = 5_000;

/// Millisecond clock that only moves when a test advances it.
#[derive(Default)]
pub struct SimClock {
    now: Cell<u32>,
}

impl SimClock {
    pub fn millis(&self) -> u32 {
        self.now.get()
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for SimClock {
    fn now(&self) -> Ticks {
        Ticks::from_millis(self.now.get())
    }

    async fn sleep(&self, duration: Duration) {
        let deadline = self.now() + duration;
        loop {
            yield_now().await;
            if !self.now().is_earlier(deadline) {
                break;
            }
        }
    }
}

/// Key that toggles between released and pressed at the listed times.
pub struct ScriptedKeys<'a> {
    clock: &'a SimClock,
    toggles: VecDeque<u32>,
    pressed: bool,
    stamp: Option<fn(u32) -> u32>,
}

impl<'a> ScriptedKeys<'a> {
    /// Transitions carry no timestamp.
    pub fn new(clock: &'a SimClock, toggles_ms: &[u32]) -> Self {
        Self {
            clock,
            toggles: toggles_ms.iter().copied().collect(),
            pressed: false,
            stamp: None,
        }
    }

    /// Transitions are stamped with the clock at the time they are read.
    pub fn timestamped(clock: &'a SimClock, toggles_ms: &[u32]) -> Self {
        Self::stamped_with(clock, toggles_ms, |now| now)
    }

    /// Transitions are stamped with `stamp(read time)`.
    pub fn stamped_with(clock: &'a SimClock, toggles_ms: &[u32], stamp: fn(u32) -> u32) -> Self {
        Self {
            stamp: Some(stamp),
            ..Self::new(clock, toggles_ms)
        }
    }

    pub fn remaining(&self) -> usize {
        self.toggles.len()
    }
}

impl KeySource for ScriptedKeys<'_> {
    type Error = Infallible;

    fn poll_transition(&mut self) -> Result<Option<KeyTransition>, Infallible> {
        let now = self.clock.millis();
        match self.toggles.front() {
            Some(&at) if at <= now => {
                self.toggles.pop_front();
                self.pressed = !self.pressed;
                Ok(Some(KeyTransition {
                    pressed: self.pressed,
                    timestamp: self.stamp.map(|stamp| Ticks::from_millis(stamp(now))),
                }))
            }
            _ => Ok(None),
        }
    }
}

/// Drive `fut` while advancing `clock` one millisecond per scheduling pass,
/// giving up at [`TIMEOUT_MS`].
pub async fn within<F: Future>(clock: &SimClock, fut: F) -> Option<F::Output> {
    let ticker = async {
        while clock.millis() < TIMEOUT_MS {
            yield_now().await;
            clock.advance(1);
        }
    };
    match select(fut, ticker).await {
        Either::First(output) => Some(output),
        Either::Second(()) => None,
    }
}

/// Run `scenario` next to a monitor future that must outlive it.
pub async fn alongside<M, F>(monitor: M, scenario: F) -> F::Output
where
    M: Future,
    M::Output: core::fmt::Debug,
    F: Future,
{
    match select(monitor, scenario).await {
        Either::First(result) => panic!("monitor exited early: {result:?}"),
        Either::Second(output) => output,
    }
}
