use core::fmt::Debug;

use crate::{clock::Ticks, config::Pull};

/// One debounced transition reported by a [`KeySource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyTransition {
    pub pressed: bool,
    /// When the transition happened. Sources that cannot timestamp leave this
    /// `None` and the classifier uses the clock at the time it sees the edge,
    /// which lags the real edge by up to one poll interval.
    pub timestamp: Option<Ticks>,
}

impl KeyTransition {
    pub const fn pressed(timestamp: Option<Ticks>) -> Self {
        Self {
            pressed: true,
            timestamp,
        }
    }

    pub const fn released(timestamp: Option<Ticks>) -> Self {
        Self {
            pressed: false,
            timestamp,
        }
    }
}

/// Debounced queue of press/release transitions for a single key.
pub trait KeySource {
    type Error: Debug;

    /// Take at most one pending transition without blocking.
    fn poll_transition(&mut self) -> Result<Option<KeyTransition>, Self::Error>;
}

impl<S: KeySource + ?Sized> KeySource for &mut S {
    type Error = S::Error;

    fn poll_transition(&mut self) -> Result<Option<KeyTransition>, Self::Error> {
        (**self).poll_transition()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Rise,
    Fall,
}

/// Counts edges seen since it was opened.
pub trait EdgeCounter {
    type Error: Debug;

    fn count(&mut self) -> Result<u32, Self::Error>;
}

/// Opens [`EdgeCounter`]s on a pin. The counter is released when dropped.
pub trait EdgeCounterSource {
    type Error: Debug;
    type Counter<'a>: EdgeCounter<Error = Self::Error>
    where
        Self: 'a;

    fn open_counter(
        &mut self,
        edge: Edge,
        pull: Option<Pull>,
    ) -> Result<Self::Counter<'_>, Self::Error>;
}
