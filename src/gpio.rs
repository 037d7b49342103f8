//! Key sources over any `embedded-hal` input pin.
//!
//! The pin must already be configured as an input with the pull the
//! [`PinConfig`] requests; on ESP32 see [`crate::esp::configure_input`].

use embedded_hal::digital::InputPin;
use log::trace;

use crate::{
    config::{PinConfig, Pull},
    source::{Edge, EdgeCounter, EdgeCounterSource, KeySource, KeyTransition},
};

/// Reports level changes of a pin sampled once per monitor poll.
///
/// Sampling at the poll interval is the debounce. Transitions carry no
/// timestamp, so the classifier times them when it sees them.
pub struct PinKeys<P> {
    pin: P,
    config: PinConfig,
    pressed: bool,
}

impl<P: InputPin> PinKeys<P> {
    /// The key starts out released; a key already held reports a press on
    /// the first poll.
    pub fn new(pin: P, config: PinConfig) -> Self {
        Self {
            pin,
            config,
            pressed: false,
        }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> KeySource for PinKeys<P> {
    type Error = P::Error;

    fn poll_transition(&mut self) -> Result<Option<KeyTransition>, P::Error> {
        let pressed = self.config.is_pressed_level(self.pin.is_high()?);
        if pressed == self.pressed {
            return Ok(None);
        }
        self.pressed = pressed;
        Ok(Some(KeyTransition {
            pressed,
            timestamp: None,
        }))
    }
}

/// Software edge counting for [`SimpleButton`](crate::SimpleButton).
pub struct PinEdges<P> {
    pin: P,
}

impl<P: InputPin> PinEdges<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

pub struct PinEdgeCounter<'a, P> {
    pin: &'a mut P,
    edge: Edge,
    last_high: bool,
    count: u32,
}

impl<P: InputPin> EdgeCounterSource for PinEdges<P> {
    type Error = P::Error;
    type Counter<'a>
        = PinEdgeCounter<'a, P>
    where
        Self: 'a;

    fn open_counter(
        &mut self,
        edge: Edge,
        pull: Option<Pull>,
    ) -> Result<PinEdgeCounter<'_, P>, P::Error> {
        trace!("gpio: counter open edge={:?} pull={:?}", edge, pull);
        let last_high = self.pin.is_high()?;
        Ok(PinEdgeCounter {
            pin: &mut self.pin,
            edge,
            last_high,
            count: 0,
        })
    }
}

impl<P: InputPin> EdgeCounter for PinEdgeCounter<'_, P> {
    type Error = P::Error;

    fn count(&mut self) -> Result<u32, P::Error> {
        let high = self.pin.is_high()?;
        let counted = match self.edge {
            Edge::Rise => !self.last_high && high,
            Edge::Fall => self.last_high && !high,
        };
        if counted {
            self.count = self.count.saturating_add(1);
        }
        self.last_high = high;
        Ok(self.count)
    }
}
