//! Button gestures for embassy.
//!
//! A [`Button`] runs a monitor loop over a debounced [`KeySource`] and turns
//! press/release edges into [`GestureKind`]s: pressed, released, single,
//! double and triple click, long click. Application tasks
//! [`wait`](Button::wait) for any subset of them; [`MultiButton`] races
//! several buttons. [`SimpleButton`] waits for a bare press or release
//! without a background loop.

#![no_std]

#[cfg(test)]
extern crate std;

mod button;
pub mod classifier;
pub mod clock;
pub mod config;
pub mod error;
#[cfg(feature = "esp-hal-runtime")]
pub mod esp;
pub mod gesture;
pub mod gpio;
pub mod latch;
pub mod multi;
pub mod simple;
pub mod source;

pub use button::Button;
pub use classifier::{ClickClassifier, ClickRank};
pub use clock::{Clock, EmbassyClock, Ticks};
pub use config::{ActiveLevel, ButtonConfig, PinConfig, Pull};
pub use error::{ConfigError, MultiButtonError, WaitError};
pub use gesture::{GestureKind, GestureSet};
pub use multi::{GestureWait, MultiButton};
pub use simple::SimpleButton;
pub use source::{Edge, EdgeCounter, EdgeCounterSource, KeySource, KeyTransition};
