//! ESP32 pin setup for [`PinKeys`](crate::gpio::PinKeys) and
//! [`PinEdges`](crate::gpio::PinEdges).

use esp_hal::gpio::{Input, InputConfig, InputPin, Pull as EspPull};

use crate::config::{PinConfig, Pull};

/// Configure `pin` as an input with the pull `config` asks for.
pub fn configure_input<'d>(pin: impl InputPin + 'd, config: PinConfig) -> Input<'d> {
    let pull = match config.pull_request() {
        Some(Pull::Up) => EspPull::Up,
        Some(Pull::Down) => EspPull::Down,
        None => EspPull::None,
    };
    Input::new(pin, InputConfig::default().with_pull(pull))
}
