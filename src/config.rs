use embassy_time::Duration;

use crate::error::ConfigError;
use crate::source::Edge;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 20;
pub const DEFAULT_DOUBLE_CLICK_MAX_MS: u64 = 500;
pub const DEFAULT_LONG_CLICK_MIN_MS: u64 = 2_000;
pub const DEFAULT_SIMPLE_POLL_INTERVAL_MS: u64 = 50;
/// Longest click window or threshold; [`Ticks`](crate::Ticks) compare
/// correctly only within half the counter period.
pub const MAX_GESTURE_DURATION_MS: u64 = i32::MAX as u64 - 1;

/// Timing and detection switches for one [`Button`](crate::Button).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonConfig {
    /// Delay between two polls of the key source. 20 ms doubles as debounce.
    pub poll_interval: Duration,
    /// Press-to-press window in which the next press escalates the click.
    pub double_click_max_duration: Duration,
    /// How long the button must be held before a long click fires.
    pub long_click_min_duration: Duration,
    pub double_click_enable: bool,
    pub triple_click_enable: bool,
    pub long_click_enable: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            double_click_max_duration: Duration::from_millis(DEFAULT_DOUBLE_CLICK_MAX_MS),
            long_click_min_duration: Duration::from_millis(DEFAULT_LONG_CLICK_MIN_MS),
            double_click_enable: true,
            triple_click_enable: false,
            long_click_enable: false,
        }
    }
}

impl ButtonConfig {
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_double_click_max_duration(mut self, window: Duration) -> Self {
        self.double_click_max_duration = window;
        self
    }

    pub fn with_long_click_min_duration(mut self, threshold: Duration) -> Self {
        self.long_click_min_duration = threshold;
        self
    }

    pub fn with_double_click(mut self, enable: bool) -> Self {
        self.double_click_enable = enable;
        self
    }

    pub fn with_triple_click(mut self, enable: bool) -> Self {
        self.triple_click_enable = enable;
        self
    }

    pub fn with_long_click(mut self, enable: bool) -> Self {
        self.long_click_enable = enable;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.triple_click_enable && !self.double_click_enable {
            return Err(ConfigError::TripleClickWithoutDoubleClick);
        }
        if self.double_click_max_duration.as_millis() > MAX_GESTURE_DURATION_MS
            || self.long_click_min_duration.as_millis() > MAX_GESTURE_DURATION_MS
        {
            return Err(ConfigError::DurationTooLong);
        }
        Ok(())
    }
}

/// Electrical level the pin reads while the button is held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveLevel {
    High,
    Low,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pull {
    Up,
    Down,
}

/// How the button is wired to its pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinConfig {
    pub active_level: ActiveLevel,
    /// Request an internal pull resistor opposing the active level. Harmless
    /// when an external pull is also fitted.
    pub pull: bool,
}

impl PinConfig {
    pub const fn new(active_level: ActiveLevel) -> Self {
        Self {
            active_level,
            pull: true,
        }
    }

    pub const fn active_high() -> Self {
        Self::new(ActiveLevel::High)
    }

    pub const fn active_low() -> Self {
        Self::new(ActiveLevel::Low)
    }

    pub const fn with_pull(mut self, pull: bool) -> Self {
        self.pull = pull;
        self
    }

    pub const fn pull_request(&self) -> Option<Pull> {
        if !self.pull {
            return None;
        }
        match self.active_level {
            ActiveLevel::High => Some(Pull::Down),
            ActiveLevel::Low => Some(Pull::Up),
        }
    }

    pub const fn press_edge(&self) -> Edge {
        match self.active_level {
            ActiveLevel::High => Edge::Rise,
            ActiveLevel::Low => Edge::Fall,
        }
    }

    pub const fn release_edge(&self) -> Edge {
        match self.active_level {
            ActiveLevel::High => Edge::Fall,
            ActiveLevel::Low => Edge::Rise,
        }
    }

    pub const fn is_pressed_level(&self, high: bool) -> bool {
        match self.active_level {
            ActiveLevel::High => high,
            ActiveLevel::Low => !high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_firmware_buttons() {
        let config = ButtonConfig::default();
        assert_eq!(config.poll_interval, Duration::from_millis(20));
        assert_eq!(config.double_click_max_duration, Duration::from_millis(500));
        assert_eq!(config.long_click_min_duration, Duration::from_millis(2_000));
        assert!(config.double_click_enable);
        assert!(!config.triple_click_enable);
        assert!(!config.long_click_enable);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn triple_without_double_is_rejected() {
        let config = ButtonConfig::default()
            .with_double_click(false)
            .with_triple_click(true);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TripleClickWithoutDoubleClick)
        );
        assert!(ButtonConfig::default()
            .with_triple_click(true)
            .validate()
            .is_ok());
    }

    #[test]
    fn windows_past_half_the_tick_period_are_rejected() {
        let limit = Duration::from_millis(MAX_GESTURE_DURATION_MS);
        let too_long = Duration::from_millis(i32::MAX as u64);
        assert!(ButtonConfig::default()
            .with_long_click_min_duration(limit)
            .validate()
            .is_ok());
        assert_eq!(
            ButtonConfig::default()
                .with_long_click_min_duration(too_long)
                .validate(),
            Err(ConfigError::DurationTooLong)
        );
        assert_eq!(
            ButtonConfig::default()
                .with_double_click_max_duration(too_long)
                .validate(),
            Err(ConfigError::DurationTooLong)
        );
    }

    #[test]
    fn pull_opposes_active_level() {
        assert_eq!(PinConfig::active_high().pull_request(), Some(Pull::Down));
        assert_eq!(PinConfig::active_low().pull_request(), Some(Pull::Up));
        assert_eq!(PinConfig::active_low().with_pull(false).pull_request(), None);
    }

    #[test]
    fn edges_follow_polarity() {
        let high = PinConfig::active_high();
        assert_eq!((high.press_edge(), high.release_edge()), (Edge::Rise, Edge::Fall));
        let low = PinConfig::active_low();
        assert_eq!((low.press_edge(), low.release_edge()), (Edge::Fall, Edge::Rise));
        assert!(low.is_pressed_level(false));
        assert!(!low.is_pressed_level(true));
    }
}
