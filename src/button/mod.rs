use embassy_futures::select::{select, Either};
use embassy_sync::{blocking_mutex::raw::RawMutex, signal::Signal};
use log::{debug, trace, warn};

use crate::{
    classifier::ClickClassifier,
    clock::Clock,
    config::ButtonConfig,
    error::ConfigError,
    gesture::GestureKind,
    latch::Latch,
    source::{KeySource, KeyTransition},
};

mod wait;

/// A button classified into press, release and click gestures.
///
/// The gestures are produced by [`monitor`](Button::monitor), which must be
/// running (usually in its own embassy task) for any
/// [`wait`](Button::wait) to complete. Gestures fired while nobody waits are
/// dropped.
///
/// ```ignore
/// static BUTTON: StaticCell<Button<CriticalSectionRawMutex>> = StaticCell::new();
///
/// #[embassy_executor::task]
/// async fn button_task(button: &'static Button<CriticalSectionRawMutex>, keys: PinKeys<Input<'static>>) {
///     if let Err(err) = button.monitor(keys, EmbassyClock).await {
///         log::error!("button: monitor failed err={:?}", err);
///     }
/// }
/// ```
pub struct Button<M: RawMutex> {
    config: ButtonConfig,
    latches: [Latch<M>; 6],
    stop: Signal<M, ()>,
}

impl<M: RawMutex> Button<M> {
    pub fn new(config: ButtonConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            latches: core::array::from_fn(|_| Latch::new()),
            stop: Signal::new(),
        })
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    pub(crate) fn latch(&self, kind: GestureKind) -> &Latch<M> {
        &self.latches[kind.index()]
    }

    /// Poll `source` forever, feeding the classifier and firing latches.
    ///
    /// Returns `Ok(())` once [`deinit`](Button::deinit) is called and the
    /// first source error otherwise. The classifier state lives in this
    /// future; dropping it is equivalent to `deinit`.
    pub async fn monitor<S, C>(&self, mut source: S, clock: C) -> Result<(), S::Error>
    where
        S: KeySource,
        C: Clock,
    {
        debug!(
            "button: monitor start poll_ms={} double_ms={} long_ms={} double={} triple={} long={}",
            self.config.poll_interval.as_millis(),
            self.config.double_click_max_duration.as_millis(),
            self.config.long_click_min_duration.as_millis(),
            self.config.double_click_enable,
            self.config.triple_click_enable,
            self.config.long_click_enable
        );
        let result = match select(self.stop.wait(), self.run(&mut source, &clock)).await {
            Either::First(()) => {
                // `wait` consumed the stop; put it back for later monitors.
                self.stop.signal(());
                Ok(())
            }
            Either::Second(result) => result,
        };
        debug!("button: monitor stop ok={}", result.is_ok());
        result
    }

    /// Stop a running [`monitor`](Button::monitor) and every later one.
    /// Gestures already delivered to waiters are unaffected.
    pub fn deinit(&self) {
        self.stop.signal(());
    }

    async fn run<S: KeySource, C: Clock>(&self, source: &mut S, clock: &C) -> Result<(), S::Error> {
        let mut classifier = ClickClassifier::with_validated(self.config);
        loop {
            let transition = source
                .poll_transition()
                .inspect_err(|err| warn!("button: source read failed err={:?}", err))?;
            let output = match transition {
                Some(KeyTransition { pressed, timestamp }) => {
                    let at = timestamp.unwrap_or_else(|| clock.now());
                    classifier.edge(pressed, at)
                }
                None => classifier.tick(clock.now()),
            };
            for kind in output.kinds() {
                trace!("button: gesture kind={}", kind.label());
                self.latch(kind).fire();
            }
            clock.sleep(self.config.poll_interval).await;
        }
    }
}
