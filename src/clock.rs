use core::ops::Add;

use embassy_futures::yield_now;
use embassy_time::{Duration, Instant, Timer};

/// Wrapping millisecond timestamp.
///
/// The counter is expected to overflow on long-running devices, so ordering
/// must go through [`Ticks::is_earlier`] rather than comparing raw values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ticks(u32);

impl Ticks {
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// `true` when `self` lies strictly before `other`, across wraparound.
    ///
    /// Two timestamps more than half the counter period apart compare the
    /// wrong way round; at millisecond resolution that is ~24 days.
    pub const fn is_earlier(self, other: Ticks) -> bool {
        (self.0.wrapping_sub(other.0) as i32) < 0
    }

    /// Signed distance `self - earlier` in milliseconds.
    pub const fn millis_since(self, earlier: Ticks) -> i32 {
        self.0.wrapping_sub(earlier.0) as i32
    }
}

impl Add<Duration> for Ticks {
    type Output = Ticks;

    /// Durations past `u32::MAX` ms saturate before wrapping.
    fn add(self, rhs: Duration) -> Ticks {
        let millis = u32::try_from(rhs.as_millis()).unwrap_or(u32::MAX);
        Ticks(self.0.wrapping_add(millis))
    }
}

/// Monotonic time plus cooperative sleep, as seen by the monitor loop.
#[allow(async_fn_in_trait)]
pub trait Clock {
    fn now(&self) -> Ticks;

    /// Suspend the caller for `duration`. A zero duration must still yield
    /// to the executor once, or a zero poll interval would starve it.
    async fn sleep(&self, duration: Duration);
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Ticks {
        (**self).now()
    }

    async fn sleep(&self, duration: Duration) {
        (**self).sleep(duration).await
    }
}

/// [`Clock`] backed by the embassy time driver.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Ticks {
        Ticks(Instant::now().as_millis() as u32)
    }

    async fn sleep(&self, duration: Duration) {
        if duration.as_ticks() == 0 {
            yield_now().await;
        } else {
            Timer::after(duration).await;
        }
    }
}
