use core::{future::poll_fn, task::Poll};

use embassy_futures::yield_now;
use embassy_sync::blocking_mutex::raw::RawMutex;

use super::Button;
use crate::{
    error::WaitError,
    gesture::{GestureKind, GestureSet},
    latch::LatchWait,
};

impl<M: RawMutex> Button<M> {
    /// Wait until at least one of `kinds` fires and return every selected
    /// kind that fired in the same monitor step.
    ///
    /// A release and its click are latched together, so waiting on both
    /// reports both. An empty selection fails immediately with
    /// [`WaitError::EmptySelection`].
    pub async fn wait(&self, kinds: impl Into<GestureSet>) -> Result<GestureSet, WaitError> {
        let kinds = kinds.into();
        if kinds.is_empty() {
            return Err(WaitError::EmptySelection);
        }

        let mut waits: heapless::Vec<(GestureKind, LatchWait<'_, M>), 6> = kinds
            .kinds()
            .map(|kind| (kind, self.latch(kind).subscribe()))
            .collect();

        poll_fn(|cx| {
            let mut fired = false;
            for (_, wait) in waits.iter_mut() {
                fired |= wait.poll_fired(cx).is_ready();
            }
            if fired {
                Poll::Ready(())
            } else {
                Poll::Pending
            }
        })
        .await;

        // Give siblings latched in the same step one pass to land.
        if waits.len() > 1 {
            yield_now().await;
        }

        Ok(waits
            .iter()
            .filter(|(_, wait)| wait.has_fired())
            .map(|(kind, _)| *kind)
            .collect())
    }

    /// [`wait`](Button::wait) on every gesture kind.
    pub async fn wait_any(&self) -> Result<GestureSet, WaitError> {
        self.wait(GestureSet::ALL_EVENTS).await
    }

    /// Wait for any click and return it. Only one click rank fires per
    /// release; should several ever coincide the lowest rank wins.
    pub async fn wait_for_click(&self) -> Result<GestureKind, WaitError> {
        let fired = self.wait(GestureSet::ANY_CLICK).await?;
        fired.first().ok_or(WaitError::EmptySelection)
    }
}
