use core::{
    cell::RefCell,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use embassy_sync::{
    blocking_mutex::{raw::RawMutex, Mutex},
    waitqueue::MultiWakerRegistration,
};

/// Waker slots per latch. When exhausted every waiter is woken and
/// re-registers on its next poll.
pub const LATCH_WAKERS: usize = 4;

struct LatchState {
    generation: u32,
    wakers: MultiWakerRegistration<LATCH_WAKERS>,
}

/// Fire-and-forget broadcast signal.
///
/// [`fire`](Latch::fire) is observed once by every [`LatchWait`] alive at that
/// moment. Nothing is queued: firing with no waiter is a no-op and a waiter
/// created after the firing does not see it.
pub struct Latch<M: RawMutex> {
    state: Mutex<M, RefCell<LatchState>>,
}

impl<M: RawMutex> Default for Latch<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> Latch<M> {
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(LatchState {
                generation: 0,
                wakers: MultiWakerRegistration::new(),
            })),
        }
    }

    pub fn fire(&self) {
        self.state.lock(|state| {
            let mut state = state.borrow_mut();
            state.generation = state.generation.wrapping_add(1);
            state.wakers.wake();
        });
    }

    /// Start observing. The returned waiter completes on the next `fire`.
    pub fn subscribe(&self) -> LatchWait<'_, M> {
        LatchWait {
            latch: self,
            seen: self.generation(),
        }
    }

    fn generation(&self) -> u32 {
        self.state.lock(|state| state.borrow().generation)
    }
}

/// Pending observation of a [`Latch`]. Dropping it is the cancellation.
pub struct LatchWait<'a, M: RawMutex> {
    latch: &'a Latch<M>,
    seen: u32,
}

impl<M: RawMutex> LatchWait<'_, M> {
    pub fn has_fired(&self) -> bool {
        self.latch.generation() != self.seen
    }

    pub(crate) fn poll_fired(&mut self, cx: &mut Context<'_>) -> Poll<()> {
        self.latch.state.lock(|state| {
            let mut state = state.borrow_mut();
            if state.generation != self.seen {
                Poll::Ready(())
            } else {
                state.wakers.register(cx.waker());
                Poll::Pending
            }
        })
    }
}

impl<M: RawMutex> Future for LatchWait<'_, M> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        self.get_mut().poll_fired(cx)
    }
}
