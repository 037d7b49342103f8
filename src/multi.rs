//! Racing several independent buttons.

use core::future::pending;

use embassy_futures::select::select_array;
use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::{
    button::Button,
    error::{MultiButtonError, WaitError},
    gesture::{GestureKind, GestureSet},
};

/// Anything that can wait for a set of gestures the way [`Button`] does.
#[allow(async_fn_in_trait)]
pub trait GestureWait {
    async fn wait(&self, kinds: GestureSet) -> Result<GestureSet, WaitError>;
}

impl<M: RawMutex> GestureWait for Button<M> {
    async fn wait(&self, kinds: GestureSet) -> Result<GestureSet, WaitError> {
        Button::wait(self, kinds).await
    }
}

/// Named group of inputs raced against each other.
///
/// The inputs are borrowed; they keep being monitored independently. The
/// name type `K` is chosen by the caller, typically `&'static str` or a
/// small enum.
pub struct MultiButton<'a, K, B, const N: usize> {
    inputs: [(K, &'a B); N],
}

impl<'a, K, B, const N: usize> MultiButton<'a, K, B, N>
where
    K: Copy + PartialEq,
    B: GestureWait,
{
    pub fn new(inputs: [(K, &'a B); N]) -> Result<Self, MultiButtonError> {
        if N == 0 {
            return Err(MultiButtonError::NoInputs);
        }
        for (index, (name, _)) in inputs.iter().enumerate() {
            if inputs[..index].iter().any(|(other, _)| other == name) {
                return Err(MultiButtonError::DuplicateName);
            }
        }
        Ok(Self { inputs })
    }

    pub fn names(&self) -> impl Iterator<Item = K> + '_ {
        self.inputs.iter().map(|(name, _)| *name)
    }

    pub fn get(&self, name: K) -> Option<&'a B> {
        self.inputs
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, input)| *input)
    }

    /// Wait on every named input for its own selection of kinds and report
    /// the first input to fire, with the kinds it fired. The other waits are
    /// dropped. When several inputs are ready in the same poll, the one
    /// listed first at construction wins.
    pub async fn wait(&self, selection: &[(K, GestureSet)]) -> Result<(K, GestureSet), WaitError> {
        self.validate(selection)?;

        let waits: [_; N] = core::array::from_fn(|index| {
            let (name, input) = self.inputs[index];
            let kinds = selection
                .iter()
                .find(|(selected, _)| *selected == name)
                .map(|(_, kinds)| *kinds);
            async move {
                match kinds {
                    Some(kinds) => input.wait(kinds).await,
                    None => pending().await,
                }
            }
        });

        let (result, index) = select_array(waits).await;
        let fired = result?;
        Ok((self.inputs[index].0, fired))
    }

    /// Wait for any click on any input.
    pub async fn wait_for_click(&self) -> Result<(K, GestureKind), WaitError> {
        let selection: [(K, GestureSet); N] =
            core::array::from_fn(|index| (self.inputs[index].0, GestureSet::ANY_CLICK));
        let (name, fired) = self.wait(&selection).await?;
        let click = fired.first().ok_or(WaitError::EmptySelection)?;
        Ok((name, click))
    }

    fn validate(&self, selection: &[(K, GestureSet)]) -> Result<(), WaitError> {
        if selection.is_empty() {
            return Err(WaitError::EmptySelection);
        }
        for (index, (name, kinds)) in selection.iter().enumerate() {
            if kinds.is_empty() {
                return Err(WaitError::EmptySelection);
            }
            if self.get(*name).is_none() {
                return Err(WaitError::UnknownInput);
            }
            if selection[..index].iter().any(|(other, _)| other == name) {
                return Err(WaitError::DuplicateInput);
            }
        }
        Ok(())
    }
}
