//! Per-button click classification.
//!
//! [`ClickClassifier`] turns debounced press/release edges plus the passage
//! of time into [`GestureKind`]s:
//!
//! - every press emits `Pressed`, every release emits `Released`;
//! - a release also emits the click rank accumulated so far (`Single`,
//!   `Double` or `Triple`), unless the press already became a long click;
//! - a press that lands strictly before the previous press + the double-click
//!   window escalates the rank, otherwise the rank restarts at `Single`;
//! - while held, a [`tick`](ClickClassifier::tick) at or past
//!   press + long-click threshold emits `Long` once.
//!
//! All deadlines are [`Ticks`] and compared wrap-safe.

use statig::{blocking::IntoStateMachineExt as _, prelude::*};

use crate::{clock::Ticks, config::ButtonConfig, error::ConfigError, gesture::GestureKind};

/// Click count accumulated for the current press sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickRank {
    Single,
    Double,
    Triple,
    Long,
}

impl ClickRank {
    pub const fn gesture(self) -> GestureKind {
        match self {
            ClickRank::Single => GestureKind::Single,
            ClickRank::Double => GestureKind::Double,
            ClickRank::Triple => GestureKind::Triple,
            ClickRank::Long => GestureKind::Long,
        }
    }

    /// Rank after a press inside the double-click window. A disabled next
    /// rank restarts the count rather than repeating the current one.
    fn escalate(self, config: &ButtonConfig) -> ClickRank {
        match self {
            ClickRank::Single if config.double_click_enable => ClickRank::Double,
            ClickRank::Double if config.triple_click_enable => ClickRank::Triple,
            _ => ClickRank::Single,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum ClickHsmEvent {
    Press { at: Ticks },
    Release,
    Tick { now: Ticks },
}

/// Gestures produced by one classifier step, in emission order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickOutput {
    pub events: [Option<GestureKind>; 2],
}

impl ClickOutput {
    pub fn kinds(&self) -> impl Iterator<Item = GestureKind> + '_ {
        self.events.iter().flatten().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.events.iter().all(Option::is_none)
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct DispatchContext {
    events: [Option<GestureKind>; 2],
}

impl DispatchContext {
    fn emit(&mut self, kind: GestureKind) {
        for slot in &mut self.events {
            if slot.is_none() {
                *slot = Some(kind);
                return;
            }
        }
    }

    fn finish(self) -> ClickOutput {
        ClickOutput {
            events: self.events,
        }
    }
}

pub struct ClickClassifier {
    machine: statig::blocking::StateMachine<ClickHsm>,
}

impl ClickClassifier {
    pub fn new(config: ButtonConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_validated(config))
    }

    /// For configs a [`Button`](crate::Button) already checked.
    pub(crate) fn with_validated(config: ButtonConfig) -> Self {
        Self {
            machine: ClickHsm::new(config).state_machine(),
        }
    }

    /// Feed one edge. `at` is the edge timestamp, or the current clock when
    /// the source could not provide one.
    pub fn edge(&mut self, pressed: bool, at: Ticks) -> ClickOutput {
        let event = if pressed {
            ClickHsmEvent::Press { at }
        } else {
            ClickHsmEvent::Release
        };
        self.dispatch(event)
    }

    /// Evaluate timeouts when no edge arrived this poll.
    pub fn tick(&mut self, now: Ticks) -> ClickOutput {
        self.dispatch(ClickHsmEvent::Tick { now })
    }

    pub fn is_pressed(&self) -> bool {
        self.machine.inner().is_pressed
    }

    pub fn rank(&self) -> ClickRank {
        self.machine.inner().last_click
    }

    fn dispatch(&mut self, event: ClickHsmEvent) -> ClickOutput {
        let mut context = DispatchContext::default();
        self.machine.handle_with_context(&event, &mut context);
        context.finish()
    }
}

struct ClickHsm {
    config: ButtonConfig,
    last_click: ClickRank,
    is_pressed: bool,
    long_click_due: Ticks,
    // `None` until the first press, so that press never escalates.
    double_click_expires: Option<Ticks>,
}

#[state_machine(initial = "State::released()")]
impl ClickHsm {
    #[state]
    fn released(&mut self, context: &mut DispatchContext, event: &ClickHsmEvent) -> Outcome<State> {
        match event {
            ClickHsmEvent::Press { at } => {
                self.begin_press(context, *at);
                Transition(State::held())
            }
            // A debounced source never repeats a release.
            ClickHsmEvent::Release => Handled,
            ClickHsmEvent::Tick { .. } => Handled,
        }
    }

    #[state]
    fn held(&mut self, context: &mut DispatchContext, event: &ClickHsmEvent) -> Outcome<State> {
        match event {
            ClickHsmEvent::Release => {
                self.finish_press(context);
                Transition(State::released())
            }
            ClickHsmEvent::Tick { now } => {
                self.check_long_click(context, *now);
                Handled
            }
            ClickHsmEvent::Press { .. } => Handled,
        }
    }
}

impl ClickHsm {
    fn new(config: ButtonConfig) -> Self {
        Self {
            config,
            last_click: ClickRank::Single,
            is_pressed: false,
            long_click_due: Ticks::default(),
            double_click_expires: None,
        }
    }

    fn begin_press(&mut self, context: &mut DispatchContext, at: Ticks) {
        context.emit(GestureKind::Pressed);
        let within_window = self
            .double_click_expires
            .is_some_and(|expires| at.is_earlier(expires));
        self.last_click = if within_window {
            self.last_click.escalate(&self.config)
        } else {
            ClickRank::Single
        };
        self.long_click_due = at + self.config.long_click_min_duration;
        self.double_click_expires = Some(at + self.config.double_click_max_duration);
        self.is_pressed = true;
    }

    fn finish_press(&mut self, context: &mut DispatchContext) {
        context.emit(GestureKind::Released);
        if self.last_click == ClickRank::Long {
            // The long click already fired while held.
            self.last_click = ClickRank::Single;
        } else {
            context.emit(self.last_click.gesture());
        }
        self.is_pressed = false;
    }

    fn check_long_click(&mut self, context: &mut DispatchContext, now: Ticks) {
        if !self.config.long_click_enable || self.last_click == ClickRank::Long {
            return;
        }
        if !now.is_earlier(self.long_click_due) {
            self.last_click = ClickRank::Long;
            context.emit(GestureKind::Long);
        }
    }
}
