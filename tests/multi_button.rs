mod common;

use button_gestures::{Button, ButtonConfig, GestureKind, GestureSet, MultiButton};
use common::{alongside, within, ScriptedKeys, SimClock};
use embassy_futures::{block_on, join::join};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Key {
    Up,
    Down,
}

fn button() -> Button<NoopRawMutex> {
    Button::new(ButtonConfig::default()).expect("valid config")
}

#[test]
fn first_button_to_fire_wins() {
    let clock = SimClock::default();
    let up = button();
    let down = button();
    let keys = MultiButton::new([(Key::Up, &up), (Key::Down, &down)]).unwrap();

    let monitors = join(
        up.monitor(ScriptedKeys::new(&clock, &[900, 1_000]), &clock),
        down.monitor(ScriptedKeys::new(&clock, &[100, 200, 1_300, 1_400]), &clock),
    );
    let results = block_on(alongside(monitors, async {
        let mut results = Vec::new();
        for _ in 0..3 {
            results.push(within(&clock, keys.wait_for_click()).await);
        }
        results
    }));

    assert_eq!(
        results,
        vec![
            Some(Ok((Key::Down, GestureKind::Single))),
            Some(Ok((Key::Up, GestureKind::Single))),
            Some(Ok((Key::Down, GestureKind::Single))),
        ]
    );
}

#[test]
fn each_input_waits_for_its_own_selection() {
    let clock = SimClock::default();
    let up = button();
    let down = button();
    let keys = MultiButton::new([(Key::Up, &up), (Key::Down, &down)]).unwrap();

    let monitors = join(
        up.monitor(ScriptedKeys::new(&clock, &[100, 200, 300, 400]), &clock),
        down.monitor(ScriptedKeys::new(&clock, &[600, 700]), &clock),
    );
    let selection = [
        (Key::Up, GestureSet::LONG),
        (Key::Down, GestureSet::RELEASED),
    ];
    let fired = block_on(alongside(monitors, within(&clock, keys.wait(&selection))));

    // Up only clicks, and nobody asked for its clicks.
    assert_eq!(fired, Some(Ok((Key::Down, GestureSet::RELEASED))));
    assert!((700..800).contains(&clock.millis()));
}

#[test]
fn unselected_input_is_ignored() {
    let clock = SimClock::default();
    let up = button();
    let down = button();
    let keys = MultiButton::new([(Key::Up, &up), (Key::Down, &down)]).unwrap();

    let monitors = join(
        up.monitor(ScriptedKeys::new(&clock, &[100, 200]), &clock),
        down.monitor(ScriptedKeys::new(&clock, &[100, 200]), &clock),
    );
    let fired = block_on(alongside(
        monitors,
        within(&clock, keys.wait(&[(Key::Up, GestureSet::SINGLE)])),
    ));
    assert_eq!(fired, Some(Ok((Key::Up, GestureSet::SINGLE))));
}

#[test]
fn simultaneous_clicks_go_to_the_first_listed_input() {
    let clock = SimClock::default();
    let up = button();
    let down = button();
    let keys = MultiButton::new([(Key::Down, &down), (Key::Up, &up)]).unwrap();

    let monitors = join(
        up.monitor(ScriptedKeys::new(&clock, &[100, 200]), &clock),
        down.monitor(ScriptedKeys::new(&clock, &[100, 200]), &clock),
    );
    let fired = block_on(alongside(monitors, within(&clock, keys.wait_for_click())));
    assert_eq!(fired, Some(Ok((Key::Down, GestureKind::Single))));
}
