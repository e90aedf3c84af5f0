use specter_core::{InputEvents, LineRole};
use specter_scenario_harness::ScenarioHarness;

#[test]
fn navigation_presses_latch_and_cooldown_suppresses_repeats() {
    let mut harness = ScenarioHarness::new();
    harness.advance(1000);

    harness.press(LineRole::Left);
    harness.tick();
    assert!(harness.events().take_prev());
    assert!(harness.events().take_any_key());

    // Held through the cooldown window: nothing new latches.
    harness.advance(150);
    harness.tick();
    assert_eq!(harness.events(), &mut InputEvents::default());

    // Window elapsed: the held key services again.
    harness.advance(50);
    harness.tick();
    assert!(harness.events().take_prev());
}

#[test]
fn set_button_acts_as_select() {
    let mut harness = ScenarioHarness::new();
    harness.advance(1000);

    harness.press(LineRole::Set);
    harness.tick();
    assert!(harness.events().take_select());
}

#[test]
fn up_pages_backward_and_down_pages_forward() {
    let mut harness = ScenarioHarness::new();
    harness.advance(1000);

    harness.press(LineRole::Up);
    harness.tick();
    assert!(harness.events().take_up());
    assert!(harness.events().take_prev_page());
    harness.release(LineRole::Up);

    harness.advance(200);
    harness.press(LineRole::Down);
    harness.tick();
    assert!(harness.events().take_down());
    assert!(harness.events().take_next_page());
}

#[test]
fn left_right_chord_escapes_on_boards_without_an_escape_button() {
    let mut harness = ScenarioHarness::without_escape();
    harness.advance(1000);

    harness.press(LineRole::Left);
    harness.press(LineRole::Right);
    harness.tick();

    let events = harness.events();
    assert!(events.take_escape());
    assert!(!events.prev);
    assert!(!events.next);
}

#[test]
fn chord_escape_stays_live_alongside_a_real_escape_button() {
    let mut harness = ScenarioHarness::new();
    harness.advance(1000);

    harness.press(LineRole::Left);
    harness.press(LineRole::Right);
    harness.tick();

    let events = harness.events();
    assert!(events.take_escape());
    assert!(!events.prev);
    assert!(!events.next);
}

#[test]
fn wake_gate_consumes_the_waking_press_only() {
    let mut harness = ScenarioHarness::new();
    harness.advance(1000);
    harness.power.asleep = true;

    harness.press(LineRole::Select);
    harness.tick();
    assert_eq!(harness.power.wakes, 1);
    assert_eq!(harness.events(), &mut InputEvents::default());

    harness.advance(200);
    harness.tick();
    assert!(harness.events().take_select());
    assert!(harness.events().take_any_key());
}

#[test]
fn long_press_override_repeats_a_held_key_every_tick() {
    let mut harness = ScenarioHarness::new();
    harness.advance(1000);

    harness.press(LineRole::Down);
    harness.tick();
    assert!(harness.events().take_down());

    harness.set_long_press(true);
    harness.tick();
    assert!(harness.events().take_down());
    harness.tick();
    assert!(harness.events().take_down());

    harness.set_long_press(false);
    harness.tick();
    assert!(!harness.events().down);
}

#[test]
fn touch_maps_into_the_rotated_frame_and_feeds_telemetry() {
    let mut harness = ScenarioHarness::new();
    harness.advance(1000);

    harness.touch(10, 30);
    harness.tick();

    assert!(harness.events().take_any_key());
    let point = harness.touches.points[0];
    // Rotation R90 on a 240x320 panel: x passes through, y flips
    // against the shifted height.
    assert_eq!((point.x, point.y), (10, 310));
    assert!(point.pressed);
}

#[test]
fn touch_while_asleep_wakes_without_telemetry() {
    let mut harness = ScenarioHarness::new();
    harness.advance(1000);
    harness.power.asleep = true;

    harness.touch(120, 160);
    harness.tick();

    assert_eq!(harness.power.wakes, 1);
    assert!(harness.touches.points.is_empty());
    assert_eq!(harness.events(), &mut InputEvents::default());

    // Contact still present after wake: next qualifying tick records it.
    harness.advance(200);
    harness.tick();
    assert_eq!(harness.touches.points.len(), 1);
}

#[test]
fn lifted_touch_is_no_event() {
    let mut harness = ScenarioHarness::new();
    harness.advance(1000);

    harness.touch(10, 30);
    harness.tick();
    assert_eq!(harness.touches.points.len(), 1);
    harness.events().clear();

    harness.lift_touch();
    harness.advance(200);
    harness.tick();
    assert_eq!(harness.touches.points.len(), 1);
    assert_eq!(harness.events(), &mut InputEvents::default());
}
