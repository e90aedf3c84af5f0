use specter_core::{Level, LineRole, PowerOffState};
use specter_scenario_harness::ScenarioHarness;

#[test]
fn full_countdown_commits_exactly_once() {
    let mut harness = ScenarioHarness::new();

    harness.press(LineRole::Escape);
    harness.press(LineRole::Select);
    harness.tick();
    assert!(matches!(
        harness.power_off_state(),
        PowerOffState::Holding { .. }
    ));

    for (at, banner) in [
        (500, "PWR OFF IN 1/3"),
        (1000, "PWR OFF IN 2/3"),
        (1500, "PWR OFF IN 3/3"),
    ] {
        harness.advance_to(at);
        harness.tick();
        assert_eq!(
            harness.board.drawn_text.last().map(|t| t.0.as_str()),
            Some(banner)
        );
    }

    // Digit holds at 3 between the last step and the commit threshold.
    harness.advance_to(3000);
    harness.tick();
    assert_eq!(harness.board.drawn_text.len(), 3);

    // The commit path blocks until release; script it on the timeline.
    harness.schedule_release(LineRole::Escape, 3600);
    harness.schedule_release(LineRole::Select, 3600);

    harness.advance_to(3500);
    harness.tick();
    assert_eq!(harness.power_off_state(), PowerOffState::Committing);
    assert_eq!(harness.board.clear_count, 1);
    assert_eq!(harness.board.deep_sleeps.len(), 1);

    let escape = harness.config().buttons.escape.unwrap();
    assert_eq!(harness.board.deep_sleeps[0], (escape.line, Level::Low));

    // Terminal state: further ticks never re-commit.
    harness.advance(500);
    harness.tick();
    assert_eq!(harness.board.deep_sleeps.len(), 1);
    assert_eq!(harness.board.clear_count, 1);
}

#[test]
fn early_release_erases_the_banner_and_idles() {
    let mut harness = ScenarioHarness::new();

    harness.press(LineRole::Escape);
    harness.press(LineRole::Select);
    harness.tick();

    harness.advance_to(1200);
    harness.tick();
    assert!(matches!(
        harness.power_off_state(),
        PowerOffState::CountingDown { .. }
    ));

    harness.release(LineRole::Select);
    harness.tick();
    assert_eq!(harness.power_off_state(), PowerOffState::Idle);
    assert_eq!(harness.board.filled_rects.len(), 1);
    assert!(harness.board.deep_sleeps.is_empty());
    assert_eq!(harness.board.clear_count, 0);
}

#[test]
fn release_before_the_countdown_shows_nothing() {
    let mut harness = ScenarioHarness::new();

    harness.press(LineRole::Escape);
    harness.press(LineRole::Select);
    harness.tick();

    harness.advance_to(400);
    harness.release(LineRole::Escape);
    harness.tick();

    assert_eq!(harness.power_off_state(), PowerOffState::Idle);
    assert!(harness.board.drawn_text.is_empty());
    assert!(harness.board.deep_sleeps.is_empty());
}

#[test]
fn escape_less_boards_hold_left_right_and_wake_on_select() {
    let mut harness = ScenarioHarness::without_escape();

    harness.press(LineRole::Left);
    harness.press(LineRole::Right);
    harness.tick();
    assert!(matches!(
        harness.power_off_state(),
        PowerOffState::Holding { .. }
    ));

    harness.schedule_release(LineRole::Left, 3700);
    harness.schedule_release(LineRole::Right, 3700);
    harness.advance_to(3500);
    harness.tick();

    assert_eq!(harness.board.deep_sleeps.len(), 1);
    let select = harness.config().buttons.select.unwrap();
    assert_eq!(harness.board.deep_sleeps[0], (select.line, Level::Low));
}

#[test]
fn countdown_keeps_ticking_while_the_input_cooldown_is_closed() {
    let mut harness = ScenarioHarness::new();

    harness.press(LineRole::Escape);
    harness.press(LineRole::Select);
    harness.tick();
    // The chord also latched Escape as a normal input; clear it.
    harness.events().clear();

    // Tick at a cadence far inside the 200ms input gate: the raw-level
    // power-off path still advances on schedule.
    let mut shown = 0usize;
    for at in (50..=1600).step_by(50) {
        harness.advance_to(at);
        harness.tick();
        shown = harness.board.drawn_text.len();
    }
    assert_eq!(shown, 3);
    assert!(matches!(
        harness.power_off_state(),
        PowerOffState::CountingDown { shown: 3, .. }
    ));
}
