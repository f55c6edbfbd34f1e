use buzzer_scenario_harness::RoundHarness;

#[test]
fn no_winner_while_nothing_is_pressed() {
    let mut harness = RoundHarness::new();
    harness.add_digital_player();
    harness.add_analog_player();
    harness.add_shield_player(0, 1);

    assert_eq!(harness.poll_for_winner(), None);
}

#[test]
fn each_routing_detects_its_own_press() {
    let mut harness = RoundHarness::new();
    let digital = harness.add_digital_player();
    let analog = harness.add_analog_player();
    let shield = harness.add_shield_player(0, 1);

    for &player in &[digital, analog, shield] {
        harness.press(player);
        assert_eq!(harness.poll_for_winner(), Some(player));
        harness.release(player);
        assert_eq!(harness.poll_for_winner(), None);
    }
}

#[test]
fn analog_press_threshold_boundary() {
    let mut harness = RoundHarness::new();
    let analog = harness.add_analog_player();
    let threshold = RoundHarness::analog_threshold();

    // A pulled-down unpressed line sits far below the threshold; readings
    // just below it must still count as unpressed.
    harness.set_analog_reading(analog, threshold - 1);
    assert_eq!(harness.poll_for_winner(), None);

    harness.set_analog_reading(analog, threshold);
    assert_eq!(harness.poll_for_winner(), Some(analog));
}

#[test]
fn polling_is_stateless_across_repeated_checks() {
    let mut harness = RoundHarness::new();
    let player = harness.add_shield_player(4, 5);

    harness.press(player);
    // No latching anywhere: every poll re-reads the live level.
    for _ in 0..100 {
        assert_eq!(harness.poll_for_winner(), Some(player));
    }
    harness.release(player);
    for _ in 0..100 {
        assert_eq!(harness.poll_for_winner(), None);
    }
}

#[test]
fn first_pressed_player_in_scan_order_wins_the_poll() {
    let mut harness = RoundHarness::new();
    let first = harness.add_digital_player();
    let second = harness.add_shield_player(2, 3);

    harness.press(second);
    harness.press(first);
    assert_eq!(harness.poll_for_winner(), Some(first));

    harness.release(first);
    assert_eq!(harness.poll_for_winner(), Some(second));
}
