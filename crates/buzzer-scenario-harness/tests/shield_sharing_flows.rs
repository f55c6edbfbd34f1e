use buzzer_player::sim::ShieldOp;
use buzzer_player::PinMode;
use buzzer_scenario_harness::RoundHarness;

/// Every shield access must be immediately preceded by a direction set on
/// the same channel: the expander is multiplexed across players, so
/// direction state cannot be assumed to survive between accesses.
fn assert_direction_precedes_every_access(ops: &[ShieldOp]) {
    for (i, op) in ops.iter().enumerate() {
        let (channel, mode) = match op {
            ShieldOp::Read(ch) => (*ch, PinMode::Input),
            ShieldOp::Write(ch, _) => (*ch, PinMode::Output),
            ShieldOp::PinMode(..) => continue,
        };
        assert!(i > 0, "access with no preceding direction set: {op:?}");
        assert_eq!(
            ops[i - 1],
            ShieldOp::PinMode(channel, mode),
            "access at log position {i} not preceded by direction set"
        );
    }
}

#[test]
fn direction_reasserted_for_every_operation() {
    let mut harness = RoundHarness::new();
    let player = harness.add_shield_player(2, 3);
    harness.clear_shield_ops();

    harness.poll_for_winner();
    harness.turn_on(player);
    harness.stop_flash(player);
    harness.announce_winner(player);

    let ops = harness.shield_ops().to_vec();
    assert!(!ops.is_empty());
    assert_direction_precedes_every_access(&ops);
}

#[test]
fn players_on_distinct_channels_do_not_interfere() {
    let mut harness = RoundHarness::new();
    let left = harness.add_shield_player(0, 1);
    let right = harness.add_shield_player(2, 3);

    harness.turn_on(left);
    assert!(harness.lamp_is_lit(left));
    assert!(!harness.lamp_is_lit(right));

    harness.press(right);
    assert_eq!(harness.poll_for_winner(), Some(right));
    assert!(harness.lamp_is_lit(left), "left lamp unaffected by right press");

    harness.announce_winner(right);
    assert!(harness.lamp_is_lit(right));
    assert!(harness.lamp_is_lit(left));

    harness.stop_flash(left);
    assert!(!harness.lamp_is_lit(left));
    assert!(harness.lamp_is_lit(right), "right lamp unaffected by left reset");
}

#[test]
fn interleaved_players_keep_direction_discipline() {
    let mut harness = RoundHarness::new();
    let left = harness.add_shield_player(0, 1);
    let right = harness.add_shield_player(2, 3);
    harness.clear_shield_ops();

    // Interleave accesses so each player's calls land between the other's.
    harness.press(left);
    harness.poll_for_winner();
    harness.turn_on(right);
    harness.poll_for_winner();
    harness.turn_on(left);
    harness.stop_flash(right);

    assert_direction_precedes_every_access(&harness.shield_ops().to_vec());
}
