// tests/scenarios.rs
use glam::IVec2;
use pacman_sim::{
    CommandError, Direction, PacmanState, RequiredCommand, SimConfig, SimulationOutcome,
    Simulator,
};

fn simulate(input: &str) -> SimulationOutcome {
    let lines: Vec<&str> = input.split(":::").collect();
    Simulator::new(SimConfig::default()).run(&lines)
}

fn last_output(outcome: &SimulationOutcome) -> Option<String> {
    outcome.last_report().map(|r| format!("Output: {r}"))
}

fn has_line(outcome: &SimulationOutcome, expected: &str) -> bool {
    outcome.lines().iter().any(|line| line == expected)
}

#[test]
fn test_place_move_report() {
    let outcome = simulate("PLACE 0,0,NORTH ::: MOVE ::: REPORT");
    assert_eq!(last_output(&outcome).as_deref(), Some("Output: 0, 1, NORTH"));
    assert!(outcome.validation.is_empty());
    assert!(outcome.rejected.is_empty());
}

#[test]
fn test_place_left_report() {
    let outcome = simulate("PLACE 0,0,NORTH ::: LEFT ::: REPORT");
    assert_eq!(last_output(&outcome).as_deref(), Some("Output: 0, 0, WEST"));
}

#[test]
fn test_multi_step_path() {
    let outcome = simulate("PLACE 1,2,EAST ::: MOVE ::: MOVE ::: LEFT ::: MOVE ::: REPORT");
    assert_eq!(last_output(&outcome).as_deref(), Some("Output: 3, 3, NORTH"));
}

#[test]
fn test_out_of_bounds_placement_then_valid_replacement() {
    let outcome = simulate(
        "PLACE 6,6,NORTH ::: MOVE ::: LEFT ::: PLACE 2,1,EAST ::: MOVE ::: LEFT ::: MOVE ::: RIGHT ::: MOVE ::: REPORT",
    );
    assert!(has_line(
        &outcome,
        "coordinates [6, 6] are outside the grid; ignoring placement command"
    ));
    assert!(has_line(&outcome, "ignoring MOVE before a valid placement command"));
    assert!(has_line(&outcome, "ignoring LEFT before a valid placement command"));
    assert_eq!(last_output(&outcome).as_deref(), Some("Output: 4, 2, EAST"));
}

#[test]
fn test_move_off_top_edge_is_skipped() {
    let outcome =
        simulate("PLACE 4,4,NORTH ::: MOVE ::: MOVE ::: LEFT ::: LEFT ::: MOVE ::: MOVE ::: REPORT");
    assert!(has_line(
        &outcome,
        "ignoring command 3.MOVE at [4, 5, NORTH] as it would leave the 5x5 grid"
    ));
    assert_eq!(last_output(&outcome).as_deref(), Some("Output: 4, 3, SOUTH"));

    let move_diagnostics = outcome
        .events
        .iter()
        .filter(|e| e.to_string().contains(".MOVE at"))
        .count();
    assert_eq!(move_diagnostics, 1);
}

#[test]
fn test_non_numeric_placement_drops_everything() {
    let outcome = simulate("PLACE a,b,NORTH ::: MOVE ::: MOVE ::: LEFT ::: REPORT");
    assert!(has_line(
        &outcome,
        "coordinates [A, B] are not numeric; ignoring placement command"
    ));
    assert!(has_line(&outcome, "ignoring MOVE before a valid placement command"));
    assert!(has_line(&outcome, "ignoring LEFT before a valid placement command"));
    assert!(has_line(&outcome, "ignoring REPORT before a valid placement command"));

    let out_of_sequence = outcome
        .rejected
        .iter()
        .filter(|d| matches!(d, CommandError::OutOfSequence(_)))
        .count();
    assert_eq!(out_of_sequence, 4);
    assert!(outcome.is_empty());
    assert_eq!(outcome.last_report(), None);
    assert_eq!(outcome.final_state, None);
}

#[test]
fn test_mixed_case_and_padded_fields() {
    let outcome = simulate("place 2 , 3 , south ::: report");
    assert_eq!(last_output(&outcome).as_deref(), Some("Output: 2, 3, SOUTH"));

    let outcome = simulate("PlAcE 3 , 1 , EaST ::: MOve ::: REPOrt");
    assert_eq!(last_output(&outcome).as_deref(), Some("Output: 4, 1, EAST"));
}

#[test]
fn test_replacement_resets_state() {
    let outcome = simulate(
        "place 1,1,east ::: move ::: move ::: left ::: right ::: move ::: move ::: left ::: place 3,4,south ::: move ::: left ::: left ::: move ::: report",
    );
    assert_eq!(last_output(&outcome).as_deref(), Some("Output: 3, 4, NORTH"));
}

#[test]
fn test_unknown_commands_are_skipped() {
    let outcome = simulate("test ::: place 0,0,EAst ::: move ::: left ::: invalid ::: move ::: report");
    assert!(has_line(&outcome, "ignoring invalid command: TEST"));
    assert!(has_line(&outcome, "ignoring invalid command: INVALID"));
    assert_eq!(last_output(&outcome).as_deref(), Some("Output: 1, 1, NORTH"));
}

#[test]
fn test_missing_placement_is_reported_and_processing_continues() {
    let outcome = simulate("test ::: invalid ::: report");
    assert!(has_line(&outcome, "no placement command present; aborting"));
    assert!(has_line(&outcome, "ignoring invalid command: TEST"));
    assert!(has_line(&outcome, "ignoring REPORT before a valid placement command"));
    assert!(!outcome.halted);
    assert_eq!(outcome.last_report(), None);
}

#[test]
fn test_missing_report_is_reported() {
    let outcome = simulate("place 1,1,north ::: move");
    assert_eq!(
        outcome.validation,
        vec![CommandError::MissingRequiredCommand(RequiredCommand::Report)]
    );
    assert_eq!(outcome.last_report(), None);
    assert_eq!(
        outcome.final_state,
        Some(PacmanState::new(IVec2::new(1, 2), Direction::North))
    );
}

#[test]
fn test_blank_lines_are_ignored() {
    let outcome = simulate("report :::");
    assert_eq!(
        outcome.validation,
        vec![CommandError::MissingRequiredCommand(RequiredCommand::Placement)]
    );
    assert_eq!(
        outcome.rejected,
        vec![CommandError::OutOfSequence("REPORT".to_string())]
    );
}

#[test]
fn test_negative_coordinates_are_not_numeric() {
    let outcome = simulate("place -1,-1,east ::: mvoe ::: move ::: report");
    assert!(has_line(
        &outcome,
        "coordinates [-1, -1] are not numeric; ignoring placement command"
    ));
    assert!(has_line(&outcome, "ignoring invalid command: MVOE"));
    assert!(has_line(&outcome, "ignoring MOVE before a valid placement command"));
    assert!(has_line(&outcome, "ignoring REPORT before a valid placement command"));
}

#[test]
fn test_invalid_direction_rejects_placement() {
    let outcome = simulate("place 1,2,NNN ::: move ::: left ::: report");
    assert!(has_line(
        &outcome,
        "direction [NNN] is invalid; ignoring placement command"
    ));
    assert!(outcome.is_empty());
}

#[test]
fn test_strict_mode_halts_on_missing_command() {
    let simulator = Simulator::new(SimConfig::default().with_halt_on_missing_command(true));
    let outcome = simulator.run(&["PLACE 0,0,NORTH", "MOVE"]);

    assert!(outcome.halted);
    assert_eq!(
        outcome.lines(),
        vec!["no report command present; aborting".to_string()]
    );
    assert!(outcome.commands.is_empty());
    assert_eq!(outcome.final_state, None);
}

#[test]
fn test_every_valid_placement_reports_itself() {
    let simulator = Simulator::new(SimConfig::default());
    for x in 0..=5 {
        for y in 0..=5 {
            for facing in Direction::ALL {
                let place = format!("PLACE {x},{y},{facing}");
                let outcome = simulator.run(&[place.as_str(), "REPORT"]);
                assert_eq!(
                    last_output(&outcome),
                    Some(format!("Output: {x}, {y}, {facing}"))
                );
            }
        }
    }
}

#[test]
fn test_larger_grid_accepts_wider_placements() {
    let simulator = Simulator::new(SimConfig::default().with_grid_size(9));
    let outcome = simulator.run(&["PLACE 9,9,EAST", "MOVE", "REPORT"]);
    assert!(outcome.lines().iter().any(|l| l.ends_with("leave the 9x9 grid")));
    assert_eq!(last_output(&outcome).as_deref(), Some("Output: 9, 9, EAST"));
}
