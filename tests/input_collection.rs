// tests/input_collection.rs
use pacman_sim::{CommandBatch, collect_commands};
use std::io::Cursor;

fn collect(input: &str, max: usize) -> CommandBatch {
    collect_commands(Cursor::new(input), max)
}

#[test]
fn test_stops_at_first_report() {
    let batch = collect("place 0,0,north\n\nmove\n  report \nmove\n", 30);
    assert_eq!(batch.tokens, vec!["PLACE 0,0,NORTH", "MOVE", "REPORT"]);
    assert!(!batch.truncated);
}

#[test]
fn test_reads_to_end_without_report() {
    let batch = collect("left\nright", 30);
    assert_eq!(batch.tokens, vec!["LEFT", "RIGHT"]);
    assert!(!batch.truncated);
}

#[test]
fn test_caps_line_count() {
    let input = "move\n".repeat(5);
    let batch = collect(&input, 3);
    assert_eq!(batch.tokens.len(), 3);
    assert!(batch.truncated);
}

#[test]
fn test_exact_cap_is_not_truncated() {
    let batch = collect("move\nmove\nmove\n", 3);
    assert_eq!(batch.tokens.len(), 3);
    assert!(!batch.truncated);
}

#[test]
fn test_trailing_blank_lines_after_cap_are_not_truncation() {
    let batch = collect("move\nmove\nmove\n\n   \n", 3);
    assert_eq!(batch.tokens, vec!["MOVE", "MOVE", "MOVE"]);
    assert!(!batch.truncated);
}
