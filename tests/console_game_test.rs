//! End-to-end tests for the console game loop with scripted input.

use std::io::Cursor;
use strictly_grid::{Orchestrator, TokenReader};

fn run(input: &str) -> String {
    let reader = TokenReader::new(Cursor::new(input.as_bytes().to_vec()));
    let mut console = Orchestrator::new(reader, Vec::new());
    console.run().expect("in-memory I/O cannot fail");
    String::from_utf8(console.into_output()).expect("output is UTF-8")
}

const SIZE_ERROR: &str = "Please enter an integer greater than or equal to 3.";
const REPLAY_PROMPT: &str = "Do you want to play again? (y/n): ";

#[test]
fn test_left_column_win() {
    let output = run("3\n1\n2\n4\n5\n7\nn\n");

    assert!(output.contains("Player 1 wins!"));
    assert!(output.contains(
        "0 | X | 3\n\
         --+---+--\n\
         0 | X | 6\n\
         --+---+--\n\
         0 | 8 | 9\n\n"
    ));
    assert!(output.ends_with(&format!("{REPLAY_PROMPT}Thanks for playing!\n")));
}

#[test]
fn test_starter_grid_printed() {
    let output = run("3\n");
    assert!(output.contains("To win, simply get 3 of your respective symbols in a row!"));
    assert!(output.contains("1 | 2 | 3\n--+---+--\n4 | 5 | 6\n--+---+--\n7 | 8 | 9\n\n"));
}

#[test]
fn test_tie_after_full_board() {
    let output = run("3\n1 2 3 5 4 6 8 7 9\n1\nn\n");

    assert!(output.contains("Tie game! Thanks for playing!"));
    assert!(!output.contains("wins!"));
    assert!(output.contains(REPLAY_PROMPT));
}

#[test]
fn test_invalid_sizes_rejected() {
    let output = run("2\nabc\n3\n");

    let rejections = output.lines().filter(|line| *line == SIZE_ERROR).count();
    assert_eq!(rejections, 2);
    assert!(output.contains("To win, simply get 3 of your respective symbols in a row!"));
}

#[test]
fn test_out_of_range_and_occupied_moves() {
    let output = run("3\n10\n5\n5\n");

    assert!(output.contains("Please input a number between 1 and 9, inclusive."));
    assert!(output.contains("Cell already occupied. See the grid below."));
    // The rejected second "5" was player 2's attempt; player 2 is asked again.
    assert_eq!(output.matches("Player 2's turn.").count(), 2);
}

#[test]
fn test_malformed_move_reprompts_same_player() {
    let output = run("3\nfoo 1\n");

    assert!(output.contains("Invalid input. Try again, Player 1"));
    assert_eq!(output.matches("Player 1's turn.").count(), 2);
    assert_eq!(output.matches("Player 2's turn.").count(), 1);
}

#[test]
fn test_negative_move_is_out_of_range() {
    let output = run("4\n-3\n");
    assert!(output.contains("Please input a number between 1 and 16, inclusive."));
}

#[test]
fn test_end_of_input_mid_game_terminates() {
    let output = run("3\n1\n");

    assert!(output.ends_with("Program terminated. Have a nice day!\n"));
    assert!(!output.contains(REPLAY_PROMPT));
}

#[test]
fn test_end_of_input_at_size_prompt_terminates() {
    let output = run("");
    assert!(output.ends_with("Program terminated. Have a nice day!\n"));
}

#[test]
fn test_replay_starts_fresh_game() {
    let output = run("3\n1 2 4 5 7\ny\n4\n1 5 2 6 3 7 4\nN\n");

    assert_eq!(output.matches("Welcome to Tic-Tac-Toe!").count(), 2);
    assert!(output.contains("To win, simply get 4 of your respective symbols in a row!"));
    assert_eq!(output.matches("Player 1 wins!").count(), 2);
    assert_eq!(output.matches(REPLAY_PROMPT).count(), 2);
    assert!(output.ends_with("Thanks for playing!\n"));
}

#[test]
fn test_end_of_input_at_replay_prompt_says_goodbye() {
    let output = run("3\n1 2 4 5 7\n");
    assert!(output.ends_with(&format!("{REPLAY_PROMPT}Thanks for playing!\n")));
}

#[test]
fn test_wide_grid_alignment() {
    let output = run("4\n16\n");
    assert!(output.contains("13 | 14 | 15 |  0\n"));
    assert!(output.contains("---+----+----+---\n"));
}

#[test]
fn test_huge_size_rejected_then_reprompted() {
    let output = run("3037000499\n1000\n3\n1 2 4 5 7\nn\n");

    let rejections = output
        .lines()
        .filter(|line| *line == "Please enter an integer no greater than 999.")
        .count();
    assert_eq!(rejections, 2);
    assert!(output.contains("Player 1 wins!"));
}

#[test]
fn test_replay_after_preset_asks_for_size() {
    let reader = TokenReader::new(Cursor::new(b"1 4 2 5 3\ny\n4\n".to_vec()));
    let mut console = Orchestrator::new(reader, Vec::new()).with_preset_size(Some(3));
    console.run().expect("in-memory I/O cannot fail");
    let output = String::from_utf8(console.into_output()).expect("output is UTF-8");

    assert_eq!(output.matches("Please choose how big").count(), 1);
    assert!(output.contains("To win, simply get 4 of your respective symbols in a row!"));
}
