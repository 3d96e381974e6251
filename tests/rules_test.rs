//! Tests for outcome evaluation: wins, draws, and the line mask.

use tictactoe_rewind::{
    Board, Outcome, Player, Position, Square, evaluate, rules::LINES,
};

fn board_from(layout: [Option<Player>; 9]) -> Board {
    let mut board = Board::new();
    for (index, player) in layout.into_iter().enumerate() {
        if let Some(player) = player {
            let pos = Position::from_index(index).unwrap();
            board.set(pos, Square::Occupied(player));
        }
    }
    board
}

const X: Option<Player> = Some(Player::X);
const O: Option<Player> = Some(Player::O);
const E: Option<Player> = None;

#[test]
fn test_under_five_marks_always_in_progress() {
    // No line can complete before the fifth mark; spot-check dense
    // four-mark boards around the center and corners.
    let boards = [
        board_from([X, E, E, E, O, E, E, E, E]),
        board_from([X, O, X, O, E, E, E, E, E]),
        board_from([X, X, E, O, O, E, E, E, E]),
        board_from([E, E, O, E, X, E, X, E, O]),
    ];
    for board in boards {
        assert!(board.marks() < 5);
        assert_eq!(evaluate(&board).outcome, Outcome::InProgress);
    }
}

#[test]
fn test_every_line_detected_for_both_players() {
    for line in LINES {
        for player in [Player::X, Player::O] {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Square::Occupied(player));
            }
            let eval = evaluate(&board);
            assert_eq!(eval.outcome, Outcome::Win(player));
            for pos in line {
                assert!(eval.line.contains(pos));
            }
            assert_eq!(
                eval.line.squares().iter().filter(|m| **m).count(),
                3,
                "mask marks exactly the winning triple"
            );
        }
    }
}

#[test]
fn test_double_line_resolves_to_first_triple() {
    // Both the middle row and the middle column are complete; the row
    // comes first in the fixed scan order.
    let board = board_from([E, X, E, X, X, X, E, X, E]);
    let eval = evaluate(&board);
    assert_eq!(eval.outcome, Outcome::Win(Player::X));
    assert!(eval.line.contains(Position::MiddleLeft));
    assert!(eval.line.contains(Position::MiddleRight));
    assert!(!eval.line.contains(Position::TopCenter));
    assert!(!eval.line.contains(Position::BottomCenter));
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / O X X / O X O
    let board = board_from([X, O, X, O, X, X, O, X, O]);
    let eval = evaluate(&board);
    assert_eq!(eval.outcome, Outcome::Draw);
    assert!(eval.line.is_none());
}

#[test]
fn test_full_board_with_line_is_win_not_draw() {
    // X X X / O O X / O X O
    let board = board_from([X, X, X, O, O, X, O, X, O]);
    assert_eq!(evaluate(&board).outcome, Outcome::Win(Player::X));
}

#[test]
fn test_evaluation_has_no_hidden_state() {
    let board = board_from([X, O, X, O, X, X, O, X, O]);
    let first = evaluate(&board);
    for _ in 0..10 {
        assert_eq!(evaluate(&board), first);
    }
}
