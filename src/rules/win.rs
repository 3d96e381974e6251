//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triples, scanned in fixed order: rows top to
/// bottom, then columns left to right, then the two diagonals. The
/// tie-break on boards with more than one completed line is "first
/// triple in this order".
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Per-square membership in the winning line of a snapshot.
///
/// All false unless the snapshot holds a completed triple. Derived on
/// every evaluation, never stored alongside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WinningLine {
    squares: [bool; 9],
}

impl WinningLine {
    /// An empty mask (no winning line).
    pub fn none() -> Self {
        Self::default()
    }

    /// Builds the mask marking exactly the given triple.
    pub fn from_triple(triple: [Position; 3]) -> Self {
        let mut squares = [false; 9];
        for pos in triple {
            squares[pos.to_index()] = true;
        }
        Self { squares }
    }

    /// True if the given position belongs to the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.squares[pos.to_index()]
    }

    /// True if no winning line is marked.
    pub fn is_none(&self) -> bool {
        self.squares.iter().all(|marked| !marked)
    }

    /// Returns the mask as a slice, in row-major order.
    pub fn squares(&self) -> &[bool; 9] {
        &self.squares
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the winning player together with the completed triple, or
/// `None` if no triple is complete. Multiple completed lines resolve to
/// the first in [`LINES`] order.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Player, [Position; 3])> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some((player, line));
            }
        }
    }

    None
}
