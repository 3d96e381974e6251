//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board snapshots.
//! Rules never mutate state; the store (and any caller rendering a
//! snapshot) re-runs them after every transition.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinningLine, check_winner};

use crate::{Board, Outcome};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board snapshot: the outcome plus the mask of
/// squares forming the winning line (all false unless the outcome is a win).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Win, draw, or in progress.
    pub outcome: Outcome,
    /// Squares belonging to the completed line.
    pub line: WinningLine,
}

/// Evaluates a board snapshot.
///
/// Scans the eight winning triples in fixed order (rows, columns,
/// diagonals); the first completed triple determines the winner and the
/// line mask. With no completed triple, a full board is a draw and
/// anything else is in progress. Pure and idempotent.
#[instrument]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((winner, triple)) = check_winner(board) {
        return Evaluation {
            outcome: Outcome::Win(winner),
            line: WinningLine::from_triple(triple),
        };
    }

    let outcome = if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    };

    Evaluation {
        outcome,
        line: WinningLine::none(),
    }
}
