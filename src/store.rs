//! Game state store: move history with time travel.
//!
//! The store owns the full history of board snapshots and a step pointer
//! into it. The view layer drives it through three operations (apply a
//! move, jump to a step, toggle the move-list order) and reads plain
//! data back; outcome evaluation stays in [`crate::rules`] and is re-run
//! by the caller after every transition.

use crate::rules;
use crate::{Board, Outcome, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One step of history: a board snapshot plus the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    played: Option<Position>,
}

impl HistoryEntry {
    fn initial() -> Self {
        Self {
            board: Board::new(),
            played: None,
        }
    }

    /// The board snapshot at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The position played to reach this snapshot; `None` for the
    /// initial empty entry.
    pub fn played(&self) -> Option<Position> {
        self.played
    }
}

/// Presentation order of the move list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Default,
    derive_more::Display,
)]
pub enum MoveOrder {
    /// Oldest move first.
    #[default]
    #[display("ascending")]
    Ascending,
    /// Newest move first.
    #[display("descending")]
    Descending,
}

impl MoveOrder {
    /// Returns the opposite order.
    pub fn reversed(self) -> Self {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }
}

/// Owner of the game state: history, step pointer, next player, and the
/// move-list order flag.
///
/// Invariants (debug-asserted after every mutation):
/// - history is never empty and entry 0 is the all-empty board;
/// - consecutive entries differ in exactly one square;
/// - `step` indexes into history;
/// - `next_player` equals the parity of `step` (even means X). Strict
///   alternation makes the parity rule sound; `jump_to` relies on it
///   instead of replaying history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStore {
    history: Vec<HistoryEntry>,
    step: usize,
    next_player: Player,
    order: MoveOrder,
}

impl GameStore {
    /// Creates a store holding a single empty snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            step: 0,
            next_player: Player::X,
            order: MoveOrder::Ascending,
        }
    }

    /// Plays the next player's mark at `pos`.
    ///
    /// Discards any history beyond the current step (a later branch
    /// abandoned by time travel is unrecoverable), appends the new
    /// snapshot, advances the step, and flips the next player.
    ///
    /// The call is a silent no-op when the square is occupied in the
    /// current snapshot or the snapshot is already won.
    #[instrument(skip(self), fields(player = %self.next_player))]
    pub fn apply_move(&mut self, pos: Position) {
        let current = self.history[self.step].board;
        if !current.is_empty(pos) {
            debug!(position = %pos, "ignoring move to occupied square");
            return;
        }
        if rules::check_winner(&current).is_some() {
            debug!(position = %pos, "ignoring move on finished game");
            return;
        }

        let mut board = current;
        board.set(pos, Square::Occupied(self.next_player));

        self.history.truncate(self.step + 1);
        self.history.push(HistoryEntry {
            board,
            played: Some(pos),
        });
        self.step = self.history.len() - 1;
        self.next_player = self.next_player.opponent();

        self.debug_check_invariants();
    }

    /// Moves the step pointer to a past (or present) snapshot.
    ///
    /// History is untouched; the next player is recomputed from step
    /// parity. `step` out of range is a caller contract violation, not
    /// a handled error.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        debug_assert!(step < self.history.len(), "jump_to step out of range");
        self.step = step;
        self.next_player = Player::to_move_at(step);

        self.debug_check_invariants();
    }

    /// Flips the move-list presentation order. History and step are
    /// untouched.
    #[instrument(skip(self))]
    pub fn toggle_move_order(&mut self) {
        self.order = self.order.reversed();
    }

    /// The currently displayed board snapshot.
    pub fn board(&self) -> &Board {
        &self.history[self.step].board
    }

    /// The current step index.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The player who moves next from the current snapshot.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// The move-list presentation order.
    pub fn move_order(&self) -> MoveOrder {
        self.order
    }

    /// All history entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// History entries paired with their step number, in presentation
    /// order.
    pub fn numbered_entries(&self) -> Vec<(usize, &HistoryEntry)> {
        let mut numbered: Vec<_> = self.history.iter().enumerate().collect();
        if self.order == MoveOrder::Descending {
            numbered.reverse();
        }
        numbered
    }

    /// Jump-button text for a step: `"Go to game start"` for step 0,
    /// otherwise `"Go to move #N (row,col)"` with 1-based coordinates.
    pub fn move_label(&self, step: usize) -> String {
        match self.history[step].played {
            Some(pos) => {
                let (row, col) = pos.coordinates();
                format!("Go to move #{step} ({row},{col})")
            }
            None => "Go to game start".to_string(),
        }
    }

    /// Status text for the current snapshot: the win or draw message,
    /// or the next player while the game is in progress.
    pub fn status_line(&self) -> String {
        match rules::evaluate(self.board()).outcome {
            Outcome::InProgress => format!("Next player: {}", self.next_player),
            outcome => outcome.to_string(),
        }
    }

    fn debug_check_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            use crate::invariants::{InvariantSet, StoreInvariants};
            if let Err(violations) = StoreInvariants::check_all(self) {
                panic!("store invariant violated: {violations:?}");
            }
        }
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}
