//! Tic-tac-toe game logic with move history and time travel.
//!
//! The crate has two halves, wired together by the caller:
//!
//! - **Store** ([`GameStore`]): owns the ordered history of board
//!   snapshots, the current step pointer, the next player, and the
//!   move-list presentation order. Mutated only by [`GameStore::apply_move`],
//!   [`GameStore::jump_to`], and [`GameStore::toggle_move_order`].
//! - **Rules** ([`rules::evaluate`]): pure evaluation of a snapshot into
//!   a win/draw/in-progress [`Outcome`] plus the [`WinningLine`] mask of
//!   squares forming the completed triple.
//!
//! A presentation layer calls a store operation per user interaction,
//! then re-evaluates the resulting snapshot; the store never calls back.
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{GameStore, Outcome, Position, rules};
//!
//! let mut store = GameStore::new();
//! for pos in [
//!     Position::TopLeft,     // X
//!     Position::MiddleLeft,  // O
//!     Position::TopCenter,   // X
//!     Position::Center,      // O
//!     Position::TopRight,    // X completes the top row
//! ] {
//!     store.apply_move(pos);
//! }
//!
//! let eval = rules::evaluate(store.board());
//! assert!(matches!(eval.outcome, Outcome::Win(_)));
//! assert!(eval.line.contains(Position::TopCenter));
//!
//! // Time travel back to move 2, then branch; the old future is gone.
//! store.jump_to(2);
//! store.apply_move(Position::BottomRight);
//! assert_eq!(store.entries().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod invariants;
mod position;
pub mod rules;
mod store;
mod types;

pub use invariants::{
    AlternatingTurn, HistoryConsistent, Invariant, InvariantSet, InvariantViolation,
    StoreInvariants, check_store,
};
pub use position::Position;
pub use rules::{Evaluation, WinningLine, evaluate};
pub use store::{GameStore, HistoryEntry, MoveOrder};
pub use types::{Board, Outcome, Player, Square};
