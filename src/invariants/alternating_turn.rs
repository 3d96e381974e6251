//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameStore, Player, Square};
use tracing::warn;

/// Invariant: players strictly alternate.
///
/// The mark added at step `i` belongs to the player whose turn it was at
/// step `i - 1`, starting from X, and `next_player` always equals the
/// parity of the current step. `GameStore::jump_to` recomputes the next
/// player from parity alone, which is only correct while this holds.
pub struct AlternatingTurn;

impl Invariant<GameStore> for AlternatingTurn {
    fn holds(store: &GameStore) -> bool {
        for (step, entry) in store.entries().iter().enumerate().skip(1) {
            let Some(pos) = entry.played() else {
                warn!(step, "history entry after step 0 has no move");
                return false;
            };
            let expected = Player::to_move_at(step - 1);
            if entry.board().get(pos) != Square::Occupied(expected) {
                warn!(step, player = %expected, "mark does not alternate");
                return false;
            }
        }

        if store.next_player() != Player::to_move_at(store.step()) {
            warn!(
                step = store.step(),
                next_player = %store.next_player(),
                "next player disagrees with step parity"
            );
            return false;
        }

        true
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...) and next player matches step parity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_store_holds() {
        assert!(AlternatingTurn::holds(&GameStore::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut store = GameStore::new();
        for pos in [
            Position::Center,
            Position::TopLeft,
            Position::BottomRight,
            Position::TopRight,
        ] {
            store.apply_move(pos);
        }
        assert!(AlternatingTurn::holds(&store));
    }

    #[test]
    fn test_holds_after_jump() {
        let mut store = GameStore::new();
        store.apply_move(Position::Center);
        store.apply_move(Position::TopLeft);
        store.jump_to(1);
        assert!(AlternatingTurn::holds(&store));
        assert_eq!(store.next_player(), Player::O);
    }
}
