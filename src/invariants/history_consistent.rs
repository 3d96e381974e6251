//! History consistency invariant: snapshots chain one move at a time.

use super::Invariant;
use crate::{GameStore, Square};
use strum::IntoEnumIterator;
use tracing::warn;

/// Invariant: the history is a well-formed chain of snapshots.
///
/// - entry 0 is the all-empty board with no recorded move;
/// - each later entry differs from its predecessor in exactly one
///   square, which goes from empty to occupied and matches the entry's
///   recorded position;
/// - the step pointer indexes into the history.
pub struct HistoryConsistent;

impl Invariant<GameStore> for HistoryConsistent {
    fn holds(store: &GameStore) -> bool {
        let entries = store.entries();

        let Some(first) = entries.first() else {
            warn!("history is empty");
            return false;
        };
        if first.board().marks() != 0 || first.played().is_some() {
            warn!("initial history entry is not the empty board");
            return false;
        }

        for (step, pair) in entries.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            let changed: Vec<_> = crate::Position::iter()
                .filter(|pos| prev.board().get(*pos) != next.board().get(*pos))
                .collect();

            if changed.len() != 1 {
                warn!(
                    step = step + 1,
                    changed = changed.len(),
                    "snapshot diff is not a single square"
                );
                return false;
            }
            let pos = changed[0];
            if next.played() != Some(pos) {
                warn!(step = step + 1, "recorded move disagrees with snapshot diff");
                return false;
            }
            if prev.board().get(pos) != Square::Empty {
                warn!(step = step + 1, "move overwrote an occupied square");
                return false;
            }
        }

        if store.step() >= entries.len() {
            warn!(step = store.step(), len = entries.len(), "step out of range");
            return false;
        }

        true
    }

    fn description() -> &'static str {
        "History starts empty and consecutive snapshots differ by exactly one new mark"
    }
}
