//! Mark balance invariant: X leads O by at most one.

use super::Invariant;
use crate::snapshot::Snapshot;
use crate::types::Mark;

/// Invariant: X count minus O count is 0 or 1.
///
/// Turns strictly alternate starting with X, so O can never be ahead and X
/// can never be more than one mark ahead.
pub struct MarkBalance;

impl Invariant<Snapshot> for MarkBalance {
    fn holds(snapshot: &Snapshot) -> bool {
        let x = snapshot.board().count(Mark::X);
        let o = snapshot.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count minus O count is 0 or 1"
    }
}
