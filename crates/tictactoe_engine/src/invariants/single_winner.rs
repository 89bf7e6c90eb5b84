//! Single winner invariant: only one mark ever completes a line.

use super::Invariant;
use crate::rules::win::line_owners;
use crate::snapshot::Snapshot;

/// Invariant: at most one mark owns a completed line.
///
/// Play stops at the first completed line, so legal alternating play can
/// never produce lines for both marks.
pub struct SingleWinner;

impl Invariant<Snapshot> for SingleWinner {
    fn holds(snapshot: &Snapshot) -> bool {
        line_owners(snapshot.board()).len() <= 1
    }

    fn description() -> &'static str {
        "At most one mark has a completed line"
    }
}
