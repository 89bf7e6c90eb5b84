//! Engine error types.

/// Error returned by [`GameEngine`](crate::GameEngine) operations.
///
/// Occupied cells and moves after the game has ended are not errors: those
/// calls return the unchanged snapshot.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// The caller passed a cell index outside 0-8.
    #[display("Invalid argument: cell index {} is out of range (must be 0-8)", index)]
    InvalidArgument {
        /// The rejected index.
        index: usize,
    },

    /// A postcondition failed after a transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
