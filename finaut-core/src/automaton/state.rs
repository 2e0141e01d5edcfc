//! State handles.

use std::fmt;

/// Interned state handle.
///
/// Names live in the owning [`Automaton`](super::Automaton); a `StateId` is
/// only meaningful for the automaton that produced it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) u32);

impl StateId {
    /// Position of the state in declaration order
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateId({})", self.0)
    }
}
