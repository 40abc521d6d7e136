use std::fmt::Display;

use crate::{alphabet::Symbol, math, Show};

/// Index of a state inside an automaton definition. Shown as `q0`, `q1`, ...
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct StateId(u32);

impl StateId {
    /// Wraps the raw index.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl Show for StateId {
    fn show(&self) -> String {
        self.to_string()
    }

    fn show_collection<'a, I: IntoIterator<Item = &'a Self>>(iter: I) -> String {
        format!(
            "{{{}}}",
            itertools::Itertools::join(&mut iter.into_iter().map(|q| q.show()), ", ")
        )
    }
}

impl From<u32> for StateId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl From<StateId> for u32 {
    fn from(id: StateId) -> Self {
        id.0
    }
}

/// An immutable mapping from `(state, symbol)` pairs to successor states.
///
/// The mapping is partial on purpose: a missing entry is a legal, meaningful
/// condition ("no transition defined") that [`TransitionTable::lookup`] reports as
/// `None`, to be propagated by the caller. It is never an error and never panics,
/// which lets incomplete tables degrade to rejection instead of crashing a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionTable<S: Symbol = char> {
    entries: math::Map<(StateId, S), StateId>,
}

impl<S: Symbol> TransitionTable<S> {
    /// Looks up the successor of `state` under `symbol`. `None` means the table
    /// defines no transition for this pair.
    pub fn lookup(&self, state: StateId, symbol: S) -> Option<StateId> {
        self.entries.get(&(state, symbol)).copied()
    }

    /// The number of transitions the table defines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table defines no transitions at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all `(source, symbol, target)` triples of the table, in no
    /// particular order.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, S, StateId)> + '_ {
        self.entries.iter().map(|(&(q, sym), &p)| (q, sym, p))
    }
}

impl<S: Symbol> FromIterator<(StateId, S, StateId)> for TransitionTable<S> {
    fn from_iter<T: IntoIterator<Item = (StateId, S, StateId)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(q, sym, p)| ((q, sym), p))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{StateId, TransitionTable};

    fn q(index: u32) -> StateId {
        StateId::new(index)
    }

    #[test]
    fn lookup_present_and_absent() {
        let table: TransitionTable =
            [(q(0), 'a', q(1)), (q(1), 'b', q(1)), (q(1), 'c', q(2))]
                .into_iter()
                .collect();
        assert_eq!(table.lookup(q(0), 'a'), Some(q(1)));
        assert_eq!(table.lookup(q(1), 'b'), Some(q(1)));
        // absence is an answer, not an error
        assert_eq!(table.lookup(q(0), 'b'), None);
        assert_eq!(table.lookup(q(2), 'a'), None);
        assert_eq!(table.len(), 3);
        assert!(table.iter().any(|(from, sym, to)| (from, sym, to) == (q(1), 'c', q(2))));
    }

    #[test]
    fn state_display() {
        assert_eq!(q(0).to_string(), "q0");
        assert_eq!(q(10).to_string(), "q10");
    }
}
