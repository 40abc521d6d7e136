use itertools::Itertools;
use tracing::trace;

use crate::{
    alphabet::{Alphabet, Symbol},
    math,
    transition_table::{StateId, TransitionTable},
    word::FiniteWord,
    Show,
};

/// A deterministic finite automaton over symbols of type `S`.
///
/// A definition is immutable once constructed and can be shared freely; every call
/// to [`Dfa::accepts`] is an independent evaluation run that owns its own cursor.
/// Acceptance is judged on the whole word: the word is consumed left to right, with
/// no backtracking, and the verdict is whether the state reached at the end of the
/// input is accepting.
///
/// Two conditions lead to rejection without ever being an error. A word containing
/// a symbol outside the declared alphabet is rejected up front, before any
/// transition is taken. A missing table entry turns the cursor into an undefined
/// sentinel that sticks for the rest of the word (the run cannot self-heal), and an
/// undefined cursor is never accepting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dfa<S: Symbol = char> {
    states: math::Set<StateId>,
    alphabet: Alphabet<S>,
    table: TransitionTable<S>,
    initial: StateId,
    accepting: math::Set<StateId>,
}

impl<S: Symbol> Dfa<S> {
    /// Instantiates a new [`DfaBuilder`] for tuple-based construction.
    pub fn builder() -> DfaBuilder<S> {
        DfaBuilder::default()
    }

    /// Creates an automaton from its five parts. Construction never fails; a
    /// definition referencing inconsistent states is accepted here and surfaces
    /// later as systematic rejection, never as a crash.
    pub fn from_parts(
        states: math::Set<StateId>,
        alphabet: Alphabet<S>,
        table: TransitionTable<S>,
        initial: StateId,
        accepting: math::Set<StateId>,
    ) -> Self {
        Self {
            states,
            alphabet,
            table,
            initial,
            accepting,
        }
    }

    /// The set of states of this automaton.
    pub fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().copied()
    }

    /// The alphabet this automaton is defined over.
    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    /// The transition table of this automaton.
    pub fn transitions(&self) -> &TransitionTable<S> {
        &self.table
    }

    /// The initial state.
    pub fn initial(&self) -> StateId {
        self.initial
    }

    /// Whether the given state belongs to the accepting set.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(&state)
    }

    /// Returns whether the automaton accepts the given word.
    ///
    /// The alphabet guard runs first: if any symbol of `word` lies outside the
    /// alphabet, the word is rejected without attempting a single transition. The
    /// empty word trivially passes the guard, so its verdict is simply whether the
    /// initial state is accepting.
    pub fn accepts<W: FiniteWord<S>>(&self, word: W) -> bool {
        if !self.alphabet.contains_all(word.symbols()) {
            trace!("rejecting word, it contains symbols outside of the alphabet");
            return false;
        }
        self.reached(word)
            .is_some_and(|state| self.accepting.contains(&state))
    }

    /// Runs `word` from the initial state and returns the state in which the run
    /// ends, or `None` once the run has walked off the table. No alphabet guard is
    /// applied here; a symbol the table has never seen simply yields `None`.
    pub fn reached<W: FiniteWord<S>>(&self, word: W) -> Option<StateId> {
        let mut current = Some(self.initial);
        for symbol in word.symbols() {
            current = match current {
                Some(state) => {
                    let successor = self.table.lookup(state, symbol);
                    if successor.is_none() {
                        trace!("no transition from {state} on {symbol:?}, run is stuck");
                    }
                    successor
                }
                None => None,
            };
        }
        current
    }

    /// Returns a string rendering of the transition table, one row per state. The
    /// initial state is marked with `→`, accepting states with `*`, and missing
    /// entries with `-`.
    pub fn show_table(&self) -> String {
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once("state".to_string()).chain(self.alphabet.universe().map(|s| s.show())),
        );
        for state in self.states.iter().sorted() {
            let mut row = vec![format!(
                "{}{}{}",
                if *state == self.initial { "→" } else { "" },
                state.show(),
                if self.accepting.contains(state) { "*" } else { "" }
            )];
            for symbol in self.alphabet.universe() {
                row.push(
                    self.table
                        .lookup(*state, symbol)
                        .map(|p| p.show())
                        .unwrap_or_else(|| "-".to_string()),
                );
            }
            builder.push_record(row);
        }
        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}

/// Helper struct for the construction of automata from lists of transition tuples,
/// in the order source state, symbol, target state.
///
/// # Example
///
/// ```
/// use recognizer::prelude::*;
///
/// let dfa = Dfa::builder()
///     .with_transitions([(0, 'a', 1), (1, 'a', 1), (1, 'b', 0)])
///     .with_accepting([0])
///     .into_dfa(0);
/// assert!(dfa.accepts("aab"));
/// ```
pub struct DfaBuilder<S: Symbol = char> {
    symbols: Vec<S>,
    edges: Vec<(u32, S, u32)>,
    accepting: Vec<u32>,
}

impl<S: Symbol> Default for DfaBuilder<S> {
    fn default() -> Self {
        Self {
            symbols: vec![],
            edges: vec![],
            accepting: vec![],
        }
    }
}

impl<S: Symbol> DfaBuilder<S> {
    /// Adds a list of transitions, each given as a `(source, symbol, target)` tuple.
    pub fn with_transitions<I>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = (u32, S, u32)>,
    {
        self.edges.extend(iter);
        self
    }

    /// By default the alphabet consists of exactly the symbols appearing on at least
    /// one transition. This method forces additional symbols into the alphabet.
    pub fn with_alphabet_symbols<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.symbols.extend(symbols);
        self
    }

    /// Marks the given states as accepting. May be empty, may cover every state.
    pub fn with_accepting<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        self.accepting.extend(states);
        self
    }

    /// Builds the automaton with `initial` as the designated initial state. The
    /// state set is inferred from the transitions, the accepting set and the
    /// initial state. Never fails; obviously incomplete shapes are only traced.
    pub fn into_dfa(self, initial: u32) -> Dfa<S> {
        let alphabet: Alphabet<S> = self
            .edges
            .iter()
            .map(|&(_, sym, _)| sym)
            .chain(self.symbols)
            .collect();
        let states: math::Set<StateId> = self
            .edges
            .iter()
            .flat_map(|&(q, _, p)| [q, p])
            .chain(self.accepting.iter().copied())
            .chain(std::iter::once(initial))
            .map(StateId::new)
            .collect();

        if !self.edges.iter().any(|&(q, _, _)| q == initial) {
            trace!("initial state q{initial} has no outgoing transitions");
        }
        for &acc in &self.accepting {
            if acc != initial && !self.edges.iter().any(|&(_, _, p)| p == acc) {
                trace!("accepting state q{acc} is not the target of any transition");
            }
        }

        let table = self
            .edges
            .into_iter()
            .map(|(q, sym, p)| (StateId::new(q), sym, StateId::new(p)))
            .collect();
        let accepting = self.accepting.into_iter().map(StateId::new).collect();
        Dfa::from_parts(states, alphabet, table, StateId::new(initial), accepting)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn blocks() -> Dfa {
        // one 'a', then arbitrarily many 'b's followed by arbitrarily many 'c's,
        // repeatable from the start as long as no 'c' ever precedes a fresh 'a'
        Dfa::builder()
            .with_transitions([(0, 'a', 1), (1, 'b', 1), (1, 'c', 2), (2, 'c', 2)])
            .with_accepting([0, 1, 2])
            .into_dfa(0)
    }

    #[test]
    fn guard_rejects_foreign_symbols() {
        let dfa = blocks();
        assert!(!dfa.accepts("abd"));
        assert!(!dfa.accepts("d"));
        // the guard runs before the walk, so even a word whose prefix is fine rejects
        assert!(!dfa.accepts("abbbbcx"));
    }

    #[test]
    fn empty_word_is_judged_at_the_initial_state() {
        let dfa = blocks();
        assert!(dfa.accepts(""));

        let strict = Dfa::builder()
            .with_transitions([(0, 'a', 1)])
            .with_accepting([1])
            .into_dfa(0);
        assert!(!strict.accepts(""));
    }

    #[test_log::test]
    fn undefined_transitions_stick() {
        let dfa = blocks();
        // q2 has no 'a' transition, the run goes undefined and stays undefined
        assert_eq!(dfa.reached("abca"), None);
        assert_eq!(dfa.reached("abcaa"), None);
        assert!(!dfa.accepts("abca"));
    }

    #[test]
    fn verdicts_follow_the_table_not_the_pattern() {
        let dfa = blocks();
        // "ac" ends in q2, which is accepting
        assert_eq!(dfa.reached("ac"), Some(StateId::new(2)));
        assert!(dfa.accepts("ac"));
        assert!(dfa.accepts("abbbbc"));
        assert!(dfa.accepts("a"));
        assert!(!dfa.accepts("ca"));
    }

    #[test]
    fn evaluation_is_deterministic_across_calls() {
        let dfa = blocks();
        for _ in 0..2 {
            assert!(dfa.accepts("abc"));
            assert!(!dfa.accepts("abca"));
        }
    }

    #[test]
    fn alphabet_can_exceed_the_table() {
        let dfa = Dfa::builder()
            .with_transitions([(0, 'a', 0)])
            .with_alphabet_symbols(['b'])
            .with_accepting([0])
            .into_dfa(0);
        // 'b' passes the guard but has no transitions, so the run gets stuck
        assert!(dfa.accepts("aaa"));
        assert!(!dfa.accepts("ab"));
    }

    #[test]
    fn table_rendering_marks_initial_and_accepting() {
        let rendered = blocks().show_table();
        assert!(rendered.contains("→q0*"));
        assert!(rendered.contains("q2*"));
        assert!(rendered.contains('-'));
    }
}
