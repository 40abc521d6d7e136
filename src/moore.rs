use thiserror::Error;
use tracing::trace;

use crate::{
    alphabet::{Alphabet, Symbol},
    math,
    transition_table::{StateId, TransitionTable},
    word::FiniteWord,
    Color,
};

/// Error signaled by [`MooreRun::step`]. Every variant is recoverable: the cursor is
/// left exactly where it was, no transition is attempted, and the caller may keep
/// stepping with other symbols.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StepError<S: Symbol> {
    /// The consumed symbol is not part of the machine's alphabet. This is the
    /// invalid-input case, signaled distinctly so that it can never be mistaken for
    /// a valid output symbol.
    #[error("symbol {0:?} is not part of the machine alphabet")]
    SymbolNotInAlphabet(S),
    /// The table defines no transition for the current state and this symbol.
    #[error("no transition from {state} on {symbol:?}")]
    UndefinedTransition {
        /// State the cursor was in when the lookup failed.
        state: StateId,
        /// Symbol for which no transition is defined.
        symbol: S,
    },
    /// The definition assigns no output to the state the transition leads to. Only
    /// reachable with a malformed definition, which degrades to this value instead
    /// of a panic.
    #[error("state {0} has no output symbol assigned")]
    MissingOutput(StateId),
}

/// A Moore machine: a finite-state transducer whose states each carry an output
/// symbol of type `O`.
///
/// Consuming an input symbol advances the state and emits the output of the state
/// that is *entered*: the output is a pure function of the state, not of the
/// transition taken. The definition itself is immutable and shareable; all mutation
/// lives in the [`MooreRun`] cursors handed out by [`MooreMachine::start`], so
/// independent input sequences always begin from a fresh initial state and can
/// never observe each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MooreMachine<S: Symbol, O: Color> {
    alphabet: Alphabet<S>,
    table: TransitionTable<S>,
    outputs: math::Map<StateId, O>,
    initial: StateId,
}

impl<S: Symbol, O: Color> MooreMachine<S, O> {
    /// Instantiates a new [`MooreBuilder`] for tuple-based construction.
    pub fn builder() -> MooreBuilder<S, O> {
        MooreBuilder::default()
    }

    /// Creates a machine from its parts. Construction never fails; a definition
    /// with missing outputs or transitions surfaces through [`StepError`] values
    /// when stepped, never as a panic.
    pub fn from_parts(
        alphabet: Alphabet<S>,
        table: TransitionTable<S>,
        outputs: math::Map<StateId, O>,
        initial: StateId,
    ) -> Self {
        Self {
            alphabet,
            table,
            outputs,
            initial,
        }
    }

    /// The alphabet of input symbols this machine consumes.
    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    /// The initial state every fresh run starts from.
    pub fn initial(&self) -> StateId {
        self.initial
    }

    /// The output symbol associated with `state`, if the definition assigns one.
    pub fn output_of(&self, state: StateId) -> Option<&O> {
        self.outputs.get(&state)
    }

    /// Begins a fresh run from the initial state. Each run owns its cursor
    /// exclusively; starting a new run never observes the progress of any other.
    pub fn start(&self) -> MooreRun<'_, S, O> {
        MooreRun {
            machine: self,
            current: self.initial,
        }
    }

    /// Runs the whole input sequence on a fresh cursor and collects one output per
    /// consumed symbol. Stops at the first [`StepError`], since a partial output
    /// sequence would no longer line up with the input.
    pub fn run<W: FiniteWord<S>>(&self, word: W) -> Result<Vec<O>, StepError<S>> {
        let mut run = self.start();
        word.symbols().map(|symbol| run.step(symbol)).collect()
    }
}

/// The exclusively owned cursor of one Moore machine run.
///
/// State persists across the symbols of one input sequence, stepping twice
/// continues where the first step left off. Separate runs are fully independent.
#[derive(Debug)]
pub struct MooreRun<'a, S: Symbol, O: Color> {
    machine: &'a MooreMachine<S, O>,
    current: StateId,
}

impl<'a, S: Symbol, O: Color> MooreRun<'a, S, O> {
    /// The state the cursor currently sits in.
    pub fn current(&self) -> StateId {
        self.current
    }

    /// Consumes one input symbol: advances the cursor along the table and returns
    /// the output of the state that was entered.
    ///
    /// On any [`StepError`] the cursor is left untouched, so the error is
    /// recoverable and the caller may continue with further symbols.
    pub fn step(&mut self, symbol: S) -> Result<O, StepError<S>> {
        if !self.machine.alphabet.contains(symbol) {
            return Err(StepError::SymbolNotInAlphabet(symbol));
        }
        let successor = self
            .machine
            .table
            .lookup(self.current, symbol)
            .ok_or(StepError::UndefinedTransition {
                state: self.current,
                symbol,
            })?;
        let output = self
            .machine
            .outputs
            .get(&successor)
            .cloned()
            .ok_or(StepError::MissingOutput(successor))?;
        trace!("consumed {symbol:?}, moved to {successor}");
        self.current = successor;
        Ok(output)
    }
}

/// Helper struct for the construction of Moore machines from a list of state
/// outputs and a list of transition tuples.
///
/// # Example
///
/// ```
/// use recognizer::prelude::*;
///
/// let machine: MooreMachine<char, u32> = MooreMachine::builder()
///     .with_state_colors([0, 1])
///     .with_transitions([(0, 'a', 1), (1, 'a', 0)])
///     .into_moore(0);
/// assert_eq!(machine.run("aa"), Ok(vec![1, 0]));
/// ```
pub struct MooreBuilder<S: Symbol, O: Color> {
    symbols: Vec<S>,
    edges: Vec<(u32, S, u32)>,
    colors: Vec<(u32, O)>,
}

impl<S: Symbol, O: Color> Default for MooreBuilder<S, O> {
    fn default() -> Self {
        Self {
            symbols: vec![],
            edges: vec![],
            colors: vec![],
        }
    }
}

impl<S: Symbol, O: Color> MooreBuilder<S, O> {
    /// Adds a list of output colors. The colors are assigned to the states in the
    /// order in which they are given, i.e. the first color to state 0 and so on.
    pub fn with_state_colors<I: IntoIterator<Item = O>>(self, iter: I) -> Self {
        iter.into_iter()
            .enumerate()
            .fold(self, |acc, (i, color)| acc.color(i as u32, color))
    }

    /// Assigns the given output `color` to the state with index `state`.
    pub fn color(mut self, state: u32, color: O) -> Self {
        self.colors.push((state, color));
        self
    }

    /// Adds a list of transitions, each given as a `(source, symbol, target)` tuple.
    pub fn with_transitions<I>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = (u32, S, u32)>,
    {
        self.edges.extend(iter);
        self
    }

    /// Forces additional symbols into the alphabet, beyond those appearing on
    /// transitions.
    pub fn with_alphabet_symbols<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.symbols.extend(symbols);
        self
    }

    /// Builds the machine with `initial` as the state every fresh run starts from.
    /// Never fails; states without an assigned output are only traced and surface
    /// as [`StepError::MissingOutput`] if a run ever enters them.
    pub fn into_moore(self, initial: u32) -> MooreMachine<S, O> {
        let alphabet: Alphabet<S> = self
            .edges
            .iter()
            .map(|&(_, sym, _)| sym)
            .chain(self.symbols)
            .collect();
        for &(_, _, target) in &self.edges {
            if self.colors.iter().all(|&(q, _)| q != target) {
                trace!("state q{target} is reachable but has no output assigned");
            }
        }
        let table = self
            .edges
            .into_iter()
            .map(|(q, sym, p)| (StateId::new(q), sym, StateId::new(p)))
            .collect();
        let outputs = self
            .colors
            .into_iter()
            .map(|(q, color)| (StateId::new(q), color))
            .collect();
        MooreMachine::from_parts(alphabet, table, outputs, StateId::new(initial))
    }
}
