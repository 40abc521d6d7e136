//! Library for evaluating input sequences against explicitly defined finite automata.
//!
//! The central piece is the [`dfa::Dfa`] type, which bundles an automaton definition
//! (state set, alphabet, transition table, initial state and accepting states) and
//! judges whole input sequences: a word is accepted precisely if consuming it symbol
//! by symbol from the initial state ends in an accepting state. Evaluation is total
//! and never fails: a symbol outside the declared alphabet or a missing table entry
//! simply leads to rejection. Missing entries are a first-class condition of the
//! [`transition_table::TransitionTable`], not an error: once a run walks off the
//! table, it stays off and the verdict is `false`.
//!
//! Next to the acceptor lives the [`moore::MooreMachine`], a transducer whose states
//! carry an output symbol. Instead of a single verdict, stepping it emits one output
//! per consumed symbol, read off the state that is entered. Runs of a machine are
//! separate, exclusively owned cursors ([`moore::MooreRun`]), so independent input
//! sequences can never contaminate each other.
//!
//! On top of the acceptor, [`scan`] implements scanning of whole text blocks: the
//! text is cleaned of punctuation, split on whitespace and each token is judged by a
//! [`dfa::Dfa`], yielding the 1-based positions of the accepted tokens.
//!
//! Definitions are immutable once built and can be shared freely across threads;
//! anything that moves during evaluation lives in the evaluating call or cursor.
//! Construction goes through tuple-based builders:
//!
//! ```
//! use recognizer::prelude::*;
//!
//! let dfa = Dfa::builder()
//!     .with_transitions([(0, 'a', 1), (1, 'b', 1), (1, 'c', 2), (2, 'c', 2)])
//!     .with_accepting([0, 1, 2])
//!     .into_dfa(0);
//!
//! assert!(dfa.accepts("abbbbc"));
//! assert!(!dfa.accepts("ca"));
//! ```
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Importing everything,
/// i.e. `use recognizer::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::{Alphabet, CharAlphabet, Symbol},
        dfa::{Dfa, DfaBuilder},
        math,
        moore::{MooreBuilder, MooreMachine, MooreRun, StepError},
        samples,
        samples::Coin,
        scan::{strip_punctuation, ScanReport},
        transition_table::{StateId, TransitionTable},
        word::FiniteWord,
        Color, Show,
    };
}

/// Type aliases for the collections used throughout the crate.
pub mod math;

mod show;
pub use show::Show;

/// Alphabets and the membership guard run before any evaluation.
pub mod alphabet;

/// Finite input words and the symbol iteration they provide.
pub mod word;

/// The immutable `(state, symbol) -> state` mapping underlying all machines.
pub mod transition_table;

/// Deterministic finite automata and their whole-word acceptance.
pub mod dfa;

/// Moore machines: state-output transducers evaluated step by step.
pub mod moore;

/// Scanning prose for tokens accepted by an automaton.
pub mod scan;

/// Ready-made sample definitions used by the demo binaries and tests.
pub mod samples;

use std::{fmt::Debug, hash::Hash};

/// A color is a value attached to a state, used as the output symbol of a
/// [`moore::MooreMachine`]. Anything clonable, hashable, orderable and showable
/// qualifies.
pub trait Color: Clone + Eq + Ord + Hash + Debug + Show {}
impl<T: Clone + Eq + Ord + Hash + Debug + Show> Color for T {}
