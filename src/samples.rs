//! Ready-made automaton and transducer definitions.
//!
//! These are plain data: every function builds a fresh value through the public
//! builders, nothing is registered globally. The transition tables are transcribed
//! literally and are the authority on what each machine accepts. The pattern named
//! in a doc comment is orientation only, edge-case verdicts come from the table.

use std::str::FromStr;

use thiserror::Error;

use crate::{dfa::Dfa, moore::MooreMachine, Show};

/// Automaton for words shaped like `(ab*c*)*` over `{a, b, c}`.
///
/// The start state doubles as an accepting state, so the empty word is accepted.
/// Note that the table is stricter than the pattern suggests: once a `c` has been
/// read, no further `a` is possible.
pub fn automaton_a() -> Dfa {
    Dfa::builder()
        .with_transitions([(0, 'a', 1), (1, 'b', 1), (1, 'c', 2), (2, 'c', 2)])
        .with_accepting([0, 1, 2])
        .into_dfa(0)
}

/// Automaton for words shaped like `aaa(b|c)*|(b|c)*aaa` over `{a, b, c}`.
pub fn automaton_b() -> Dfa {
    Dfa::builder()
        .with_transitions([
            (0, 'a', 1),
            (1, 'a', 2),
            (2, 'a', 3),
            (3, 'b', 3),
            (3, 'c', 3),
            (0, 'b', 4),
            (0, 'c', 4),
            (4, 'b', 4),
            (4, 'c', 4),
            (4, 'a', 5),
            (5, 'a', 6),
            (6, 'a', 7),
        ])
        .with_accepting([3, 7])
        .into_dfa(0)
}

/// Automaton for words shaped like `a*b|ab*` over `{a, b}`.
pub fn automaton_c() -> Dfa {
    Dfa::builder()
        .with_transitions([
            (0, 'a', 1),
            (0, 'b', 5),
            (1, 'b', 4),
            (4, 'b', 4),
            (1, 'a', 2),
            (2, 'a', 2),
            (2, 'b', 3),
        ])
        .with_accepting([1, 3, 4, 5])
        .into_dfa(0)
}

/// Automaton for words shaped like `a*b*(a|ac*)` over `{a, b, c}`.
pub fn automaton_d() -> Dfa {
    Dfa::builder()
        .with_transitions([
            (0, 'a', 1),
            (0, 'b', 3),
            (1, 'b', 3),
            (1, 'a', 1),
            (1, 'c', 2),
            (2, 'c', 2),
            (3, 'a', 2),
            (3, 'b', 3),
        ])
        .with_accepting([1, 2])
        .into_dfa(0)
}

/// Automaton accepting exactly the word `computador`: one chain of eleven states
/// spelling the word letter by letter, with the last one accepting.
pub fn computador() -> Dfa {
    Dfa::builder()
        .with_transitions([
            (0, 'c', 1),
            (1, 'o', 2),
            (2, 'm', 3),
            (3, 'p', 4),
            (4, 'u', 5),
            (5, 't', 6),
            (6, 'a', 7),
            (7, 'd', 8),
            (8, 'o', 9),
            (9, 'r', 10),
        ])
        .with_accepting([10])
        .into_dfa(0)
}

/// Coin and bill denominations the soda machine register accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Coin {
    /// A 25 cent coin.
    TwentyFive,
    /// A 50 cent coin.
    Fifty,
    /// A bill worth one full unit, 100 cents.
    OneHundred,
}

impl Coin {
    /// The denomination value in cents.
    pub fn cents(self) -> u32 {
        match self {
            Coin::TwentyFive => 25,
            Coin::Fifty => 50,
            Coin::OneHundred => 100,
        }
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cents())
    }
}

impl Show for Coin {
    fn show(&self) -> String {
        self.to_string()
    }
}

/// Error returned when parsing a denomination from a string fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized denomination {0:?}, expected 25, 50 or 100")]
pub struct ParseCoinError(String);

impl FromStr for Coin {
    type Err = ParseCoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "25" => Ok(Coin::TwentyFive),
            "50" => Ok(Coin::Fifty),
            "100" => Ok(Coin::OneHundred),
            other => Err(ParseCoinError(other.to_string())),
        }
    }
}

/// Moore transducer of a soda vending register.
///
/// The eight states are the cumulative cents values `0, 25, ..., 175` in 25-cent
/// steps (state index times 25). Inserting a coin adds its value modulo 200, so a
/// register that has cycled a full two units starts its accounting over. A state
/// outputs `'1'` once the accumulated value is at least 100 cents, meaning the can
/// may be dispensed, and `'0'` otherwise.
pub fn soda_machine() -> MooreMachine<Coin, char> {
    use Coin::*;
    MooreMachine::builder()
        .with_state_colors(['0', '0', '0', '0', '1', '1', '1', '1'])
        .with_transitions([
            (0, TwentyFive, 1),
            (0, Fifty, 2),
            (0, OneHundred, 4),
            (1, TwentyFive, 2),
            (1, Fifty, 3),
            (1, OneHundred, 5),
            (2, TwentyFive, 3),
            (2, Fifty, 4),
            (2, OneHundred, 6),
            (3, TwentyFive, 4),
            (3, Fifty, 5),
            (3, OneHundred, 7),
            (4, TwentyFive, 5),
            (4, Fifty, 6),
            (4, OneHundred, 0),
            (5, TwentyFive, 6),
            (5, Fifty, 7),
            (5, OneHundred, 1),
            (6, TwentyFive, 7),
            (6, Fifty, 0),
            (6, OneHundred, 2),
            (7, TwentyFive, 0),
            (7, Fifty, 1),
            (7, OneHundred, 3),
        ])
        .into_moore(0)
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    use super::Coin::*;

    fn accepted(dfa: &Dfa, words: &[&str]) {
        for word in words {
            assert!(dfa.accepts(*word), "expected {word:?} to be accepted");
        }
    }

    fn rejected(dfa: &Dfa, words: &[&str]) {
        for word in words {
            assert!(!dfa.accepts(*word), "expected {word:?} to be rejected");
        }
    }

    #[test]
    fn automaton_a_verdicts() {
        let dfa = samples::automaton_a();
        accepted(&dfa, &["", "a", "ab", "ac", "abbbbc", "abcc"]);
        rejected(&dfa, &["b", "ca", "caaa", "aaacbccb", "abca", "abd"]);
    }

    #[test]
    fn automaton_b_verdicts() {
        let dfa = samples::automaton_b();
        accepted(&dfa, &["baaa", "caaa", "aaabcc", "aaacbccb", "aaabcbcbbcc"]);
        rejected(&dfa, &["", "aaaab", "baa", "aabacc", "bb"]);
    }

    #[test]
    fn automaton_c_verdicts() {
        let dfa = samples::automaton_c();
        accepted(&dfa, &["a", "b", "ab", "aaaab", "abbbbbb"]);
        rejected(&dfa, &["", "ba", "aaaabbb", "aaaaaa", "abc"]);
    }

    #[test]
    fn automaton_d_verdicts() {
        let dfa = samples::automaton_d();
        accepted(&dfa, &["a", "ac", "bba", "aaaaaa", "aaabbbac", "aabacc"]);
        rejected(&dfa, &["", "b", "bbaaaaccc", "ca"]);
    }

    #[test]
    fn computador_accepts_only_the_word_itself() {
        let dfa = samples::computador();
        assert_eq!(dfa.alphabet().size(), 9);
        accepted(&dfa, &["computador"]);
        rejected(&dfa, &["", "computado", "computadorr", "computadores", "cmoputador"]);
    }

    #[test]
    fn soda_machine_dispenses_from_one_unit_onwards() {
        let machine = samples::soda_machine();
        let outputs: String = machine
            .run([TwentyFive, Fifty, OneHundred])
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(outputs, "001");
    }

    #[test]
    fn soda_machine_register_wraps_at_two_units() {
        let machine = samples::soda_machine();
        let outputs: String = machine
            .run([OneHundred, OneHundred])
            .unwrap()
            .into_iter()
            .collect();
        // 100 + 100 cycles the register back to the empty state
        assert_eq!(outputs, "10");
        assert_eq!(machine.run([OneHundred, OneHundred, TwentyFive]).unwrap().last(), Some(&'0'));
    }

    #[test]
    fn soda_machine_states_track_the_accumulated_cents() {
        let machine = samples::soda_machine();
        let mut run = machine.start();
        run.step(TwentyFive).unwrap();
        assert_eq!(run.current(), StateId::new(1));
        run.step(Fifty).unwrap();
        assert_eq!(run.current(), StateId::new(3));
        run.step(OneHundred).unwrap();
        assert_eq!(run.current(), StateId::new(7));
        assert_eq!(machine.output_of(StateId::new(3)), Some(&'0'));
        assert_eq!(machine.output_of(StateId::new(7)), Some(&'1'));
        assert_eq!(machine.output_of(StateId::new(8)), None);
    }

    #[test]
    fn coin_parsing_round_trips() {
        for (text, coin) in [("25", TwentyFive), ("50", Fifty), ("100", OneHundred)] {
            assert_eq!(text.parse(), Ok(coin));
            assert_eq!(coin.to_string(), text);
        }
        assert!("10".parse::<Coin>().is_err());
        assert!("".parse::<Coin>().is_err());
    }
}
