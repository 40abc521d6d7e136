use tracing::trace;

use crate::dfa::Dfa;

/// The fixed set of punctuation characters removed before tokenization.
const PUNCTUATION: [char; 6] = ['.', ',', ':', ';', '?', '!'];

/// Removes the fixed punctuation set (period, comma, colon, semicolon, question
/// mark, exclamation mark) from `text`. All other characters, including whitespace,
/// pass through unchanged.
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
}

/// The outcome of scanning a block of text with [`Dfa::scan`]: the 1-based
/// positions of the accepted tokens, in text order. The occurrence count is always
/// the number of reported positions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanReport {
    positions: Vec<usize>,
}

impl ScanReport {
    /// How many tokens were accepted.
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    /// The 1-based positions of the accepted tokens among all tokens of the text.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }
}

impl Dfa<char> {
    /// Reports which whitespace-delimited tokens of `text` are accepted by this
    /// automaton, and at which 1-based positions.
    ///
    /// The text is first cleaned with [`strip_punctuation`], then split on
    /// whitespace (empty tokens from consecutive whitespace are dropped). Each
    /// token is judged by an independent [`Dfa::accepts`] call; scanning mutates
    /// nothing and can be repeated with identical results.
    pub fn scan(&self, text: &str) -> ScanReport {
        let cleaned = strip_punctuation(text);
        let mut positions = Vec::new();
        for (index, token) in cleaned.split_whitespace().enumerate() {
            if self.accepts(token) {
                positions.push(index + 1);
            }
        }
        trace!(
            "scan accepted {} of the {} tokens",
            positions.len(),
            cleaned.split_whitespace().count()
        );
        ScanReport { positions }
    }
}

#[cfg(test)]
mod tests {
    use lazy_static::lazy_static;

    use crate::prelude::*;

    lazy_static! {
        static ref COMPUTADOR: Dfa = samples::computador();
    }

    #[test]
    fn punctuation_is_stripped() {
        assert_eq!(
            strip_punctuation("O computador, o computador."),
            "O computador o computador"
        );
        assert_eq!(strip_punctuation("a.b,c:d;e?f!g"), "abcdefg");
        assert_eq!(strip_punctuation("untouched text"), "untouched text");
    }

    #[test]
    fn positions_are_one_based() {
        let report = COMPUTADOR.scan("O computador, o computador.");
        assert_eq!(report.count(), 2);
        assert_eq!(report.positions(), &[2, 4]);
    }

    #[test]
    fn nothing_to_report_on_foreign_text() {
        let report = COMPUTADOR.scan("nada para encontrar aqui");
        assert_eq!(report.count(), 0);
        assert!(report.positions().is_empty());
    }

    #[test]
    fn consecutive_whitespace_produces_no_tokens() {
        let report = COMPUTADOR.scan("  computador   computador  ");
        assert_eq!(report.positions(), &[1, 2]);
    }

    #[test]
    fn empty_text_is_empty_report() {
        let report = COMPUTADOR.scan("");
        assert_eq!(report, ScanReport::default());
    }

    #[test]
    fn substrings_are_not_occurrences() {
        // whole-token acceptance only, "computadores" is a different token
        let report = COMPUTADOR.scan("os computadores e o computador");
        assert_eq!(report.positions(), &[5]);
    }
}
