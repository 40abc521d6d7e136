//! Interactive driver: pick one of the sample automata, validate a string against
//! it, then run the fixed batch corpus through it.

use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;
use recognizer::prelude::*;

/// The fixed list of strings the batch mode feeds through the chosen automaton.
const BATCH: [&str; 20] = [
    "",
    "ac",
    "a",
    "abbbbc",
    "abcc",
    "aaacbccb",
    "aaabcbcbbcc",
    "baaa",
    "caaa",
    "aaabcc",
    "b",
    "ab",
    "aaaab",
    "abbbbbb",
    "aaaabbb",
    "aaabbbac",
    "bbaaaaccc",
    "bba",
    "aaaaaa",
    "aabacc",
];

fn report(dfa: &Dfa, word: &str) {
    if dfa.accepts(word) {
        println!("{:?} is {}", word, "RECOGNIZED".green());
    } else {
        println!("{:?} is {}", word, "REJECTED".red());
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt::init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let (number, dfa) = loop {
        println!("1 - (ab*c*)*");
        println!("2 - aaa(b|c)*|(b|c)*aaa");
        println!("3 - a*b|ab*");
        println!("4 - a*b*(a|ac*)");
        print!("number of the automaton to validate against: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        match line?.trim().parse::<u32>() {
            Ok(n @ 1) => break (n, samples::automaton_a()),
            Ok(n @ 2) => break (n, samples::automaton_b()),
            Ok(n @ 3) => break (n, samples::automaton_c()),
            Ok(n @ 4) => break (n, samples::automaton_d()),
            _ => println!("invalid choice, pick a number between 1 and 4"),
        }
    };

    println!("{}", dfa.show_table());

    print!("string to validate: ");
    io::stdout().flush()?;
    if let Some(line) = lines.next() {
        report(&dfa, line?.trim());
    }

    println!();
    println!("batch results for automaton {number}:");
    for word in BATCH {
        report(&dfa, word);
    }
    Ok(())
}
