//! Feeds fixed coin sequences through the soda machine transducer, one fresh run
//! per sequence, and prints the output string produced alongside each input.

use owo_colors::OwoColorize;
use recognizer::prelude::*;

/// Coin sequences to demonstrate, as entered at a vending machine keypad.
const SEQUENCES: [&[&str]; 20] = [
    &["25", "50", "100"],
    &["100", "25", "50"],
    &["50", "100", "25"],
    &["25", "100", "50"],
    &["50", "25", "100"],
    &["100", "50", "25"],
    &["25", "50", "100", "25"],
    &["25", "100", "50", "100"],
    &["50", "100", "25", "50"],
    &["100", "25", "50", "100"],
    &["25", "50", "100", "25", "50"],
    &["25", "100", "50", "100", "25"],
    &["50", "100", "25", "50", "100"],
    &["100", "25", "50", "100", "25"],
    &["25", "50", "100", "25", "50", "100"],
    &["25", "100", "50", "100", "25", "50"],
    &["50", "100", "25", "50", "100", "25"],
    &["100", "25", "50", "100", "25", "50"],
    &["25", "50", "100", "25", "50", "100", "25"],
    &["25", "100", "50", "100", "25", "50", "100"],
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let machine = samples::soda_machine();
    for sequence in SEQUENCES {
        let coins = sequence
            .iter()
            .map(|text| text.parse::<Coin>())
            .collect::<Result<Vec<_>, _>>()?;
        let outputs: String = machine.run(&coins)?.into_iter().collect();
        println!(
            "sequence {} -> {}",
            sequence.join(" "),
            outputs.bold().yellow()
        );
    }
    Ok(())
}
