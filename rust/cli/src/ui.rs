//! UI helper functions for terminal output formatting.

use std::io::Write;

use dealkit_engine::dealer::Hand;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// One line per hand: `Player N: card, card, ...`
pub fn write_hands(out: &mut dyn Write, hands: &[Hand]) -> std::io::Result<()> {
    for (i, hand) in hands.iter().enumerate() {
        let cards: Vec<String> = hand.iter().map(ToString::to_string).collect();
        writeln!(out, "Player {}: {}", i + 1, cards.join(", "))?;
    }
    Ok(())
}
