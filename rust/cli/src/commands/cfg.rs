//! Configuration command handler.
//!
//! Prints every configuration key with its value and the layer it came from
//! (`default`, `file` or `env`).

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "deck": {
            "value": config.deck,
            "source": sources.deck,
        },
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "cards_per_hand": {
            "value": config.cards_per_hand,
            "source": sources.cards_per_hand,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "decks_dir": {
            "value": config.decks_dir,
            "source": sources.decks_dir,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
