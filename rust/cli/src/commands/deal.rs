//! Deal command handler.
//!
//! Runs the whole pipeline: resolve the deck id, build the cards, shuffle
//! (seeded when a seed is configured) and deal round-robin.

use std::io::Write;

use dealkit_engine::dealer::deal;
use dealkit_engine::factory::create_cards;
use dealkit_engine::loader::DeckLoader;
use dealkit_engine::shuffle::{shuffle, shuffle_with, SeededRandom};

use super::{block_on, CliDecks};
use crate::config;
use crate::error::CliError;
use crate::ui;

/// Options from the command line. `None` falls back to configuration.
#[derive(Debug, Clone, Default)]
pub struct DealArgs {
    pub deck: Option<String>,
    pub players: Option<usize>,
    pub cards: Option<usize>,
    pub seed: Option<u64>,
    pub json: bool,
}

pub fn handle_deal_command(args: DealArgs, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load()?;
    let deck_id = args.deck.unwrap_or(cfg.deck);
    let players = args.players.unwrap_or(cfg.players);
    let cards_per_hand = args.cards.unwrap_or(cfg.cards_per_hand);
    let seed = args.seed.or(cfg.seed);
    tracing::debug!(deck = %deck_id, players, cards_per_hand, ?seed, "dealing");

    let loader = DeckLoader::new(CliDecks::new(cfg.decks_dir));
    let definition = block_on(loader.load(Some(deck_id.as_str())))??;
    let cards = create_cards(&definition)?;
    let shuffled = match seed {
        Some(s) => shuffle_with(&cards, &mut SeededRandom::new(s)),
        None => shuffle(&cards),
    };
    let hands = deal(&shuffled, cards_per_hand, players)?;

    if args.json {
        let body = serde_json::json!({
            "deck": deck_id,
            "seed": seed,
            "hands": hands,
        });
        let s = serde_json::to_string_pretty(&body).map_err(std::io::Error::other)?;
        writeln!(out, "{}", s)?;
    } else {
        ui::write_hands(out, &hands)?;
    }
    Ok(())
}
