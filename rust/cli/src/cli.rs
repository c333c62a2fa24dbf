//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "dealkit",
    version,
    about = "Build, shuffle and deal decks of cards"
)]
pub struct DealkitCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a deck, shuffle it and deal hands round-robin
    Deal {
        /// Deck id (defaults to the configured deck, normally "standard")
        #[arg(long)]
        deck: Option<String>,
        /// Number of players
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        players: Option<u16>,
        /// Cards dealt to each player
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        cards: Option<u16>,
        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
        /// Print hands as JSON
        #[arg(long)]
        json: bool,
    },
    /// List available deck ids, or print one definition
    Decks {
        /// Deck id to print
        id: Option<String>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_flags_parse() {
        let cli = DealkitCli::try_parse_from([
            "dealkit", "deal", "--deck", "pokemon", "--players", "3", "--cards", "5", "--seed",
            "9", "--json",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Deal {
                deck,
                players,
                cards,
                seed,
                json,
            } => {
                assert_eq!(deck.as_deref(), Some("pokemon"));
                assert_eq!(players, Some(3));
                assert_eq!(cards, Some(5));
                assert_eq!(seed, Some(9));
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn zero_players_rejected_by_parser() {
        assert!(DealkitCli::try_parse_from(["dealkit", "deal", "--players", "0"]).is_err());
        assert!(DealkitCli::try_parse_from(["dealkit", "deal", "--cards", "0"]).is_err());
    }
}
