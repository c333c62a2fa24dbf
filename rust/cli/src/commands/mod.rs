//! Command handler modules for the dealkit CLI.
//!
//! Each command lives in its own file and exposes
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`, taking its
//! output streams as `&mut dyn Write`.

mod cfg;
mod deal;
mod decks;

pub use cfg::handle_cfg_command;
pub use deal::{handle_deal_command, DealArgs};
pub use decks::handle_decks_command;

use std::future::Future;
use std::path::PathBuf;

use dealkit_engine::cards::DeckDefinition;
use dealkit_engine::errors::LoadError;
use dealkit_engine::loader::{BuiltinRepository, DeckRepository, JsonDirRepository};

use crate::error::CliError;

/// Deck lookup used by the commands: the configured decks directory first,
/// then the built-in definitions.
#[derive(Debug, Clone, Default)]
pub(crate) struct CliDecks {
    dir: Option<JsonDirRepository>,
}

impl CliDecks {
    pub(crate) fn new(decks_dir: Option<PathBuf>) -> Self {
        Self {
            dir: decks_dir.map(JsonDirRepository::new),
        }
    }
}

impl DeckRepository for CliDecks {
    async fn lookup(&self, id: &str) -> Result<DeckDefinition, LoadError> {
        if let Some(dir) = &self.dir {
            match dir.lookup(id).await {
                Err(e) if e.is_not_found() => {}
                found => return found,
            }
        }
        BuiltinRepository.lookup(id).await
    }
}

/// Drives an engine future to completion on a single-threaded runtime.
pub(crate) fn block_on<F: Future>(fut: F) -> Result<F::Output, CliError> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(rt.block_on(fut))
}
