//! Decks command handler: list ids or print a single definition.

use std::io::Write;
use std::path::Path;

use dealkit_engine::loader::{BuiltinRepository, DeckLoader, JsonDirRepository};

use super::{block_on, CliDecks};
use crate::config;
use crate::error::CliError;

pub fn handle_decks_command(id: Option<String>, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load()?;

    let Some(id) = id else {
        let mut ids: Vec<String> = BuiltinRepository::ids().into_iter().map(String::from).collect();
        if let Some(dir) = &cfg.decks_dir {
            ids.extend(json_ids(dir)?);
        }
        for id in ids {
            writeln!(out, "{}", id)?;
        }
        return Ok(());
    };

    let loader = DeckLoader::new(CliDecks::new(cfg.decks_dir));
    let definition = block_on(loader.load(Some(id.as_str())))??;
    let s = serde_json::to_string_pretty(&definition).map_err(std::io::Error::other)?;
    writeln!(out, "{}", s)?;
    Ok(())
}

/// Loadable ids contributed by `*.json` files in `dir`, sorted. Built-in ids
/// are left out since they are already listed; a missing directory adds
/// nothing, matching how `deal` falls back to the built-ins.
fn json_ids(dir: &Path) -> Result<Vec<String>, CliError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    let builtins = BuiltinRepository::ids();
    let mut ids = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if JsonDirRepository::is_valid_id(stem) && !builtins.contains(&stem) {
            ids.push(stem.to_string());
        }
    }
    ids.sort();
    Ok(ids)
}
