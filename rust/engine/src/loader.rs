//! Asynchronous resolution of deck identifiers to [`DeckDefinition`]s.
//!
//! [`DeckLoader`] owns the id defaulting and logging; where definitions live
//! is decided by the [`DeckRepository`] it wraps. Three repositories ship with
//! the crate:
//!
//! - [`BuiltinRepository`] - the `standard` and `pokemon` definitions
//! - [`InMemoryRepository`] - a caller-populated map
//! - [`JsonDirRepository`] - one `<id>.json` file per definition in a directory
//!
//! Every lookup is a single attempt; there is no retry or backoff.

use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;

use crate::cards::{
    pokemon_definition, standard_definition, DeckDefinition, POKEMON_DECK_ID, STANDARD_DECK_ID,
};
use crate::errors::LoadError;

/// Lookup-by-id storage for deck definitions.
pub trait DeckRepository {
    /// Resolves `id`, failing with [`LoadError::NotFound`] for unknown ids.
    fn lookup(&self, id: &str) -> impl Future<Output = Result<DeckDefinition, LoadError>> + Send;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRepository;

impl BuiltinRepository {
    pub fn ids() -> [&'static str; 2] {
        [STANDARD_DECK_ID, POKEMON_DECK_ID]
    }
}

impl DeckRepository for BuiltinRepository {
    async fn lookup(&self, id: &str) -> Result<DeckDefinition, LoadError> {
        match id {
            STANDARD_DECK_ID => Ok(standard_definition()),
            POKEMON_DECK_ID => Ok(pokemon_definition()),
            other => Err(LoadError::NotFound { id: other.into() }),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    decks: HashMap<String, DeckDefinition>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the map with the built-in definitions.
    pub fn with_builtins() -> Self {
        let mut repo = Self::new();
        repo.insert(STANDARD_DECK_ID, standard_definition());
        repo.insert(POKEMON_DECK_ID, pokemon_definition());
        repo
    }

    pub fn insert(&mut self, id: impl Into<String>, definition: DeckDefinition) {
        self.decks.insert(id.into(), definition);
    }

    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.decks.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl DeckRepository for InMemoryRepository {
    async fn lookup(&self, id: &str) -> Result<DeckDefinition, LoadError> {
        self.decks
            .get(id)
            .cloned()
            .ok_or_else(|| LoadError::NotFound { id: id.into() })
    }
}

/// Reads `<dir>/<id>.json` files shaped `{"suits": [...], "values": [...]}`.
#[derive(Debug, Clone)]
pub struct JsonDirRepository {
    dir: PathBuf,
}

impl JsonDirRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Ids this repository can serve: non-empty ASCII alphanumerics, `-`
    /// and `_`. Ids map straight onto file names, so nothing that could
    /// leave `dir`.
    pub fn is_valid_id(id: &str) -> bool {
        !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    fn path_for(&self, id: &str) -> Option<PathBuf> {
        Self::is_valid_id(id).then(|| self.dir.join(format!("{id}.json")))
    }
}

impl DeckRepository for JsonDirRepository {
    async fn lookup(&self, id: &str) -> Result<DeckDefinition, LoadError> {
        let Some(path) = self.path_for(id) else {
            return Err(LoadError::NotFound { id: id.into() });
        };
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LoadError::NotFound { id: id.into() });
            }
            Err(source) => {
                return Err(LoadError::Io {
                    id: id.into(),
                    source,
                });
            }
        };
        let value: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| LoadError::Invalid {
                id: id.into(),
                reason: e.to_string(),
            })?;
        DeckDefinition::from_json(&value).map_err(|e| LoadError::Invalid {
            id: id.into(),
            reason: e.to_string(),
        })
    }
}

/// Resolves deck ids through a repository, defaulting to `standard`.
#[derive(Debug, Clone, Default)]
pub struct DeckLoader<R> {
    repository: R,
}

impl<R: DeckRepository> DeckLoader<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn load(&self, id: Option<&str>) -> Result<DeckDefinition, LoadError> {
        let id = id.unwrap_or(STANDARD_DECK_ID);
        match self.repository.lookup(id).await {
            Ok(definition) => {
                tracing::debug!(
                    id,
                    suits = definition.suits.len(),
                    values = definition.values.len(),
                    "loaded deck definition"
                );
                Ok(definition)
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "deck definition lookup failed");
                Err(e)
            }
        }
    }
}

/// Loads a built-in definition; `None` resolves to the standard deck.
///
/// ```
/// let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// let deck = rt
///     .block_on(dealkit_engine::loader::load_deck(Some("pokemon")))
///     .unwrap();
/// assert_eq!(deck.suits.len(), 4);
/// assert_eq!(deck.values.len(), 13);
/// ```
pub async fn load_deck(id: Option<&str>) -> Result<DeckDefinition, LoadError> {
    DeckLoader::new(BuiltinRepository).load(id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_dir_rejects_path_like_ids() {
        let repo = JsonDirRepository::new("/decks");
        assert!(repo.path_for("../etc/passwd").is_none());
        assert!(repo.path_for("a/b").is_none());
        assert!(repo.path_for("").is_none());
        assert_eq!(
            repo.path_for("tarot_minor-1"),
            Some(PathBuf::from("/decks/tarot_minor-1.json"))
        );
        assert!(!JsonDirRepository::is_valid_id("my deck"));
        assert!(JsonDirRepository::is_valid_id("tarot_minor-1"));
    }

    #[tokio::test]
    async fn in_memory_lists_sorted_ids() {
        let repo = InMemoryRepository::with_builtins();
        assert_eq!(repo.ids(), vec!["pokemon", "standard"]);
        assert!(repo.lookup("standard").await.is_ok());
    }

    #[tokio::test]
    async fn loader_defaults_to_standard() {
        let loader = DeckLoader::new(InMemoryRepository::with_builtins());
        assert_eq!(loader.load(None).await.unwrap(), standard_definition());
    }
}
