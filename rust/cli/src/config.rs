use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub deck: String,
    pub players: usize,
    pub cards_per_hand: usize,
    pub seed: Option<u64>,
    pub decks_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub deck: ValueSource,
    pub players: ValueSource,
    pub cards_per_hand: ValueSource,
    pub seed: ValueSource,
    pub decks_dir: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            deck: ValueSource::Default,
            players: ValueSource::Default,
            cards_per_hand: ValueSource::Default,
            seed: ValueSource::Default,
            decks_dir: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deck: "standard".into(),
            players: 4,
            cards_per_hand: 13,
            seed: None,
            decks_dir: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves configuration: defaults, then the TOML file named by
/// `DEALKIT_CONFIG`, then `DEALKIT_*` environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("DEALKIT_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.deck {
            cfg.deck = v;
            sources.deck = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.cards_per_hand {
            cfg.cards_per_hand = v;
            sources.cards_per_hand = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.decks_dir {
            cfg.decks_dir = Some(v);
            sources.decks_dir = ValueSource::File;
        }
    }

    if let Ok(deck) = std::env::var("DEALKIT_DECK")
        && !deck.is_empty()
    {
        cfg.deck = deck;
        sources.deck = ValueSource::Env;
    }
    if let Ok(players) = std::env::var("DEALKIT_PLAYERS")
        && !players.is_empty()
    {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid players".into()))?;
        sources.players = ValueSource::Env;
    }
    if let Ok(cards) = std::env::var("DEALKIT_CARDS_PER_HAND")
        && !cards.is_empty()
    {
        cfg.cards_per_hand = cards
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid cards_per_hand".into()))?;
        sources.cards_per_hand = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("DEALKIT_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(dir) = std::env::var("DEALKIT_DECKS_DIR")
        && !dir.is_empty()
    {
        cfg.decks_dir = Some(PathBuf::from(dir));
        sources.decks_dir = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    deck: Option<String>,
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    cards_per_hand: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    decks_dir: Option<PathBuf>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.players == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: players must be >=1".into(),
        ));
    }
    if cfg.cards_per_hand == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: cards_per_hand must be >=1".into(),
        ));
    }
    if cfg.deck.is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: deck must not be empty".into(),
        ));
    }
    Ok(())
}
