use thiserror::Error;

/// Rejection raised by the card factory before any card is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("`{field}` must be an ordered sequence of strings")]
    NotASequence { field: &'static str },
    #[error("Deck definition needs exactly 4 suits, got {actual}")]
    SuitCount { actual: usize },
    #[error("Deck definition needs exactly 13 values, got {actual}")]
    ValueCount { actual: usize },
    #[error("Deck definition contains duplicates in `{field}`: {duplicate}")]
    Duplicate {
        field: &'static str,
        duplicate: String,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DealError {
    #[error("Cards per hand must be at least 1")]
    NoCardsPerHand,
    #[error("Number of players must be at least 1")]
    NoPlayers,
    #[error("Dealing {cards_per_hand} cards to {num_players} players overflows")]
    CountOverflow {
        cards_per_hand: usize,
        num_players: usize,
    },
    #[error("Not enough cards to deal: need {needed}, have {available}")]
    InsufficientCards { needed: usize, available: usize },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("deck definition not found: {id}")]
    NotFound { id: String },
    #[error("deck definition `{id}` could not be read: {source}")]
    Io {
        id: String,
        #[source]
        source: std::io::Error,
    },
    #[error("deck definition `{id}` is malformed: {reason}")]
    Invalid { id: String, reason: String },
}

impl LoadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }
}
