use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ValidationError;

/// Number of suits every deck definition must carry.
pub const SUIT_COUNT: usize = 4;
/// Number of values every deck definition must carry.
pub const VALUE_COUNT: usize = 13;

/// Identifier resolved when no deck id is given.
pub const STANDARD_DECK_ID: &str = "standard";
pub const POKEMON_DECK_ID: &str = "pokemon";

/// A single playing card. Two cards with the same suit and value are interchangeable.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// Suit label, e.g. "Hearts"
    pub suit: String,
    /// Face value label, e.g. "Queen"
    pub value: String,
}

impl Card {
    pub fn new(suit: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            suit: suit.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.value, self.suit)
    }
}

/// The suit and value labels a deck is generated from.
///
/// Validation is deferred to [`crate::factory::create_cards`]; a definition may be
/// constructed in any shape and is only checked when cards are built from it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DeckDefinition {
    pub suits: Vec<String>,
    pub values: Vec<String>,
}

impl DeckDefinition {
    pub fn new<S, V>(suits: S, values: V) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Self {
            suits: suits.into_iter().map(Into::into).collect(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads a definition from untyped JSON, rejecting `suits`/`values` that
    /// are missing or are not arrays of strings.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        Ok(Self {
            suits: string_sequence(value, "suits")?,
            values: string_sequence(value, "values")?,
        })
    }

    /// Number of cards a deck built from this definition holds.
    pub fn deck_size(&self) -> usize {
        self.suits.len() * self.values.len()
    }
}

fn string_sequence(value: &Value, field: &'static str) -> Result<Vec<String>, ValidationError> {
    let items = value
        .get(field)
        .and_then(Value::as_array)
        .ok_or(ValidationError::NotASequence { field })?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or(ValidationError::NotASequence { field })
        })
        .collect()
}

pub fn standard_suits() -> [&'static str; SUIT_COUNT] {
    ["Hearts", "Diamonds", "Clubs", "Spades"]
}

pub fn standard_values() -> [&'static str; VALUE_COUNT] {
    [
        "Ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King",
    ]
}

/// The classic French-suited 52-card definition.
pub fn standard_definition() -> DeckDefinition {
    DeckDefinition::new(standard_suits(), standard_values())
}

/// A themed definition with elemental suits and creature values.
pub fn pokemon_definition() -> DeckDefinition {
    DeckDefinition::new(
        ["Fire", "Water", "Grass", "Electric"],
        [
            "Pikachu",
            "Charmander",
            "Squirtle",
            "Bulbasaur",
            "Jigglypuff",
            "Meowth",
            "Psyduck",
            "Snorlax",
            "Eevee",
            "Gengar",
            "Machop",
            "Onix",
            "Mewtwo",
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builtin_definitions_have_standard_shape() {
        for def in [standard_definition(), pokemon_definition()] {
            assert_eq!(def.suits.len(), SUIT_COUNT);
            assert_eq!(def.values.len(), VALUE_COUNT);
            assert_eq!(def.deck_size(), 52);
        }
        assert_ne!(standard_definition(), pokemon_definition());
    }

    #[test]
    fn card_display_reads_value_of_suit() {
        assert_eq!(Card::new("Spades", "Ace").to_string(), "Ace of Spades");
    }

    #[test]
    fn from_json_rejects_non_array_fields() {
        let bad_suits = json!({ "suits": "not an array", "values": standard_values() });
        assert_eq!(
            DeckDefinition::from_json(&bad_suits),
            Err(ValidationError::NotASequence { field: "suits" })
        );

        let bad_values = json!({ "suits": standard_suits(), "values": "not an array" });
        assert_eq!(
            DeckDefinition::from_json(&bad_values),
            Err(ValidationError::NotASequence { field: "values" })
        );

        let missing = json!({ "suits": standard_suits() });
        assert!(DeckDefinition::from_json(&missing).is_err());

        let numbers = json!({ "suits": [1, 2, 3, 4], "values": standard_values() });
        assert!(DeckDefinition::from_json(&numbers).is_err());
    }

    #[test]
    fn from_json_keeps_order() {
        let raw = json!({ "suits": standard_suits(), "values": standard_values() });
        let def = DeckDefinition::from_json(&raw).expect("valid json definition");
        assert_eq!(def, standard_definition());
    }
}
