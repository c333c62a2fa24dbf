use std::collections::HashSet;

use crate::cards::{Card, DeckDefinition, SUIT_COUNT, VALUE_COUNT};
use crate::errors::ValidationError;

/// Builds the full ordered deck for a definition.
///
/// Every suit is paired with every value, suits in the outer loop and values
/// in the inner loop, both in the order given. All validation happens before
/// the first card is built, so a rejected definition never yields a partial deck.
///
/// # Examples
///
/// ```
/// use dealkit_engine::cards::standard_definition;
/// use dealkit_engine::factory::create_cards;
///
/// let deck = create_cards(&standard_definition()).unwrap();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck[0].to_string(), "Ace of Hearts");
/// ```
pub fn create_cards(definition: &DeckDefinition) -> Result<Vec<Card>, ValidationError> {
    validate(definition)?;

    let mut cards = Vec::with_capacity(definition.deck_size());
    for suit in &definition.suits {
        for value in &definition.values {
            cards.push(Card::new(suit.as_str(), value.as_str()));
        }
    }
    tracing::debug!(cards = cards.len(), "created deck");
    Ok(cards)
}

pub fn validate(definition: &DeckDefinition) -> Result<(), ValidationError> {
    if definition.suits.len() != SUIT_COUNT {
        return Err(ValidationError::SuitCount {
            actual: definition.suits.len(),
        });
    }
    if definition.values.len() != VALUE_COUNT {
        return Err(ValidationError::ValueCount {
            actual: definition.values.len(),
        });
    }
    reject_duplicates("suits", &definition.suits)?;
    reject_duplicates("values", &definition.values)
}

fn reject_duplicates(field: &'static str, items: &[String]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(items.len());
    match items.iter().find(|item| !seen.insert(item.as_str())) {
        Some(dup) => Err(ValidationError::Duplicate {
            field,
            duplicate: dup.clone(),
        }),
        None => Ok(()),
    }
}
