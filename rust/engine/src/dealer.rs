use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::DealError;

/// Cards dealt to one player, in the order they were received.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cards: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    fn give(&mut self, card: Card) {
        self.cards.push(card);
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Notified once after every completed dealing round.
///
/// The return value is a success indicator. It is informational only: a
/// `false` is logged and dealing carries on with the next round.
pub trait RoundObserver {
    fn round_dealt(&mut self, round: usize, hands: &[Hand]) -> bool;
}

impl<F> RoundObserver for F
where
    F: FnMut(usize) -> bool,
{
    fn round_dealt(&mut self, round: usize, _hands: &[Hand]) -> bool {
        self(round)
    }
}

/// Default observer: one `info` event per round.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRoundLogger;

impl RoundObserver for TracingRoundLogger {
    fn round_dealt(&mut self, round: usize, hands: &[Hand]) -> bool {
        tracing::info!(round, players = hands.len(), "dealt round");
        true
    }
}

/// Deals `cards_per_hand` cards to each of `num_players` players, logging each
/// round through [`TracingRoundLogger`].
pub fn deal(
    cards: &[Card],
    cards_per_hand: usize,
    num_players: usize,
) -> Result<Vec<Hand>, DealError> {
    deal_with(cards, cards_per_hand, num_players, &mut TracingRoundLogger)
}

/// Round-robin deal with an injected round observer.
///
/// Each round hands the next card from the front of `cards` to player 0, then
/// player 1, and so on, then notifies `observer` exactly once. Preconditions
/// are checked before any card is dealt or any observer call is made; a deck
/// too short for the requested hands is an error, never a partial deal.
/// Cards past `cards_per_hand * num_players` are left undealt.
///
/// # Examples
///
/// ```
/// use dealkit_engine::cards::standard_definition;
/// use dealkit_engine::dealer::deal_with;
/// use dealkit_engine::factory::create_cards;
///
/// let deck = create_cards(&standard_definition()).unwrap();
/// let mut rounds = Vec::new();
/// let hands = deal_with(&deck, 5, 3, &mut |round: usize| {
///     rounds.push(round);
///     true
/// })
/// .unwrap();
///
/// assert_eq!(hands.len(), 3);
/// assert_eq!(rounds, vec![0, 1, 2, 3, 4]);
/// ```
pub fn deal_with<O: RoundObserver + ?Sized>(
    cards: &[Card],
    cards_per_hand: usize,
    num_players: usize,
    observer: &mut O,
) -> Result<Vec<Hand>, DealError> {
    check_counts(cards.len(), cards_per_hand, num_players)?;

    let mut hands: Vec<Hand> = (0..num_players)
        .map(|_| Hand::with_capacity(cards_per_hand))
        .collect();
    let mut remaining = cards.iter();

    for round in 0..cards_per_hand {
        for hand in hands.iter_mut() {
            // counts were checked above, so the deck cannot run dry here
            if let Some(card) = remaining.next() {
                hand.give(card.clone());
            }
        }
        if !observer.round_dealt(round, &hands) {
            tracing::warn!(round, "round observer reported failure");
        }
    }
    Ok(hands)
}

fn check_counts(
    available: usize,
    cards_per_hand: usize,
    num_players: usize,
) -> Result<(), DealError> {
    if cards_per_hand == 0 {
        return Err(DealError::NoCardsPerHand);
    }
    if num_players == 0 {
        return Err(DealError::NoPlayers);
    }
    let needed = cards_per_hand
        .checked_mul(num_players)
        .ok_or(DealError::CountOverflow {
            cards_per_hand,
            num_players,
        })?;
    if needed > available {
        return Err(DealError::InsufficientCards { needed, available });
    }
    Ok(())
}
