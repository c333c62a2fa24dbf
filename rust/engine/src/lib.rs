//! # dealkit-engine: Deck Building, Shuffling and Dealing
//!
//! Generates a deck from suit/value labels, shuffles it with an injectable
//! random source, deals it round-robin into hands, and resolves named deck
//! definitions asynchronously.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card and DeckDefinition types plus the built-in definitions
//! - [`factory`] - Validated deck construction (suits x values)
//! - [`shuffle`] - Slice shuffling over any `rand::RngCore` generator
//! - [`dealer`] - Round-robin dealing with a per-round [`dealer::RoundObserver`]
//! - [`loader`] - Async deck lookup through a [`loader::DeckRepository`]
//! - [`errors`] - Error types for each stage
//!
//! ## Quick Start
//!
//! ```rust
//! use dealkit_engine::cards::standard_definition;
//! use dealkit_engine::dealer::deal;
//! use dealkit_engine::factory::create_cards;
//! use dealkit_engine::shuffle::{shuffle_with, SeededRandom};
//!
//! let deck = create_cards(&standard_definition()).unwrap();
//! let shuffled = shuffle_with(&deck, &mut SeededRandom::new(42));
//! let hands = deal(&shuffled, 13, 4).unwrap();
//!
//! assert_eq!(hands.len(), 4);
//! assert!(hands.iter().all(|h| h.len() == 13));
//! ```
//!
//! ## Deterministic Shuffles
//!
//! [`shuffle::SeededRandom`] wraps a ChaCha20 stream; the same seed always
//! produces the same permutation:
//!
//! ```rust
//! use dealkit_engine::shuffle::{shuffle_with, SeededRandom};
//!
//! let a = shuffle_with(&[1, 2, 3, 4, 5], &mut SeededRandom::new(7));
//! let b = shuffle_with(&[1, 2, 3, 4, 5], &mut SeededRandom::new(7));
//! assert_eq!(a, b);
//! ```

pub mod cards;
pub mod dealer;
pub mod errors;
pub mod factory;
pub mod loader;
pub mod shuffle;
