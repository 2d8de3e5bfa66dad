//! This is the core module. It exports the card types,
//! the factory that mints them, and the deck.

/// card.rs has rank, suit, and the card value type.
mod card;
/// Re-export Card, Rank, and Suit
pub use self::card::{Card, Rank, Suit};

/// Errors for the card and deck string grammars.
mod errors;
/// Export `ParseError`
pub use self::errors::ParseError;

/// The factory owns the instance-id counter and all card construction.
mod factory;
/// Export `CardFactory`
pub use self::factory::CardFactory;

/// Deck is the ordered, mutable card sequence.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

pub(crate) use self::deck::random_int;
