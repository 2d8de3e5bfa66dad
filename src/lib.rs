//! rs_cards is a library for representing a standard 52-card deck.
//! It covers card identity and comparison, deck construction and
//! string round-trips, and the Knuth and Faro shuffle algorithms.

/// Allow all the core card functionality to be used
/// externally. Everything in core is agnostic to any
/// particular card game.
pub mod core;
