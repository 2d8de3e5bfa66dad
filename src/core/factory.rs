use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

use crate::core::card::{Card, Rank, Suit};
use crate::core::errors::ParseError;
use crate::core::random_int;

/// Mints cards and owns the instance-id counter.
///
/// Every card carries an id that is unique among the cards this
/// factory produced, assigned in increasing order and never
/// reused. Construct a fresh factory to get a fresh, deterministic
/// counter in tests. The counter is atomic, so a factory can be
/// shared across threads.
#[derive(Debug)]
pub struct CardFactory {
    next_id: AtomicU64,
}

impl CardFactory {
    /// Create a factory. The first card minted gets id 1.
    pub fn new() -> CardFactory {
        CardFactory {
            next_id: AtomicU64::new(1),
        }
    }

    fn mint(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Build the card with the given number.
    ///
    /// Numbers outside 1..=52 wrap via `((number - 1) mod 52) + 1`,
    /// so construction is total: out-of-range numbers alias into
    /// range instead of erroring. This is intentional aliasing,
    /// not validation.
    ///
    /// ```
    /// use rs_cards::core::CardFactory;
    ///
    /// let factory = CardFactory::new();
    /// assert_eq!(factory.card(1), factory.card(53));
    /// assert_eq!("King of Hearts", factory.card(0).to_string());
    /// ```
    pub fn card(&self, number: i64) -> Card {
        let n = (number - 1).rem_euclid(52) as u8;
        Card::new(Rank::from_u8(n % 13), Suit::from_u8(n / 13), self.mint())
    }

    /// Build a card directly from a rank and a suit.
    pub fn make(&self, rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit, self.mint())
    }

    /// Draw a uniformly random card from the 52.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Card {
        self.card(random_int(rng, 1, 52) as i64)
    }

    /// A new card with the same rank and suit but a fresh id.
    /// The result is value-equal to `card` and never identical.
    pub fn duplicate(&self, card: &Card) -> Card {
        self.make(card.rank(), card.suit())
    }

    /// Parse a card from either spelling: the long form
    /// `"<Rank> of <Suit>"` or the short form `"<RankCode><SuitCode>"`.
    ///
    /// ```
    /// use rs_cards::core::{CardFactory, Rank, Suit};
    ///
    /// let factory = CardFactory::new();
    /// let c = factory.parse("Queen of Diamonds").unwrap();
    /// assert_eq!(Rank::Queen, c.rank());
    /// assert_eq!(Suit::Diamond, c.suit());
    /// assert_eq!(c, factory.parse("QD").unwrap());
    /// assert!(factory.parse("Joker").is_err());
    /// ```
    pub fn parse(&self, input: &str) -> Result<Card, ParseError> {
        if let Some((rank_name, suit_name)) = input.split_once(" of ") {
            let rank = Rank::from_name(rank_name)
                .ok_or_else(|| ParseError::UnexpectedRank(rank_name.to_string()))?;
            let suit = Suit::from_name(suit_name)
                .ok_or_else(|| ParseError::UnexpectedSuit(suit_name.to_string()))?;
            Ok(self.make(rank, suit))
        } else {
            let mut chars = input.chars();
            let suit_char = chars.next_back().ok_or(ParseError::TooFewChars)?;
            let rank_code = chars.as_str();
            if rank_code.is_empty() {
                return Err(ParseError::TooFewChars);
            }
            let rank = Rank::from_code(rank_code)
                .ok_or_else(|| ParseError::UnexpectedRank(rank_code.to_string()))?;
            let suit = Suit::from_char(suit_char)
                .ok_or_else(|| ParseError::UnexpectedSuit(suit_char.to_string()))?;
            Ok(self.make(rank, suit))
        }
    }
}

impl Default for CardFactory {
    fn default() -> CardFactory {
        CardFactory::new()
    }
}
