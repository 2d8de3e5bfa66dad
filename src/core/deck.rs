use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::{Index, Range, RangeFrom, RangeFull, RangeTo};
use std::slice::Iter;
use std::vec::IntoIter;

use itertools::Itertools;
use rand::Rng;
use tracing::trace;

use crate::core::card::{Card, Rank, Suit};
use crate::core::errors::ParseError;
use crate::core::factory::CardFactory;

/// Uniform integer helper backing every random draw in the crate.
/// Inclusive on both bounds and insensitive to their order.
pub(crate) fn random_int<R: Rng + ?Sized>(rng: &mut R, from: usize, to: usize) -> usize {
    let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
    rng.random_range(lo..=hi)
}

/// `Deck` is an ordered, mutable sequence of cards that allows easy
/// indexing. Duplicate cards and partial decks are allowed; nothing
/// requires a deck to hold exactly 52 unique cards.
///
/// The sorting and shuffling methods operate in place and return
/// `&mut Self`, so calls chain:
///
/// ```
/// use rs_cards::core::{CardFactory, Deck};
///
/// let factory = CardFactory::new();
/// let mut deck = Deck::standard(&factory);
/// deck.out_shuffle(1).in_shuffle(1).sort();
/// assert_eq!(1, deck.card(1).unwrap().number());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    /// Card storage.
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Deck {
        Deck { cards: Vec::new() }
    }

    /// Create the standard 52 card deck in number order.
    ///
    /// ```
    /// use rs_cards::core::{CardFactory, Deck};
    ///
    /// let factory = CardFactory::new();
    /// assert_eq!(52, Deck::standard(&factory).len());
    /// ```
    pub fn standard(factory: &CardFactory) -> Deck {
        let mut cards = Vec::with_capacity(52);
        for s in Suit::suits() {
            for r in Rank::ranks() {
                cards.push(factory.make(r, s));
            }
        }
        Deck { cards }
    }

    /// Create a deck of cards numbered 1..=size in order.
    /// Sizes past 52 keep minting through the number wrap, so the
    /// 53rd card is another Ace of Spades.
    pub fn of_size(factory: &CardFactory, size: usize) -> Deck {
        Deck {
            cards: (1..=size).map(|n| factory.card(n as i64)).collect(),
        }
    }

    /// Create a deck that adopts the given cards, in order.
    pub fn from_cards(cards: Vec<Card>) -> Deck {
        Deck { cards }
    }

    /// Parse a `|`-separated deck string. Each segment goes through
    /// the card grammar, so both spellings are accepted. The empty
    /// string is the empty deck, making the round trip with
    /// `to_string` an identity.
    ///
    /// ```
    /// use rs_cards::core::{CardFactory, Deck};
    ///
    /// let factory = CardFactory::new();
    /// let deck = Deck::parse(&factory, "AS|10H|KC").unwrap();
    /// assert_eq!(3, deck.len());
    /// assert_eq!("AS|10H|KC", deck.to_string());
    /// assert!(Deck::parse(&factory, "").unwrap().is_empty());
    /// ```
    pub fn parse(factory: &CardFactory, input: &str) -> Result<Deck, ParseError> {
        if input.is_empty() {
            return Ok(Deck::new());
        }
        let cards = input
            .split('|')
            .map(|segment| factory.parse(segment))
            .collect::<Result<Vec<Card>, ParseError>>()?;
        Ok(Deck::from_cards(cards))
    }

    /// How many cards are there in the deck?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is there nothing in the deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Borrow the card sequence.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// A shallow snapshot of the sequence. The copies keep their
    /// instance ids, so they stay identical to the originals.
    pub fn snapshot(&self) -> Vec<Card> {
        self.cards.clone()
    }

    /// A deep snapshot: brand-new cards with the same ranks and
    /// suits but fresh instance ids. Value-equal to the originals,
    /// identical to none of them.
    pub fn deep_snapshot(&self, factory: &CardFactory) -> Vec<Card> {
        self.cards.iter().map(|c| factory.duplicate(c)).collect()
    }

    /// 1-indexed lookup. `None` outside `[1, len()]`.
    ///
    /// ```
    /// use rs_cards::core::{CardFactory, Deck};
    ///
    /// let factory = CardFactory::new();
    /// let deck = Deck::standard(&factory);
    /// assert_eq!("AS", deck.card(1).unwrap().code());
    /// assert_eq!("KH", deck.card(52).unwrap().code());
    /// assert!(deck.card(0).is_none());
    /// assert!(deck.card(53).is_none());
    /// ```
    pub fn card(&self, position: usize) -> Option<&Card> {
        position.checked_sub(1).and_then(|i| self.cards.get(i))
    }

    /// A uniformly random card from the current sequence, without
    /// removing it. `None` on an empty deck.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Card> {
        if self.cards.is_empty() {
            None
        } else {
            self.cards.get(random_int(rng, 0, self.cards.len() - 1))
        }
    }

    /// A new deck holding a deep snapshot of this one: value-equal,
    /// not identical. `clone()` is the shallow counterpart, which
    /// preserves instance ids.
    pub fn deep_copy(&self, factory: &CardFactory) -> Deck {
        Deck::from_cards(self.deep_snapshot(factory))
    }

    /// Strict equality: same length and every positional pair of
    /// cards carries the same instance id. `==` is the value
    /// version, comparing ranks and suits positionally.
    pub fn is_identical(&self, other: &Deck) -> bool {
        self.cards.len() == other.cards.len()
            && self
                .cards
                .iter()
                .zip(&other.cards)
                .all(|(a, b)| a.is_identical(b))
    }

    /// Sort in place, ascending by card number. Stable.
    pub fn sort(&mut self) -> &mut Deck {
        self.sort_by(|a, b| a.number().cmp(&b.number()))
    }

    /// Sort in place with a caller-supplied comparator.
    pub fn sort_by<F>(&mut self, compare: F) -> &mut Deck
    where
        F: FnMut(&Card, &Card) -> Ordering,
    {
        self.cards.sort_by(compare);
        self
    }

    /// Sort in place, descending by card number. This routes
    /// through the same sort path as [`Deck::sort`] with the
    /// comparator flipped.
    pub fn reverse(&mut self) -> &mut Deck {
        self.sort_by(|a, b| b.number().cmp(&a.number()))
    }

    /// Fisher-Yates shuffle the deck in place, `times` passes.
    /// Each pass walks `i` from the last index down to 0 and swaps
    /// position `i` with a uniform position in `[0, i]`. Zero
    /// passes leave the deck untouched, same cards in the same
    /// order.
    pub fn knuth_shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R, times: usize) -> &mut Deck {
        trace!(times, len = self.cards.len(), "knuth shuffle");
        for _ in 0..times {
            for i in (0..self.cards.len()).rev() {
                let rand = random_int(rng, 0, i);
                self.cards.swap(rand, i);
            }
        }
        self
    }

    /// Shuffle the deck in place: a Fisher-Yates pass repeated a
    /// uniformly random 10 to 20 times.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Deck {
        let times = random_int(rng, 10, 20);
        self.knuth_shuffle(rng, times)
    }

    /// Faro (perfect) shuffle the deck in place, `times` passes.
    ///
    /// Each pass splits the sequence into a first half of
    /// `ceil(n / 2)` cards and the remainder, then interleaves one
    /// card from each half per step. With `interleave_on_top` the
    /// second half leads each step (an "in" shuffle); otherwise the
    /// first half leads and the top card stays on top (an "out"
    /// shuffle). Odd lengths keep every card exactly once.
    ///
    /// ```
    /// use rs_cards::core::{CardFactory, Deck};
    ///
    /// let factory = CardFactory::new();
    /// let mut deck = Deck::of_size(&factory, 4);
    /// deck.faro_shuffle(1, false);
    /// assert_eq!("AS|3S|2S|4S", deck.to_string());
    ///
    /// let mut deck = Deck::of_size(&factory, 4);
    /// deck.faro_shuffle(1, true);
    /// assert_eq!("3S|AS|4S|2S", deck.to_string());
    /// ```
    pub fn faro_shuffle(&mut self, times: usize, interleave_on_top: bool) -> &mut Deck {
        trace!(times, interleave_on_top, "faro shuffle");
        for _ in 0..times {
            let half = self.cards.len().div_ceil(2);
            let bottom = self.cards.split_off(half);
            let top = mem::take(&mut self.cards);
            self.cards = if interleave_on_top {
                bottom.into_iter().interleave(top).collect()
            } else {
                top.into_iter().interleave(bottom).collect()
            };
        }
        self
    }

    /// Faro shuffle with the second half leading.
    pub fn in_shuffle(&mut self, times: usize) -> &mut Deck {
        self.faro_shuffle(times, true)
    }

    /// Faro shuffle with the first half leading; the top card
    /// stays on top.
    pub fn out_shuffle(&mut self, times: usize) -> &mut Deck {
        self.faro_shuffle(times, false)
    }

    /// The long serialized form: card names joined by `|`.
    /// `to_string` gives the short form.
    pub fn long_form(&self) -> String {
        self.cards.iter().map(|c| c.to_string()).join("|")
    }

    /// Get an iterator over this deck's cards.
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }
}

/// The short serialized form: card codes joined by `|`,
/// e.g. `"AS|10H|KC"`. The empty deck is the empty string.
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cards.iter().map(|c| c.code()).join("|"))
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> IntoIter<Card> {
        self.cards.into_iter()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(value: Vec<Card>) -> Deck {
        Deck::from_cards(value)
    }
}

impl Index<usize> for Deck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}
impl Index<Range<usize>> for Deck {
    type Output = [Card];
    fn index(&self, index: Range<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeTo<usize>> for Deck {
    type Output = [Card];
    fn index(&self, index: RangeTo<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFrom<usize>> for Deck {
    type Output = [Card];
    fn index(&self, index: RangeFrom<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFull> for Deck {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}
