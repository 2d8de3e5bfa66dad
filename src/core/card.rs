use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

/// Card rank.
/// Ace is low: the discriminant is the face value - 1.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// A
    Ace = 0,
    /// 2
    Two = 1,
    /// 3
    Three = 2,
    /// 4
    Four = 3,
    /// 5
    Five = 4,
    /// 6
    Six = 5,
    /// 7
    Seven = 6,
    /// 8
    Eight = 7,
    /// 9
    Nine = 8,
    /// 10
    Ten = 9,
    /// J
    Jack = 10,
    /// Q
    Queen = 11,
    /// K
    King = 12,
}

/// Constant of all the ranks in ascending order.
/// This is what `Rank::ranks()` returns
const RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// Take a u8 and convert it to a rank.
    pub fn from_u8(r: u8) -> Rank {
        unsafe { mem::transmute(r) }
    }

    /// Get all of the `Rank`s that are possible.
    /// This is used to iterate through all possible
    /// ranks when creating a new deck.
    pub fn ranks() -> [Rank; 13] {
        RANKS
    }

    /// The long spelling, as it appears in `"Ace of Spades"`.
    pub fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }

    /// The short code used in the compact card form, `"AS"` style.
    pub fn code(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Parse the long spelling. `"1"` is accepted as Ace.
    pub fn from_name(s: &str) -> Option<Rank> {
        match s {
            "Ace" | "1" => Some(Rank::Ace),
            "2" => Some(Rank::Two),
            "3" => Some(Rank::Three),
            "4" => Some(Rank::Four),
            "5" => Some(Rank::Five),
            "6" => Some(Rank::Six),
            "7" => Some(Rank::Seven),
            "8" => Some(Rank::Eight),
            "9" => Some(Rank::Nine),
            "10" => Some(Rank::Ten),
            "Jack" => Some(Rank::Jack),
            "Queen" => Some(Rank::Queen),
            "King" => Some(Rank::King),
            _ => None,
        }
    }

    /// Parse the short code. `"1"` is accepted as `"A"`.
    pub fn from_code(s: &str) -> Option<Rank> {
        match s {
            "A" | "1" => Some(Rank::Ace),
            "2" => Some(Rank::Two),
            "3" => Some(Rank::Three),
            "4" => Some(Rank::Four),
            "5" => Some(Rank::Five),
            "6" => Some(Rank::Six),
            "7" => Some(Rank::Seven),
            "8" => Some(Rank::Eight),
            "9" => Some(Rank::Nine),
            "10" => Some(Rank::Ten),
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            _ => None,
        }
    }
}

/// Enum for the four different suits.
/// The discriminant order fixes the card numbering: all Spades
/// come first, then Clubs, Diamonds, and Hearts.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Diamonds
    Diamond = 2,
    /// Hearts
    Heart = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Diamond, Suit::Heart];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    pub fn from_u8(s: u8) -> Suit {
        unsafe { mem::transmute(s) }
    }

    /// The long spelling, as it appears in `"Ace of Spades"`.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Spade => "Spades",
            Suit::Club => "Clubs",
            Suit::Diamond => "Diamonds",
            Suit::Heart => "Hearts",
        }
    }

    /// The short code used in the compact card form.
    pub fn code(self) -> &'static str {
        match self {
            Suit::Spade => "S",
            Suit::Club => "C",
            Suit::Diamond => "D",
            Suit::Heart => "H",
        }
    }

    /// Parse the long spelling.
    pub fn from_name(s: &str) -> Option<Suit> {
        match s {
            "Spades" => Some(Suit::Spade),
            "Clubs" => Some(Suit::Club),
            "Diamonds" => Some(Suit::Diamond),
            "Hearts" => Some(Suit::Heart),
            _ => None,
        }
    }

    /// Parse the single-letter code. Case sensitive.
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            'S' => Some(Suit::Spade),
            'C' => Some(Suit::Club),
            'D' => Some(Suit::Diamond),
            'H' => Some(Suit::Heart),
            _ => None,
        }
    }
}

/// The main struct of this library.
/// A carrier for a rank, a suit, and the instance id the
/// [`CardFactory`](crate::core::CardFactory) minted the card with.
///
/// Equality via `==` compares rank and suit only; two Aces of
/// Spades from different constructions are equal. Use
/// [`Card::is_identical`] when the comparison should also require
/// the same instance id.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The rank of this card.
    rank: Rank,
    /// The suit of this card.
    suit: Suit,
    /// Instance id, unique within the minting factory.
    id: u64,
}

impl Card {
    pub(crate) fn new(rank: Rank, suit: Suit, id: u64) -> Card {
        Card { rank, suit, id }
    }

    /// The rank of this card.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// The suit of this card.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// The 1..=52 numbering of this card:
    /// suit index * 13 + rank index + 1.
    ///
    /// ```
    /// use rs_cards::core::CardFactory;
    ///
    /// let factory = CardFactory::new();
    /// assert_eq!(1, factory.card(1).number());
    /// assert_eq!(52, factory.parse("King of Hearts").unwrap().number());
    /// ```
    pub fn number(&self) -> u8 {
        self.suit as u8 * 13 + self.rank as u8 + 1
    }

    /// The instance id minted at construction. Monotonically
    /// increasing within a factory and never reused.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Strict equality: do the two cards carry the same instance id?
    /// Only meaningful for cards minted by the same factory.
    pub fn is_identical(&self, other: &Card) -> bool {
        self.id == other.id
    }

    /// The short form: rank code followed by suit code.
    ///
    /// ```
    /// use rs_cards::core::CardFactory;
    ///
    /// let factory = CardFactory::new();
    /// assert_eq!("AS", factory.card(1).code());
    /// assert_eq!("10H", factory.card(49).code());
    /// ```
    pub fn code(&self) -> String {
        format!("{}{}", self.rank.code(), self.suit.code())
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Card) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Card) -> Ordering {
        self.number().cmp(&other.number())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Card) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The long form: `"Ace of Spades"` style.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.name(), self.suit.name())
    }
}

impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_constructor() {
        let c = Card::new(Rank::Three, Suit::Spade, 1);
        assert_eq!(Suit::Spade, c.suit());
        assert_eq!(Rank::Three, c.rank());
        assert_eq!(1, c.id());
    }

    #[test]
    fn test_compare() {
        let c1 = Card::new(Rank::Three, Suit::Spade, 1);
        let c2 = Card::new(Rank::Four, Suit::Spade, 2);
        let c3 = Card::new(Rank::Four, Suit::Club, 3);

        // Make sure that equals works
        assert!(c1 == c1);
        // Make sure that the ranks are ordered
        assert!(c1 < c2);
        assert!(c2 > c1);
        // Make sure that suit is used.
        assert!(c3 > c2);
    }

    #[test]
    fn test_equality_ignores_id() {
        let c1 = Card::new(Rank::Ace, Suit::Spade, 1);
        let c2 = Card::new(Rank::Ace, Suit::Spade, 2);
        assert_eq!(c1, c2);
        assert!(!c1.is_identical(&c2));
        assert!(c1.is_identical(&c1));
    }

    #[test]
    fn test_number() {
        assert_eq!(1, Card::new(Rank::Ace, Suit::Spade, 1).number());
        assert_eq!(13, Card::new(Rank::King, Suit::Spade, 2).number());
        assert_eq!(14, Card::new(Rank::Ace, Suit::Club, 3).number());
        assert_eq!(52, Card::new(Rank::King, Suit::Heart, 4).number());
        assert_eq!(52u8, u8::from(Card::new(Rank::King, Suit::Heart, 5)));
    }

    #[test]
    fn test_rank_cmp() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Queen < Rank::King);
        assert_eq!(Rank::Two, Rank::Two);
    }

    #[test]
    fn test_from_u8() {
        assert_eq!(Rank::Ace, Rank::from_u8(0));
        assert_eq!(Rank::King, Rank::from_u8(12));
        assert_eq!(Suit::Spade, Suit::from_u8(0));
        assert_eq!(Suit::Heart, Suit::from_u8(3));
    }

    #[test]
    fn test_rank_tables_round_trip() {
        for r in Rank::ranks() {
            assert_eq!(Some(r), Rank::from_name(r.name()));
            assert_eq!(Some(r), Rank::from_code(r.code()));
        }
    }

    #[test]
    fn test_suit_tables_round_trip() {
        for s in Suit::suits() {
            assert_eq!(Some(s), Suit::from_name(s.name()));
            let c = s.code().chars().next().unwrap();
            assert_eq!(Some(s), Suit::from_char(c));
        }
    }

    #[test]
    fn test_one_is_ace() {
        assert_eq!(Some(Rank::Ace), Rank::from_name("1"));
        assert_eq!(Some(Rank::Ace), Rank::from_code("1"));
    }

    #[test]
    fn test_unknown_labels() {
        assert_eq!(None, Rank::from_name("Eleven"));
        assert_eq!(None, Rank::from_code("T"));
        assert_eq!(None, Suit::from_name("Spade"));
        assert_eq!(None, Suit::from_char('s'));
    }

    #[test]
    fn test_display() {
        let c = Card::new(Rank::Ten, Suit::Heart, 1);
        assert_eq!("10 of Hearts", c.to_string());
        assert_eq!("10H", c.code());
        let c = Card::new(Rank::Ace, Suit::Spade, 2);
        assert_eq!("Ace of Spades", c.to_string());
        assert_eq!("AS", c.code());
    }

    #[test]
    fn test_size() {
        // Two enum bytes plus the id, padding included.
        assert!(mem::size_of::<Card>() <= 16);
    }
}
