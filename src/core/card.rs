use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use thiserror::Error;

/// Errors from turning a two character token into a `Card`.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CardParseError {
    #[error("card token '{0}' must be exactly two characters")]
    TokenLength(String),

    #[error("'{0}' is not a card value")]
    UnknownValue(char),

    #[error("'{0}' is not a suit")]
    UnknownSuit(char),
}

/// Card values, ordered from two to ace.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

/// Constant of all the values, lowest first.
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all the values in order from lowest to highest.
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// Take a `u8` from 0 to 12 and convert it to a value.
    ///
    /// # Panics
    ///
    /// Panics if the u8 is out of range.
    pub fn from_u8(v: u8) -> Value {
        VALUES[v as usize]
    }

    /// Convert a char into a value, accepting either case.
    pub fn from_char(c: char) -> Option<Value> {
        match c.to_ascii_uppercase() {
            '2' => Some(Value::Two),
            '3' => Some(Value::Three),
            '4' => Some(Value::Four),
            '5' => Some(Value::Five),
            '6' => Some(Value::Six),
            '7' => Some(Value::Seven),
            '8' => Some(Value::Eight),
            '9' => Some(Value::Nine),
            'T' => Some(Value::Ten),
            'J' => Some(Value::Jack),
            'Q' => Some(Value::Queen),
            'K' => Some(Value::King),
            'A' => Some(Value::Ace),
            _ => None,
        }
    }

    /// The canonical character for this value.
    pub fn to_char(self) -> char {
        match self {
            Value::Two => '2',
            Value::Three => '3',
            Value::Four => '4',
            Value::Five => '5',
            Value::Six => '6',
            Value::Seven => '7',
            Value::Eight => '8',
            Value::Nine => '9',
            Value::Ten => 'T',
            Value::Jack => 'J',
            Value::Queen => 'Q',
            Value::King => 'K',
            Value::Ace => 'A',
        }
    }

    /// How many values between this one and the other, ignoring sign.
    /// Used for straight gap detection.
    pub fn gap(self, other: Value) -> u8 {
        (self as i8 - other as i8).unsigned_abs()
    }
}

/// Suit of a card. Suits carry no ranking; the discriminant only fixes
/// the canonical card order and the bitset index.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

/// All the suits in canonical order.
const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    /// Get all the suits in canonical order.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Convert a char into a suit, accepting either case.
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'c' => Some(Suit::Club),
            'd' => Some(Suit::Diamond),
            'h' => Some(Suit::Heart),
            's' => Some(Suit::Spade),
            _ => None,
        }
    }

    /// The canonical character for this suit.
    pub fn to_char(self) -> char {
        match self {
            Suit::Club => 'c',
            Suit::Diamond => 'd',
            Suit::Heart => 'h',
            Suit::Spade => 's',
        }
    }
}

/// The single card. Immutable; equality, hashing, and ordering are by
/// (value, suit) so sorting a set of cards is deterministic.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card from value and suit.
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Index of this card in the 52-card universe, 0..52.
    /// Cards of the same value are adjacent.
    pub fn index(self) -> u8 {
        (self.value as u8) * 4 + (self.suit as u8)
    }

    /// The inverse of `index`.
    ///
    /// # Panics
    ///
    /// Panics if the index is 52 or more.
    pub fn from_index(idx: u8) -> Card {
        assert!(idx < 52, "card index out of range: {idx}");
        Card {
            value: Value::from_u8(idx / 4),
            suit: SUITS[(idx % 4) as usize],
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (v, su) = match (chars.next(), chars.next(), chars.next()) {
            (Some(v), Some(su), None) => (v, su),
            _ => return Err(CardParseError::TokenLength(s.to_string())),
        };
        let value = Value::from_char(v).ok_or(CardParseError::UnknownValue(v))?;
        let suit = Suit::from_char(su).ok_or(CardParseError::UnknownSuit(su))?;
        Ok(Card { value, suit })
    }
}

/// Cards serialize as their two character token so the persisted cache
/// stays human readable.
impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Parse a whitespace-free run of two character tokens ("AhKd") into cards.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardParseError> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(CardParseError::TokenLength(s.to_string()));
    }
    chars
        .chunks(2)
        .map(|pair| {
            let token: String = pair.iter().collect();
            token.parse()
        })
        .collect()
}
