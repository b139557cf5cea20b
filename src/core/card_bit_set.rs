use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, BitXor, BitXorAssign};

use crate::core::Card;

/// A set of cards backed by a single u64, one bit per card in the
/// 52-card universe. Cheap to copy, cheap to union and subtract; this is
/// what all the alive-pool arithmetic runs on.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardBitSet {
    cards: u64,
}

/// Mask with one bit set for every card in the deck.
const FULL_DECK: u64 = (1 << 52) - 1;

impl CardBitSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self { cards: 0 }
    }

    /// Insert a card into the set. Returns true if the card was not
    /// already present.
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1 << card.index();
        let fresh = self.cards & bit == 0;
        self.cards |= bit;
        fresh
    }

    /// Remove a card from the set.
    pub fn remove(&mut self, card: Card) {
        self.cards &= !(1 << card.index());
    }

    /// Is this card in the set?
    pub fn contains(&self, card: Card) -> bool {
        self.cards & (1 << card.index()) != 0
    }

    /// How many cards are in the set?
    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    /// Is the set empty?
    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }
}

/// The default set is the full 52 card deck.
impl Default for CardBitSet {
    fn default() -> Self {
        Self { cards: FULL_DECK }
    }
}

impl BitOr for CardBitSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self {
            cards: self.cards | rhs.cards,
        }
    }
}

impl BitOrAssign for CardBitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.cards |= rhs.cards;
    }
}

impl BitAnd for CardBitSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self {
            cards: self.cards & rhs.cards,
        }
    }
}

impl BitXor for CardBitSet {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self {
        Self {
            cards: self.cards ^ rhs.cards,
        }
    }
}

impl BitXorAssign for CardBitSet {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.cards ^= rhs.cards;
    }
}

impl FromIterator<Card> for CardBitSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = CardBitSet::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

/// Iterates the set in canonical order: lowest value first, suits in
/// club, diamond, heart, spade order within a value.
#[derive(Debug, Clone, Copy)]
pub struct CardBitSetIter(u64);

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CardBitSetIter(self.cards)
    }
}

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Card::from_index(idx))
    }
}

impl fmt::Debug for CardBitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.into_iter()).finish()
    }
}
