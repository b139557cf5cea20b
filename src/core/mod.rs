/// Everything in this module is used to model the cards themselves and
/// the best five card hand a set of cards can make.
///
/// Card values, suits, parsing, the 52 card universe as a bitset, a
/// combination iterator for dealing out run-outs, and the hand
/// classifier with its total-order comparison.
mod card;
/// Export the card model and its parse error.
pub use self::card::{parse_cards, Card, CardParseError, Suit, Value};

/// Module for a u64 backed set of cards.
mod card_bit_set;
/// Export `CardBitSet`.
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// Module for iterating combinations of cards.
mod card_iter;
/// Export `CardIter`.
pub use self::card_iter::CardIter;

/// Module with the hand classifier and comparator.
mod classify;
/// Export the classifier entry point and its types.
pub use self::classify::{classify, ClassifiedHand, HandCategory};
