use crate::core::Card;

/// Iterator over every `num_cards` sized combination of a card slice.
///
/// Combinations are emitted without repetition and without regard to
/// order, lexicographically by position in the input slice. Asking for
/// zero cards yields exactly one empty combination; asking for more
/// cards than the slice holds yields nothing.
#[derive(Debug)]
pub struct CardIter<'a> {
    /// All the possible cards that can be dealt.
    possible_cards: &'a [Card],

    /// Current offsets into `possible_cards`.
    idx: Vec<usize>,

    /// Whether the first combination has been emitted yet.
    started: bool,
}

impl CardIter<'_> {
    /// Create a new `CardIter` from a slice of cards. `num_cards` is how
    /// many cards each emitted combination contains.
    pub fn new(possible_cards: &[Card], num_cards: usize) -> CardIter<'_> {
        CardIter {
            possible_cards,
            idx: (0..num_cards).collect(),
            started: false,
        }
    }

    fn current(&self) -> Vec<Card> {
        self.idx.iter().map(|&i| self.possible_cards[i]).collect()
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        let k = self.idx.len();
        let n = self.possible_cards.len();

        if !self.started {
            self.started = true;
            if k > n {
                return None;
            }
            return Some(self.current());
        }
        if k == 0 {
            return None;
        }

        // Advance the rightmost offset that still has room, then reset
        // everything to its right to the following positions.
        let mut level = k;
        loop {
            if level == 0 {
                return None;
            }
            let i = level - 1;
            // Offset i may grow as long as offsets i+1..k still fit after it.
            if self.idx[i] + (k - i) < n {
                self.idx[i] += 1;
                for j in i + 1..k {
                    self.idx[j] = self.idx[j - 1] + 1;
                }
                break;
            }
            level -= 1;
        }

        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardBitSet, Suit, Value};

    fn deck() -> Vec<Card> {
        CardBitSet::default().into_iter().collect()
    }

    #[test]
    fn test_iter_one() {
        let cards = [Card::new(Value::Two, Suit::Spade)];
        let combos: Vec<_> = CardIter::new(&cards, 1).collect();
        assert_eq!(1, combos.len());
        assert_eq!(vec![cards[0]], combos[0]);
    }

    #[test]
    fn test_iter_two_of_three() {
        let cards = [
            Card::new(Value::Two, Suit::Spade),
            Card::new(Value::Three, Suit::Spade),
            Card::new(Value::Four, Suit::Spade),
        ];
        let combos: Vec<_> = CardIter::new(&cards, 2).collect();
        assert_eq!(3, combos.len());
        for combo in &combos {
            assert_eq!(2, combo.len());
            assert!(combo[0] != combo[1]);
        }
    }

    #[test]
    fn test_iter_zero_yields_one_empty() {
        let cards = [Card::new(Value::Two, Suit::Spade)];
        let combos: Vec<_> = CardIter::new(&cards, 0).collect();
        assert_eq!(1, combos.len());
        assert!(combos[0].is_empty());
    }

    #[test]
    fn test_iter_more_than_available() {
        let cards = [Card::new(Value::Two, Suit::Spade)];
        assert_eq!(0, CardIter::new(&cards, 2).count());
    }

    #[test]
    fn test_iter_full_slice() {
        let cards = [
            Card::new(Value::Two, Suit::Spade),
            Card::new(Value::Three, Suit::Spade),
        ];
        let combos: Vec<_> = CardIter::new(&cards, 2).collect();
        assert_eq!(1, combos.len());
        assert_eq!(2, combos[0].len());
    }

    #[test]
    fn test_iter_counts_match_binomial() {
        let cards = &deck()[..10];
        // C(10, 3) = 120
        assert_eq!(120, CardIter::new(cards, 3).count());
        // C(10, 5) = 252
        assert_eq!(252, CardIter::new(cards, 5).count());
    }

    #[test]
    fn test_iter_five_card_deals() {
        let d = deck();
        assert_eq!(2_598_960, CardIter::new(&d, 5).count());
    }

    #[test]
    fn test_combinations_are_unique() {
        let cards = &deck()[..8];
        let mut seen = std::collections::HashSet::new();
        for combo in CardIter::new(cards, 3) {
            assert!(seen.insert(combo));
        }
        assert_eq!(56, seen.len());
    }
}
