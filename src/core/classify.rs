use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::{Card, Value};

/// All the hand categories, lowest first so the derived ordering ranks
/// them correctly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum HandCategory {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl HandCategory {
    /// Positions within the ordered five cards that break ties between
    /// two hands of this category, checked in order.
    fn tiebreakers(self) -> &'static [usize] {
        match self {
            HandCategory::RoyalFlush => &[],
            HandCategory::StraightFlush => &[],
            HandCategory::FourOfAKind => &[0, 4],
            HandCategory::FullHouse => &[0, 3],
            HandCategory::Flush => &[0],
            HandCategory::Straight => &[0],
            HandCategory::ThreeOfAKind => &[0, 3, 4],
            HandCategory::TwoPair => &[0, 2, 4],
            HandCategory::Pair => &[0, 2, 3, 4],
            HandCategory::HighCard => &[0, 1, 2, 3, 4],
        }
    }
}

/// The best five card hand found in a set of cards.
///
/// The card order is position-significant per category: index 0 is the
/// primary tie-break card (the quads value, the top pair, the high end
/// of a straight), the rest follow in the category's tie-break order.
/// Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedHand {
    /// Which of the ten categories this hand is.
    pub category: HandCategory,
    /// The exact five cards justifying the category, tie-break ordered.
    pub cards: [Card; 5],
}

impl ClassifiedHand {
    /// Total order by strength: category first, then the category's
    /// tie-break card values in order. Hands with equal categories and
    /// equal tie-break values are a true tie even when their suits
    /// differ, so this is deliberately not `Ord`.
    pub fn compare(&self, other: &ClassifiedHand) -> Ordering {
        let by_category = self.category.cmp(&other.category);
        if by_category != Ordering::Equal {
            return by_category;
        }
        for &i in self.category.tiebreakers() {
            let by_value = self.cards[i].value.cmp(&other.cards[i].value);
            if by_value != Ordering::Equal {
                return by_value;
            }
        }
        Ordering::Equal
    }
}

/// A detector takes cards sorted descending by (value, suit) and either
/// produces the full five card hand for its category or nothing.
type Detector = fn(&[Card]) -> Option<[Card; 5]>;

/// Detectors in strict descending category priority. The first success
/// wins; `high_card` always succeeds for five or more cards, so the
/// scan is total.
const DETECTORS: [(HandCategory, Detector); 10] = [
    (HandCategory::RoyalFlush, royal_flush),
    (HandCategory::StraightFlush, straight_flush),
    (HandCategory::FourOfAKind, four_of_a_kind),
    (HandCategory::FullHouse, full_house),
    (HandCategory::Flush, flush),
    (HandCategory::Straight, straight),
    (HandCategory::ThreeOfAKind, three_of_a_kind),
    (HandCategory::TwoPair, two_pair),
    (HandCategory::Pair, pair),
    (HandCategory::HighCard, high_card),
];

/// Find the best five card hand in a set of 5 to 7 cards.
///
/// # Panics
///
/// Panics if no category matches, which cannot happen for a
/// duplicate-free set of five or more cards from a standard deck.
///
/// # Examples
/// ```
/// use showdown::core::{classify, parse_cards, HandCategory};
///
/// let cards = parse_cards("AhKhQhJhTh2c3d").unwrap();
/// let hand = classify(&cards);
/// assert_eq!(HandCategory::RoyalFlush, hand.category);
/// ```
pub fn classify(cards: &[Card]) -> ClassifiedHand {
    debug_assert!(
        (5..=7).contains(&cards.len()),
        "classify needs 5 to 7 cards, got {}",
        cards.len()
    );
    let mut sorted = cards.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    for (category, detect) in DETECTORS {
        if let Some(best) = detect(&sorted) {
            return ClassifiedHand {
                category,
                cards: best,
            };
        }
    }
    unreachable!("no hand category matched a legal card set: {cards:?}")
}

fn five(cards: &[Card]) -> [Card; 5] {
    [cards[0], cards[1], cards[2], cards[3], cards[4]]
}

/// The highest-valued run of exactly `n` equal values, as `n` cards.
/// Input must be sorted descending.
fn n_of_a_kind(cards: &[Card], n: usize) -> Option<Vec<Card>> {
    let mut i = 0;
    while i < cards.len() {
        let mut j = i;
        while j < cards.len() && cards[j].value == cards[i].value {
            j += 1;
        }
        if j - i >= n {
            return Some(cards[i..i + n].to_vec());
        }
        i = j;
    }
    None
}

/// Cards not used by an already-found partial hand, order preserved.
fn remainder(cards: &[Card], used: &[Card]) -> Vec<Card> {
    cards
        .iter()
        .filter(|c| !used.contains(c))
        .copied()
        .collect()
}

/// Group cards by suit, order within a group preserved.
fn suit_groups(cards: &[Card]) -> [Vec<Card>; 4] {
    let mut groups: [Vec<Card>; 4] = Default::default();
    for &card in cards {
        groups[card.suit as usize].push(card);
    }
    groups
}

fn high_card(cards: &[Card]) -> Option<[Card; 5]> {
    if cards.len() < 5 {
        return None;
    }
    Some(five(&cards[..5]))
}

fn pair(cards: &[Card]) -> Option<[Card; 5]> {
    let p = n_of_a_kind(cards, 2)?;
    let rest = remainder(cards, &p);
    Some([p[0], p[1], rest[0], rest[1], rest[2]])
}

fn two_pair(cards: &[Card]) -> Option<[Card; 5]> {
    let first = n_of_a_kind(cards, 2)?;
    let rest = remainder(cards, &first);
    let second = n_of_a_kind(&rest, 2)?;
    let kickers = remainder(&rest, &second);
    Some([first[0], first[1], second[0], second[1], kickers[0]])
}

fn three_of_a_kind(cards: &[Card]) -> Option<[Card; 5]> {
    let trips = n_of_a_kind(cards, 3)?;
    let rest = remainder(cards, &trips);
    Some([trips[0], trips[1], trips[2], rest[0], rest[1]])
}

/// Scan sorted distinct values for five in a row. A run that reaches
/// five cards is never discarded by a later gap; only a shorter
/// run-in-progress resets. The wheel is handled by appending the Ace
/// after a two-low run.
fn straight(cards: &[Card]) -> Option<[Card; 5]> {
    // One card per value, keeping the first seen.
    let mut distinct: Vec<Card> = Vec::with_capacity(cards.len());
    for &card in cards {
        if distinct.last().map(|c| c.value) != Some(card.value) {
            distinct.push(card);
        }
    }

    let mut run: Vec<Card> = vec![distinct[0]];
    for i in 1..distinct.len() {
        if distinct[i - 1].value.gap(distinct[i].value) == 1 {
            run.push(distinct[i]);
        } else if run.len() < 5 {
            run = vec![distinct[i]];
        }
    }

    // Ace plays low under a five-high run: A-2-3-4-5.
    if distinct[distinct.len() - 1].value == Value::Two && distinct[0].value == Value::Ace {
        run.push(distinct[0]);
    }

    if run.len() >= 5 {
        Some(five(&run[..5]))
    } else {
        None
    }
}

fn flush(cards: &[Card]) -> Option<[Card; 5]> {
    suit_groups(cards)
        .iter()
        .find(|group| group.len() >= 5)
        .map(|group| five(&group[..5]))
}

fn full_house(cards: &[Card]) -> Option<[Card; 5]> {
    let trips = n_of_a_kind(cards, 3)?;
    let rest = remainder(cards, &trips);
    let p = n_of_a_kind(&rest, 2)?;
    Some([trips[0], trips[1], trips[2], p[0], p[1]])
}

fn four_of_a_kind(cards: &[Card]) -> Option<[Card; 5]> {
    let quads = n_of_a_kind(cards, 4)?;
    let rest = remainder(cards, &quads);
    Some([quads[0], quads[1], quads[2], quads[3], rest[0]])
}

/// At most one suit can hold five of at most seven cards, so at most
/// one group can produce a candidate.
fn straight_flush(cards: &[Card]) -> Option<[Card; 5]> {
    suit_groups(cards)
        .iter()
        .filter(|group| group.len() >= 5)
        .find_map(|group| straight(group))
}

fn royal_flush(cards: &[Card]) -> Option<[Card; 5]> {
    straight_flush(cards).filter(|best| best[0].value == Value::Ace)
}
