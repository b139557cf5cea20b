use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::debug;

use crate::core::{Card, CardIter, ClassifiedHand};
use crate::equity::{EvalCache, Position, Spot};

/// Win/tie counts for one seat across every enumerated run-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEquity {
    /// The seat this tally belongs to.
    pub position: Position,
    /// Run-outs where this seat held the single best hand.
    pub wins: u64,
    /// Run-outs where this seat shared the best hand.
    pub ties: u64,
    /// Total run-outs enumerated.
    pub total_outcomes: u64,
}

impl PlayerEquity {
    /// Win rate as a percentage, 0.0 to 100.0.
    pub fn win_percentage(&self) -> f64 {
        if self.total_outcomes == 0 {
            return 0.0;
        }
        (self.wins as f64 / self.total_outcomes as f64) * 100.0
    }

    /// Tie rate as a percentage, 0.0 to 100.0.
    pub fn tie_percentage(&self) -> f64 {
        if self.total_outcomes == 0 {
            return 0.0;
        }
        (self.ties as f64 / self.total_outcomes as f64) * 100.0
    }
}

/// The aggregated result of an equity run.
#[derive(Debug, Clone)]
pub struct EquityResult {
    players: Vec<PlayerEquity>,
}

impl EquityResult {
    /// Per-seat tallies, in position order.
    pub fn players(&self) -> &[PlayerEquity] {
        &self.players
    }

    /// How many board completions were enumerated.
    pub fn total_outcomes(&self) -> u64 {
        self.players.first().map_or(0, |p| p.total_outcomes)
    }
}

/// Exhaustive equity calculator.
///
/// Enumerates every completion of the board from the spot's alive pool,
/// classifies each seat's hand through the shared cache, and tallies
/// which seat(s) hold rank 0 per completion.
#[derive(Debug)]
pub struct EquityCalculator<'a> {
    spot: &'a Spot,
    cache: &'a EvalCache,
}

impl<'a> EquityCalculator<'a> {
    pub fn new(spot: &'a Spot, cache: &'a EvalCache) -> Self {
        Self { spot, cache }
    }

    /// Run the full enumeration.
    ///
    /// A complete five card board is a single outcome. Otherwise the
    /// combination space is partitioned by the first drawn card and the
    /// partitions run on the rayon pool, each with a local tally that
    /// is summed at the end; nothing shared is mutated per outcome.
    pub fn calculate(&self) -> EquityResult {
        let board = self.spot.board();
        let seats = self.spot.seats();
        let need = 5 - board.len();

        let tally = if need == 0 {
            let mut single = Tally::new(seats.len());
            single.record(self.showdown(board));
            single
        } else {
            let alive = self.spot.alive();
            debug!(
                alive = alive.len(),
                need,
                players = seats.len(),
                "enumerating run-outs"
            );
            (0..alive.len())
                .into_par_iter()
                .map(|first| {
                    let mut local = Tally::new(seats.len());
                    let mut candidate = board.to_vec();
                    candidate.push(alive[first]);
                    for rest in CardIter::new(&alive[first + 1..], need - 1) {
                        candidate.truncate(board.len() + 1);
                        candidate.extend_from_slice(&rest);
                        local.record(self.showdown(&candidate));
                    }
                    local
                })
                .reduce(|| Tally::new(seats.len()), Tally::merge)
        };

        debug!(
            outcomes = tally.outcomes,
            cached = self.cache.len(),
            "enumeration complete"
        );

        let players = seats
            .iter()
            .enumerate()
            .map(|(idx, seat)| PlayerEquity {
                position: seat.position,
                wins: tally.wins[idx],
                ties: tally.ties[idx],
                total_outcomes: tally.outcomes,
            })
            .collect();
        EquityResult { players }
    }

    /// Rank every seat on a candidate board and return the bitmask of
    /// seats sharing rank 0.
    fn showdown(&self, board: &[Card]) -> u8 {
        let mut cards: Vec<Card> = Vec::with_capacity(board.len() + 2);
        let mut best: Option<ClassifiedHand> = None;
        let mut winners: u8 = 0;

        for (idx, seat) in self.spot.seats().iter().enumerate() {
            cards.clear();
            cards.extend_from_slice(&seat.hole);
            cards.extend_from_slice(board);
            let hand = self.cache.classify(&cards);

            match &best {
                None => {
                    best = Some(hand);
                    winners = 1 << idx;
                }
                Some(current) => match hand.compare(current) {
                    Ordering::Greater => {
                        best = Some(hand);
                        winners = 1 << idx;
                    }
                    Ordering::Equal => winners |= 1 << idx,
                    Ordering::Less => {}
                },
            }
        }
        winners
    }
}

/// Per-worker accumulator. Merging is elementwise addition, so the
/// reduction over partitions is associative.
#[derive(Debug)]
struct Tally {
    wins: Vec<u64>,
    ties: Vec<u64>,
    outcomes: u64,
}

impl Tally {
    fn new(players: usize) -> Self {
        Self {
            wins: vec![0; players],
            ties: vec![0; players],
            outcomes: 0,
        }
    }

    /// Record one outcome: a sole winner gets a win, every member of a
    /// shared rank 0 gets a tie.
    fn record(&mut self, winners: u8) {
        debug_assert!(winners != 0, "every showdown has at least one winner");
        self.outcomes += 1;
        if winners.count_ones() == 1 {
            self.wins[winners.trailing_zeros() as usize] += 1;
        } else {
            for idx in 0..self.wins.len() {
                if winners & (1 << idx) != 0 {
                    self.ties[idx] += 1;
                }
            }
        }
    }

    fn merge(mut self, other: Tally) -> Tally {
        for (w, o) in self.wins.iter_mut().zip(&other.wins) {
            *w += o;
        }
        for (t, o) in self.ties.iter_mut().zip(&other.ties) {
            *t += o;
        }
        self.outcomes += other.outcomes;
        self
    }
}
