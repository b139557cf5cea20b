//! Exhaustive Texas Hold'em showdown equity.
//!
//! Given up to six players' hole cards, a partially known board, and a
//! list of dead cards, this crate enumerates every completion of the
//! board, finds the best five card hand each player makes, and tallies
//! who wins or ties each run-out.
//!
//! The classifier output is memoized in an [`equity::EvalCache`] that
//! can be persisted between runs, and the enumeration fans out over a
//! rayon thread pool since each run-out is independent.
//!
//! ```
//! use showdown::core::parse_cards;
//! use showdown::equity::{EquityCalculator, EvalCache, Position, Seat, Spot};
//!
//! let btn = parse_cards("AhKh").unwrap();
//! let sb = parse_cards("8c8d").unwrap();
//! let spot = Spot::new(
//!     vec![
//!         Seat { position: Position::Button, hole: [btn[0], btn[1]] },
//!         Seat { position: Position::SmallBlind, hole: [sb[0], sb[1]] },
//!     ],
//!     parse_cards("2s7dTh9h").unwrap(),
//!     vec![],
//! )
//! .unwrap();
//!
//! let cache = EvalCache::new();
//! let result = EquityCalculator::new(&spot, &cache).calculate();
//! assert_eq!(44, result.total_outcomes());
//! ```

/// The card model, hand classifier, and comparison.
pub mod core;

/// Spots, the evaluation cache, and the equity calculator.
pub mod equity;
