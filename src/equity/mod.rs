/// Module for the validated spot: positions, seats, board, dead cards,
/// and the alive pool derived from them.
mod spot;
/// Export the spot model and its errors.
pub use self::spot::{Position, Seat, Spot, SpotConfig, SpotError};

/// Module for the persisted hand evaluation cache.
mod cache;
/// Export `EvalCache`.
pub use self::cache::{CacheError, EvalCache};

/// Module for the run-out enumerator and equity aggregator.
mod calculator;
/// Export the calculator and its result types.
pub use self::calculator::{EquityCalculator, EquityResult, PlayerEquity};
