use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Card, CardBitSet, CardParseError};

/// Errors from building a `Spot` out of player, board, and dead cards.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SpotError {
    #[error(transparent)]
    InvalidCard(#[from] CardParseError),

    #[error("'{card}' in '{group}' is a duplicate (also in '{other}')")]
    DuplicateCard {
        card: Card,
        group: String,
        other: String,
    },

    #[error("position '{position}' must hold 0 or 2 hole cards, has {count}")]
    HoleCardCount { position: Position, count: usize },

    #[error("position '{0}' is seated more than once")]
    DuplicatePosition(Position),

    #[error("the board has too many cards: {0}")]
    TooManyBoardCards(usize),

    #[error("can't calculate equity for a {0} player spot")]
    NotEnoughPlayers(usize),
}

/// The six fixed table positions a player can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Position {
    Button,
    SmallBlind,
    BigBlind,
    UnderTheGun,
    MiddlePosition,
    Cutoff,
}

impl Position {
    /// Every position, in the order seats are reported.
    pub const ALL: [Position; 6] = [
        Position::Button,
        Position::SmallBlind,
        Position::BigBlind,
        Position::UnderTheGun,
        Position::MiddlePosition,
        Position::Cutoff,
    ];

    /// The short name used in configs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Button => "btn",
            Position::SmallBlind => "sb",
            Position::BigBlind => "bb",
            Position::UnderTheGun => "utg",
            Position::MiddlePosition => "mp",
            Position::Cutoff => "co",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An active player: a position holding exactly two hole cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    pub position: Position,
    pub hole: [Card; 2],
}

/// A fully validated equity spot: at least two seated players, a board
/// of at most five cards, and a dead card list, all pairwise disjoint.
#[derive(Debug, Clone)]
pub struct Spot {
    seats: Vec<Seat>,
    board: Vec<Card>,
    dead: Vec<Card>,
    /// Union of every assigned card.
    used: CardBitSet,
}

impl Spot {
    /// Build and validate a spot.
    pub fn new(seats: Vec<Seat>, board: Vec<Card>, dead: Vec<Card>) -> Result<Spot, SpotError> {
        if board.len() > 5 {
            return Err(SpotError::TooManyBoardCards(board.len()));
        }
        if seats.len() < 2 {
            return Err(SpotError::NotEnoughPlayers(seats.len()));
        }
        // Each position is one slot; a repeat would let a single slot
        // hold four cards. This also bounds a spot at six seats.
        let mut seated: Vec<Position> = Vec::with_capacity(seats.len());
        for seat in &seats {
            if seated.contains(&seat.position) {
                return Err(SpotError::DuplicatePosition(seat.position));
            }
            seated.push(seat.position);
        }

        // One pass over every group catches a card assigned twice no
        // matter which two groups hold it.
        let mut seen: HashMap<Card, String> = HashMap::new();
        let mut used = CardBitSet::new();
        let groups = seats
            .iter()
            .map(|seat| (seat.position.as_str(), &seat.hole[..]))
            .chain([("board", &board[..]), ("dead", &dead[..])]);
        for (group, cards) in groups {
            for &card in cards {
                if let Some(other) = seen.insert(card, group.to_string()) {
                    return Err(SpotError::DuplicateCard {
                        card,
                        group: group.to_string(),
                        other,
                    });
                }
                used.insert(card);
            }
        }

        Ok(Spot {
            seats,
            board,
            dead,
            used,
        })
    }

    /// Build a spot from a parsed JSON config.
    pub fn from_config(config: &SpotConfig) -> Result<Spot, SpotError> {
        let mut seats = Vec::new();
        for position in Position::ALL {
            let tokens = config.hole_tokens(position);
            match tokens.len() {
                0 => {}
                2 => {
                    let hole = [tokens[0].parse()?, tokens[1].parse()?];
                    seats.push(Seat { position, hole });
                }
                count => return Err(SpotError::HoleCardCount { position, count }),
            }
        }

        let board = parse_group(&config.board)?;
        let dead = parse_group(&config.dead)?;
        Spot::new(seats, board, dead)
    }

    /// The seated players, in position order.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// The known community cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Cards removed from play.
    pub fn dead(&self) -> &[Card] {
        &self.dead
    }

    /// Every card not assigned to a hand, the board, or the dead list,
    /// in canonical order. This is the pool run-out cards come from.
    pub fn alive(&self) -> Vec<Card> {
        (CardBitSet::default() ^ self.used).into_iter().collect()
    }
}

fn parse_group(tokens: &[String]) -> Result<Vec<Card>, CardParseError> {
    tokens.iter().map(|t| t.parse()).collect()
}

/// The JSON shape of a spot: card tokens per position plus the board
/// and dead lists. Missing keys mean empty; unknown keys are rejected.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SpotConfig {
    pub btn: Vec<String>,
    pub sb: Vec<String>,
    pub bb: Vec<String>,
    pub utg: Vec<String>,
    pub mp: Vec<String>,
    pub co: Vec<String>,
    pub board: Vec<String>,
    pub dead: Vec<String>,
}

impl SpotConfig {
    fn hole_tokens(&self, position: Position) -> &[String] {
        match position {
            Position::Button => &self.btn,
            Position::SmallBlind => &self.sb,
            Position::BigBlind => &self.bb,
            Position::UnderTheGun => &self.utg,
            Position::MiddlePosition => &self.mp,
            Position::Cutoff => &self.co,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn two_player_config() -> SpotConfig {
        SpotConfig {
            btn: tokens(&["Ah", "Kd"]),
            sb: tokens(&["Qc", "Qs"]),
            ..SpotConfig::default()
        }
    }

    #[test]
    fn test_valid_spot() {
        let spot = Spot::from_config(&two_player_config()).unwrap();
        assert_eq!(2, spot.seats().len());
        assert_eq!(Position::Button, spot.seats()[0].position);
        assert!(spot.board().is_empty());
        assert_eq!(48, spot.alive().len());
    }

    #[test]
    fn test_alive_excludes_all_groups() {
        let mut config = two_player_config();
        config.board = tokens(&["2c", "3c", "4c"]);
        config.dead = tokens(&["9h"]);
        let spot = Spot::from_config(&config).unwrap();

        let alive = spot.alive();
        assert_eq!(52 - 4 - 3 - 1, alive.len());
        for token in ["Ah", "Kd", "Qc", "Qs", "2c", "3c", "4c", "9h"] {
            let card: Card = token.parse().unwrap();
            assert!(!alive.contains(&card), "{token} should not be alive");
        }
    }

    #[test]
    fn test_single_player_rejected() {
        let config = SpotConfig {
            btn: tokens(&["Ah", "Kd"]),
            ..SpotConfig::default()
        };
        assert_eq!(
            Err(SpotError::NotEnoughPlayers(1)),
            Spot::from_config(&config).map(|_| ())
        );
    }

    #[test]
    fn test_one_hole_card_rejected() {
        let mut config = two_player_config();
        config.bb = tokens(&["7h"]);
        let err = Spot::from_config(&config).unwrap_err();
        assert_eq!(
            SpotError::HoleCardCount {
                position: Position::BigBlind,
                count: 1
            },
            err
        );
    }

    #[test]
    fn test_duplicate_position_rejected() {
        // Card-disjoint seats are not enough; one slot must not appear
        // twice.
        let ah_kd: [Card; 2] = ["Ah".parse().unwrap(), "Kd".parse().unwrap()];
        let qc_qs: [Card; 2] = ["Qc".parse().unwrap(), "Qs".parse().unwrap()];
        let seats = vec![
            Seat {
                position: Position::Button,
                hole: ah_kd,
            },
            Seat {
                position: Position::Button,
                hole: qc_qs,
            },
        ];
        assert_eq!(
            Err(SpotError::DuplicatePosition(Position::Button)),
            Spot::new(seats, vec![], vec![]).map(|_| ())
        );
    }

    #[test]
    fn test_duplicate_across_groups() {
        let mut config = two_player_config();
        config.dead = tokens(&["Ah"]);
        let err = Spot::from_config(&config).unwrap_err();
        match err {
            SpotError::DuplicateCard { card, group, other } => {
                assert_eq!("Ah".parse::<Card>().unwrap(), card);
                assert_eq!("dead", group);
                assert_eq!("btn", other);
            }
            other => panic!("expected DuplicateCard, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_between_board_and_dead() {
        let mut config = two_player_config();
        config.board = tokens(&["9h"]);
        config.dead = tokens(&["9h"]);
        assert!(matches!(
            Spot::from_config(&config),
            Err(SpotError::DuplicateCard { .. })
        ));
    }

    #[test]
    fn test_board_too_long() {
        let mut config = two_player_config();
        config.board = tokens(&["2c", "3c", "4c", "5c", "6c", "7c"]);
        assert_eq!(
            Err(SpotError::TooManyBoardCards(6)),
            Spot::from_config(&config).map(|_| ())
        );
    }

    #[test]
    fn test_unparseable_card() {
        let mut config = two_player_config();
        config.board = tokens(&["Zz"]);
        assert!(matches!(
            Spot::from_config(&config),
            Err(SpotError::InvalidCard(_))
        ));
    }

    #[test]
    fn test_unknown_config_key_rejected() {
        let json = r#"{"btn": ["Ah", "Kd"], "straddle": []}"#;
        assert!(serde_json::from_str::<SpotConfig>(json).is_err());
    }

    #[test]
    fn test_missing_keys_default_empty() {
        let json = r#"{"btn": ["Ah", "Kd"], "sb": ["Qc", "Qs"]}"#;
        let config: SpotConfig = serde_json::from_str(json).unwrap();
        let spot = Spot::from_config(&config).unwrap();
        assert!(spot.dead().is_empty());
    }
}
