use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use field::*;
pub use generator::*;
pub use geometry::*;
pub use opener::*;
pub use policy::*;
pub use replay::*;
pub use snapshot::*;
pub use solver::*;

mod cell;
mod error;
mod field;
mod generator;
mod geometry;
mod opener;
mod policy;
mod replay;
mod snapshot;
mod solver;

/// One player move: a 1-based sequence number and the targeted cell.
///
/// Turn numbers strictly increase within a session; the session that owns the
/// turn carries the session identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    pub number: u16,
    pub cell: Point,
}

impl Turn {
    pub const fn new(number: u16, cell: Point) -> Self {
        Self { number, cell }
    }
}

/// Completion status of a game session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    NotCompleted,
    PlayerWasDefeated,
    PlayerWon,
}

impl GameStatus {
    pub const fn is_completed(self) -> bool {
        !matches!(self, GameStatus::NotCompleted)
    }

    /// Status after a resolved turn; non-terminal outcomes leave the session
    /// running.
    pub const fn from_outcome(outcome: TurnOutcome) -> GameStatus {
        match outcome {
            TurnOutcome::Victory => GameStatus::PlayerWon,
            TurnOutcome::Defeat => GameStatus::PlayerWasDefeated,
            TurnOutcome::EmptyCellOpened | TurnOutcome::CellWithNumberOpened => {
                GameStatus::NotCompleted
            }
        }
    }
}
