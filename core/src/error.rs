use thiserror::Error;

use crate::geometry::Point;

/// Reason code for a rejected turn, carried separately from the message so
/// callers can branch on it.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum TurnInvalidReason {
    #[error("target cell is out of the game field")]
    TargetCellOutOfGameField,
    #[error("target cell has been opened already")]
    TargetCellAlreadyOpened,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("count of mines {mines} must be less than field area {area}")]
    TooManyMines { mines: u16, area: u32 },
    #[error("field area must be greater than zero")]
    EmptyField,
    #[error("coordinates too large for the field plane")]
    CoordinateOverflow,
    #[error("point ({}, {}) is out of the field bounds", .0.x, .0.y)]
    OutOfField(Point),
    #[error("turn is invalid: {0}")]
    InvalidTurn(TurnInvalidReason),
    #[error("turn sequence must contain at least one turn")]
    NoTurns,
    #[error("snapshot blob is shorter than its size header")]
    SnapshotTruncated,
    #[error("snapshot blob holds {actual} cell bytes, the declared size needs {expected}")]
    SnapshotLengthMismatch { expected: usize, actual: usize },
    #[error("byte {0:#04x} is not a valid cell encoding")]
    InvalidCellByte(u8),
}

pub type Result<T> = core::result::Result<T, GameError>;
