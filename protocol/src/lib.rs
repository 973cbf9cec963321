use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use view::*;

mod view;

/// Body of `POST /new`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGameParams {
    pub width: u16,
    pub height: u16,
    pub mines_count: u16,
}

/// Body of `POST /turn`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTurnParams {
    pub game_id: Uuid,
    pub col: i16,
    pub row: i16,
}

/// State of a game as returned by both endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateBody {
    pub game_id: Uuid,
    pub width: u16,
    pub height: u16,
    pub mines_count: u16,
    pub completed: bool,
    /// Rows of display tiles, `field[row][col]`.
    pub field: Vec<Vec<TileView>>,
}

/// Payload of 400-class responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
