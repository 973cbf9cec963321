use core::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use sapper_core::{Cell, GameField, GameStatus, Point};

const OPEN_DIGITS: [&str; 9] = ["0", "1", "2", "3", "4", "5", "6", "7", "8"];

/// Per-cell display value seen by API clients. Serializes as the display
/// string: `" "`, `"0"`–`"8"`, `"M"` or `"X"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TileView {
    /// Unopened cell of a running game.
    Hidden,
    /// Visible safe cell with its adjacent-mine count (0–8).
    Open(u8),
    /// Mine revealed at the end of a game that was not lost.
    Mine,
    /// Mine revealed after a defeat.
    ExplodedMine,
}

impl TileView {
    pub const fn as_str(self) -> &'static str {
        match self {
            TileView::Hidden => " ",
            TileView::Open(count) => OPEN_DIGITS[count as usize],
            TileView::Mine => "M",
            TileView::ExplodedMine => "X",
        }
    }
}

impl Serialize for TileView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TileView {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(TileViewVisitor)
    }
}

struct TileViewVisitor;

impl Visitor<'_> for TileViewVisitor {
    type Value = TileView;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(r#"one of " ", "0"-"8", "M", "X""#)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<TileView, E> {
        match value {
            " " => Ok(TileView::Hidden),
            "M" => Ok(TileView::Mine),
            "X" => Ok(TileView::ExplodedMine),
            _ => match value.as_bytes() {
                [digit @ b'0'..=b'8'] => Ok(TileView::Open(digit - b'0')),
                _ => Err(E::invalid_value(de::Unexpected::Str(value), &self)),
            },
        }
    }
}

/// Projects a field into the client-facing tile grid, `rows[y][x]`.
///
/// While the game runs only opened cells are visible. Once it completes the
/// whole field is revealed, and mines render as exploded after a defeat.
pub fn render_field(field: &GameField, status: GameStatus) -> Vec<Vec<TileView>> {
    let mine_tile = match status {
        GameStatus::PlayerWasDefeated => TileView::ExplodedMine,
        _ => TileView::Mine,
    };
    let revealed_tile = |cell: Cell| {
        if cell.is_mine() {
            mine_tile
        } else {
            TileView::Open(cell.value.as_u8())
        }
    };

    let completed = status.is_completed();
    let size = field.size();
    (0..size.height as i16)
        .map(|y| {
            (0..size.width as i16)
                .map(|x| {
                    let cell = field[Point::new(x, y)];
                    if completed || cell.opened {
                        revealed_tile(cell)
                    } else {
                        TileView::Hidden
                    }
                })
                .collect()
        })
        .collect()
}
