use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Value of a single cell: the adjacent-mine count of a safe cell, or a mine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellValue {
    #[default]
    Empty = 0,
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Mine = 9,
}

impl CellValue {
    /// Value of a safe cell with `count` adjacent mines; `None` above eight.
    pub const fn from_adjacent_count(count: u8) -> Option<CellValue> {
        use CellValue::*;
        Some(match count {
            0 => Empty,
            1 => One,
            2 => Two,
            3 => Three,
            4 => Four,
            5 => Five,
            6 => Six,
            7 => Seven,
            8 => Eight,
            _ => return None,
        })
    }

    const fn from_u8(value: u8) -> Option<CellValue> {
        if value == 9 {
            Some(CellValue::Mine)
        } else {
            CellValue::from_adjacent_count(value)
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, CellValue::Mine)
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, CellValue::Empty)
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

const VALUE_MASK: u8 = 0b0_1111;
const OPENED_BIT: u8 = 0b1_0000;

/// One field cell. A plain tagged struct in memory; the packed single-byte
/// form exists only at the snapshot boundary.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub value: CellValue,
    pub opened: bool,
}

impl Cell {
    pub const fn new(value: CellValue, opened: bool) -> Self {
        Self { value, opened }
    }

    pub const fn is_mine(self) -> bool {
        self.value.is_mine()
    }

    /// Packs into one byte: low nibble is the value, bit four the opened flag.
    pub const fn to_byte(self) -> u8 {
        let mut byte = self.value.as_u8();
        if self.opened {
            byte |= OPENED_BIT;
        }
        byte
    }

    /// Inverse of [`Cell::to_byte`]; rejects nibbles above nine and any set
    /// bit past the opened flag.
    pub const fn from_byte(byte: u8) -> Result<Cell> {
        if byte & !(VALUE_MASK | OPENED_BIT) != 0 {
            return Err(GameError::InvalidCellByte(byte));
        }
        match CellValue::from_u8(byte & VALUE_MASK) {
            Some(value) => Ok(Cell {
                value,
                opened: byte & OPENED_BIT != 0,
            }),
            None => Err(GameError::InvalidCellByte(byte)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_value_into_low_nibble_and_flag_into_bit_four() {
        assert_eq!(Cell::new(CellValue::Empty, false).to_byte(), 0b0_0000);
        assert_eq!(Cell::new(CellValue::Three, false).to_byte(), 0b0_0011);
        assert_eq!(Cell::new(CellValue::Three, true).to_byte(), 0b1_0011);
        assert_eq!(Cell::new(CellValue::Mine, true).to_byte(), 0b1_1001);
    }

    #[test]
    fn every_cell_round_trips_through_its_byte() {
        for value in 0..=9 {
            for opened in [false, true] {
                let cell = Cell::new(CellValue::from_u8(value).unwrap(), opened);
                assert_eq!(Cell::from_byte(cell.to_byte()), Ok(cell));
            }
        }
    }

    #[test]
    fn invalid_bytes_are_rejected() {
        // nibbles past nine
        assert_eq!(
            Cell::from_byte(0b0_1010),
            Err(GameError::InvalidCellByte(0b0_1010))
        );
        assert_eq!(
            Cell::from_byte(0b1_1111),
            Err(GameError::InvalidCellByte(0b1_1111))
        );
        // bits past the opened flag
        assert_eq!(
            Cell::from_byte(0b10_0001),
            Err(GameError::InvalidCellByte(0b10_0001))
        );
    }

    #[test]
    fn adjacent_count_conversion_caps_at_eight() {
        assert_eq!(CellValue::from_adjacent_count(0), Some(CellValue::Empty));
        assert_eq!(CellValue::from_adjacent_count(8), Some(CellValue::Eight));
        assert_eq!(CellValue::from_adjacent_count(9), None);
    }
}
