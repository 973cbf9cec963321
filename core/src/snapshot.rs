use serde::Serialize;

use crate::{Cell, GameError, GameField, Result, Size};

/// A checkpoint of field state as of a specific turn. `turn_number` is `None`
/// for the initial snapshot taken before any turn was made.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    turn_number: Option<u16>,
    field: GameField,
}

impl Snapshot {
    pub fn new(turn_number: u16, field: GameField) -> Self {
        Self {
            turn_number: Some(turn_number),
            field,
        }
    }

    pub fn initial(field: GameField) -> Self {
        Self {
            turn_number: None,
            field,
        }
    }

    pub fn turn_number(&self) -> Option<u16> {
        self.turn_number
    }

    pub fn field(&self) -> &GameField {
        &self.field
    }

    pub fn into_field(self) -> GameField {
        self.field
    }
}

const HEADER_LEN: usize = 4;

/// Encodes a field as the persistence blob: width and height as little-endian
/// `u16`, then one packed byte per cell in row-major order.
pub fn encode_field(field: &GameField) -> Vec<u8> {
    let size = field.size();
    let mut bytes = Vec::with_capacity(HEADER_LEN + field.len());
    bytes.extend_from_slice(&size.width.to_le_bytes());
    bytes.extend_from_slice(&size.height.to_le_bytes());
    bytes.extend(field.iter().map(|cell| cell.to_byte()));
    bytes
}

/// Exact inverse of [`encode_field`].
pub fn decode_field(bytes: &[u8]) -> Result<GameField> {
    if bytes.len() < HEADER_LEN {
        return Err(GameError::SnapshotTruncated);
    }
    let width = u16::from_le_bytes([bytes[0], bytes[1]]);
    let height = u16::from_le_bytes([bytes[2], bytes[3]]);
    let mut field = GameField::new(Size::new(width, height))?;

    let payload = &bytes[HEADER_LEN..];
    if payload.len() != field.len() {
        return Err(GameError::SnapshotLengthMismatch {
            expected: field.len(),
            actual: payload.len(),
        });
    }
    for (slot, &byte) in field.cells_mut().iter_mut().zip(payload) {
        *slot = Cell::from_byte(byte)?;
    }
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellValue, FieldGenerator, Point, RandomFieldGenerator};

    #[test]
    fn header_is_little_endian_width_then_height() {
        let field = GameField::new(Size::new(300, 2)).unwrap();

        let bytes = encode_field(&field);

        assert_eq!(&bytes[..4], &[44, 1, 2, 0]);
        assert_eq!(bytes.len(), 4 + 600);
    }

    #[test]
    fn an_all_empty_field_round_trips() {
        let field = GameField::new(Size::square(5)).unwrap();
        assert_eq!(decode_field(&encode_field(&field)).unwrap(), field);
    }

    #[test]
    fn a_generated_partially_opened_field_round_trips() {
        let mut field = GameField::new(Size::new(9, 6)).unwrap();
        RandomFieldGenerator::from_seed(11)
            .generate(&mut field, 14)
            .unwrap();
        field[Point::new(0, 0)].opened = true;
        field[Point::new(8, 5)].opened = true;

        assert_eq!(decode_field(&encode_field(&field)).unwrap(), field);
    }

    #[test]
    fn an_all_mines_minus_one_field_round_trips() {
        let mut field = GameField::new(Size::square(3)).unwrap();
        for cell in field.cells_mut() {
            cell.value = CellValue::Mine;
        }
        field[Point::new(1, 1)].value = CellValue::Eight;

        assert_eq!(decode_field(&encode_field(&field)).unwrap(), field);
    }

    #[test]
    fn cells_encode_in_row_major_order() {
        let mut field = GameField::new(Size::new(3, 2)).unwrap();
        field[Point::new(2, 0)].value = CellValue::Mine;
        field[Point::new(0, 1)] = Cell::new(CellValue::One, true);

        let bytes = encode_field(&field);

        assert_eq!(&bytes[4..], &[0, 0, 9, 0b1_0001, 0, 0]);
    }

    #[test]
    fn truncated_blobs_are_rejected() {
        assert_eq!(decode_field(&[1, 0]), Err(GameError::SnapshotTruncated));

        // header declares 2x2 but only three cell bytes follow
        let err = decode_field(&[2, 0, 2, 0, 0, 0, 0]);
        assert_eq!(
            err,
            Err(GameError::SnapshotLengthMismatch {
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn zero_area_blobs_are_rejected() {
        assert_eq!(decode_field(&[0, 0, 4, 0]), Err(GameError::EmptyField));
    }

    #[test]
    fn invalid_cell_bytes_are_rejected() {
        let err = decode_field(&[1, 0, 1, 0, 0b0_1100]);
        assert_eq!(err, Err(GameError::InvalidCellByte(0b0_1100)));
    }

    #[test]
    fn initial_snapshot_has_no_turn_number() {
        let field = GameField::new(Size::square(2)).unwrap();

        assert_eq!(Snapshot::initial(field.clone()).turn_number(), None);
        assert_eq!(Snapshot::new(3, field).turn_number(), Some(3));
    }
}
