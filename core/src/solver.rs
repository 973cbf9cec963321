use serde::{Deserialize, Serialize};

use crate::{
    BreadthFirstOpener, CellOpener, GameError, GameField, Result, Turn, TurnInvalidReason,
};

/// How a single turn resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Every safe cell is opened.
    Victory,
    /// A mine was opened.
    Defeat,
    EmptyCellOpened,
    CellWithNumberOpened,
}

impl TurnOutcome {
    pub const fn is_terminal(self) -> bool {
        matches!(self, TurnOutcome::Victory | TurnOutcome::Defeat)
    }
}

/// Outcome of a solved turn, together with how many cells it opened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TurnResolution {
    pub outcome: TurnOutcome,
    pub processed_cells: u16,
}

/// Applies one turn to a field and decides the outcome, delegating to the
/// injected opener when an empty cell is hit.
#[derive(Copy, Clone, Debug, Default)]
pub struct TurnSolver<O = BreadthFirstOpener> {
    opener: O,
}

impl TurnSolver {
    pub const fn new() -> Self {
        Self {
            opener: BreadthFirstOpener,
        }
    }
}

impl<O: CellOpener> TurnSolver<O> {
    pub const fn with_opener(opener: O) -> Self {
        Self { opener }
    }

    /// Mutates `field` in place. The target must be inside the field and not
    /// opened yet; violations leave the field untouched.
    pub fn solve(&self, turn: &Turn, field: &mut GameField) -> Result<TurnResolution> {
        if !field.bounds().contains_point(turn.cell) {
            return Err(GameError::InvalidTurn(
                TurnInvalidReason::TargetCellOutOfGameField,
            ));
        }
        let target = field[turn.cell];
        if target.opened {
            return Err(GameError::InvalidTurn(
                TurnInvalidReason::TargetCellAlreadyOpened,
            ));
        }

        if target.value.is_mine() {
            field[turn.cell].opened = true;
            return Ok(TurnResolution {
                outcome: TurnOutcome::Defeat,
                processed_cells: 1,
            });
        }

        let (mut outcome, processed_cells) = if target.value.is_empty() {
            (
                TurnOutcome::EmptyCellOpened,
                self.opener.open(field, turn.cell)?,
            )
        } else {
            field[turn.cell].opened = true;
            (TurnOutcome::CellWithNumberOpened, 1)
        };

        if all_safe_cells_opened(field) {
            outcome = TurnOutcome::Victory;
        }

        Ok(TurnResolution {
            outcome,
            processed_cells,
        })
    }
}

fn all_safe_cells_opened(field: &GameField) -> bool {
    field.iter().all(|cell| cell.is_mine() || cell.opened)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, CellValue, Point, Size};

    /// The 2x2 corner-mine scenario: three ones around a mine at (1, 1).
    fn corner_mine_field() -> GameField {
        let mut field = GameField::new(Size::square(2)).unwrap();
        field[Point::new(0, 0)] = Cell::new(CellValue::One, false);
        field[Point::new(1, 0)] = Cell::new(CellValue::One, false);
        field[Point::new(0, 1)] = Cell::new(CellValue::One, false);
        field[Point::new(1, 1)] = Cell::new(CellValue::Mine, false);
        field
    }

    fn turn_at(x: i16, y: i16) -> Turn {
        Turn::new(1, Point::new(x, y))
    }

    #[test]
    fn selecting_a_mine_is_a_defeat_opening_only_that_cell() {
        let mut field = corner_mine_field();

        let resolution = TurnSolver::new().solve(&turn_at(1, 1), &mut field).unwrap();

        assert_eq!(resolution.outcome, TurnOutcome::Defeat);
        assert_eq!(resolution.processed_cells, 1);
        assert!(field[Point::new(1, 1)].opened);
        assert!(!field[Point::new(0, 0)].opened);
        assert!(!field[Point::new(1, 0)].opened);
        assert!(!field[Point::new(0, 1)].opened);
    }

    #[test]
    fn selecting_a_numbered_cell_opens_it() {
        let mut field = corner_mine_field();

        let resolution = TurnSolver::new().solve(&turn_at(1, 0), &mut field).unwrap();

        assert_eq!(resolution.outcome, TurnOutcome::CellWithNumberOpened);
        assert_eq!(resolution.processed_cells, 1);
        assert!(field[Point::new(1, 0)].opened);
    }

    #[test]
    fn opening_the_last_safe_cell_wins() {
        let mut field = corner_mine_field();
        field[Point::new(1, 0)].opened = true;
        field[Point::new(0, 1)].opened = true;

        let resolution = TurnSolver::new().solve(&turn_at(0, 0), &mut field).unwrap();

        assert_eq!(resolution.outcome, TurnOutcome::Victory);
        assert_eq!(resolution.processed_cells, 1);
        assert!(!field[Point::new(1, 1)].opened);
    }

    #[test]
    fn flooding_a_mine_free_field_is_an_instant_victory() {
        let mut field = GameField::new(Size::square(2)).unwrap();

        let resolution = TurnSolver::new().solve(&turn_at(0, 0), &mut field).unwrap();

        assert_eq!(resolution.outcome, TurnOutcome::Victory);
        assert_eq!(resolution.processed_cells, 4);
        assert!(field.iter().all(|cell| cell.opened));
    }

    #[test]
    fn rejects_a_target_outside_the_field_without_mutation() {
        let mut field = corner_mine_field();
        let before = field.clone();

        let err = TurnSolver::new().solve(&turn_at(2, 0), &mut field);

        assert_eq!(
            err,
            Err(GameError::InvalidTurn(
                TurnInvalidReason::TargetCellOutOfGameField
            ))
        );
        assert_eq!(field, before);
    }

    #[test]
    fn rejects_an_already_opened_target_without_mutation() {
        let mut field = corner_mine_field();
        field[Point::new(0, 0)].opened = true;
        let before = field.clone();

        let err = TurnSolver::new().solve(&turn_at(0, 0), &mut field);

        assert_eq!(
            err,
            Err(GameError::InvalidTurn(
                TurnInvalidReason::TargetCellAlreadyOpened
            ))
        );
        assert_eq!(field, before);
    }

    #[test]
    fn defeat_skips_the_victory_scan() {
        // every safe cell is already open; hitting the mine must still lose
        let mut field = corner_mine_field();
        field[Point::new(0, 0)].opened = true;
        field[Point::new(1, 0)].opened = true;
        field[Point::new(0, 1)].opened = true;

        let resolution = TurnSolver::new().solve(&turn_at(1, 1), &mut field).unwrap();

        assert_eq!(resolution.outcome, TurnOutcome::Defeat);
    }
}
