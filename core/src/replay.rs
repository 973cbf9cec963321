use crate::{
    BreadthFirstOpener, CellOpener, GameError, GameField, Result, Snapshot, Turn, TurnOutcome,
    TurnSolver,
};

/// Final state after replaying a turn sequence from a checkpoint: the last
/// turn's outcome and opened-cell count, plus the fully mutated field.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplayOutcome {
    pub outcome: TurnOutcome,
    pub processed_cells: u16,
    pub field: GameField,
}

/// Replays the turns made since a snapshot onto a copy of its field. This is
/// how current game state is reconstructed from a checkpoint.
#[derive(Copy, Clone, Debug, Default)]
pub struct TurnProcessor<O = BreadthFirstOpener> {
    solver: TurnSolver<O>,
}

impl TurnProcessor {
    pub const fn new() -> Self {
        Self {
            solver: TurnSolver::new(),
        }
    }
}

impl<O: CellOpener> TurnProcessor<O> {
    pub const fn with_solver(solver: TurnSolver<O>) -> Self {
        Self { solver }
    }

    /// `turns` must be non-empty and ordered by ascending turn number. The
    /// snapshot's own field is never mutated.
    pub fn process(&self, turns: &[Turn], last_snapshot: &Snapshot) -> Result<ReplayOutcome> {
        let Some((first, rest)) = turns.split_first() else {
            return Err(GameError::NoTurns);
        };
        debug_assert!(
            turns.windows(2).all(|pair| pair[0].number < pair[1].number),
            "turns must arrive in ascending order"
        );

        let mut field = last_snapshot.field().clone();
        let mut last = self.solver.solve(first, &mut field)?;
        for turn in rest {
            last = self.solver.solve(turn, &mut field)?;
        }

        Ok(ReplayOutcome {
            outcome: last.outcome,
            processed_cells: last.processed_cells,
            field,
        })
    }
}
