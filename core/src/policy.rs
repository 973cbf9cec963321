use crate::TurnOutcome;

/// Decides whether the field state after a turn is worth checkpointing.
/// Swappable without touching the solver or the replay processor.
pub trait SnapshotSavePolicy {
    fn is_save_needed(&self, outcome: TurnOutcome, processed_cells: u16) -> bool;
}

/// Saves terminal states always, flood fills only when they touched more
/// cells than the threshold, and single-cell turns never.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SaveOnLargeChanges {
    threshold: u16,
}

impl SaveOnLargeChanges {
    pub const DEFAULT_THRESHOLD: u16 = 40;

    pub const fn new(threshold: u16) -> Self {
        Self { threshold }
    }

    pub const fn threshold(self) -> u16 {
        self.threshold
    }
}

impl Default for SaveOnLargeChanges {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl SnapshotSavePolicy for SaveOnLargeChanges {
    fn is_save_needed(&self, outcome: TurnOutcome, processed_cells: u16) -> bool {
        match outcome {
            TurnOutcome::Defeat | TurnOutcome::Victory => true,
            TurnOutcome::EmptyCellOpened => processed_cells > self.threshold,
            TurnOutcome::CellWithNumberOpened => false,
        }
    }
}

/// Saves terminal states only, trading replay cost for minimal storage.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SaveOnGameOver;

impl SnapshotSavePolicy for SaveOnGameOver {
    fn is_save_needed(&self, outcome: TurnOutcome, _processed_cells: u16) -> bool {
        outcome.is_terminal()
    }
}
