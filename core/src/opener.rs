use std::collections::VecDeque;

use crate::{GameError, GameField, Point, Result, moore_neighbors};

/// Opens a cell and everything transitively linked to it through empty cells.
pub trait CellOpener {
    /// Returns how many cells ended up opened, the start cell included.
    fn open(&self, field: &mut GameField, start: Point) -> Result<u16>;
}

/// Breadth-first flood fill over the empty-cell contiguity graph, opening the
/// numbered border one hop past it. Mines are never opened.
#[derive(Copy, Clone, Debug, Default)]
pub struct BreadthFirstOpener;

impl CellOpener for BreadthFirstOpener {
    fn open(&self, field: &mut GameField, start: Point) -> Result<u16> {
        let bounds = field.bounds();
        if !bounds.contains_point(start) {
            return Err(GameError::OutOfField(start));
        }

        field[start].opened = true;
        let mut opened_count: u16 = 1;

        let mut frontier = VecDeque::with_capacity((field.len() / 4).max(1));
        frontier.push_back(start);

        while let Some(current) = frontier.pop_front() {
            // numbered cells terminate the flood at their branch
            if !field[current].value.is_empty() {
                continue;
            }
            for neighbor in moore_neighbors(current).filter(|&p| bounds.contains_point(p)) {
                let cell = field[neighbor];
                if cell.opened || cell.value.is_mine() {
                    continue;
                }
                field[neighbor].opened = true;
                opened_count += 1;
                if cell.value.is_empty() {
                    frontier.push_back(neighbor);
                }
            }
        }
        log::trace!(
            "flood fill from ({}, {}) opened {} cells",
            start.x,
            start.y,
            opened_count
        );
        Ok(opened_count)
    }
}
