use core::ops::{Index, IndexMut};
use std::hash::{Hash, Hasher};

use ndarray::Array2;
use serde::Serialize;

use crate::{Cell, GameError, Point, Rectangle, Result, Size};

/// A dense minefield grid. Rows are stored contiguously, so the linear index
/// of a cell is `y * width + x`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameField {
    cells: Array2<Cell>,
    bounds: Rectangle,
}

impl GameField {
    /// Creates an all-closed, all-empty field. The area must be non-zero and
    /// the bounds rectangle must fit the coordinate range.
    pub fn new(size: Size) -> Result<GameField> {
        if size.area() == 0 {
            return Err(GameError::EmptyField);
        }
        let bounds = Rectangle::new(Point::ZERO, size)?;
        Ok(GameField {
            cells: Array2::default((size.height as usize, size.width as usize)),
            bounds,
        })
    }

    pub fn size(&self) -> Size {
        self.bounds.size()
    }

    pub const fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Cell count; always equals the size's area.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major view of the cells.
    pub fn cells(&self) -> &[Cell] {
        self.cells.as_slice().expect("grid is row-major")
    }

    /// Row-major mutable view of the cells.
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        self.cells.as_slice_mut().expect("grid is row-major")
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells().iter()
    }
}

/// Direct cell access. Panics for points outside the bounds rectangle, like
/// slice indexing; check [`GameField::bounds`] first.
impl Index<Point> for GameField {
    type Output = Cell;

    fn index(&self, point: Point) -> &Cell {
        &self.cells[(point.y as usize, point.x as usize)]
    }
}

impl IndexMut<Point> for GameField {
    fn index_mut(&mut self, point: Point) -> &mut Cell {
        &mut self.cells[(point.y as usize, point.x as usize)]
    }
}

impl Hash for GameField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size().hash(state);
        for cell in self.iter() {
            cell.to_byte().hash(state);
        }
    }
}
