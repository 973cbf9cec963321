use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// An integer point on the field plane.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Applies a displacement, returning a value only while both coordinates
    /// stay inside the `i16` range.
    pub fn translated(self, dx: i16, dy: i16) -> Option<Point> {
        Some(Point {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

const DISPLACEMENTS: [(i16, i16); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterates the Moore neighborhood of `center`. Displacements that would
/// leave the coordinate range are skipped; bounds filtering against a field
/// is the caller's job.
pub fn moore_neighbors(center: Point) -> impl Iterator<Item = Point> {
    DISPLACEMENTS
        .iter()
        .filter_map(move |&(dx, dy)| center.translated(dx, dy))
}

/// A two-dimensional size measured in cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub const fn square(side: u16) -> Self {
        Self::new(side, side)
    }

    /// Area in cells, widened so the product cannot overflow.
    pub const fn area(self) -> u32 {
        self.width as u32 * self.height as u32
    }
}

/// An axis-aligned rectangle; the right and bottom edges are exclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Rectangle {
    top_left: Point,
    size: Size,
}

impl Rectangle {
    /// Fails with [`GameError::CoordinateOverflow`] when `top_left + size`
    /// leaves the `i16` range.
    pub fn new(top_left: Point, size: Size) -> Result<Rectangle> {
        check_far_edge(top_left.x, size.width)?;
        check_far_edge(top_left.y, size.height)?;
        Ok(Rectangle { top_left, size })
    }

    pub const fn top_left(self) -> Point {
        self.top_left
    }

    pub const fn size(self) -> Size {
        self.size
    }

    /// First x past the right edge, widened so a large extent over a negative
    /// origin cannot wrap. At most `i16::MAX` by construction.
    pub const fn right(self) -> i32 {
        self.top_left.x as i32 + self.size.width as i32
    }

    /// First y past the bottom edge; see [`Rectangle::right`].
    pub const fn bottom(self) -> i32 {
        self.top_left.y as i32 + self.size.height as i32
    }

    pub const fn contains_point(self, point: Point) -> bool {
        self.top_left.x <= point.x
            && (point.x as i32) < self.right()
            && self.top_left.y <= point.y
            && (point.y as i32) < self.bottom()
    }

    /// Whether `other` lies fully inside this rectangle.
    pub const fn contains_rect(self, other: Rectangle) -> bool {
        self.top_left.x <= other.top_left.x
            && other.right() <= self.right()
            && self.top_left.y <= other.top_left.y
            && other.bottom() <= self.bottom()
    }

    /// Strict overlap test; rectangles that only touch edges do not intersect.
    pub const fn intersects(self, other: Rectangle) -> bool {
        (other.top_left.x as i32) < self.right()
            && (self.top_left.x as i32) < other.right()
            && (other.top_left.y as i32) < self.bottom()
            && (self.top_left.y as i32) < other.bottom()
    }
}

fn check_far_edge(origin: i16, extent: u16) -> Result<()> {
    if i32::from(origin) + i32::from(extent) > i32::from(i16::MAX) {
        Err(GameError::CoordinateOverflow)
    } else {
        Ok(())
    }
}
