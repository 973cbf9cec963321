use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::{CellValue, GameError, GameField, Point, Result, moore_neighbors};

/// Fills a fresh field with mines and adjacency counts.
pub trait FieldGenerator {
    /// Places exactly `mines_count` mines and computes every safe cell's
    /// value. Fails when the count would not leave at least one safe cell.
    fn generate(&mut self, field: &mut GameField, mines_count: u16) -> Result<()>;
}

/// Places mines by drawing random coordinates until the requested count of
/// distinct mine cells exists, then walks the field once to count neighbors.
///
/// Every mine placement of a given count is equally likely, and a fixed seed
/// reproduces the same field.
#[derive(Clone, Debug)]
pub struct RandomFieldGenerator<R = SmallRng> {
    rng: R,
}

impl RandomFieldGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> RandomFieldGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> FieldGenerator for RandomFieldGenerator<R> {
    fn generate(&mut self, field: &mut GameField, mines_count: u16) -> Result<()> {
        let area = field.size().area();
        if u32::from(mines_count) >= area {
            return Err(GameError::TooManyMines {
                mines: mines_count,
                area,
            });
        }

        let size = field.size();
        let mut remaining = mines_count;
        while remaining > 0 {
            // coordinates fit i16 because the field's bounds were constructible
            let point = Point::new(
                self.rng.random_range(0..size.width) as i16,
                self.rng.random_range(0..size.height) as i16,
            );
            let cell = &mut field[point];
            if cell.value.is_mine() {
                continue;
            }
            cell.value = CellValue::Mine;
            remaining -= 1;
        }
        log::debug!(
            "placed {} mines on a {}x{} field",
            mines_count,
            size.width,
            size.height
        );

        compute_adjacency(field);
        Ok(())
    }
}

/// Second generation pass: every safe cell's value becomes the count of its
/// in-bounds Moore neighbors holding a mine.
fn compute_adjacency(field: &mut GameField) {
    let bounds = field.bounds();
    let size = field.size();
    for y in 0..size.height as i16 {
        for x in 0..size.width as i16 {
            let point = Point::new(x, y);
            if field[point].value.is_mine() {
                continue;
            }
            let near_mines = moore_neighbors(point)
                .filter(|&p| bounds.contains_point(p))
                .filter(|&p| field[p].value.is_mine())
                .count() as u8;
            field[point].value =
                CellValue::from_adjacent_count(near_mines).expect("at most eight neighbors");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Size;

    fn generate(size: Size, mines: u16, seed: u64) -> GameField {
        let mut field = GameField::new(size).unwrap();
        RandomFieldGenerator::from_seed(seed)
            .generate(&mut field, mines)
            .unwrap();
        field
    }

    fn mine_count(field: &GameField) -> usize {
        field.iter().filter(|cell| cell.is_mine()).count()
    }

    #[test]
    fn places_exactly_the_requested_mines() {
        for seed in 0..8 {
            let field = generate(Size::new(9, 7), 20, seed);
            assert_eq!(mine_count(&field), 20);
        }
    }

    #[test]
    fn rejects_a_count_that_fills_the_field() {
        let mut field = GameField::new(Size::square(4)).unwrap();
        let mut generator = RandomFieldGenerator::from_seed(0);

        let err = generator.generate(&mut field, 16);
        assert_eq!(err, Err(GameError::TooManyMines { mines: 16, area: 16 }));

        assert!(generator.generate(&mut field, 15).is_ok());
    }

    #[test]
    fn every_safe_cell_counts_its_mine_neighbors() {
        let field = generate(Size::new(8, 8), 12, 42);
        let bounds = field.bounds();

        for y in 0..8 {
            for x in 0..8 {
                let point = Point::new(x, y);
                if field[point].is_mine() {
                    continue;
                }
                let expected = moore_neighbors(point)
                    .filter(|&p| bounds.contains_point(p))
                    .filter(|&p| field[p].is_mine())
                    .count() as u8;
                assert_eq!(field[point].value.as_u8(), expected, "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn leaves_every_cell_closed() {
        let field = generate(Size::new(6, 5), 10, 3);
        assert!(field.iter().all(|cell| !cell.opened));
    }

    #[test]
    fn same_seed_reproduces_the_same_field() {
        let first = generate(Size::new(10, 10), 30, 1234);
        let second = generate(Size::new(10, 10), 30, 1234);
        assert_eq!(first, second);
    }

    #[test]
    fn almost_full_field_keeps_one_safe_cell() {
        let field = generate(Size::square(3), 8, 7);
        assert_eq!(mine_count(&field), 8);

        // the lone safe cell sees a mine in every in-bounds neighbor
        let bounds = field.bounds();
        let safe = (0..3)
            .flat_map(|y| (0..3).map(move |x| Point::new(x, y)))
            .find(|&p| !field[p].is_mine())
            .unwrap();
        let neighbors = moore_neighbors(safe)
            .filter(|&p| bounds.contains_point(p))
            .count() as u8;
        assert_eq!(field[safe].value.as_u8(), neighbors);
    }
}
