use std::collections::HashSet;

use rand::Rng;

use crate::geometry::{Position, cells};
use crate::snake::Snake;

/// Lists free cells in row-major order.
#[must_use]
pub fn empty_cells<'a>(snakes: impl IntoIterator<Item = &'a Snake>) -> Vec<Position> {
    let occupied: HashSet<Position> = snakes
        .into_iter()
        .flat_map(|snake| snake.segments())
        .copied()
        .collect();

    cells()
        .filter(|position| !occupied.contains(position))
        .collect()
}

/// Picks a uniformly random cell not occupied by any snake.
///
/// Returns `None` when the board is full. The result depends only on the
/// occupancy and `rng`, so a seeded generator gives reproducible placements.
#[must_use]
pub fn place_food<'a, R: Rng + ?Sized>(
    rng: &mut R,
    snakes: impl IntoIterator<Item = &'a Snake>,
) -> Option<Position> {
    let candidates = empty_cells(snakes);
    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::{GRID_CELLS, GRID_SIZE};
    use crate::geometry::{Position, cells};
    use crate::snake::Snake;

    use super::{empty_cells, place_food};

    #[test]
    fn food_spawn_never_overlaps_snakes() {
        let mut rng = StdRng::seed_from_u64(7);
        let first = Snake::from_segments(vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
        ]);
        let second = Snake::from_segments(vec![Position::new(5, 5), Position::new(5, 6)]);

        for _ in 0..200 {
            let food = place_food(&mut rng, [&first, &second]).expect("board has room");
            assert!(!first.occupies(food));
            assert!(!second.occupies(food));
            assert!(food.is_within_grid());
        }
    }

    #[test]
    fn same_seed_gives_same_placement() {
        let snake = Snake::from_segments(vec![Position::new(9, 10), Position::new(8, 10)]);

        let a = place_food(&mut StdRng::seed_from_u64(99), [&snake]);
        let b = place_food(&mut StdRng::seed_from_u64(99), [&snake]);

        assert_eq!(a, b);
    }

    #[test]
    fn empty_cells_exclude_every_segment() {
        let snake = Snake::from_segments(vec![
            Position::new(10, 10),
            Position::new(9, 10),
            Position::new(8, 10),
        ]);

        let free = empty_cells([&snake]);

        assert_eq!(free.len(), GRID_CELLS - 3);
        assert!(!free.contains(&Position::new(9, 10)));
    }

    #[test]
    fn full_board_places_no_food() {
        let snake = Snake::from_segments(cells().collect());
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(place_food(&mut rng, [&snake]), None);
    }

    #[test]
    fn last_free_cell_is_always_chosen() {
        let free = Position::new(GRID_SIZE - 1, GRID_SIZE - 1);
        let snake = Snake::from_segments(cells().filter(|cell| *cell != free).collect());

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(place_food(&mut rng, [&snake]), Some(free));
        }
    }
}
