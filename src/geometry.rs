use crate::config::GRID_SIZE;
use crate::direction::Direction;

/// Grid position in logical cell coordinates.
///
/// Equality is structural; two positions are the same cell iff both
/// coordinates match.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the grid.
    #[must_use]
    pub fn is_within_grid(self) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < GRID_SIZE && self.y < GRID_SIZE
    }

    /// Returns the neighbouring position one step in `direction`.
    ///
    /// The result may lie outside the grid.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Returns true when `position` lies outside the grid.
#[must_use]
pub fn hits_wall(position: Position) -> bool {
    !position.is_within_grid()
}

/// Iterates every grid cell in row-major order.
pub fn cells() -> impl Iterator<Item = Position> {
    (0..GRID_SIZE).flat_map(|y| (0..GRID_SIZE).map(move |x| Position { x, y }))
}
