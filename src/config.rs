/// Side length of the square play grid, in cells.
pub const GRID_SIZE: i32 = 20;

/// Number of cells on the grid.
pub const GRID_CELLS: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// Tick interval of the fixed pacing policy, and the starting interval of the
/// accelerating one.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 140;

/// Interval reduction per point scored under accelerating pacing.
pub const TICK_STEP_PER_POINT_MS: u64 = 4;

/// Floor for the accelerating pacing policy.
pub const MIN_TICK_INTERVAL_MS: u64 = 60;

/// Input poll timeout for the front-end loop.
pub const INPUT_POLL_INTERVAL_MS: u64 = 16;

/// Width of one grid cell in terminal columns. Terminal cells are roughly
/// twice as tall as they are wide.
pub const CELL_WIDTH: u16 = 2;

/// Glyph painted for snake segments.
pub const GLYPH_SEGMENT: &str = "██";

/// Glyph painted for a snake head.
pub const GLYPH_HEAD: &str = "▓▓";

/// Glyph painted for food.
pub const GLYPH_FOOD: &str = "()";

/// Glyph painted for empty cells.
pub const GLYPH_EMPTY: &str = "· ";
