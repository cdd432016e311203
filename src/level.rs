use tracing::debug;

use crate::error::GridError;
use crate::grid::{Grid, Pos, Tile};
use crate::maze::generate;
use crate::rng::RandomSource;

/// Side length of the hand-authored maps.
pub const AUTHORED_SIZE: usize = 20;

/// Chaser start shared by every level.
pub const LEVEL_START: Pos = Pos::new(1, 1);

/// The opening levels. Both layouts are the same map; the second play of it
/// comes before any generated maze.
pub const AUTHORED_MAPS: [[[u8; AUTHORED_SIZE]; AUTHORED_SIZE]; 2] = [OPENING_MAP, OPENING_MAP];

const OPENING_MAP: [[u8; AUTHORED_SIZE]; AUTHORED_SIZE] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 0, 1, 1, 0, 1],
    [1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1],
    [1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1],
    [1, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1, 1, 1],
    [1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 0, 0, 1],
    [1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// A playable maze and where the chaser enters it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    pub grid: Grid,
    pub start: Pos,
}

impl Level {
    pub fn new(grid: Grid, start: Pos) -> Self {
        let mut level = Self { grid, start };
        level.ensure_start_open();
        level
    }

    /// The generator only promises its own carve start is open; a level whose
    /// start sits elsewhere gets that tile cleared here.
    pub fn ensure_start_open(&mut self) {
        if self.grid.is_wall(self.start) && !self.grid.is_border(self.start) {
            self.grid.set(self.start, Tile::Open);
        }
    }
}

/// Builds `count` levels of `width` x `height`.
///
/// The hand-authored maps lead the list when the requested size matches
/// theirs; every other level is a freshly generated maze.
pub fn build_levels(
    count: usize,
    width: usize,
    height: usize,
    rng: &mut impl RandomSource,
) -> Result<Vec<Level>, GridError> {
    if count == 0 {
        return Err(GridError::NoLevels);
    }

    let mut levels = Vec::with_capacity(count);
    if width == AUTHORED_SIZE && height == AUTHORED_SIZE {
        for map in AUTHORED_MAPS.iter().take(count) {
            levels.push(Level::new(Grid::from_rows(map)?, LEVEL_START));
        }
    } else {
        debug!(width, height, "size differs from the authored maps, generating all levels");
    }

    while levels.len() < count {
        levels.push(Level::new(generate(width, height, rng)?, LEVEL_START));
    }
    debug!(count, width, height, "levels built");
    Ok(levels)
}
