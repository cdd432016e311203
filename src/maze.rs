//! Randomized depth-first maze carving.
//!
//! Carving runs on the odd-aligned lattice: cells two tiles apart are joined
//! by opening the connector tile between them, so walls stay one tile thick
//! and no 2x2 open rooms appear.

use tracing::debug;

use crate::error::GridError;
use crate::grid::{Dir, Grid, Pos, Tile, MIN_DIMENSION};
use crate::rng::RandomSource;

/// Where carving starts. Always open in a generated grid.
pub const CARVE_START: Pos = Pos::new(1, 1);

/// Generates a fully connected maze of `width` x `height` tiles.
///
/// The result depends only on the picks drawn from `rng`. Dimensions below
/// [`MIN_DIMENSION`] are rejected before any carving happens.
pub fn generate(
    width: usize,
    height: usize,
    rng: &mut impl RandomSource,
) -> Result<Grid, GridError> {
    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(GridError::TooSmall {
            width,
            height,
            min: MIN_DIMENSION,
        });
    }

    let mut grid = Grid::filled(width, height);
    grid.set(CARVE_START, Tile::Open);
    let mut stack = vec![CARVE_START];

    while let Some(&current) = stack.last() {
        let options = uncarved_neighbors(&grid, current);
        if options.is_empty() {
            stack.pop();
            continue;
        }
        let (connector, next) = options[rng.next_index(options.len())];
        grid.set(connector, Tile::Open);
        grid.set(next, Tile::Open);
        stack.push(next);
    }

    seal_border(&mut grid);
    debug!(width, height, open = grid.open_cells().len(), "maze generated");
    Ok(grid)
}

/// Lattice cells two tiles away that are strictly inside the border and still
/// walled, paired with the connector tile leading to each.
fn uncarved_neighbors(grid: &Grid, pos: Pos) -> Vec<(Pos, Pos)> {
    let mut options = Vec::with_capacity(4);
    for dir in Dir::ALL {
        let Some(next) = grid.offset(pos, dir, 2) else {
            continue;
        };
        if grid.is_border(next) || !grid.is_wall(next) {
            continue;
        }
        if let Some(connector) = grid.neighbor(pos, dir) {
            options.push((connector, next));
        }
    }
    options
}

fn seal_border(grid: &mut Grid) {
    let border: Vec<Pos> = grid.border().collect();
    for pos in border {
        grid.set(pos, Tile::Wall);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Scripted;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn golden_five_by_five() {
        let grid = generate(5, 5, &mut Scripted::first()).unwrap();
        assert_eq!(
            grid.to_string(),
            "#####\n\
             #.#.#\n\
             #.#.#\n\
             #...#\n\
             #####"
        );
    }

    #[test]
    fn rejects_degenerate_sizes() {
        let mut rng = Scripted::first();
        assert_eq!(
            generate(2, 9, &mut rng),
            Err(GridError::TooSmall {
                width: 2,
                height: 9,
                min: MIN_DIMENSION
            })
        );
        assert!(generate(9, 0, &mut rng).is_err());
    }

    #[test]
    fn three_by_three_keeps_only_the_start() {
        let grid = generate(3, 3, &mut Scripted::first()).unwrap();
        assert_eq!(grid.open_cells(), vec![CARVE_START]);
    }

    #[test]
    fn start_cell_is_always_open() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = generate(21, 15, &mut rng).unwrap();
            assert!(grid.is_open(CARVE_START));
        }
    }

    #[test]
    fn even_sizes_still_seal_the_border() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = generate(20, 20, &mut rng).unwrap();
        assert!(grid.border().all(|p| grid.is_wall(p)));
        // The last interior column is never a lattice cell on an even width.
        assert!((0..20).all(|y| grid.is_wall(Pos::new(18, y))));
    }

    #[test]
    fn no_two_by_two_rooms() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = generate(31, 21, &mut rng).unwrap();
        for y in 0..grid.height() - 1 {
            for x in 0..grid.width() - 1 {
                let block = [
                    Pos::new(x, y),
                    Pos::new(x + 1, y),
                    Pos::new(x, y + 1),
                    Pos::new(x + 1, y + 1),
                ];
                assert!(block.iter().any(|&p| grid.is_wall(p)), "room at ({x}, {y})");
            }
        }
    }
}
