//! Target evasion and respawn placement.

use tracing::{debug, warn};

use crate::grid::{Dir, Grid, Pos};
use crate::rng::RandomSource;

/// Manhattan distance beyond which the target ignores the chaser.
pub const REACT_RADIUS: usize = 5;

pub const RELOCATE_ATTEMPTS: usize = 500;

/// One greedy evasion step for the target.
///
/// Returns `target` unchanged when the chaser is farther than
/// [`REACT_RADIUS`] or when no open neighbour strictly increases the
/// distance. Ties go to the first direction in [`Dir::ALL`] order.
pub fn next_move(grid: &Grid, chaser: Pos, target: Pos) -> Pos {
    let current = chaser.manhattan(target);
    if current > REACT_RADIUS {
        return target;
    }

    let mut best = target;
    let mut best_distance = current;
    for dir in Dir::ALL {
        let Some(candidate) = grid.neighbor(target, dir) else {
            continue;
        };
        if grid.is_wall(candidate) {
            continue;
        }
        let distance = chaser.manhattan(candidate);
        if distance > best_distance {
            best = candidate;
            best_distance = distance;
        }
    }

    if best != target {
        debug!(?target, to = ?best, distance = best_distance, "target evades");
    }
    best
}

/// Picks a random open tile other than `forbidden` for the target to respawn on.
///
/// Sampling is capped at [`RELOCATE_ATTEMPTS`]. When every sample misses, the
/// last one is returned as-is even if it is a wall or `forbidden`.
pub fn relocate(grid: &Grid, forbidden: Pos, rng: &mut impl RandomSource) -> Pos {
    let mut candidate = forbidden;
    for _ in 0..RELOCATE_ATTEMPTS {
        candidate = Pos::new(
            rng.next_index(grid.width()),
            rng.next_index(grid.height()),
        );
        if grid.is_open(candidate) && candidate != forbidden {
            return candidate;
        }
    }
    warn!(
        attempts = RELOCATE_ATTEMPTS,
        ?candidate,
        "no free tile found, keeping last sample"
    );
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Scripted;

    fn open_room(size: usize) -> Grid {
        let map: Vec<Vec<u8>> = (0..size)
            .map(|y| {
                (0..size)
                    .map(|x| u8::from(x == 0 || y == 0 || x == size - 1 || y == size - 1))
                    .collect()
            })
            .collect();
        Grid::from_rows(&map).unwrap()
    }

    #[test]
    fn flees_straight_away() {
        let grid = open_room(7);
        let next = next_move(&grid, Pos::new(2, 2), Pos::new(2, 3));
        assert_eq!(next, Pos::new(2, 4));
    }

    #[test]
    fn ignores_distant_chaser() {
        let grid = open_room(12);
        let target = Pos::new(8, 8);
        assert_eq!(next_move(&grid, Pos::new(1, 1), target), target);
        // Exactly on the radius still reacts.
        let chaser = Pos::new(3, 8);
        assert_eq!(chaser.manhattan(target), REACT_RADIUS);
        assert_eq!(next_move(&grid, chaser, target), Pos::new(8, 7));
    }

    #[test]
    fn boxed_in_target_stays() {
        let grid = Grid::from_rows(&[
            [1u8, 1, 1, 1, 1],
            [1, 0, 1, 0, 1],
            [1, 1, 0, 1, 1],
            [1, 0, 1, 0, 1],
            [1, 1, 1, 1, 1],
        ])
        .unwrap();
        let target = Pos::new(2, 2);
        assert_eq!(next_move(&grid, Pos::new(1, 1), target), target);
    }

    #[test]
    fn ties_prefer_up_then_down_then_left() {
        let grid = open_room(9);
        // Chaser diagonal below-right: moving up or left both gain one.
        let next = next_move(&grid, Pos::new(5, 5), Pos::new(4, 4));
        assert_eq!(next, Pos::new(4, 3));
        // Chaser directly right: up, down and left all gain one.
        let next = next_move(&grid, Pos::new(5, 4), Pos::new(4, 4));
        assert_eq!(next, Pos::new(4, 3));
    }

    #[test]
    fn stays_when_nothing_improves() {
        // Corridor dead end facing the chaser.
        let grid = Grid::from_rows(&[
            [1u8, 1, 1, 1, 1],
            [1, 0, 0, 0, 1],
            [1, 1, 1, 1, 1],
        ])
        .unwrap();
        let target = Pos::new(3, 1);
        assert_eq!(next_move(&grid, Pos::new(2, 1), target), target);
    }

    #[test]
    fn relocate_skips_walls_and_forbidden() {
        let grid = open_room(5);
        // Samples: (0,0) wall, (1,1) forbidden, (2,3) free.
        let mut rng = Scripted::new(vec![0, 0, 1, 1, 2, 3]);
        assert_eq!(relocate(&grid, Pos::new(1, 1), &mut rng), Pos::new(2, 3));
    }

    #[test]
    fn relocate_gives_up_after_the_cap() {
        let grid = Grid::from_rows(&[[1u8, 1, 1], [1, 0, 1], [1, 1, 1]]).unwrap();
        let only = Pos::new(1, 1);
        let mut rng = Scripted::new(vec![2, 0]);
        assert_eq!(relocate(&grid, only, &mut rng), Pos::new(2, 0));
    }
}
