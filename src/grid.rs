//! Tile map shared by the maze generator, the pursuit heuristic and renderers.

use std::collections::VecDeque;
use std::fmt;

use crate::error::GridError;

/// Smallest side length a grid may have: a border ring around one open tile.
pub const MIN_DIMENSION: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Open,
    Wall,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn manhattan(self, other: Pos) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    /// Fixed evaluation order. Tie-breaks in the pursuit heuristic and the
    /// candidate order in maze carving both depend on it.
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }
}

/// Rectangular tile map, stored row-major as `rows[y][x]`.
///
/// A grid never changes once built; gameplay only reads it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    rows: Vec<Vec<Tile>>,
}

impl Grid {
    pub(crate) fn filled(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![Tile::Wall; width]; height],
        }
    }

    /// Builds a grid from a literal map where `1` is a wall and anything else
    /// is open.
    pub fn from_rows<R: AsRef<[u8]>>(map: &[R]) -> Result<Self, GridError> {
        let height = map.len();
        let width = map.first().map(|r| r.as_ref().len()).ok_or(GridError::Empty)?;
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(GridError::TooSmall {
                width,
                height,
                min: MIN_DIMENSION,
            });
        }

        let mut rows = Vec::with_capacity(height);
        for (y, row) in map.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            rows.push(
                row.iter()
                    .map(|&v| if v == 1 { Tile::Wall } else { Tile::Open })
                    .collect(),
            );
        }

        let grid = Self {
            width,
            height,
            rows,
        };
        if let Some(pos) = grid.border().find(|&p| grid.is_open(p)) {
            return Err(GridError::OpenBorder { x: pos.x, y: pos.y });
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn tile(&self, pos: Pos) -> Option<Tile> {
        self.rows.get(pos.y).and_then(|row| row.get(pos.x)).copied()
    }

    /// Out-of-bounds positions count as walls.
    pub fn is_wall(&self, pos: Pos) -> bool {
        self.tile(pos) != Some(Tile::Open)
    }

    pub fn is_open(&self, pos: Pos) -> bool {
        self.tile(pos) == Some(Tile::Open)
    }

    /// The in-bounds tile one step from `pos`, whatever it holds.
    pub fn neighbor(&self, pos: Pos, dir: Dir) -> Option<Pos> {
        self.offset(pos, dir, 1)
    }

    pub(crate) fn offset(&self, pos: Pos, dir: Dir, steps: isize) -> Option<Pos> {
        let (dx, dy) = dir.delta();
        let nx = pos.x as isize + dx * steps;
        let ny = pos.y as isize + dy * steps;
        if nx < 0 || ny < 0 {
            return None;
        }
        let next = Pos::new(nx as usize, ny as usize);
        self.contains(next).then_some(next)
    }

    pub(crate) fn set(&mut self, pos: Pos, tile: Tile) {
        self.rows[pos.y][pos.x] = tile;
    }

    pub(crate) fn is_border(&self, pos: Pos) -> bool {
        pos.x == 0 || pos.y == 0 || pos.x == self.width - 1 || pos.y == self.height - 1
    }

    pub(crate) fn border(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&p| self.is_border(p))
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Pos::new(x, y)))
    }

    pub fn open_cells(&self) -> Vec<Pos> {
        self.positions().filter(|&p| self.is_open(p)).collect()
    }

    /// Marks every open tile reachable from `start` through 4-neighbour moves.
    pub fn flood(&self, start: Pos) -> Vec<Vec<bool>> {
        let mut seen = vec![vec![false; self.width]; self.height];
        if !self.is_open(start) {
            return seen;
        }
        let mut q = VecDeque::new();
        seen[start.y][start.x] = true;
        q.push_back(start);
        while let Some(pos) = q.pop_front() {
            for dir in Dir::ALL {
                let Some(next) = self.neighbor(pos, dir) else {
                    continue;
                };
                if seen[next.y][next.x] || !self.is_open(next) {
                    continue;
                }
                seen[next.y][next.x] = true;
                q.push_back(next);
            }
        }
        seen
    }

    pub fn is_connected_from(&self, start: Pos) -> bool {
        let seen = self.flood(start);
        self.positions()
            .filter(|&p| self.is_open(p))
            .all(|p| seen[p.y][p.x])
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for tile in row {
                let c = match tile {
                    Tile::Wall => '#',
                    Tile::Open => '.',
                };
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
