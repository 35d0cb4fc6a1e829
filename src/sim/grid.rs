//! Grid geometry and collision queries
//!
//! A maze is a fixed rectangular field of wall/path cells. All queries here
//! are pure: the wall set is immutable after construction and shared
//! read-only by every entity.

use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step along `dir`. Does not validate.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<Position> for Vec2 {
    fn from(pos: Position) -> Self {
        Vec2::new(pos.x as f32, pos.y as f32)
    }
}

/// One of the four cardinal movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Canonical enumeration order. Tie-breaks elsewhere (pursuit selection,
/// player priority) depend on this order being stable.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    /// Cell offset for one step in this direction. Y grows downward.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The reverse direction. Involutive: `d.opposite().opposite() == d`.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Euclidean distance between two cells, used as an AI heuristic only
/// (no obstacle awareness).
pub fn distance(a: Position, b: Position) -> f32 {
    Vec2::from(a).distance(Vec2::from(b))
}

/// Two entities collide when they occupy the same cell.
pub fn entities_collide(a: Position, b: Position) -> bool {
    a == b
}

/// Errors arising from an unusable maze layout
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("maze layout is empty")]
    Empty,
    #[error("maze row {row} has {len} cells, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("unknown cell {ch:?} at row {row}, column {col}")]
    UnknownCell { row: usize, col: usize, ch: char },
}

/// The original 15x10 map: `#` is a wall, `.` is a path cell holding a dot.
pub const DEFAULT_LAYOUT: [&str; 10] = [
    "###############",
    "#......#......#",
    "#.##.#.#.#.##.#",
    "#.............#",
    "#.#.###.###.#.#",
    "#.............#",
    "#.##.#.#.#.##.#",
    "#......#......#",
    "#.#.##...##.#.#",
    "###############",
];

/// A fixed rectangular maze: grid bounds plus the immutable wall set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Maze {
    width: u32,
    height: u32,
    walls: HashSet<Position>,
}

impl Maze {
    /// Parse a layout into a maze and the dot set seeded on every path cell.
    ///
    /// Rows must all have the same length; the accepted markers are `#`
    /// (wall) and `.` (path with dot).
    pub fn parse(layout: &[&str]) -> Result<(Self, HashSet<Position>), LayoutError> {
        let first = layout.first().ok_or(LayoutError::Empty)?;
        let width = first.chars().count();
        if width == 0 {
            return Err(LayoutError::Empty);
        }

        let mut walls = HashSet::new();
        let mut dots = HashSet::new();

        for (row, line) in layout.iter().enumerate() {
            let len = line.chars().count();
            if len != width {
                return Err(LayoutError::Ragged {
                    row,
                    len,
                    expected: width,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Position::new(col as i32, row as i32);
                match ch {
                    '#' => {
                        walls.insert(pos);
                    }
                    '.' => {
                        dots.insert(pos);
                    }
                    _ => return Err(LayoutError::UnknownCell { row, col, ch }),
                }
            }
        }

        let maze = Self {
            width: width as u32,
            height: layout.len() as u32,
            walls,
        };
        Ok((maze, dots))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True iff `pos` lies inside the grid bounds.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && (pos.x as u32) < self.width && pos.y >= 0 && (pos.y as u32) < self.height
    }

    /// Membership test on the wall set.
    pub fn is_wall(&self, pos: Position) -> bool {
        self.walls.contains(&pos)
    }

    /// An open cell is in bounds and not a wall.
    pub fn is_open(&self, pos: Position) -> bool {
        self.in_bounds(pos) && !self.is_wall(pos)
    }

    /// True iff one step from `pos` along `dir` lands on an open cell.
    pub fn can_move(&self, pos: Position, dir: Direction) -> bool {
        self.is_open(pos.step(dir))
    }

    /// All directions leading to an open cell, in canonical order.
    pub fn valid_directions(&self, pos: Position) -> Vec<Direction> {
        DIRECTIONS
            .into_iter()
            .filter(|&dir| self.can_move(pos, dir))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn default_maze() -> Maze {
        Maze::parse(&DEFAULT_LAYOUT).unwrap().0
    }

    #[test]
    fn test_parse_default_layout() {
        let (maze, dots) = Maze::parse(&DEFAULT_LAYOUT).unwrap();
        assert_eq!(maze.width(), crate::consts::GRID_WIDTH);
        assert_eq!(maze.height(), crate::consts::GRID_HEIGHT);
        // 74 open cells in the original map, each seeded with a dot
        assert_eq!(dots.len(), 74);
        assert_eq!(
            dots.len(),
            DEFAULT_LAYOUT
                .iter()
                .map(|row| row.matches('.').count())
                .sum::<usize>()
        );
        assert!(maze.is_wall(Position::new(0, 0)));
        assert!(maze.is_open(Position::new(1, 1)));
        assert!(maze.is_open(Position::new(13, 1)));
    }

    #[test]
    fn test_parse_rejects_bad_layouts() {
        assert_eq!(Maze::parse(&[]).unwrap_err(), LayoutError::Empty);
        assert_eq!(
            Maze::parse(&["###", "##"]).unwrap_err(),
            LayoutError::Ragged {
                row: 1,
                len: 2,
                expected: 3
            }
        );
        assert_eq!(
            Maze::parse(&["#x#"]).unwrap_err(),
            LayoutError::UnknownCell {
                row: 0,
                col: 1,
                ch: 'x'
            }
        );
    }

    #[test]
    fn test_bounds() {
        let maze = default_maze();
        assert!(maze.in_bounds(Position::new(0, 0)));
        assert!(maze.in_bounds(Position::new(14, 9)));
        assert!(!maze.in_bounds(Position::new(-1, 0)));
        assert!(!maze.in_bounds(Position::new(15, 0)));
        assert!(!maze.in_bounds(Position::new(0, 10)));
    }

    #[test]
    fn test_valid_directions_order_is_stable() {
        let maze = default_maze();
        // (1,1) is the top-left corner pocket: open below and to the right
        assert_eq!(
            maze.valid_directions(Position::new(1, 1)),
            vec![Direction::Down, Direction::Right]
        );
        // (7,3) sits in the open corridor below the central pillar
        let dirs = maze.valid_directions(Position::new(7, 3));
        assert!(dirs.windows(2).all(|w| {
            let rank = |d| DIRECTIONS.iter().position(|&x| x == d).unwrap();
            rank(w[0]) < rank(w[1])
        }));
    }

    #[test]
    fn test_distance() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 4);
        assert!((distance(a, b) - 5.0).abs() < f32::EPSILON);
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn test_entities_collide() {
        assert!(entities_collide(Position::new(2, 3), Position::new(2, 3)));
        assert!(!entities_collide(Position::new(2, 3), Position::new(3, 2)));
    }

    proptest! {
        #[test]
        fn prop_opposite_is_involutive(i in 0usize..4) {
            let d = DIRECTIONS[i];
            prop_assert_eq!(d.opposite().opposite(), d);
        }

        #[test]
        fn prop_can_move_matches_definition(x in -2i32..17, y in -2i32..12, i in 0usize..4) {
            let maze = default_maze();
            let pos = Position::new(x, y);
            let dir = DIRECTIONS[i];
            let next = pos.step(dir);
            let expected = maze.in_bounds(next) && !maze.is_wall(next);
            prop_assert_eq!(maze.can_move(pos, dir), expected);
        }

        #[test]
        fn prop_step_is_one_cell(x in -5i32..20, y in -5i32..20, i in 0usize..4) {
            let pos = Position::new(x, y);
            let next = pos.step(DIRECTIONS[i]);
            let manhattan = (next.x - pos.x).abs() + (next.y - pos.y).abs();
            prop_assert_eq!(manhattan, 1);
        }
    }
}
