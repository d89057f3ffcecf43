// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Direction vectors and bounds-checked stepping through the grid.
use enumflags2::BitFlags;

use crate::board::{Coordinate, SquareDimensions};

/// One of the 8 unit steps a word may be laid out or read along.
///
/// Also usable as a flag so that a set of allowed directions can be stored as a
/// [`BitFlags<Direction>`].
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Increasing row.
    Down = 0b0000_0001,
    /// Increasing column.
    Right = 0b0000_0010,
    /// Decreasing row.
    Up = 0b0000_0100,
    /// Decreasing column.
    Left = 0b0000_1000,
    /// Increasing row and column.
    DownRight = 0b0001_0000,
    /// Decreasing row and column.
    UpLeft = 0b0010_0000,
    /// Decreasing row, increasing column.
    UpRight = 0b0100_0000,
    /// Increasing row, decreasing column.
    DownLeft = 0b1000_0000,
}

impl Direction {
    /// Every direction, in the order placements are attempted.
    pub const ALL: &'static [Direction] = &[
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::DownRight,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
    ];

    /// Every direction as a set.
    pub fn all() -> BitFlags<Direction> {
        BitFlags::all()
    }

    /// The directions that read top-to-bottom or left-to-right.
    pub fn forward() -> BitFlags<Direction> {
        Direction::Down | Direction::Right | Direction::DownRight | Direction::UpRight
    }

    /// Iterate the directions contained in `set`, keeping the order of
    /// [`ALL`][Direction::ALL].
    pub fn iter(set: BitFlags<Direction>) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .iter()
            .copied()
            .filter(move |&dir| set.contains(dir))
    }

    /// The `(row, col)` step of this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
            Direction::DownRight => (1, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
        }
    }

    /// Compute `origin + i * self`. Returns `None` if either axis would go below zero
    /// or overflow. Does not check the upper bound of any grid, see [`step`] for that.
    pub fn offset(self, origin: Coordinate, i: usize) -> Option<Coordinate> {
        let (drow, dcol) = self.delta();
        Some(Coordinate::new(
            offset_axis(origin.row, drow, i)?,
            offset_axis(origin.col, dcol, i)?,
        ))
    }
}

fn offset_axis(base: usize, delta: isize, i: usize) -> Option<usize> {
    match delta {
        0 => Some(base),
        d if d > 0 => base.checked_add(i),
        _ => base.checked_sub(i),
    }
}

/// Step `i` cells from `origin` along `direction`. Returns `None` if the resulting
/// coordinate is outside of `dim`.
pub fn step(
    dim: &SquareDimensions,
    origin: Coordinate,
    direction: Direction,
    i: usize,
) -> Option<Coordinate> {
    direction
        .offset(origin, i)
        .and_then(|coord| dim.check_bounds(coord))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_are_distinct_unit_vectors() {
        let mut seen = std::collections::HashSet::new();
        for &dir in Direction::ALL {
            let (drow, dcol) = dir.delta();
            assert!(drow.abs() <= 1 && dcol.abs() <= 1);
            assert_ne!((drow, dcol), (0, 0));
            assert!(seen.insert((drow, dcol)));
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn step_stays_in_bounds() {
        let dim = SquareDimensions::new(4);
        let origin = Coordinate::new(0, 2);
        assert_eq!(step(&dim, origin, Direction::Down, 3), Some(Coordinate::new(3, 2)));
        assert_eq!(step(&dim, origin, Direction::Down, 4), None);
        assert_eq!(step(&dim, origin, Direction::Up, 1), None);
        assert_eq!(step(&dim, origin, Direction::DownLeft, 2), Some(Coordinate::new(2, 0)));
        assert_eq!(step(&dim, origin, Direction::DownLeft, 3), None);
        assert_eq!(step(&dim, origin, Direction::UpLeft, 0), Some(origin));
    }

    #[test]
    fn iter_keeps_fixed_order() {
        let dirs: Vec<_> = Direction::iter(Direction::forward()).collect();
        assert_eq!(
            dirs,
            vec![
                Direction::Down,
                Direction::Right,
                Direction::DownRight,
                Direction::UpRight
            ]
        );
        assert_eq!(Direction::iter(BitFlags::all()).count(), 8);
    }
}
