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
use std::fmt;

/// The coordinates of a cell in the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coordinate {
    /// Vertical position of the cell, counted from the top.
    pub row: usize,
    /// Horizontal position of the cell, counted from the left.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if `other` is one of the 8 cells surrounding this one. A cell is not
    /// adjacent to itself.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        let drow = abs_diff(self.row, other.row);
        let dcol = abs_diff(self.col, other.col);
        drow <= 1 && dcol <= 1 && (drow, dcol) != (0, 0)
    }
}

fn abs_diff(a: usize, b: usize) -> usize {
    if a > b {
        a - b
    } else {
        b - a
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_covers_all_eight_neighbors() {
        let center = Coordinate::new(1, 1);
        let mut count = 0;
        for row in 0..3 {
            for col in 0..3 {
                if center.is_adjacent(&Coordinate::new(row, col)) {
                    count += 1;
                }
            }
        }
        assert_eq!(count, 8);
        assert!(!center.is_adjacent(&center));
        assert!(!center.is_adjacent(&Coordinate::new(3, 1)));
        assert!(!Coordinate::new(0, 0).is_adjacent(&Coordinate::new(2, 2)));
    }
}
