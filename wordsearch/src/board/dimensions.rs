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
use std::borrow::Borrow;

use crate::board::Coordinate;

/// Side length of the board used by the classic game.
pub const DEFAULT_SIZE: usize = 4;

/// Dimensions of a square grid. The side length is fixed once the dimensions are
/// constructed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SquareDimensions {
    /// Number of rows, which is also the number of columns.
    size: usize,
}

impl SquareDimensions {
    /// Create new [`SquareDimensions`] with the given side length.
    /// Panics if `size * size` exceeds `usize::max_value()` or if `size` is 0.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(dim) => dim,
            None => {
                if size == 0 {
                    panic!("SquareDimensions must be nonzero, got {}", size);
                } else {
                    panic!(
                        "SquareDimensions too large: {} * {} > {}",
                        size,
                        size,
                        usize::max_value()
                    );
                }
            }
        }
    }

    /// Create new [`SquareDimensions`] with the given side length.
    /// Returns `None` if `size * size` exceeds `usize::max_value()` or if `size` is 0.
    pub fn try_new(size: usize) -> Option<Self> {
        if size == 0 {
            None
        } else {
            size.checked_mul(size).map(|_| Self { size })
        }
    }

    /// Get the side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells in the grid.
    pub fn total_size(&self) -> usize {
        self.size * self.size
    }

    /// Returns true iff both axes of the coordinate are in `[0, size)`.
    pub fn in_bounds(&self, coord: &Coordinate) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Check if the given [`Coordinate`] is in bounds. If so, return it, otherwise
    /// return `None`.
    #[inline]
    pub fn check_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> Option<B> {
        if self.in_bounds(coord.borrow()) {
            Some(coord)
        } else {
            None
        }
    }

    /// Convert a coordinate to a row-major index.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        self.check_bounds(coord)
            .map(|coord| coord.row * self.size + coord.col)
    }

    /// Get back a coordinate from a row-major index. Does not check that `idx` is less
    /// than [`total_size`][SquareDimensions::total_size].
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        Coordinate::new(idx / self.size, idx % self.size)
    }

    /// Iterate every coordinate of the grid in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let dim = *self;
        (0..dim.total_size()).map(move |idx| dim.un_linearize(idx))
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.size;
        (0..size).map(move |row| (0..size).map(move |col| Coordinate { row, col }))
    }
}

impl Default for SquareDimensions {
    /// The classic 4x4 board.
    fn default() -> Self {
        Self { size: DEFAULT_SIZE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_size() {
        assert_eq!(SquareDimensions::try_new(0), None);
        assert_eq!(SquareDimensions::try_new(usize::max_value()), None);
        assert_eq!(SquareDimensions::try_new(5).map(|d| d.total_size()), Some(25));
    }

    #[test]
    fn linearize_is_row_major() {
        let dim = SquareDimensions::new(4);
        assert_eq!(dim.try_linearize(&Coordinate::new(1, 2)), Some(6));
        assert_eq!(dim.try_linearize(&Coordinate::new(4, 0)), None);
        assert_eq!(dim.un_linearize(6), Coordinate::new(1, 2));

        let coords: Vec<_> = dim.coordinates().take(5).collect();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(0, 2),
                Coordinate::new(0, 3),
                Coordinate::new(1, 0),
            ]
        );
    }
}
