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
//! The letter grid shared by the filler, enumerator and selection checks.

use std::{
    borrow::Borrow,
    fmt,
    ops::{Index, IndexMut},
};

use crate::{
    board::{Coordinate, SquareDimensions},
    placement::Placement,
};

/// An NxN grid where every cell is either empty or holds a single uppercase letter.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    /// Dimensions of this grid.
    dim: SquareDimensions,
    /// Cells in row-major order.
    cells: Box<[Option<char>]>,
}

impl Grid {
    /// Construct an empty grid with the given dimensions.
    pub fn new(dim: SquareDimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| None).collect();
        Self { dim, cells }
    }

    /// Build a grid from rows of text. `.` and ` ` mark empty cells, letters are
    /// upper-cased. Returns `None` if there are no rows, the rows are not all as long
    /// as there are rows, or any cell is some other character.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let dim = SquareDimensions::try_new(rows.len())?;
        let mut cells = Vec::with_capacity(dim.total_size());
        for row in rows {
            let before = cells.len();
            for c in row.as_ref().chars() {
                cells.push(match c {
                    '.' | ' ' => None,
                    c if c.is_alphabetic() => Some(c.to_uppercase().next()?),
                    _ => return None,
                });
            }
            if cells.len() - before != dim.size() {
                return None;
            }
        }
        Some(Self {
            dim,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Get the [`SquareDimensions`] of this grid.
    pub fn dimensions(&self) -> &SquareDimensions {
        &self.dim
    }

    /// Get a reference to the cell at the given [`Coordinate`]. Returns `None` if the
    /// coordinate is out of bounds.
    pub fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&Option<char>> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get the letter at the given coordinate, or `None` if the cell is empty or out of
    /// bounds.
    pub fn letter<B: Borrow<Coordinate>>(&self, coord: B) -> Option<char> {
        self.get(coord).copied().flatten()
    }

    fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut Option<char>> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Count the empty cells.
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Get an iterator over the rows of this grid. Each row is an iterator over the
    /// cells of that row.
    pub fn iter_rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = Option<char>>> {
        self.cells.chunks(self.dim.size()).map(|row| row.iter().copied())
    }

    /// Write each letter of the placement into its coordinate. Committing the same
    /// placement twice leaves the grid unchanged.
    /// Panics if the placement has coordinates outside of this grid.
    pub fn commit(&mut self, placement: &Placement) {
        for (letter, coord) in placement.word().chars().zip(placement.positions()) {
            self[coord] = Some(letter);
        }
    }

    /// Fill every empty cell, in row-major order, with a letter from `letter`.
    /// Returns the number of cells filled.
    pub(crate) fn fill_empty<F: FnMut() -> char>(&mut self, mut letter: F) -> usize {
        let mut filled = 0;
        for cell in self.cells.iter_mut().filter(|cell| cell.is_none()) {
            *cell = Some(letter());
            filled += 1;
        }
        filled
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = Option<char>;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Grid {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}

impl fmt::Display for Grid {
    /// Prints one row per line, `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                write!(f, "{}", cell.unwrap_or('.'))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
